pub mod expansion;
pub mod lorem;
pub mod mapping;
pub mod resolver;
pub mod unit;

#[cfg(test)]
mod tests_integration;

#[cfg(test)]
mod tests_error_recovery;

pub use expansion::{distribute, ResolvedAttributes};
pub use mapping::{ComponentConfig, ComponentMapping, ContentSource, MappingTable};
pub use resolver::{render, resolve_forest, resolve_node, Diagnostic, RenderedDocument};
pub use unit::{NodePath, RenderableUnit};

// Re-export the parser surface hosts need alongside the resolver.
pub use sketchml_parser::{Literal, ParseOptions, StructureError};
