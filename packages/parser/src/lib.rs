pub mod ast;
pub mod error;
pub mod line;
pub mod parser;
pub mod property;
pub mod tokenizer;
pub mod tree;

#[cfg(test)]
mod tests_comprehensive;

pub use ast::{Literal, Modifier, Node, ParsedLine, PropertyAssignment};
pub use error::{ParseDiagnostic, ParseResult, StructureError};
pub use line::parse_line;
pub use parser::{parse, ParsedDocument};
pub use property::{coerce_argument, parse_property};
pub use tokenizer::tokenize;
pub use tree::{build_tree, ParseOptions, DEFAULT_MAX_DEPTH};
