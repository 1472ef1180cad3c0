use crate::expansion::distribute;
use crate::lorem;
use crate::mapping::{ComponentConfig, ComponentMapping, ContentSource};
use crate::unit::{NodePath, RenderableUnit};
use serde::Serialize;
use sketchml_parser::{parse, Literal, Node, ParseDiagnostic, ParseOptions, ParseResult};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Non-fatal problem recorded while parsing or resolving. The pipeline
/// drives a live, as-you-type preview, so everything short of the
/// resource-exhaustion guard is reported here instead of failing the run.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum Diagnostic {
    #[error("line {line}: dropped malformed property token '{token}'")]
    MalformedProperty { line: usize, token: String },

    #[error("line {line}: component '{name}' not found in mapping (at {path})")]
    UnknownComponent {
        name: String,
        path: NodePath,
        line: usize,
    },
}

impl Diagnostic {
    pub fn unknown_component(name: impl Into<String>, path: NodePath, line: usize) -> Self {
        Self::UnknownComponent {
            name: name.into(),
            path,
            line,
        }
    }
}

impl From<ParseDiagnostic> for Diagnostic {
    fn from(diagnostic: ParseDiagnostic) -> Self {
        match diagnostic {
            ParseDiagnostic::MalformedProperty { line, token } => {
                Self::MalformedProperty { line, token }
            }
        }
    }
}

/// The pipeline's sole artifact: the ordered forest of resolved units
/// (`None` where a node failed to resolve) plus the side-channel
/// diagnostic list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDocument {
    pub units: Vec<Option<RenderableUnit>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderedDocument {
    /// Units that actually resolved, in order.
    pub fn resolved_units(&self) -> impl Iterator<Item = &RenderableUnit> {
        self.units.iter().flatten()
    }
}

/// Parse DSL source and resolve it against a component mapping in one
/// step. This is the core's single entry point; it is synchronous, pure,
/// and touches no files, network, or global state.
#[instrument(skip(source, mapping), fields(bytes = source.len()))]
pub fn render(
    source: &str,
    mapping: &impl ComponentMapping,
    options: &ParseOptions,
) -> ParseResult<RenderedDocument> {
    let parsed = parse(source, options)?;
    let mut diagnostics: Vec<Diagnostic> =
        parsed.diagnostics.into_iter().map(Diagnostic::from).collect();

    let units = resolve_forest(&parsed.roots, mapping, &NodePath::root(), &mut diagnostics);
    info!(
        units = units.iter().filter(|u| u.is_some()).count(),
        diagnostics = diagnostics.len(),
        "render complete"
    );

    Ok(RenderedDocument { units, diagnostics })
}

/// Resolve an ordered sequence of sibling nodes. Every node consumes its
/// structural index whether or not it resolves, so surviving siblings keep
/// deterministic paths.
pub fn resolve_forest(
    nodes: &[Node],
    mapping: &impl ComponentMapping,
    base: &NodePath,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Option<RenderableUnit>> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| resolve_node(node, mapping, base.child(index), diagnostics))
        .collect()
}

/// Resolve one node depth-first: children are resolved before the parent
/// descriptor is constructed, preserving child order. A component name
/// absent from the mapping records a diagnostic and yields `None` without
/// aborting sibling resolution.
pub fn resolve_node(
    node: &Node,
    mapping: &impl ComponentMapping,
    path: NodePath,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<RenderableUnit> {
    let Some(config) = mapping.get(&node.component_name) else {
        warn!(component = %node.component_name, line = node.line, "component not found in mapping");
        diagnostics.push(Diagnostic::unknown_component(
            node.component_name.clone(),
            path,
            node.line,
        ));
        return None;
    };

    let children: Vec<RenderableUnit> = node
        .children
        .iter()
        .enumerate()
        .filter_map(|(index, child)| resolve_node(child, mapping, path.child(index), diagnostics))
        .collect();

    let resolved = distribute(config, &node.properties);
    let content = build_content(config, &resolved.content_value, &resolved.attributes);

    debug!(
        component = %node.component_name,
        kind = %config.render_as,
        path = %path,
        children = children.len(),
        "resolved node"
    );

    Some(RenderableUnit {
        kind: config.render_as.clone(),
        attributes: resolved.attributes,
        styles: resolved.styles,
        content,
        children,
        path,
    })
}

fn build_content(
    config: &ComponentConfig,
    content_value: &Option<Literal>,
    attributes: &std::collections::HashMap<String, Literal>,
) -> Option<String> {
    match &config.content {
        Some(ContentSource::Property(_)) => content_value.as_ref().map(|value| value.to_string()),
        Some(ContentSource::Lorem(prop)) => {
            let attr = config
                .prop_aliases
                .get(prop)
                .map(String::as_str)
                .unwrap_or(prop);
            let paragraphs = attributes
                .get(attr)
                .and_then(Literal::as_number)
                .map(|n| n.max(0.0) as usize)
                .filter(|n| *n > 0)
                .unwrap_or(1);
            Some(lorem::generate(paragraphs))
        }
        None => None,
    }
}
