use crate::ast::{Node, ParsedLine};
use crate::error::{ParseDiagnostic, ParseResult};
use crate::line::parse_line;
use crate::tree::{build_tree, ParseOptions};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Output of a document parse: the layout forest plus every non-fatal
/// diagnostic collected along the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedDocument {
    pub roots: Vec<Node>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl ParsedDocument {
    /// Total node count across the forest.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(Node::node_count).sum()
    }
}

/// Parse DSL source into a layout forest.
///
/// This is a pure function of the input text: no state is carried between
/// invocations, and identical input always produces a structurally
/// identical forest. Malformed property tokens are dropped and reported as
/// diagnostics; the only fatal failure is the nesting-depth guard.
#[instrument(skip(source), fields(bytes = source.len()))]
pub fn parse(source: &str, options: &ParseOptions) -> ParseResult<ParsedDocument> {
    let mut diagnostics = Vec::new();

    let lines: Vec<ParsedLine> = source
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| parse_line(raw, i + 1, &mut diagnostics))
        .collect();
    debug!(lines = lines.len(), "collected line records");

    let roots = build_tree(&lines, options)?;
    info!(
        roots = roots.len(),
        diagnostics = diagnostics.len(),
        "document parse complete"
    );

    Ok(ParsedDocument { roots, diagnostics })
}
