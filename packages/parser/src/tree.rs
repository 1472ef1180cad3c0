use crate::ast::{Node, ParsedLine};
use crate::error::{ParseResult, StructureError};

/// Default bound on nesting depth. Deep enough for any hand-written layout;
/// shallow enough to stop a pathological strictly-increasing-indent input
/// long before the call stack is at risk during resolution.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for a parse invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    /// Maximum nesting depth before the parse fails with a
    /// [`StructureError`].
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Reconstruct the layout forest from line records using an indentation
/// stack.
///
/// The stack is seeded with a synthetic root at indent −1. For each line in
/// source order: pop while the top's indent is ≥ the current line's indent,
/// append the new node as the last child of the remaining top, then push
/// the new node. Equal indent therefore closes a subtree as a sibling
/// boundary, and a first line with indent > 0 still attaches under the
/// synthetic root. The returned forest is the root's ordered children, so
/// multiple top-level siblings are supported.
///
/// Identical input always produces a structurally identical forest.
pub fn build_tree(lines: &[ParsedLine], options: &ParseOptions) -> ParseResult<Vec<Node>> {
    let mut stack: Vec<(i64, Node)> = vec![(-1, Node::synthetic_root())];

    for line in lines {
        let indent = line.indent as i64;
        while stack.last().map_or(false, |(top, _)| *top >= indent) {
            fold_top(&mut stack);
        }
        // The stack holds the root plus every open ancestor, so its length
        // is the depth the new node would land at.
        if stack.len() > options.max_depth {
            return Err(StructureError::depth_exceeded(options.max_depth, line.line));
        }
        stack.push((indent, Node::from_line(line)));
    }

    while stack.len() > 1 {
        fold_top(&mut stack);
    }

    match stack.pop() {
        Some((_, root)) => Ok(root.children),
        None => Ok(Vec::new()),
    }
}

/// Pop the finished top of the stack and attach it to its parent.
fn fold_top(stack: &mut Vec<(i64, Node)>) {
    if let Some((_, done)) = stack.pop() {
        if let Some((_, parent)) = stack.last_mut() {
            parent.children.push(done);
        }
    }
}
