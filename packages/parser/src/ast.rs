use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value produced by argument coercion.
///
/// Arguments arrive as raw strings captured between parentheses; coercion
/// (see `property::coerce_argument`) turns them into one of these shapes.
/// A property written without an argument group coerces to `Bool(true)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Literal>),
}

impl Literal {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Literal::Bool(b) => *b,
            Literal::Number(n) => *n != 0.0,
            Literal::String(s) => !s.is_empty(),
            Literal::List(items) => !items.is_empty(),
        }
    }
}

/// Format a number the way it was written: integral values without a
/// trailing `.0`.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", format_number(*n)),
            Literal::String(s) => write!(f, "{}", s),
            Literal::List(items) => {
                let parts: Vec<String> = items.iter().map(|i| i.to_string()).collect();
                write!(f, "{}", parts.join(","))
            }
        }
    }
}

/// A dot-chained refinement attached directly to a property token,
/// e.g. the `.rem` in `padding(5,10).rem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub name: String,
    pub value: Literal,
}

/// A single parsed property token: name, coerced value, and any chained
/// modifiers in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyAssignment {
    pub name: String,
    pub value: Literal,
    pub modifiers: Vec<Modifier>,
}

impl PropertyAssignment {
    /// A bare flag property (`name` with no argument group).
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Literal::Bool(true),
            modifiers: Vec::new(),
        }
    }
}

/// One non-blank source line: component name, indentation depth, and the
/// properties that survived parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLine {
    pub component_name: String,
    pub indent: usize,
    pub properties: Vec<PropertyAssignment>,
    /// 1-based source line number, carried for diagnostics.
    pub line: usize,
}

/// A node in the reconstructed layout tree.
///
/// Children are ordered exactly as they appear in source, and every child's
/// source indent is strictly greater than its parent's. The property
/// assignments are kept in parse order; splitting them into attribute and
/// style namespaces is the resolver's job because that split depends on the
/// injected component configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub component_name: String,
    pub properties: Vec<PropertyAssignment>,
    pub children: Vec<Node>,
    pub line: usize,
}

impl Node {
    /// The synthetic root sits at indent −1 and is never itself emitted;
    /// the parse output is its ordered children.
    pub(crate) fn synthetic_root() -> Self {
        Self {
            component_name: String::new(),
            properties: Vec::new(),
            children: Vec::new(),
            line: 0,
        }
    }

    pub(crate) fn from_line(line: &ParsedLine) -> Self {
        Self {
            component_name: line.component_name.clone(),
            properties: line.properties.clone(),
            children: Vec::new(),
            line: line.line,
        }
    }

    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}
