use serde::{Deserialize, Serialize};
use sketchml_parser::Literal;
use std::collections::HashMap;
use std::fmt;

/// Deterministic structural identity of a renderable unit: the
/// root-relative child-index path assigned during resolution.
///
/// Because the path is a pure function of structural position, resolving
/// the same source twice yields byte-identical output, which keeps the
/// pipeline referentially transparent and its output diff-able. Nodes that
/// fail to resolve still consume their index, so surviving siblings keep
/// stable paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath {
    segments: Vec<usize>,
}

impl NodePath {
    /// The root path (no segments); units themselves always sit at least
    /// one segment deep.
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Path of the `index`-th child under this path.
    pub fn child(&self, index: usize) -> NodePath {
        let mut segments = self.segments.clone();
        segments.push(index);
        NodePath { segments }
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[usize] {
        &self.segments
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// A renderable descriptor produced by the resolver.
///
/// `attributes` and `styles` are kept in separate namespaces so a property
/// name can never collide with a computed style key. The host component
/// library decides what `kind` means on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableUnit {
    pub kind: String,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub attributes: HashMap<String, Literal>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub styles: HashMap<String, Literal>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<RenderableUnit>,
    pub path: NodePath,
}

impl RenderableUnit {
    pub fn new(kind: impl Into<String>, path: NodePath) -> Self {
        Self {
            kind: kind.into(),
            attributes: HashMap::new(),
            styles: HashMap::new(),
            content: None,
            children: Vec::new(),
            path,
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: Literal) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: Literal) -> Self {
        self.styles.insert(key.into(), value);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_children(mut self, children: Vec<RenderableUnit>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up a style value by key.
    pub fn style(&self, key: &str) -> Option<&Literal> {
        self.styles.get(key)
    }

    /// Look up an attribute value by key.
    pub fn attr(&self, key: &str) -> Option<&Literal> {
        self.attributes.get(key)
    }
}
