use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where a component's text content comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentSource {
    /// Content is the displayed value of the named property
    /// (e.g. `Text value("Hello")`).
    Property(String),
    /// Content is generated lorem-ipsum filler; the named property controls
    /// the paragraph count (e.g. `FillLoren paragraph(2)`).
    Lorem(String),
}

/// Resolution configuration for one component name.
///
/// This is injected data, not code: it tells the resolver what descriptor
/// kind to emit, which properties are real attributes (and under what
/// name), which style keys are aliased, and whether unclaimed properties
/// flow into the style bag at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Descriptor kind handed to the host component library.
    pub render_as: String,
    /// Text-content rule, if this component carries content.
    pub content: Option<ContentSource>,
    /// Property name → attribute name. Matching properties bypass the
    /// style bag entirely.
    pub prop_aliases: HashMap<String, String>,
    /// Style key → replacement style key, applied before composite
    /// expansion.
    pub style_aliases: HashMap<String, String>,
    /// Whether unclaimed properties land in the style bag. When false they
    /// are dropped, matching components that take no presentation styling.
    pub styled: bool,
}

impl ComponentConfig {
    pub fn new(render_as: impl Into<String>) -> Self {
        Self {
            render_as: render_as.into(),
            content: None,
            prop_aliases: HashMap::new(),
            style_aliases: HashMap::new(),
            styled: true,
        }
    }

    pub fn with_content(mut self, source: ContentSource) -> Self {
        self.content = Some(source);
        self
    }

    pub fn with_prop_alias(mut self, name: impl Into<String>, attr: impl Into<String>) -> Self {
        self.prop_aliases.insert(name.into(), attr.into());
        self
    }

    pub fn with_style_alias(mut self, key: impl Into<String>, alias: impl Into<String>) -> Self {
        self.style_aliases.insert(key.into(), alias.into());
        self
    }

    pub fn without_style_bag(mut self) -> Self {
        self.styled = false;
        self
    }
}

/// The externally owned, read-only table from component name to
/// render-descriptor configuration. The resolver only ever needs this one
/// capability; hosts may implement it over any storage they like.
pub trait ComponentMapping {
    fn get(&self, name: &str) -> Option<&ComponentConfig>;
}

/// Plain table-backed mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingTable {
    entries: HashMap<String, ComponentConfig>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, config: ComponentConfig) {
        self.entries.insert(name.into(), config);
    }

    pub fn with_component(mut self, name: impl Into<String>, config: ComponentConfig) -> Self {
        self.insert(name, config);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in component set: `Screen`, `Section`, `Text`, and
    /// `FillLoren`. `Text` treats `value` as content and `align`/`size` as
    /// real attributes; `FillLoren` takes a paragraph count and no styling.
    pub fn standard() -> Self {
        Self::new()
            .with_component("Screen", ComponentConfig::new("container"))
            .with_component("Section", ComponentConfig::new("box"))
            .with_component(
                "Text",
                ComponentConfig::new("typography")
                    .with_content(ContentSource::Property("value".to_string()))
                    .with_prop_alias("align", "align")
                    .with_prop_alias("size", "fontSize"),
            )
            .with_component(
                "FillLoren",
                ComponentConfig::new("filler-text")
                    .with_content(ContentSource::Lorem("paragraph".to_string()))
                    .with_prop_alias("paragraph", "paragraph")
                    .without_style_bag(),
            )
    }
}

impl ComponentMapping for MappingTable {
    fn get(&self, name: &str) -> Option<&ComponentConfig> {
        self.entries.get(name)
    }
}
