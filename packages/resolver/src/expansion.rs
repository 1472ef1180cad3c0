use crate::mapping::{ComponentConfig, ContentSource};
use sketchml_parser::ast::format_number;
use sketchml_parser::{Literal, PropertyAssignment};
use std::collections::HashMap;
use tracing::debug;

/// Layout direction keywords accepted by `flex(...)` and as bare
/// direction properties (`Section row()`).
const DIRECTIONS: [&str; 4] = ["row", "column", "row-reverse", "column-reverse"];

/// A node's property assignments distributed into the two namespaces the
/// descriptor constructor receives, plus the raw content value if the
/// component's content property appeared on the line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedAttributes {
    pub attributes: HashMap<String, Literal>,
    pub styles: HashMap<String, Literal>,
    pub content_value: Option<Literal>,
}

/// Distribute property assignments into attribute and style bags according
/// to the component's injected configuration, applying composite-property
/// expansion and `rem` tracking along the way.
///
/// Routing order per assignment: content property, then attribute alias,
/// then (for styled components) the style bag; anything else is dropped.
/// The `rem` tracking slot is the set of style keys the current property
/// wrote. It resets at the start of every property, so a modifier can never
/// retroactively touch an unrelated key, and it starts empty on every line.
pub fn distribute(config: &ComponentConfig, assignments: &[PropertyAssignment]) -> ResolvedAttributes {
    let mut resolved = ResolvedAttributes::default();

    for assignment in assignments {
        let mut tracked: Vec<String> = Vec::new();

        if is_content_property(config, &assignment.name) {
            resolved.content_value = Some(assignment.value.clone());
        } else if let Some(attr) = config.prop_aliases.get(&assignment.name) {
            resolved.attributes.insert(attr.clone(), assignment.value.clone());
        } else if config.styled {
            expand_style(
                config,
                &assignment.name,
                &assignment.value,
                &mut resolved.styles,
                &mut tracked,
            );
        } else {
            debug!(property = %assignment.name, "dropping property unclaimed by unstyled component");
        }

        for modifier in &assignment.modifiers {
            if modifier.name == "rem" {
                apply_rem(&tracked, &mut resolved.styles);
            } else if config.styled {
                let key = aliased_key(config, &modifier.name);
                resolved.styles.insert(key, modifier.value.clone());
            }
        }
    }

    resolved
}

fn is_content_property(config: &ComponentConfig, name: &str) -> bool {
    matches!(&config.content, Some(ContentSource::Property(prop)) if prop == name)
}

fn aliased_key(config: &ComponentConfig, name: &str) -> String {
    config
        .style_aliases
        .get(name)
        .cloned()
        .unwrap_or_else(|| name.to_string())
}

/// Write one property into the style bag, expanding the composite
/// properties (`padding`, `align`, `flex`, bare direction names) and
/// recording every key written so a following `.rem` knows what to
/// convert. An injected style alias takes precedence over expansion.
fn expand_style(
    config: &ComponentConfig,
    name: &str,
    value: &Literal,
    styles: &mut HashMap<String, Literal>,
    tracked: &mut Vec<String>,
) {
    if let Some(alias) = config.style_aliases.get(name) {
        set_style(styles, tracked, alias.clone(), value.clone());
        return;
    }

    match name {
        "padding" => expand_padding(value, styles, tracked),
        "align" => expand_align(value, styles, tracked),
        "flex" => expand_flex(value, styles, tracked),
        direction if DIRECTIONS.contains(&direction) && !has_payload(value) => {
            set_style(styles, tracked, "display".to_string(), Literal::String("flex".to_string()));
            set_style(
                styles,
                tracked,
                "flexDirection".to_string(),
                Literal::String(direction.to_string()),
            );
        }
        other => set_style(styles, tracked, other.to_string(), value.clone()),
    }
}

/// Whether an argument carries a real payload. Bare flags and empty
/// argument groups do not.
fn has_payload(value: &Literal) -> bool {
    !matches!(value, Literal::Bool(true)) && !matches!(value, Literal::String(s) if s.is_empty())
}

fn set_style(
    styles: &mut HashMap<String, Literal>,
    tracked: &mut Vec<String>,
    key: String,
    value: Literal,
) {
    tracked.push(key.clone());
    styles.insert(key, value);
}

/// `padding`: one number is uniform, two are (vertical, horizontal), four
/// are per-side in top/right/bottom/left order. Any other shape passes
/// through under the plain key.
fn expand_padding(value: &Literal, styles: &mut HashMap<String, Literal>, tracked: &mut Vec<String>) {
    match value {
        Literal::List(items) if items.len() == 2 => {
            set_style(styles, tracked, "paddingY".to_string(), items[0].clone());
            set_style(styles, tracked, "paddingX".to_string(), items[1].clone());
        }
        Literal::List(items) if items.len() == 4 => {
            let sides = ["paddingTop", "paddingRight", "paddingBottom", "paddingLeft"];
            for (side, item) in sides.iter().zip(items) {
                set_style(styles, tracked, side.to_string(), item.clone());
            }
        }
        other => set_style(styles, tracked, "padding".to_string(), other.clone()),
    }
}

/// `align("center")` centers both axis alignment and text alignment;
/// `align("start")` aligns to the start edge only. Other values pass
/// through unchanged.
fn expand_align(value: &Literal, styles: &mut HashMap<String, Literal>, tracked: &mut Vec<String>) {
    match value.as_str() {
        Some("center") => {
            for key in ["textAlign", "alignItems", "justifyContent"] {
                set_style(styles, tracked, key.to_string(), Literal::String("center".to_string()));
            }
        }
        Some("start") => {
            set_style(
                styles,
                tracked,
                "alignItems".to_string(),
                Literal::String("flex-start".to_string()),
            );
        }
        _ => set_style(styles, tracked, "align".to_string(), value.clone()),
    }
}

/// `flex(row)` sets the layout direction; an empty or absent argument is
/// unit flex-grow; anything else passes through as the grow factor.
fn expand_flex(value: &Literal, styles: &mut HashMap<String, Literal>, tracked: &mut Vec<String>) {
    match value.as_str() {
        Some(direction) if DIRECTIONS.contains(&direction) => {
            set_style(styles, tracked, "display".to_string(), Literal::String("flex".to_string()));
            set_style(
                styles,
                tracked,
                "flexDirection".to_string(),
                Literal::String(direction.to_string()),
            );
        }
        _ if !has_payload(value) => {
            set_style(styles, tracked, "flex".to_string(), Literal::Number(1.0));
        }
        _ => set_style(styles, tracked, "flex".to_string(), value.clone()),
    }
}

/// Convert every tracked style key's numeric value(s) into unit-suffixed
/// strings. The canonical rule divides by 16 and appends `rem` (so `5`
/// becomes `"0.3125rem"`); list values convert element-wise and join with
/// spaces. Non-numeric values are left untouched.
fn apply_rem(tracked: &[String], styles: &mut HashMap<String, Literal>) {
    for key in tracked {
        if let Some(value) = styles.get(key) {
            let converted = rem_value(value);
            styles.insert(key.clone(), converted);
        }
    }
}

fn rem_value(value: &Literal) -> Literal {
    match value {
        Literal::Number(n) => Literal::String(rem_string(*n)),
        Literal::List(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Literal::Number(n) => rem_string(*n),
                    other => other.to_string(),
                })
                .collect();
            Literal::String(parts.join(" "))
        }
        other => other.clone(),
    }
}

fn rem_string(n: f64) -> String {
    format!("{}rem", format_number(n / 16.0))
}
