/// End-to-end pipeline tests: text → tree → resolved descriptors against
/// the standard mapping.
use crate::mapping::{ComponentConfig, ContentSource, MappingTable};
use crate::resolver::{render, RenderedDocument};
use sketchml_parser::{Literal, ParseOptions};

fn render_standard(source: &str) -> RenderedDocument {
    render(source, &MappingTable::standard(), &ParseOptions::default())
        .expect("render should succeed")
}

#[test]
fn test_screen_section_text_pipeline() {
    let doc = render_standard("Screen\n  Section row()\n    Text value(\"Hello\")");

    assert_eq!(doc.units.len(), 1);
    assert!(doc.diagnostics.is_empty());

    let screen = doc.units[0].as_ref().expect("Screen should resolve");
    assert_eq!(screen.kind, "container");
    assert_eq!(screen.children.len(), 1);

    let section = &screen.children[0];
    assert_eq!(section.kind, "box");
    assert_eq!(
        section.style("flexDirection"),
        Some(&Literal::String("row".to_string()))
    );

    let text = &section.children[0];
    assert_eq!(text.kind, "typography");
    assert_eq!(text.content.as_deref(), Some("Hello"));
}

#[test]
fn test_text_attribute_aliases() {
    let doc = render_standard("Text value(\"hi\") size(24) align(center)");
    let text = doc.units[0].as_ref().expect("Text should resolve");

    // For Text, `size` and `align` are real attributes, not style keys.
    assert_eq!(text.attr("fontSize"), Some(&Literal::Number(24.0)));
    assert_eq!(text.attr("align"), Some(&Literal::String("center".to_string())));
    assert!(text.styles.is_empty());
}

#[test]
fn test_section_styles_expand() {
    let doc = render_standard("Section flex(row) padding(5,10).rem align(center)");
    let section = doc.units[0].as_ref().expect("Section should resolve");

    assert_eq!(section.style("display"), Some(&Literal::String("flex".to_string())));
    assert_eq!(section.style("paddingY"), Some(&Literal::String("0.3125rem".to_string())));
    assert_eq!(section.style("paddingX"), Some(&Literal::String("0.625rem".to_string())));
    assert_eq!(section.style("alignItems"), Some(&Literal::String("center".to_string())));
}

#[test]
fn test_multiple_top_level_siblings() {
    let doc = render_standard("Screen\nScreen\n  Section");
    assert_eq!(doc.units.len(), 2);
    let second = doc.units[1].as_ref().expect("second Screen should resolve");
    assert_eq!(second.path.to_string(), "1");
    assert_eq!(second.children[0].path.to_string(), "1.0");
}

#[test]
fn test_custom_mapping_injection() {
    let mapping = MappingTable::new().with_component(
        "Card",
        ComponentConfig::new("card")
            .with_content(ContentSource::Property("title".to_string())),
    );
    let doc = render("Card title(\"Pricing\") padding(8)", &mapping, &ParseOptions::default())
        .expect("render should succeed");

    let card = doc.units[0].as_ref().expect("Card should resolve");
    assert_eq!(card.kind, "card");
    assert_eq!(card.content.as_deref(), Some("Pricing"));
    assert_eq!(card.style("padding"), Some(&Literal::Number(8.0)));
}

#[test]
fn test_numeric_content_displays_as_number() {
    let doc = render_standard("Text value(42)");
    let text = doc.units[0].as_ref().expect("Text should resolve");
    assert_eq!(text.content.as_deref(), Some("42"));
}

#[test]
fn test_descriptor_json_shape() {
    let doc = render_standard("Section flex(row)\n  Text value(\"hi\")");
    let json = serde_json::to_value(&doc.units).expect("serialize should succeed");

    assert_eq!(json[0]["kind"], "box");
    assert_eq!(json[0]["styles"]["display"], "flex");
    assert_eq!(json[0]["children"][0]["kind"], "typography");
    assert_eq!(json[0]["children"][0]["content"], "hi");
    assert_eq!(json[0]["children"][0]["path"], serde_json::json!([0, 0]));
}

#[test]
fn test_depth_guard_surfaces_as_error() {
    let mut source = String::new();
    for depth in 0..10 {
        source.push_str(&" ".repeat(depth));
        source.push_str("Section\n");
    }
    let options = ParseOptions { max_depth: 4 };
    let result = render(&source, &MappingTable::standard(), &options);
    assert!(result.is_err());
}
