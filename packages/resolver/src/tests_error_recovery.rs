/// Error-tolerance tests: partial or malformed input must never lose the
/// rest of the preview. Only the depth guard is allowed to be fatal.
use crate::mapping::MappingTable;
use crate::resolver::{render, Diagnostic, RenderedDocument};
use sketchml_parser::ParseOptions;

fn render_standard(source: &str) -> RenderedDocument {
    render(source, &MappingTable::standard(), &ParseOptions::default())
        .expect("render should succeed")
}

#[test]
fn test_malformed_property_keeps_rest_of_line() {
    let doc = render_standard("Section padding(5, 10 flex\n  Text value(\"ok\")");

    let section = doc.units[0].as_ref().expect("Section should resolve");
    // The unbalanced token swallowed the rest of its line, leaving the
    // Section bare; the child line is untouched.
    assert!(section.styles.is_empty());
    assert_eq!(section.children[0].content.as_deref(), Some("ok"));

    assert_eq!(doc.diagnostics.len(), 1);
    assert!(matches!(
        &doc.diagnostics[0],
        Diagnostic::MalformedProperty { line: 1, .. }
    ));
}

#[test]
fn test_unknown_component_subtree_is_skipped_whole() {
    let doc = render_standard("Screen\n  Foo\n    Text value(\"hidden\")\n  Text value(\"shown\")");

    let screen = doc.units[0].as_ref().expect("Screen should resolve");
    assert_eq!(screen.children.len(), 1);
    assert_eq!(screen.children[0].content.as_deref(), Some("shown"));

    // Only the unknown root of the subtree is reported; its children are
    // never visited.
    assert_eq!(doc.diagnostics.len(), 1);
}

#[test]
fn test_mixed_errors_accumulate_in_order() {
    let doc = render_standard("Screen bad(token\n  Foo\n  Bar\n  Section");

    assert_eq!(doc.diagnostics.len(), 3);
    assert!(matches!(&doc.diagnostics[0], Diagnostic::MalformedProperty { line: 1, .. }));
    assert!(matches!(
        &doc.diagnostics[1],
        Diagnostic::UnknownComponent { name, .. } if name == "Foo"
    ));
    assert!(matches!(
        &doc.diagnostics[2],
        Diagnostic::UnknownComponent { name, .. } if name == "Bar"
    ));

    let screen = doc.units[0].as_ref().expect("Screen should resolve");
    assert_eq!(screen.children.len(), 1);
}

#[test]
fn test_whitespace_only_input_is_empty_not_error() {
    let doc = render_standard("   \n\t\n  ");
    assert!(doc.units.is_empty());
    assert!(doc.diagnostics.is_empty());
}

#[test]
fn test_diagnostics_render_human_readable() {
    let doc = render_standard("Foo\nSection oops(");
    let messages: Vec<String> = doc.diagnostics.iter().map(|d| d.to_string()).collect();
    assert!(messages.iter().any(|m| m.contains("'Foo'")));
    assert!(messages.iter().any(|m| m.contains("oops(")));
}
