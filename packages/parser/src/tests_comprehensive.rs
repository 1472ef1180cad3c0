/// End-to-end parser tests: text → tokens → line records → tree.
use crate::ast::Literal;
use crate::parser::parse;
use crate::tree::ParseOptions;

#[test]
fn test_full_document_shape() {
    let source = r#"Screen align(center)
  Section flex(row) padding(5,10)
    Text value("Hello") size(24)
    FillLoren paragraph(2)
  Section flex
"#;

    let doc = parse(source, &ParseOptions::default()).expect("parse should succeed");
    assert!(doc.diagnostics.is_empty());
    assert_eq!(doc.roots.len(), 1);

    let screen = &doc.roots[0];
    assert_eq!(screen.component_name, "Screen");
    assert_eq!(screen.properties.len(), 1);
    assert_eq!(screen.children.len(), 2);

    let row = &screen.children[0];
    assert_eq!(row.component_name, "Section");
    assert_eq!(row.children.len(), 2);
    assert_eq!(row.children[0].component_name, "Text");
    assert_eq!(row.children[1].component_name, "FillLoren");

    let text = &row.children[0];
    assert_eq!(text.properties[0].name, "value");
    assert_eq!(text.properties[0].value, Literal::String("Hello".to_string()));
    assert_eq!(text.properties[1].value, Literal::Number(24.0));
}

#[test]
fn test_diagnostics_carry_line_numbers() {
    let source = "Screen\n  Section ??bad?? flex(row)\n  Section also(bad";
    let doc = parse(source, &ParseOptions::default()).expect("parse should succeed");

    assert_eq!(doc.diagnostics.len(), 2);
    let rendered: Vec<String> = doc.diagnostics.iter().map(|d| d.to_string()).collect();
    assert!(rendered[0].contains("line 2"));
    assert!(rendered[1].contains("line 3"));

    // Both lines still contribute nodes; the bad tokens are gone.
    assert_eq!(doc.node_count(), 3);
    assert_eq!(doc.roots[0].children[0].properties.len(), 1);
    assert!(doc.roots[0].children[1].properties.is_empty());
}

#[test]
fn test_modifier_chain_survives_round_trip_to_tree() {
    let source = "Section padding(5,10).rem";
    let doc = parse(source, &ParseOptions::default()).expect("parse should succeed");
    let section = &doc.roots[0];
    let padding = &section.properties[0];
    assert_eq!(padding.name, "padding");
    assert_eq!(padding.modifiers.len(), 1);
    assert_eq!(padding.modifiers[0].name, "rem");
}

#[test]
fn test_tabs_count_as_single_width() {
    let source = "Screen\n\tSection\n\t\tText";
    let doc = parse(source, &ParseOptions::default()).expect("parse should succeed");
    assert_eq!(doc.roots[0].children[0].children[0].component_name, "Text");
}

#[test]
fn test_ast_serializes_to_json() {
    let source = "Text value(\"hi\") size(24) pad(1,2)";
    let doc = parse(source, &ParseOptions::default()).expect("parse should succeed");
    let json = serde_json::to_value(&doc.roots).expect("serialize should succeed");

    let props = &json[0]["properties"];
    assert_eq!(props[0]["value"], serde_json::json!("hi"));
    assert_eq!(props[1]["value"], serde_json::json!(24.0));
    assert_eq!(props[2]["value"], serde_json::json!([1.0, 2.0]));
}
