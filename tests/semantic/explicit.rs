//! Integration tests for the explicit bracket syntax

use hyperfixi_semantic::{ExplicitSyntax, SemanticParser, SemanticRole, SemanticValue};

#[test]
fn explicit_matches_natural_language() {
    let explicit = ExplicitSyntax::parse("[toggle patient:.active destination:#button]").unwrap();
    let natural = SemanticParser::new().parse("toggle .active on #button", "en").unwrap();
    assert_eq!(explicit.action, natural.action);
    assert_eq!(explicit.roles, natural.roles);
}

#[test]
fn parsed_nodes_render_as_explicit() {
    let node = SemanticParser::new().parse("クリックで.activeを切り替え", "ja").unwrap();
    let text = ExplicitSyntax::render(&node);
    assert!(ExplicitSyntax::is_explicit(&text));
    let back = ExplicitSyntax::parse(&text).unwrap();
    assert_eq!(back.event_name(), Some("click"));
    assert_eq!(back.body()[0].role(&SemanticRole::Patient), Some(&SemanticValue::selector(".active")));
}

#[test]
fn explicit_renders_in_any_language() {
    let node = ExplicitSyntax::parse("[toggle patient:.active]").unwrap();
    let parser = SemanticParser::new();
    let es = parser.render(&node, "es").unwrap();
    assert!(es.starts_with("alternar"), "{es}");
}

#[test]
fn malformed_explicit_is_an_error() {
    assert!(ExplicitSyntax::parse("[toggle patient]").is_err());
    assert!(ExplicitSyntax::parse("[toggle patient:.a").is_err());
    assert!(!ExplicitSyntax::is_explicit("toggle .a"));
}
