//! Integration tests for user-registered schemas
//!
//! A testing dialect adds a `given <element> is <state>` command in English
//! and Spanish without touching the built-in tables.

use hyperfixi_semantic::{
    CommandSchema, RoleSpec, SemanticParser, SemanticRole, SemanticValue, ValueType,
};

fn state() -> SemanticRole {
    SemanticRole::Custom("state".into())
}

fn parser_with_given() -> SemanticParser {
    let mut parser = SemanticParser::new();
    parser.register_schema(
        CommandSchema::new("given")
            .role(RoleSpec::required(
                SemanticRole::Patient,
                &[ValueType::Selector, ValueType::Reference, ValueType::Expression],
            ))
            .role(
                RoleSpec::required(state(), &[ValueType::Literal, ValueType::Expression])
                    .markers(&[("en", "is"), ("es", "es")]),
            ),
    );
    parser.register_command_keyword("en", "given", "given").unwrap();
    parser.register_command_keyword("es", "dado", "given").unwrap();
    parser
}

#[test]
fn english_given() {
    let node = parser_with_given().parse("given #button is 'active'", "en").unwrap();
    assert_eq!(node.action, "given");
    assert_eq!(node.role(&SemanticRole::Patient), Some(&SemanticValue::selector("#button")));
    assert_eq!(node.role(&state()), Some(&SemanticValue::string("active")));
}

#[test]
fn spanish_given_is_equivalent() {
    let parser = parser_with_given();
    let en = parser.parse("given #button is 'active'", "en").unwrap();
    let es = parser.parse("dado #button es 'active'", "es").unwrap();
    assert_eq!(en.action, es.action);
    assert_eq!(en.roles, es.roles);
}

#[test]
fn bare_state_words_match_in_both_languages() {
    let parser = parser_with_given();
    let en = parser.parse("given #button is exists", "en").unwrap();
    let es = parser.parse("dado #button es existe", "es").unwrap();
    assert_eq!(en.action, es.action);
    assert_eq!(en.roles.len(), es.roles.len());
    assert_eq!(en.role(&SemanticRole::Patient), es.role(&SemanticRole::Patient));
}

#[test]
fn unregistered_parser_rejects_given() {
    assert!(!SemanticParser::new().can_parse("given #button is 'active'", "en"));
}

#[test]
fn registered_schema_is_listed() {
    let parser = parser_with_given();
    let schema = parser.schemas().get("given").unwrap();
    assert_eq!(schema.required_roles().count(), 2);
}
