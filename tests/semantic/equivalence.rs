//! Integration tests for cross-language parsing
//!
//! The same behavior written in any supported language must produce the same
//! semantic node, up to metadata.

use hyperfixi_semantic::{ErrorKind, NodeKind, SchemaRegistry, SemanticParser, SemanticRole, SemanticValue};

const TOGGLE_HANDLERS: &[(&str, &str)] = &[
    ("en", "on click toggle .active"),
    ("es", "en clic alternar .active"),
    ("it", "al clic alterna .active"),
    ("ja", "クリックで.activeを切り替え"),
    ("ko", "클릭 시 .active를 토글"),
    ("tr", "tıklama üzerine .active'i değiştir"),
    ("ar", "عند النقر بدّل .active"),
];

const LANGUAGES: [&str; 7] = ["en", "es", "it", "ja", "ko", "tr", "ar"];

/// One English command per standard schema, filling as many roles as the
/// schema has.
const EVERY_COMMAND: &[&str] = &[
    "toggle .active on #button",
    "add .highlight to #box",
    "remove .highlight from #box",
    "show #menu",
    "hide me",
    "set :count to 5",
    "put 'hello' into #out",
    "increment :count",
    "decrement :count",
    "append 'x' to :log",
    "take .selected from #tabs",
    "log :count",
    "send refresh to #panel",
    "trigger refresh on #panel",
    "wait 2s",
    "fetch /api/items as json",
    "go to /home",
    "call alert('x')",
    "focus #name",
    "blur #name",
    "halt",
    "exit",
    "return 42",
];

// =============================================================================
// Equivalence
// =============================================================================

#[test]
fn seven_languages_agree() {
    let parser = SemanticParser::new();
    let reference = parser.parse(TOGGLE_HANDLERS[0].1, "en").unwrap();
    for (code, source) in TOGGLE_HANDLERS {
        let node = parser.parse(source, code).unwrap();
        assert_eq!(node.event_name(), reference.event_name(), "{code}");
        assert_eq!(node.commands(), reference.commands(), "{code}");
        assert_eq!(node.body()[0].roles, reference.body()[0].roles, "{code}");
        assert_eq!(node.metadata.language, *code);
    }
}

#[test]
fn confidence_is_reported() {
    let parser = SemanticParser::new();
    for (code, source) in TOGGLE_HANDLERS {
        let (_, confidence) = parser.parse_with_confidence(source, code).unwrap();
        assert!(confidence > 0.0 && confidence <= 1.0, "{code}: {confidence}");
    }
}

#[test]
fn japanese_spacing_is_irrelevant() {
    let parser = SemanticParser::new();
    let packed = parser.parse("クリックで.activeを切り替え", "ja").unwrap();
    let spaced = parser.parse("クリック で .active を 切り替え", "ja").unwrap();
    assert_eq!(packed.body()[0].roles, spaced.body()[0].roles);
}

// =============================================================================
// Translation
// =============================================================================

#[test]
fn english_round_trips_through_every_language() {
    let parser = SemanticParser::new();
    let original = parser.parse("toggle .active on #button", "en").unwrap();
    for code in ["es", "it", "ja", "ko", "tr", "ar"] {
        let text = parser.render(&original, code).unwrap();
        let back = parser.parse(&text, code).unwrap();
        assert_eq!(back.action, "toggle", "{code}: {text}");
        assert_eq!(
            back.role(&SemanticRole::Patient),
            Some(&SemanticValue::selector(".active")),
            "{code}: {text}"
        );
    }
}

#[test]
fn every_command_round_trips_through_every_language() {
    let parser = SemanticParser::new();
    let covered: Vec<_> = EVERY_COMMAND
        .iter()
        .map(|source| parser.parse(source, "en").unwrap().action)
        .collect();
    for schema in SchemaRegistry::with_standard().iter() {
        assert!(covered.contains(&schema.action), "no source for {}", schema.action);
    }

    for source in EVERY_COMMAND {
        let original = parser.parse(source, "en").unwrap();
        for code in LANGUAGES {
            let text = parser.render(&original, code).unwrap();
            let back = parser
                .parse(&text, code)
                .unwrap_or_else(|e| panic!("{code}: {source} -> {text}: {e}"));
            assert_eq!(back.action, original.action, "{code}: {text}");
            assert_eq!(back.roles, original.roles, "{code}: {text}");
        }
    }
}

#[test]
fn handler_with_source_and_modifiers_round_trips() {
    let parser = SemanticParser::new();
    let original = parser
        .parse("on click.once from #list toggle .active then wait 1s", "en")
        .unwrap();
    let NodeKind::EventHandler { modifiers, .. } = &original.kind else {
        panic!("expected handler");
    };
    assert!(modifiers.once);
    for code in LANGUAGES {
        let text = parser.render(&original, code).unwrap();
        let back = parser
            .parse(&text, code)
            .unwrap_or_else(|e| panic!("{code}: {text}: {e}"));
        assert_eq!(back.event_name(), Some("click"), "{code}: {text}");
        assert_eq!(
            back.role(&SemanticRole::Source),
            Some(&SemanticValue::selector("#list")),
            "{code}: {text}"
        );
        let NodeKind::EventHandler { modifiers: back_modifiers, .. } = &back.kind else {
            panic!("{code}: expected handler from {text}");
        };
        assert_eq!(back_modifiers, modifiers, "{code}: {text}");
        assert_eq!(back.commands(), original.commands(), "{code}: {text}");
    }
}

#[test]
fn translate_to_japanese() {
    let parser = SemanticParser::new();
    let text = parser.translate("on click toggle .active", "en", "ja").unwrap();
    assert_eq!(text, "クリック で .active を 切り替え");
}

#[test]
fn blocks_translate() {
    let parser = SemanticParser::new();
    let text = parser.translate("repeat 3 times increment :n end", "en", "ja").unwrap();
    let back = parser.parse(&text, "ja").unwrap();
    assert_eq!(back.action, "repeat");
    assert_eq!(back.role(&SemanticRole::Quantity), Some(&SemanticValue::number(3.0)));
    assert_eq!(back.body()[0].action, "increment");
}

// =============================================================================
// Failure Modes
// =============================================================================

#[test]
fn unknown_command_does_not_match() {
    let err = SemanticParser::new().parse("frobnicate #x", "en").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoMatch(_)));
}

#[test]
fn unknown_language_is_reported() {
    let err = SemanticParser::new().parse("toggle .a", "xx").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownLanguage(_)));
}

#[test]
fn threshold_filters_stemmed_matches() {
    let parser = SemanticParser::new();
    assert!(parser.parse_at("alternando .activo", "es", 0.9).is_err());
    assert!(parser.parse_at("alternando .activo", "es", 0.5).is_ok());
    assert!(parser.parse_at("alternar .activo", "es", 0.9).is_ok());
}

#[test]
fn empty_source_does_not_match() {
    assert!(!SemanticParser::new().can_parse("   ", "en"));
}
