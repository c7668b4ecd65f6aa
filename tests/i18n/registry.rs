//! Integration tests for the language registry
//!
//! Tests built-in locales, profiles, and runtime keyword registration.

use hyperfixi_foundation::ErrorKind;
use hyperfixi_i18n::{Direction, KeywordCategory, LanguageRegistry, Tokenizer, TokenKind, WordOrder};

// =============================================================================
// Built-in Locales
// =============================================================================

#[test]
fn every_builtin_language_is_registered() {
    let registry = LanguageRegistry::with_builtin();
    for code in ["en", "es", "it", "ja", "ko", "tr", "ar"] {
        assert!(registry.contains(code), "{code}");
        assert_eq!(registry.get(code).unwrap().code(), code);
    }
    assert_eq!(registry.codes().count(), 7);
}

#[test]
fn profiles_carry_word_order_and_direction() {
    let registry = LanguageRegistry::with_builtin();
    let order = |code: &str| registry.get(code).unwrap().profile.word_order;
    assert_eq!(order("en"), WordOrder::Svo);
    assert_eq!(order("es"), WordOrder::Svo);
    assert_eq!(order("ja"), WordOrder::Sov);
    assert_eq!(order("tr"), WordOrder::Sov);
    assert_eq!(order("ar"), WordOrder::Vso);
    assert_eq!(registry.get("ar").unwrap().profile.direction, Direction::Rtl);
    assert_eq!(registry.get("ko").unwrap().profile.direction, Direction::Ltr);
}

#[test]
fn primary_forms_come_first() {
    let registry = LanguageRegistry::with_builtin();
    let primary = |code: &str| {
        registry
            .get(code)
            .unwrap()
            .keywords
            .to_locale("toggle")
            .map(String::from)
    };
    assert_eq!(primary("en").as_deref(), Some("toggle"));
    assert_eq!(primary("es").as_deref(), Some("alternar"));
    assert_eq!(primary("ja").as_deref(), Some("切り替え"));
    assert_eq!(primary("ko").as_deref(), Some("토글"));
}

#[test]
fn alternative_forms_resolve_to_the_same_command() {
    let registry = LanguageRegistry::with_builtin();
    let ja = registry.get("ja").unwrap();
    for word in ["切り替え", "切り替える", "トグル"] {
        assert_eq!(ja.resolve(word).unwrap().canonical, "toggle", "{word}");
    }
}

#[test]
fn unknown_language_is_an_error() {
    let registry = LanguageRegistry::with_builtin();
    let err = registry.get("zz").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownLanguage(_)));
}

// =============================================================================
// Runtime Registration
// =============================================================================

#[test]
fn registered_command_is_tokenized_as_keyword() {
    let mut registry = LanguageRegistry::with_builtin();
    registry.register_command_keyword("en", "given", "given").unwrap();
    let en = registry.get("en").unwrap();
    let tokens = Tokenizer::tokenize("given #button", en);
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[0].normalized.as_deref(), Some("given"));
    assert!(tokens[0].in_category(KeywordCategory::Commands));
}

#[test]
fn registering_for_unknown_language_fails() {
    let mut registry = LanguageRegistry::with_builtin();
    assert!(registry.register_command_keyword("zz", "x", "given").is_err());
}

#[test]
fn registration_is_local_to_the_language() {
    let mut registry = LanguageRegistry::with_builtin();
    registry.register_command_keyword("es", "dado", "given").unwrap();
    assert!(registry.get("es").unwrap().resolve("dado").is_some());
    assert!(registry.get("it").unwrap().resolve("dado").is_none());
}
