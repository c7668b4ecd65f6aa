//! Integration tests for the tokenizer
//!
//! Tests keyword recognition, segmentation, particles, and morphology per
//! locale.

use hyperfixi_i18n::{LanguageRegistry, Token, TokenKind, Tokenizer};
use proptest::prelude::*;

fn tokenize(code: &str, source: &str) -> Vec<Token> {
    let registry = LanguageRegistry::with_builtin();
    Tokenizer::tokenize(source, registry.get(code).unwrap()).to_vec()
}

fn normalized(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::canonical).collect()
}

// =============================================================================
// Keywords Per Language
// =============================================================================

#[test]
fn toggle_normalizes_in_every_language() {
    let cases = [
        ("en", "toggle .active"),
        ("es", "alternar .active"),
        ("it", "alterna .active"),
        ("ko", ".active를 토글"),
        ("tr", ".active'i değiştir"),
        ("ar", "بدّل .active"),
    ];
    for (code, source) in cases {
        let tokens = tokenize(code, source);
        assert!(
            tokens.iter().any(|t| t.normalized.as_deref() == Some("toggle")),
            "{code}: {source}"
        );
        assert!(
            tokens.iter().any(|t| t.kind == TokenKind::Selector && t.text == ".active"),
            "{code}: {source}"
        );
    }
}

#[test]
fn english_handler_stream() {
    let tokens = tokenize("en", "on click toggle .active on #button");
    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[0].kind, TokenKind::Particle);
    assert_eq!(tokens[0].normalized.as_deref(), Some("on"));
    assert_eq!(tokens[2].kind, TokenKind::Keyword);
    assert_eq!(tokens[3].kind, TokenKind::Selector);
    assert_eq!(tokens[5].text, "#button");
}

// =============================================================================
// Segmentation And Particles
// =============================================================================

#[test]
fn japanese_without_spaces_matches_spaced_form() {
    let spaced = tokenize("ja", "クリック で .active を 切り替え");
    let packed = tokenize("ja", "クリックで.activeを切り替え");
    assert_eq!(normalized(&spaced), normalized(&packed));
    assert_eq!(packed[1].kind, TokenKind::Particle);
    assert_eq!(packed[3].kind, TokenKind::Particle);
}

#[test]
fn korean_object_particle_splits_from_selector() {
    let tokens = tokenize("ko", ".active를 토글");
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec![".active", "를", "토글"]);
    assert_eq!(tokens[1].kind, TokenKind::Particle);
}

#[test]
fn turkish_apostrophe_suffix_becomes_particle() {
    let tokens = tokenize("tr", ".active'i değiştir");
    assert_eq!(tokens[0].text, ".active");
    assert_eq!(tokens[1].kind, TokenKind::Particle);
    assert_eq!(tokens[2].normalized.as_deref(), Some("toggle"));
}

#[test]
fn arabic_conjunction_prefix_is_stripped() {
    let tokens = tokenize("ar", "وبدل .active");
    assert_eq!(tokens[0].normalized.as_deref(), Some("toggle"));
    assert!(tokens[0].stem.is_some());
}

#[test]
fn spanish_gerund_is_stemmed() {
    let tokens = tokenize("es", "alternando .activo");
    assert_eq!(tokens[0].normalized.as_deref(), Some("toggle"));
    assert!(tokens[0].stem_confidence.is_some_and(|c| c < 1.0));
}

#[test]
fn spans_track_lines() {
    let tokens = tokenize("en", "on click\n  toggle .a\n  hide me");
    let lines: Vec<_> = tokens.iter().map(|t| t.span.line).collect();
    assert_eq!(lines, vec![1, 1, 2, 2, 3, 3]);
}

// =============================================================================
// Robustness
// =============================================================================

proptest! {
    #[test]
    fn tokenizer_never_panics(source in "\\PC{0,80}", code in prop::sample::select(vec!["en", "es", "it", "ja", "ko", "tr", "ar"])) {
        let tokens = tokenize(code, &source);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn selectors_survive_every_language(class in "[a-z][a-z0-9-]{0,12}", code in prop::sample::select(vec!["en", "es", "it", "ar"])) {
        let source = format!("toggle .{class}");
        let tokens = tokenize(code, &source);
        let expected = format!(".{class}");
        prop_assert!(tokens.iter().any(|t| t.kind == TokenKind::Selector && t.text == expected));
    }
}
