//! Integration tests for the compile driver
//!
//! Each input form takes a different route through the parser chain and
//! must still come out as working JavaScript.

use hyperfixi_runtime::{AotCompiler, CompileOptions, HandlerIdRegistry, ParserUsed};

fn compile(source: &str, options: &CompileOptions) -> hyperfixi_runtime::CompileResult {
    hyperfixi_runtime::logging::test();
    AotCompiler::new().compile_one(source, options)
}

// =============================================================================
// Parser Chain
// =============================================================================

#[test]
fn every_route_produces_the_same_toggle() {
    let default = CompileOptions::default();
    let cases = [
        ("[toggle patient:.active]", default.clone(), ParserUsed::Explicit),
        (
            r#"{"type":"command","name":"toggle","roles":{"patient":{"type":"selector","value":".active"}}}"#,
            default.clone(),
            ParserUsed::Json,
        ),
        ("toggle .active", default.clone(), ParserUsed::Semantic),
        (
            "toggle .active",
            default.clone().with_confidence_threshold(1.5),
            ParserUsed::Regex,
        ),
    ];
    for (source, options, parser) in cases {
        let result = compile(source, &options);
        assert!(result.success, "{source}: {:?}", result.errors);
        assert_eq!(result.metadata.parser_used, Some(parser), "{source}");
        assert_eq!(result.metadata.handler_id, "_hf_click_toggle_active", "{source}");
        let code = result.code.unwrap();
        assert!(code.contains("classList.toggle('active')"), "{source}: {code}");
    }
}

#[test]
fn native_languages_compile_to_the_same_body() {
    let sources = [
        ("en", "on click toggle .active"),
        ("es", "en clic alternar .active"),
        ("ja", "クリックで.activeを切り替え"),
        ("ko", "클릭 시 .active를 토글"),
        ("ar", "عند النقر بدّل .active"),
    ];
    let handlers: Vec<String> = sources
        .iter()
        .map(|(code, source)| {
            let options = CompileOptions::default().with_language(*code);
            let result = compile(source, &options);
            assert!(result.success, "{code}: {:?}", result.errors);
            assert_eq!(result.metadata.language, *code);
            result.handlers[0].function.clone()
        })
        .collect();
    for function in &handlers[1..] {
        assert_eq!(function, &handlers[0]);
    }
}

#[test]
fn regex_fallback_handles_events() {
    let options = CompileOptions::default().with_confidence_threshold(1.5);
    let result = compile("on mouseover add .hover", &options);
    assert!(result.success, "{:?}", result.errors);
    assert_eq!(result.metadata.parser_used, Some(ParserUsed::Regex));
    assert_eq!(result.handlers[0].event, "mouseover");
}

#[test]
fn nothing_matches() {
    let result = compile("%%% ???", &CompileOptions::default());
    assert!(!result.success);
    assert!(result.code.is_none());
    assert!(result.handlers.is_empty());
    assert!(result.metadata.parser_used.is_none());
}

#[test]
fn empty_source_fails() {
    let result = compile("   ", &CompileOptions::default());
    assert!(!result.success);
    assert!(!result.errors.is_empty());
}

// =============================================================================
// Metadata
// =============================================================================

#[test]
fn metadata_describes_the_output() {
    let result = compile("on click add .a then wait 1s then remove .a", &CompileOptions::default());
    assert!(result.success, "{:?}", result.errors);
    let metadata = &result.metadata;
    assert!(metadata.commands_used.contains(&"wait".to_string()));
    assert!(metadata.runtime_helpers.contains(&"wait".to_string()));
    assert!(metadata.needs_runtime);
    assert!(result.usage.blocks.contains("async"));
}

#[test]
fn usage_sees_loops_before_unrolling() {
    let result = compile("on click repeat 2 times increment :n end", &CompileOptions::default());
    assert!(result.success, "{:?}", result.errors);
    assert!(result.metadata.optimizations_applied.iter().any(|p| p == "loop-unrolling"));
    assert!(result.usage.blocks.contains("repeat"));
}

#[test]
fn shared_registry_keeps_ids_unique() {
    let compiler = AotCompiler::new();
    let options = CompileOptions::default();
    let mut registry = HandlerIdRegistry::new();
    let first = compiler.compile("on click toggle .active", &options, &mut registry);
    let failed = compiler.compile("%%% ???", &options, &mut registry);
    let second = compiler.compile("[toggle patient:.active]", &options, &mut registry);
    assert!(!failed.success);
    assert_eq!(first.metadata.handler_id, "_hf_click_toggle_active");
    assert_eq!(second.metadata.handler_id, "_hf_click_toggle_active_2");
    assert_eq!(registry.len(), 2);
}

#[test]
fn translate_then_compile() {
    let compiler = AotCompiler::new();
    let japanese = compiler.translate("on click toggle .active", "en", "ja").unwrap();
    let options = CompileOptions::default().with_language("ja");
    let result = compiler.compile_one(&japanese, &options);
    assert!(result.success, "{japanese}: {:?}", result.errors);
    assert_eq!(result.metadata.handler_id, "_hf_click_toggle_active");
}
