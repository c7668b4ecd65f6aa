//! Integration tests for JavaScript generation

use hyperfixi_compiler::{CodegenOptions, CodegenTarget, GeneratedCode};

use crate::{compile, compile_with};

// =============================================================================
// Handlers
// =============================================================================

#[test]
fn toggle_handler() {
    let out = compile("on click toggle .active");
    assert_eq!(out.handlers.len(), 1);
    let handler = &out.handlers[0];
    assert_eq!(handler.id, "_hf_test");
    assert_eq!(handler.event, "click");
    assert!(handler.function.contains("ctx.me.classList.toggle('active');"));
    assert!(handler.binding.contains("addEventListener('click'"));
    assert!(handler.cleanup.is_some());
    assert!(out.needs_runtime());
}

#[test]
fn bare_commands_bind_to_click() {
    let out = compile("toggle .active");
    assert_eq!(out.handlers[0].event, "click");
}

#[test]
fn debounce_without_interval_uses_default() {
    let out = compile("on input.debounce log me");
    assert!(out.handlers[0].binding.contains("_rt.debounce(_hf_test, 300)"));
    assert!(out.helpers.contains("debounce"));
}

#[test]
fn once_listeners_have_no_cleanup() {
    let out = compile("on click.once toggle .a");
    assert!(out.handlers[0].cleanup.is_none());
}

#[test]
fn waiting_makes_the_handler_async() {
    let out = compile("on click add .a then wait 1s then remove .a");
    assert!(out.handlers[0].function.starts_with("async function _hf_test(event)"));
    assert!(out.code.contains("await _rt.wait(1000);"));
}

#[test]
fn folded_values_reach_the_output() {
    let out = compile("on click log 1 + 2");
    assert!(out.code.contains("console.log(3);"), "{}", out.code);
}

#[test]
fn cached_selectors_are_hoisted() {
    let out = compile("on click add .a to #box then remove .b from #box");
    assert!(out.code.contains("_sel_box"), "{}", out.code);
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn es2017_avoids_nullish_coalescing() {
    let options = CodegenOptions::default().with_target(CodegenTarget::Es2017);
    let (out, _) = compile_with("on click increment :n", 0, options);
    assert!(!out.code.contains("??"), "{}", out.code);
    let (out, _) = compile_with("on click increment :n", 0, CodegenOptions::default());
    assert!(out.code.contains("??"), "{}", out.code);
}

#[test]
fn minified_output_is_shorter() {
    let source = "on click toggle .a then wait 1s then toggle .a";
    let (pretty, _) = compile_with(source, 2, CodegenOptions::default());
    let (minified, _) = compile_with(source, 2, CodegenOptions::default().with_minify(true));
    assert!(minified.code.len() < pretty.code.len());
}

#[test]
fn generated_code_serializes_camel_case() {
    let out: GeneratedCode = compile("on click toggle .active");
    let json = serde_json::to_value(&out).unwrap();
    assert!(json["handlers"][0]["binding"].is_string());
    assert!(json["helpers"].is_array());
}
