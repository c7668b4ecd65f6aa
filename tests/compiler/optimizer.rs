//! Integration tests for the optimizer passes

use hyperfixi_compiler::{AstNode, Analyzer, Optimizer};

use crate::build;

fn optimize(source: &str, level: u8) -> (AstNode, Vec<String>) {
    let ast = build(source);
    let analysis = Analyzer::analyze(&ast);
    let out = Optimizer::new(level).optimize(ast, &analysis);
    (out.root, out.applied_passes)
}

// =============================================================================
// Dead Code Elimination
// =============================================================================

#[test]
fn statements_after_halt_are_dropped() {
    let (root, passes) = optimize("on click toggle .a then halt then log 'never'", 2);
    let names: Vec<_> = root.body().iter().filter_map(AstNode::command_name).collect();
    assert_eq!(names, vec!["toggle", "halt"]);
    assert!(passes.iter().any(|p| p == "dead-code-elimination"));
}

#[test]
fn level_one_keeps_dead_code() {
    let (root, passes) = optimize("on click toggle .a then halt then log 'never'", 1);
    assert_eq!(root.body().len(), 3);
    assert!(!passes.iter().any(|p| p == "dead-code-elimination"));
}

// =============================================================================
// Constant Folding
// =============================================================================

#[test]
fn literal_arithmetic_is_folded() {
    let (root, passes) = optimize("on click log 1 + 2", 1);
    assert!(passes.iter().any(|p| p == "constant-folding"));
    let Some(value) = root.body()[0].role("patient") else {
        panic!("log lost its argument");
    };
    assert_eq!(value.as_literal(), Some(&hyperfixi_foundation::Value::Number(3.0)));
}

#[test]
fn conditions_and_counts_are_folded() {
    let (root, passes) = optimize("on click if 1 < 2 halt end", 1);
    assert!(passes.iter().any(|p| p == "constant-folding"));
    let AstNode::If { condition, .. } = &root.body()[0] else {
        panic!("expected if, got {:?}", root.body()[0]);
    };
    assert_eq!(condition.as_literal(), Some(&hyperfixi_foundation::Value::Bool(true)));

    let (root, passes) = optimize("on click repeat 1 + 2 times show end", 2);
    assert!(passes.iter().any(|p| p == "loop-unrolling"));
    let AstNode::Sequence { body, unrolled } = &root.body()[0] else {
        panic!("expected unrolled sequence, got {:?}", root.body()[0]);
    };
    assert!(unrolled);
    assert_eq!(body.len(), 3);
}

#[test]
fn variables_block_folding() {
    let (root, _) = optimize("on click log :x + 2", 2);
    assert!(matches!(root.body()[0].role("patient"), Some(AstNode::Binary { .. })));
}

// =============================================================================
// Selector Caching
// =============================================================================

#[test]
fn repeated_selectors_get_cache_keys() {
    let (root, passes) = optimize("on click add .a to #box then remove .b from #box", 1);
    assert!(passes.iter().any(|p| p == "selector-caching"));
    let destination = root.body()[0].role("destination");
    let Some(AstNode::Selector { cached, cache_key, .. }) = destination else {
        panic!("expected selector, got {destination:?}");
    };
    assert!(cached);
    assert!(cache_key.as_deref().is_some_and(|k| k.starts_with("_sel_box")));
}

// =============================================================================
// Loop Unrolling
// =============================================================================

#[test]
fn small_repeat_is_unrolled() {
    let (root, passes) = optimize("on click repeat 3 times increment :n end", 2);
    assert!(passes.iter().any(|p| p == "loop-unrolling"));
    let AstNode::Sequence { body, unrolled } = &root.body()[0] else {
        panic!("expected unrolled sequence");
    };
    assert!(unrolled);
    assert_eq!(body.len(), 3);
}

#[test]
fn level_zero_changes_nothing() {
    let source = "on click repeat 3 times increment :n end";
    let (root, passes) = optimize(source, 0);
    assert!(passes.is_empty());
    assert_eq!(root, build(source));
}
