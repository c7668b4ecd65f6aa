//! Selector caching.

use std::collections::HashMap;

use super::OptimizationPass;
use crate::analyzer::AnalysisResult;
use crate::ast::AstNode;
use crate::visitor::{AstTransform, transform_children};

/// Every cache key starts with this.
pub const CACHE_KEY_PREFIX: &str = "_sel_";

/// Upper bound on cache key length.
pub const MAX_CACHE_KEY_LEN: usize = 32;

/// Marks multi-use static selectors for hoisting into the handler prologue.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectorCaching;

impl OptimizationPass for SelectorCaching {
    fn name(&self) -> &str {
        "selector-caching"
    }

    fn should_run(&self, analysis: &AnalysisResult) -> bool {
        analysis.expressions.selectors.iter().any(|s| s.worth_caching())
    }

    fn transform(&self, ast: AstNode, analysis: &AnalysisResult) -> AstNode {
        let keys = analysis
            .expressions
            .selectors
            .iter()
            .filter(|s| s.worth_caching())
            .enumerate()
            .map(|(i, s)| (s.selector.clone(), cache_key(&s.selector, i)))
            .collect();
        Marker { keys }.transform_node(ast)
    }
}

struct Marker {
    keys: HashMap<String, String>,
}

impl AstTransform for Marker {
    fn transform_node(&mut self, node: AstNode) -> AstNode {
        match transform_children(self, node) {
            AstNode::Selector { value, .. } if self.keys.contains_key(&value) => {
                let cache_key = self.keys.get(&value).cloned();
                AstNode::Selector {
                    value,
                    cached: true,
                    cache_key,
                }
            }
            other => other,
        }
    }
}

/// Derives the cache variable name for a selector.
///
/// Runs of characters outside `[A-Za-z0-9]` collapse to one underscore and
/// the result is truncated so the key, with its `_<index>` suffix, stays
/// within [`MAX_CACHE_KEY_LEN`].
#[must_use]
pub fn cache_key(selector: &str, index: usize) -> String {
    let mut stem = String::new();
    for c in selector.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c);
        } else if !stem.ends_with('_') && !stem.is_empty() {
            stem.push('_');
        }
    }
    let stem = stem.trim_end_matches('_');
    let suffix = format!("_{index}");
    let room = MAX_CACHE_KEY_LEN.saturating_sub(CACHE_KEY_PREFIX.len() + suffix.len());
    let stem = &stem[..stem.len().min(room)];
    format!("{CACHE_KEY_PREFIX}{stem}{suffix}")
}
