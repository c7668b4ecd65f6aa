//! Static analysis.
//!
//! One walk over the AST collects everything the optimizer and code
//! generator ask about: which commands and variables appear, which
//! expressions are pure, how often each selector is queried, the shape of
//! control flow, and the runtime helpers the output will reference.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::ast::{AstNode, TERMINATORS, VarScope};
use crate::visitor::{AstVisitor, any_node, walk_ast};

/// Commands that suspend the handler.
const ASYNC_COMMANDS: &[&str] = &["wait", "fetch", "call"];

/// Commands that may raise at runtime besides the terminators.
const THROWING_COMMANDS: &[&str] = &["fetch", "call"];

// =============================================================================
// Result types
// =============================================================================

/// Variables by scope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableAnalysis {
    /// `:name` locals.
    pub locals: BTreeSet<String>,
    /// `$name` globals.
    pub globals: BTreeSet<String>,
    /// Context names (`me`, `it`, ...).
    pub context_vars: BTreeSet<String>,
}

/// Usage of one selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorInfo {
    /// Selector text.
    pub selector: String,
    /// Number of occurrences.
    pub usages: usize,
    /// `#id` selectors.
    pub is_id: bool,
    /// Static selectors whose query result can be hoisted.
    pub can_cache: bool,
}

impl SelectorInfo {
    /// Returns true if caching this selector saves queries.
    #[must_use]
    pub const fn worth_caching(&self) -> bool {
        self.can_cache && self.usages > 1
    }
}

/// Expression purity and selector usage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionAnalysis {
    /// Role arguments, conditions, counts and collections free of side
    /// effects and DOM reads.
    pub pure: usize,
    /// Those that read the DOM or call functions.
    pub dynamic: usize,
    /// Selectors in first-seen order.
    pub selectors: Vec<SelectorInfo>,
}

/// Control-flow shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlFlow {
    /// Some command suspends.
    pub has_async: bool,
    /// A loop appears.
    pub has_loops: bool,
    /// An `if`/`unless` appears.
    pub has_conditionals: bool,
    /// Execution may end early or raise.
    pub can_throw: bool,
    /// Deepest block nesting (the event root counts as one).
    pub max_nesting_depth: usize,
}

/// What the output depends on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependencies {
    /// Selectors queried.
    pub dom_queries: BTreeSet<String>,
    /// Events listened for.
    pub event_types: BTreeSet<String>,
    /// Behaviors installed.
    pub behaviors: BTreeSet<String>,
    /// Runtime helper names.
    pub runtime_helpers: BTreeSet<String>,
}

/// Everything the analyzer learned about one AST.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Command names.
    pub commands_used: BTreeSet<String>,
    /// Variables by scope.
    pub variables: VariableAnalysis,
    /// Purity and selectors.
    pub expressions: ExpressionAnalysis,
    /// Control-flow shape.
    pub control_flow: ControlFlow,
    /// Output dependencies.
    pub dependencies: Dependencies,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
}

impl AnalysisResult {
    /// Looks up a selector's usage.
    #[must_use]
    pub fn selector(&self, selector: &str) -> Option<&SelectorInfo> {
        self.expressions
            .selectors
            .iter()
            .find(|s| s.selector == selector)
    }
}

// =============================================================================
// Analyzer
// =============================================================================

/// Computes an [`AnalysisResult`].
#[derive(Debug, Default)]
pub struct Analyzer {
    result: AnalysisResult,
    selector_index: BTreeMap<String, usize>,
}

impl Analyzer {
    /// Analyzes an AST.
    #[must_use]
    pub fn analyze(ast: &AstNode) -> AnalysisResult {
        let mut analyzer = Self::default();
        walk_ast(&mut analyzer, ast);
        analyzer.finish()
    }

    fn finish(mut self) -> AnalysisResult {
        let helpers = &mut self.result.dependencies.runtime_helpers;
        if self.result.control_flow.can_throw {
            helpers.insert("isSignal".to_string());
        }
        if !self.result.variables.globals.is_empty() {
            helpers.insert("globals".to_string());
        }
        tracing::trace!(
            commands = self.result.commands_used.len(),
            selectors = self.result.expressions.selectors.len(),
            "analysis complete"
        );
        self.result
    }

    fn helper(&mut self, name: &str) {
        self.result
            .dependencies
            .runtime_helpers
            .insert(name.to_string());
    }

    fn record_selector(&mut self, selector: &str) {
        self.result
            .dependencies
            .dom_queries
            .insert(selector.to_string());
        if let Some(&i) = self.selector_index.get(selector) {
            self.result.expressions.selectors[i].usages += 1;
            return;
        }
        self.selector_index
            .insert(selector.to_string(), self.result.expressions.selectors.len());
        self.result.expressions.selectors.push(SelectorInfo {
            selector: selector.to_string(),
            usages: 1,
            is_id: is_id_selector(selector),
            can_cache: is_static_selector(selector),
        });
    }

    fn command(&mut self, name: &str, roles: &BTreeMap<String, AstNode>) {
        self.result.commands_used.insert(name.to_string());
        let flow = &mut self.result.control_flow;
        if ASYNC_COMMANDS.contains(&name) {
            flow.has_async = true;
        }
        if TERMINATORS.contains(&name) || THROWING_COMMANDS.contains(&name) {
            flow.can_throw = true;
        }
        match name {
            "wait" => self.helper("wait"),
            "fetch" => self.helper("fetchAs"),
            "halt" => self.helper("HALT"),
            "exit" => self.helper("EXIT"),
            "return" => self.helper("RETURN"),
            "install" => {
                if let Some(AstNode::Identifier { name }) = roles.get("patient") {
                    self.result.dependencies.behaviors.insert(name.clone());
                }
            }
            _ => {}
        }
        for value in roles.values() {
            self.tally(value);
        }
    }

    fn tally(&mut self, expression: &AstNode) {
        if is_pure(expression) {
            self.result.expressions.pure += 1;
        } else {
            self.result.expressions.dynamic += 1;
        }
    }
}

impl AstVisitor for Analyzer {
    fn enter_node(&mut self, node: &AstNode, depth: usize) {
        match node {
            AstNode::Event {
                event,
                modifiers,
                source,
                body,
            } => {
                self.result.dependencies.event_types.insert(event.clone());
                self.helper("createContext");
                if modifiers.debounce.is_some() {
                    self.helper("debounce");
                }
                if modifiers.throttle.is_some() {
                    self.helper("throttle");
                }
                if source.is_some() {
                    self.helper("delegate");
                }
                if event == "load" {
                    self.helper("ready");
                }
                if body.is_empty() {
                    self.result
                        .warnings
                        .push(format!("handler for '{event}' has an empty body"));
                }
            }
            AstNode::Command { name, roles } => self.command(name, roles),
            AstNode::If { condition, .. } => {
                self.result.control_flow.has_conditionals = true;
                self.tally(condition);
            }
            AstNode::While { condition, .. } => {
                self.result.control_flow.has_loops = true;
                self.tally(condition);
            }
            AstNode::Foreach { collection, .. } => {
                self.result.control_flow.has_loops = true;
                self.tally(collection);
            }
            AstNode::Repeat { count, .. } => {
                self.result.control_flow.has_loops = true;
                if let Some(count) = count {
                    self.tally(count);
                }
                if count.is_none() {
                    self.result.control_flow.can_throw = true;
                    self.helper("BREAK");
                }
            }
            AstNode::Selector { value, .. } => self.record_selector(value),
            AstNode::Variable { name, scope } => {
                let vars = &mut self.result.variables;
                let set = match scope {
                    VarScope::Local => &mut vars.locals,
                    VarScope::Global => &mut vars.globals,
                    VarScope::Context => &mut vars.context_vars,
                };
                set.insert(name.clone());
            }
            AstNode::Positional { .. } => {
                self.result.variables.context_vars.insert("me".to_string());
            }
            _ => {}
        }
        let block_depth = depth + usize::from(matches!(
            node,
            AstNode::Event { .. }
                | AstNode::If { .. }
                | AstNode::While { .. }
                | AstNode::Foreach { .. }
                | AstNode::Repeat { .. }
        ));
        let flow = &mut self.result.control_flow;
        flow.max_nesting_depth = flow.max_nesting_depth.max(block_depth);
    }
}

/// No side effects and no DOM reads: safe to evaluate at compile time once
/// operands are literal.
#[must_use]
pub fn is_pure(node: &AstNode) -> bool {
    !any_node(node, &|n| {
        matches!(
            n,
            AstNode::Call { .. }
                | AstNode::Selector { .. }
                | AstNode::Positional { .. }
                | AstNode::Member { .. }
                | AstNode::Index { .. }
        ) || n.is_statement()
    })
}

fn is_id_selector(selector: &str) -> bool {
    selector.starts_with('#') && selector[1..].chars().all(|c| c.is_alphanumeric() || matches!(c, '-' | '_'))
}

/// Selectors without interpolation or relative parts.
fn is_static_selector(selector: &str) -> bool {
    !selector.contains(['$', '{', '}', '&']) && !selector.starts_with('@')
}
