//! JavaScript code generation.
//!
//! An `event` root produces a handler function plus a bind function that
//! registers it. A sequence of event roots produces one pair per handler.
//! Any other root is emitted as bare statements.
//!
//! Generated code calls helpers on a runtime object named `_rt`; the
//! generator only records which helper names it referenced.

mod binding;
mod command;
mod context;
mod expression;
mod handler;

use std::collections::BTreeSet;

use hyperfixi_foundation::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::analyzer::{AnalysisResult, Analyzer};
use crate::ast::AstNode;

pub use context::{CodegenContext, Emitter};
pub use expression::{js_string, js_value};

/// Default module the runtime helpers are imported from.
pub const DEFAULT_RUNTIME_IMPORT: &str = "@hyperfixi/runtime";

/// Prefix of every handler id.
pub const HANDLER_PREFIX: &str = "_hf";

/// JavaScript language level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodegenTarget {
    /// No `??` or `?.`.
    Es2017,
    /// Modern syntax.
    #[default]
    Es2020,
}

/// Module format of combined output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// `import` / `export`.
    #[default]
    Esm,
    /// `require` / `module.exports`.
    Cjs,
    /// A self-invoking function.
    Iife,
}

impl OutputMode {
    /// Parses `esm`, `cjs`, or `iife`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "esm" => Some(Self::Esm),
            "cjs" => Some(Self::Cjs),
            "iife" => Some(Self::Iife),
            _ => None,
        }
    }
}

/// Output options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodegenOptions {
    /// Language level.
    pub target: CodegenTarget,
    /// Module format.
    pub mode: OutputMode,
    /// Drop indentation, newlines, and comments.
    pub minify: bool,
    /// Append a `sourceURL` comment naming the handler.
    pub source_maps: bool,
    /// Module the runtime helpers come from.
    pub runtime_import: String,
    /// Keep comments when minifying.
    pub preserve_comments: bool,
    /// Log every handler invocation.
    pub debug_mode: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            target: CodegenTarget::default(),
            mode: OutputMode::default(),
            minify: false,
            source_maps: false,
            runtime_import: DEFAULT_RUNTIME_IMPORT.to_string(),
            preserve_comments: false,
            debug_mode: false,
        }
    }
}

impl CodegenOptions {
    /// Sets the language level.
    #[must_use]
    pub const fn with_target(mut self, target: CodegenTarget) -> Self {
        self.target = target;
        self
    }

    /// Sets the module format.
    #[must_use]
    pub const fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables minification.
    #[must_use]
    pub const fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Sets the runtime module.
    #[must_use]
    pub fn with_runtime_import(mut self, module: impl Into<String>) -> Self {
        self.runtime_import = module.into();
        self
    }

    /// Enables invocation logging.
    #[must_use]
    pub const fn with_debug_mode(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }
}

/// One generated handler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedHandler {
    /// Function name.
    pub id: String,
    /// DOM event.
    pub event: String,
    /// Handler function source.
    pub function: String,
    /// Bind function source.
    pub binding: String,
    /// Listener removal, absent for one-shot listeners.
    pub cleanup: Option<String>,
}

/// Output of one compilation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCode {
    /// Handlers, in source order.
    pub handlers: Vec<GeneratedHandler>,
    /// All generated source.
    pub code: String,
    /// Runtime helpers the code needs.
    pub helpers: BTreeSet<String>,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
}

impl GeneratedCode {
    /// Returns true if the code references the runtime.
    #[must_use]
    pub fn needs_runtime(&self) -> bool {
        !self.helpers.is_empty() || self.code.contains("_rt.")
    }
}

/// Generates JavaScript from an optimized AST.
#[derive(Clone, Debug, Default)]
pub struct CodeGenerator {
    options: CodegenOptions,
}

impl CodeGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new(options: CodegenOptions) -> Self {
        Self { options }
    }

    /// The output options.
    #[must_use]
    pub const fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// Generates code for `ast`. `analysis` must describe `ast` as given,
    /// after optimization.
    ///
    /// # Errors
    ///
    /// Returns a `Codegen` error for statements in value position or
    /// commands missing a role they need.
    pub fn generate(
        &self,
        ast: &AstNode,
        analysis: &AnalysisResult,
        handler_id: &str,
    ) -> Result<GeneratedCode> {
        let mut generated = GeneratedCode {
            helpers: analysis.dependencies.runtime_helpers.clone(),
            ..GeneratedCode::default()
        };
        let separator = if self.options.minify { "" } else { "\n\n" };
        let mut parts = Vec::new();

        match ast {
            AstNode::Event { .. } => {
                let h = self.event_handler(ast, analysis, handler_id, &mut generated)?;
                parts.push(format!("{}{separator}{}", h.function, h.binding));
                generated.handlers.push(h);
            }
            AstNode::Sequence { body, .. }
                if !body.is_empty() && body.iter().all(|n| matches!(n, AstNode::Event { .. })) =>
            {
                for (i, node) in body.iter().enumerate() {
                    let id = if i == 0 {
                        handler_id.to_string()
                    } else {
                        format!("{handler_id}_h{}", i + 1)
                    };
                    // Async and try/catch wrapping follow each handler's own body.
                    let own = Analyzer::analyze(node);
                    let h = self.event_handler(node, &own, &id, &mut generated)?;
                    parts.push(format!("{}{separator}{}", h.function, h.binding));
                    generated.handlers.push(h);
                }
            }
            other => {
                let mut ctx = CodegenContext::new(&self.options, handler_id);
                let mut out = Emitter::new();
                command::statement(&mut ctx, &mut out, other)?;
                generated.helpers.extend(ctx.helpers().iter().cloned());
                parts.push(out.finish(self.options.minify));
            }
        }

        generated.code = parts.join(separator);
        if self.options.source_maps {
            generated.code.push_str(&format!("\n//# sourceURL=hyperfixi/{handler_id}.js"));
        }
        tracing::debug!(
            handler = handler_id,
            handlers = generated.handlers.len(),
            helpers = generated.helpers.len(),
            "code generated"
        );
        Ok(generated)
    }

    fn event_handler(
        &self,
        node: &AstNode,
        analysis: &AnalysisResult,
        id: &str,
        generated: &mut GeneratedCode,
    ) -> Result<GeneratedHandler> {
        let AstNode::Event {
            event,
            modifiers,
            source,
            body,
        } = node
        else {
            return Err(Error::internal("event handler expected"));
        };
        let mut ctx = CodegenContext::new(&self.options, id);
        let function = handler::handler(&mut ctx, modifiers, body, analysis)?;
        let binding = binding::binding(&mut ctx, event, modifiers, source.as_deref())?;
        generated.helpers.extend(ctx.helpers().iter().cloned());
        if let Some(warning) = function.silent_failure {
            generated.warnings.push(warning);
        }
        Ok(GeneratedHandler {
            id: id.to_string(),
            event: event.clone(),
            function: function.code,
            binding: binding.code,
            cleanup: binding.cleanup,
        })
    }
}

// =============================================================================
// Handler ids
// =============================================================================

/// Reduces text to `[A-Za-z0-9_]`, collapsing runs of anything else.
#[must_use]
pub fn sanitize_identifier(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_end_matches('_').to_string()
}

const MAX_ID_PART: usize = 24;

fn id_part(text: &str) -> Option<String> {
    let mut part = sanitize_identifier(text);
    part.truncate(MAX_ID_PART);
    let part = part.trim_end_matches('_');
    (!part.is_empty()).then(|| part.to_string())
}

fn patient_text(node: &AstNode) -> Option<String> {
    match node.role("patient")? {
        AstNode::Selector { value, .. } => Some(value.clone()),
        AstNode::Literal { value, .. } => Some(value.concat_text()),
        AstNode::Identifier { name } | AstNode::Variable { name, .. } => Some(name.clone()),
        _ => None,
    }
}

/// The id a root would get before collision suffixing:
/// `_hf_<event>_<command>[_<patient>]`.
#[must_use]
pub fn handler_id_base(ast: &AstNode) -> String {
    let root = match ast {
        AstNode::Sequence { body, .. } => body.first().unwrap_or(ast),
        other => other,
    };
    let (event, first) = match root {
        AstNode::Event { event, body, .. } => (Some(event.as_str()), body.first()),
        other => (None, Some(other)),
    };
    let mut parts = vec![HANDLER_PREFIX.to_string()];
    parts.extend(event.and_then(id_part));
    if let Some(first) = first {
        let name = first.command_name().unwrap_or_else(|| first.type_name());
        parts.extend(id_part(name));
        parts.extend(patient_text(first).as_deref().and_then(id_part));
    }
    parts.join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperfixi_semantic::EventModifiers;

    fn generate(ast: &AstNode) -> GeneratedCode {
        let analysis = Analyzer::analyze(ast);
        CodeGenerator::default()
            .generate(ast, &analysis, &handler_id_base(ast))
            .unwrap()
    }

    #[test]
    fn handler_ids() {
        let ast = AstNode::event(
            "click",
            vec![AstNode::command("toggle").with_role("patient", AstNode::selector(".active"))],
        );
        assert_eq!(handler_id_base(&ast), "_hf_click_toggle_active");
        assert_eq!(handler_id_base(&AstNode::event("keydown", Vec::new())), "_hf_keydown");
        assert_eq!(sanitize_identifier("#nav > li"), "nav_li");
        let put = AstNode::event(
            "click",
            vec![AstNode::command("put").with_role("patient", AstNode::string("héllo wörld"))],
        );
        assert_eq!(handler_id_base(&put), "_hf_click_put_h_llo_w_rld");
    }

    #[test]
    fn event_root_gets_handler_and_binding() {
        let ast = AstNode::Event {
            event: "input".into(),
            modifiers: EventModifiers {
                debounce: Some(300),
                ..EventModifiers::default()
            },
            source: None,
            body: vec![AstNode::command("log").with_role("patient", AstNode::variable("me"))],
        };
        let out = generate(&ast);
        assert_eq!(out.handlers.len(), 1);
        assert!(out.code.contains("function _hf_input_log_me(event)"));
        assert!(out.code.contains("_rt.debounce(_hf_input_log_me, 300)"));
        assert!(out.helpers.contains("debounce"));
        assert!(out.helpers.contains("createContext"));
        assert!(out.needs_runtime());
    }

    #[test]
    fn sequence_of_handlers() {
        let ast = AstNode::Sequence {
            body: vec![
                AstNode::event("click", vec![AstNode::command("hide")]),
                AstNode::event("dblclick", vec![AstNode::command("show")]),
            ],
            unrolled: false,
        };
        let out = generate(&ast);
        let ids: Vec<_> = out.handlers.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["_hf_click_hide", "_hf_click_hide_h2"]);
    }

    #[test]
    fn handlers_in_a_sequence_are_analyzed_separately() {
        let ast = AstNode::Sequence {
            body: vec![
                AstNode::event(
                    "click",
                    vec![AstNode::command("wait").with_role("duration", AstNode::number(100.0))],
                ),
                AstNode::event("dblclick", vec![AstNode::command("show")]),
            ],
            unrolled: false,
        };
        let out = generate(&ast);
        assert!(out.handlers[0].function.starts_with("async function"));
        assert!(out.handlers[1].function.starts_with("function"));
        assert!(!out.handlers[1].function.contains("catch"));
    }

    #[test]
    fn bare_statements_are_not_wrapped() {
        let ast = AstNode::command("log").with_role("patient", AstNode::string("hi"));
        let out = generate(&ast);
        assert!(out.handlers.is_empty());
        assert_eq!(out.code, "console.log('hi');");
    }

    #[test]
    fn silent_failure_warns_without_failing() {
        let ast = AstNode::event("click", vec![AstNode::command("install")]);
        let out = generate(&ast);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn options_deserialize_camel_case() {
        let options: CodegenOptions =
            serde_json::from_str(r#"{"target":"es2017","mode":"iife","runtimeImport":"rt"}"#).unwrap();
        assert_eq!(options.target, CodegenTarget::Es2017);
        assert_eq!(options.mode, OutputMode::Iife);
        assert_eq!(options.runtime_import, "rt");
        assert!(!options.minify);
    }
}
