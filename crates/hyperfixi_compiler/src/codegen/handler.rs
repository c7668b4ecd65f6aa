//! Handler function assembly.

use hyperfixi_foundation::Result;
use hyperfixi_semantic::EventModifiers;

use super::command;
use super::context::{CodegenContext, Emitter};
use super::expression::js_string;
use crate::analyzer::AnalysisResult;
use crate::ast::AstNode;

/// A generated handler function.
pub struct HandlerFunction {
    /// Function source.
    pub code: String,
    /// Set when a non-empty body produced no statements.
    pub silent_failure: Option<String>,
}

/// Emits `function <id>(event) { ... }` for one event root.
///
/// The body is generated first so the prologue can declare the selector
/// queries the body hoisted.
pub fn handler(
    ctx: &mut CodegenContext<'_>,
    modifiers: &EventModifiers,
    body: &[AstNode],
    analysis: &AnalysisResult,
) -> Result<HandlerFunction> {
    let mut inner = Emitter::new();
    command::body(ctx, &mut inner, body)?;

    let silent_failure = (!body.is_empty() && ctx.emitted() == 0).then(|| {
        tracing::warn!(handler = %ctx.handler_id, "handler body generated no statements");
        format!(
            "handler '{}' has {} source statement(s) but generated none",
            ctx.handler_id,
            body.len()
        )
    });

    let flow = analysis.control_flow;
    let mut out = Emitter::new();
    let prefix = if flow.has_async { "async " } else { "" };
    out.open(format!("{prefix}function {}(event) {{", ctx.handler_id));
    let create = ctx.helper("createContext");
    out.line(format!("const ctx = {create}(event, this);"));
    if ctx.options.debug_mode {
        out.line(format!(
            "console.debug('[hyperfixi]', {}, event);",
            js_string(&ctx.handler_id)
        ));
    }
    for (key, selector) in ctx.cached_selectors() {
        out.line(format!(
            "const {key} = document.querySelectorAll({});",
            js_string(selector)
        ));
    }
    if modifiers.prevent {
        out.line("event.preventDefault();");
    }
    if modifiers.stop {
        out.line("event.stopPropagation();");
    }
    if flow.can_throw {
        let is_signal = ctx.helper("isSignal");
        out.open("try {");
        out.append(inner);
        out.reopen("} catch (e) {");
        out.line(format!("if (!{is_signal}(e)) throw e;"));
        out.close("}");
    } else {
        out.append(inner);
    }
    out.close("}");

    Ok(HandlerFunction {
        code: out.finish(ctx.options.minify),
        silent_failure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use crate::codegen::CodegenOptions;

    fn generate(body: Vec<AstNode>, modifiers: EventModifiers) -> HandlerFunction {
        let ast = AstNode::Event {
            event: "click".into(),
            modifiers: modifiers.clone(),
            source: None,
            body: body.clone(),
        };
        let analysis = Analyzer::analyze(&ast);
        let options = CodegenOptions::default();
        let mut ctx = CodegenContext::new(&options, "_hf_click");
        handler(&mut ctx, &modifiers, &body, &analysis).unwrap()
    }

    #[test]
    fn plain_handler() {
        let body = vec![AstNode::command("toggle").with_role("patient", AstNode::selector(".a"))];
        let out = generate(body, EventModifiers::default());
        assert_eq!(
            out.code,
            "function _hf_click(event) {\n  const ctx = _rt.createContext(event, this);\n  ctx.me.classList.toggle('a');\n}"
        );
        assert!(out.silent_failure.is_none());
    }

    #[test]
    fn async_try_and_modifiers() {
        let body = vec![
            AstNode::command("wait").with_role("duration", AstNode::number(10.0)),
            AstNode::command("exit"),
        ];
        let modifiers = EventModifiers {
            prevent: true,
            ..EventModifiers::default()
        };
        let code = generate(body, modifiers).code;
        assert!(code.starts_with("async function _hf_click(event) {"));
        assert!(code.contains("event.preventDefault();"));
        assert!(code.contains("if (!_rt.isSignal(e)) throw e;"));
    }

    #[test]
    fn empty_output_is_flagged() {
        let out = generate(vec![AstNode::command("install")], EventModifiers::default());
        assert!(out.silent_failure.is_some());
        let out = generate(Vec::new(), EventModifiers::default());
        assert!(out.silent_failure.is_none());
    }
}
