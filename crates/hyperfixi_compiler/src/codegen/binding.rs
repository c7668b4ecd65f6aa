//! Listener registration.

use std::fmt::Write as _;

use hyperfixi_foundation::Result;
use hyperfixi_semantic::EventModifiers;

use super::context::{CodegenContext, Emitter};
use super::expression::{expr, js_string};
use crate::ast::AstNode;

/// Generated binding function and its cleanup statement.
pub struct Binding {
    /// `function <id>_bind(el) { ... }`
    pub code: String,
    /// Listener removal, absent for one-shot listeners.
    pub cleanup: Option<String>,
}

/// Listener option object for the flags that are set.
fn listener_options(modifiers: &EventModifiers) -> Option<String> {
    let flags: Vec<_> = [
        ("once", modifiers.once),
        ("passive", modifiers.passive),
        ("capture", modifiers.capture),
    ]
    .into_iter()
    .filter_map(|(name, set)| set.then(|| format!("{name}: true")))
    .collect();
    (!flags.is_empty()).then(|| format!("{{ {} }}", flags.join(", ")))
}

/// Emits the bind function for a handler.
///
/// The listener is the handler itself, wrapped by `debounce`/`throttle`
/// when those modifiers are set and by `delegate` when a source selector
/// is given. `load` handlers go through `ready` instead of a listener.
pub fn binding(
    ctx: &mut CodegenContext<'_>,
    event: &str,
    modifiers: &EventModifiers,
    source: Option<&AstNode>,
) -> Result<Binding> {
    let id = ctx.handler_id.clone();
    let mut out = Emitter::new();
    out.open(format!("function {id}_bind(el) {{"));

    if event == "load" {
        let ready = ctx.helper("ready");
        out.line(format!("{ready}(() => {id}.call(el, new Event('load')));"));
        out.close("}");
        return Ok(Binding {
            code: out.finish(ctx.options.minify),
            cleanup: None,
        });
    }

    let mut listener = id.clone();
    if let Some(ms) = modifiers.debounce {
        listener = format!("{}({listener}, {ms})", ctx.helper("debounce"));
    } else if let Some(ms) = modifiers.throttle {
        listener = format!("{}({listener}, {ms})", ctx.helper("throttle"));
    }
    if let Some(source) = source {
        let selector = match source {
            AstNode::Selector { value, .. } => js_string(value),
            other => expr(ctx, other)?,
        };
        listener = format!("{}({selector}, {listener})", ctx.helper("delegate"));
    }
    out.line(format!("const listener = {listener};"));

    let mut args = format!("{}, listener", js_string(event));
    if let Some(options) = listener_options(modifiers) {
        let _ = write!(args, ", {options}");
    }
    out.line(format!("el.addEventListener({args});"));

    let cleanup = (!modifiers.once).then(|| format!("el.removeEventListener({args});"));
    if let Some(cleanup) = &cleanup {
        out.line(format!("return () => {{ {cleanup} }};"));
    }
    out.close("}");

    Ok(Binding {
        code: out.finish(ctx.options.minify),
        cleanup,
    })
}
