//! Statement emission: commands and control blocks.

use hyperfixi_foundation::{Error, Result};

use super::context::{CodegenContext, Emitter};
use super::expression::{elements, expr, js_string, variable};
use crate::ast::{AstNode, VarScope};
use crate::optimizer::LOOP_INDEX;

/// Emits a statement list.
///
/// # Errors
///
/// Returns a `Codegen` error for a malformed statement.
pub fn body(ctx: &mut CodegenContext<'_>, out: &mut Emitter, nodes: &[AstNode]) -> Result<()> {
    for node in nodes {
        statement(ctx, out, node)?;
    }
    Ok(())
}

/// Emits one statement.
///
/// # Errors
///
/// Returns a `Codegen` error for a malformed statement.
pub fn statement(ctx: &mut CodegenContext<'_>, out: &mut Emitter, node: &AstNode) -> Result<()> {
    match node {
        AstNode::Command { name, .. } => command(ctx, out, name, node),
        AstNode::If {
            condition,
            then_branch,
            else_branch,
            negated,
        } => {
            let cond = expr(ctx, condition)?;
            let cond = if *negated { negate(&cond) } else { cond };
            out.open(format!("if ({cond}) {{"));
            body(ctx, out, then_branch)?;
            if !else_branch.is_empty() {
                out.reopen("} else {");
                body(ctx, out, else_branch)?;
            }
            out.close("}");
            ctx.count_statement();
            Ok(())
        }
        AstNode::While { condition, body: inner } => {
            let cond = expr(ctx, condition)?;
            out.open(format!("while ({cond}) {{"));
            body(ctx, out, inner)?;
            out.close("}");
            ctx.count_statement();
            Ok(())
        }
        AstNode::Foreach {
            variable: name,
            collection,
            body: inner,
        } => {
            let coll = expr(ctx, collection)?;
            let target = variable(name, VarScope::Local);
            out.open(format!("for ({target} of Array.from({coll})) {{"));
            body(ctx, out, inner)?;
            out.close("}");
            ctx.count_statement();
            Ok(())
        }
        AstNode::Repeat { count: Some(count), body: inner } => {
            let n = expr(ctx, count)?;
            let i = ctx.fresh("_i");
            out.open(format!("for (let {i} = 0; {i} < {n}; {i}++) {{"));
            out.line(format!("{} = {i};", variable(LOOP_INDEX, VarScope::Local)));
            body(ctx, out, inner)?;
            out.close("}");
            ctx.count_statement();
            Ok(())
        }
        AstNode::Repeat { count: None, body: inner } => {
            let brk = ctx.helper("BREAK");
            out.open("try {");
            out.open("while (true) {");
            body(ctx, out, inner)?;
            out.close("}");
            out.reopen("} catch (e) {");
            out.line(format!("if (e !== {brk}) throw e;"));
            out.close("}");
            ctx.count_statement();
            Ok(())
        }
        AstNode::Sequence { body: inner, .. } => body(ctx, out, inner),
        AstNode::Event { .. } => Err(Error::codegen("nested event handlers are not supported")),
        value => {
            let value = expr(ctx, value)?;
            emit(ctx, out, format!("{value};"));
            Ok(())
        }
    }
}

fn negate(cond: &str) -> String {
    if cond.starts_with('(') && cond.ends_with(')') {
        format!("!{cond}")
    } else {
        format!("!({cond})")
    }
}

fn emit(ctx: &mut CodegenContext<'_>, out: &mut Emitter, line: String) {
    out.line(line);
    ctx.count_statement();
}

/// `for (const el of <targets>) <action>;`, or a direct call on `ctx.me`.
fn each(ctx: &mut CodegenContext<'_>, out: &mut Emitter, target: Option<&AstNode>, action: &str) -> Result<()> {
    let is_me = match target {
        None => true,
        Some(AstNode::Variable { name, scope: VarScope::Context }) => name == "me",
        Some(_) => false,
    };
    if is_me {
        emit(ctx, out, format!("ctx.me.{action};"));
    } else {
        let targets = elements(ctx, target)?;
        emit(ctx, out, format!("for (const el of {targets}) el.{action};"));
    }
    Ok(())
}

/// What a class-or-attribute argument names.
enum Toggleable {
    Classes(Vec<String>),
    Attribute(String),
}

fn toggleable(node: &AstNode) -> Option<Toggleable> {
    let AstNode::Selector { value, .. } = node else {
        return None;
    };
    if let Some(attr) = value.strip_prefix('@') {
        return Some(Toggleable::Attribute(attr.to_string()));
    }
    if !value.starts_with('.') || value.contains([' ', '#', '[', '>', ':']) {
        return None;
    }
    let classes = value
        .split('.')
        .filter(|c| !c.is_empty())
        .map(ToString::to_string)
        .collect();
    Some(Toggleable::Classes(classes))
}

fn class_list(classes: &[String]) -> String {
    classes.iter().map(|c| js_string(c)).collect::<Vec<_>>().join(", ")
}

/// Left-hand side of an assignment.
fn place(ctx: &mut CodegenContext<'_>, node: &AstNode) -> Result<String> {
    match node {
        AstNode::Variable { name, scope } => {
            if *scope == VarScope::Global {
                ctx.helper("globals");
            }
            Ok(variable(name, *scope))
        }
        AstNode::Identifier { name } => Ok(variable(name, VarScope::Local)),
        AstNode::Member { .. } | AstNode::Index { .. } => expr(ctx, node),
        AstNode::Selector { .. } => Ok(format!("{}.textContent", expr(ctx, node)?)),
        other => Err(Error::codegen(format!(
            "cannot assign to '{}'",
            other.type_name()
        ))),
    }
}

fn is_element(node: &AstNode) -> bool {
    matches!(
        node,
        AstNode::Selector { .. }
            | AstNode::Positional { .. }
            | AstNode::Variable {
                scope: VarScope::Context,
                ..
            }
    )
}

#[allow(clippy::too_many_lines)]
fn command(ctx: &mut CodegenContext<'_>, out: &mut Emitter, name: &str, node: &AstNode) -> Result<()> {
    let patient = node.role("patient");
    let destination = node.role("destination");
    let source = node.role("source");
    let missing = |role: &str| Error::missing_role(name, role);

    match name {
        "toggle" | "add" | "remove" => {
            let target = if name == "remove" { source } else { destination };
            let arg = patient.ok_or_else(|| missing("patient"))?;
            match (name, toggleable(arg)) {
                ("toggle", Some(Toggleable::Classes(classes))) => {
                    // classList.toggle takes one class.
                    for class in &classes {
                        each(ctx, out, target, &format!("classList.toggle({})", js_string(class)))?;
                    }
                    Ok(())
                }
                (_, Some(Toggleable::Classes(classes))) => {
                    each(ctx, out, target, &format!("classList.{name}({})", class_list(&classes)))
                }
                ("toggle", Some(Toggleable::Attribute(attr))) => {
                    each(ctx, out, target, &format!("toggleAttribute({})", js_string(&attr)))
                }
                ("add", Some(Toggleable::Attribute(attr))) => {
                    each(ctx, out, target, &format!("setAttribute({}, '')", js_string(&attr)))
                }
                (_, Some(Toggleable::Attribute(attr))) => {
                    each(ctx, out, target, &format!("removeAttribute({})", js_string(&attr)))
                }
                ("remove", None) => each(ctx, out, Some(arg), "remove()"),
                _ => {
                    let value = expr(ctx, arg)?;
                    each(ctx, out, target, &format!("classList.{name}({value})"))
                }
            }
        }
        "show" => each(ctx, out, patient, "style.display = ''"),
        "hide" => each(ctx, out, patient, "style.display = 'none'"),
        "focus" | "blur" => each(ctx, out, patient, &format!("{name}()")),
        "set" => {
            let lhs = place(ctx, destination.ok_or_else(|| missing("destination"))?)?;
            let value = expr(ctx, patient.ok_or_else(|| missing("patient"))?)?;
            emit(ctx, out, format!("{lhs} = {value};"));
            Ok(())
        }
        "put" => {
            let value = expr(ctx, patient.ok_or_else(|| missing("patient"))?)?;
            let dest = destination.ok_or_else(|| missing("destination"))?;
            if is_element(dest) {
                each(ctx, out, Some(dest), &format!("innerHTML = {value}"))
            } else {
                let lhs = place(ctx, dest)?;
                emit(ctx, out, format!("{lhs} = {value};"));
                Ok(())
            }
        }
        "increment" | "decrement" => {
            let lhs = place(ctx, patient.ok_or_else(|| missing("patient"))?)?;
            let by = match node.role("quantity") {
                Some(q) => expr(ctx, q)?,
                None => "1".to_string(),
            };
            let op = if name == "increment" { '+' } else { '-' };
            let current = if ctx.modern() {
                format!("({lhs} ?? 0)")
            } else {
                format!("({lhs} || 0)")
            };
            emit(ctx, out, format!("{lhs} = {current} {op} {by};"));
            Ok(())
        }
        "append" => {
            let value = expr(ctx, patient.ok_or_else(|| missing("patient"))?)?;
            match destination {
                Some(dest) if is_element(dest) => {
                    each(ctx, out, Some(dest), &format!("insertAdjacentHTML('beforeend', {value})"))
                }
                Some(dest) => {
                    let lhs = place(ctx, dest)?;
                    emit(ctx, out, format!("{lhs} = {lhs} + {value};"));
                    Ok(())
                }
                None => {
                    let fallback = if ctx.modern() { "??" } else { "||" };
                    emit(ctx, out, format!("ctx.result = ctx.it = (ctx.it {fallback} '') + {value};"));
                    Ok(())
                }
            }
        }
        "take" => {
            let arg = patient.ok_or_else(|| missing("patient"))?;
            let Some(Toggleable::Classes(classes)) = toggleable(arg) else {
                return Err(Error::codegen("take expects a class selector"));
            };
            let list = class_list(&classes);
            let from = match source {
                Some(s) => elements(ctx, Some(s))?,
                None => {
                    let AstNode::Selector { value, .. } = arg else {
                        return Err(Error::internal("class selector without selector node"));
                    };
                    format!("document.querySelectorAll({})", js_string(value))
                }
            };
            emit(ctx, out, format!("for (const el of {from}) el.classList.remove({list});"));
            each(ctx, out, destination, &format!("classList.add({list})"))
        }
        "log" => {
            let value = expr(ctx, patient.ok_or_else(|| missing("patient"))?)?;
            emit(ctx, out, format!("console.log({value});"));
            Ok(())
        }
        "send" | "trigger" => {
            let event = node.role("event").ok_or_else(|| missing("event"))?;
            let event = match event {
                AstNode::Literal { value, .. } => js_string(&value.concat_text()),
                other => expr(ctx, other)?,
            };
            each(
                ctx,
                out,
                destination,
                &format!("dispatchEvent(new CustomEvent({event}, {{ bubbles: true }}))"),
            )
        }
        "wait" => {
            let ms = expr(ctx, node.role("duration").ok_or_else(|| missing("duration"))?)?;
            let wait = ctx.helper("wait");
            emit(ctx, out, format!("await {wait}({ms});"));
            Ok(())
        }
        "fetch" => {
            let url = match source.ok_or_else(|| missing("source"))? {
                AstNode::Identifier { name } => js_string(name),
                other => expr(ctx, other)?,
            };
            let kind = match node.role("responseType") {
                Some(AstNode::Literal { value, .. }) => value.concat_text(),
                Some(AstNode::Identifier { name }) => name.clone(),
                _ => "text".to_string(),
            };
            let fetch = ctx.helper("fetchAs");
            emit(
                ctx,
                out,
                format!("ctx.result = ctx.it = await {fetch}({url}, {});", js_string(&kind)),
            );
            Ok(())
        }
        "go" => {
            let dest = destination.ok_or_else(|| missing("destination"))?;
            if is_element(dest) {
                each(ctx, out, Some(dest), "scrollIntoView()")
            } else {
                let url = match dest {
                    AstNode::Identifier { name } => js_string(name),
                    other => expr(ctx, other)?,
                };
                emit(ctx, out, format!("window.location.href = {url};"));
                Ok(())
            }
        }
        "call" => {
            let value = expr(ctx, patient.ok_or_else(|| missing("patient"))?)?;
            emit(ctx, out, format!("ctx.result = ctx.it = await {value};"));
            Ok(())
        }
        "halt" | "exit" => {
            let signal = ctx.helper(&name.to_uppercase());
            if name == "halt" {
                out.line("if (ctx.event) ctx.event.preventDefault();");
            }
            emit(ctx, out, format!("throw {signal};"));
            Ok(())
        }
        "return" => {
            if let Some(value) = patient {
                let value = expr(ctx, value)?;
                out.line(format!("ctx.result = {value};"));
            }
            let signal = ctx.helper("RETURN");
            emit(ctx, out, format!("throw {signal};"));
            Ok(())
        }
        unknown => {
            tracing::debug!(command = unknown, "no code generation for command");
            if ctx.comments() {
                out.line(format!("/* unsupported command: {} */", unknown.replace("*/", "* /")));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::CodegenOptions;

    fn emit_one(node: &AstNode) -> (String, usize) {
        let options = CodegenOptions::default();
        let mut ctx = CodegenContext::new(&options, "_hf");
        let mut out = Emitter::new();
        statement(&mut ctx, &mut out, node).unwrap();
        (out.finish(false), ctx.emitted())
    }

    #[test]
    fn toggle_class_on_me() {
        let node = AstNode::command("toggle").with_role("patient", AstNode::selector(".active"));
        assert_eq!(emit_one(&node).0, "ctx.me.classList.toggle('active');");
    }

    #[test]
    fn add_class_to_selector() {
        let node = AstNode::command("add")
            .with_role("patient", AstNode::selector(".a.b"))
            .with_role("destination", AstNode::selector("#box"));
        assert_eq!(
            emit_one(&node).0,
            "for (const el of document.querySelectorAll('#box')) el.classList.add('a', 'b');"
        );
    }

    #[test]
    fn attributes_and_assignment() {
        let node = AstNode::command("toggle").with_role("patient", AstNode::selector("@disabled"));
        assert_eq!(emit_one(&node).0, "ctx.me.toggleAttribute('disabled');");
        let node = AstNode::command("set")
            .with_role("destination", AstNode::variable(":n"))
            .with_role("patient", AstNode::number(1.0));
        assert_eq!(emit_one(&node).0, "ctx.locals.n = 1;");
    }

    #[test]
    fn increment_respects_target() {
        let node = AstNode::command("increment").with_role("patient", AstNode::variable(":n"));
        assert_eq!(emit_one(&node).0, "ctx.locals.n = (ctx.locals.n ?? 0) + 1;");
        let options = CodegenOptions {
            target: crate::codegen::CodegenTarget::Es2017,
            ..CodegenOptions::default()
        };
        let mut ctx = CodegenContext::new(&options, "_hf");
        let mut out = Emitter::new();
        statement(&mut ctx, &mut out, &node).unwrap();
        assert!(out.finish(false).contains("|| 0"));
    }

    #[test]
    fn signals_and_helpers() {
        let options = CodegenOptions::default();
        let mut ctx = CodegenContext::new(&options, "_hf");
        let mut out = Emitter::new();
        let nodes = vec![
            AstNode::command("wait").with_role("duration", AstNode::number(200.0)),
            AstNode::command("halt"),
        ];
        body(&mut ctx, &mut out, &nodes).unwrap();
        let text = out.finish(false);
        assert!(text.contains("await _rt.wait(200);"));
        assert!(text.contains("throw _rt.HALT;"));
        assert!(ctx.helpers().contains("HALT"));
    }

    #[test]
    fn repeat_sets_index() {
        let node = AstNode::Repeat {
            count: Some(Box::new(AstNode::number(10.0))),
            body: vec![AstNode::command("log").with_role("patient", AstNode::variable(":index"))],
        };
        let (text, emitted) = emit_one(&node);
        assert!(text.starts_with("for (let _i0 = 0; _i0 < 10; _i0++) {"));
        assert!(text.contains("ctx.locals.index = _i0;"));
        assert_eq!(emitted, 2);
    }

    #[test]
    fn unknown_commands_emit_nothing_countable() {
        let (text, emitted) = emit_one(&AstNode::command("install"));
        assert_eq!(text, "/* unsupported command: install */");
        assert_eq!(emitted, 0);
    }

    #[test]
    fn missing_role_is_an_error() {
        let options = CodegenOptions::default();
        let mut ctx = CodegenContext::new(&options, "_hf");
        let mut out = Emitter::new();
        assert!(statement(&mut ctx, &mut out, &AstNode::command("set")).is_err());
    }
}
