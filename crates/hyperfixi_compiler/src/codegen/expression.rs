//! Expression emission.

use hyperfixi_foundation::{Error, Result, Value, value::format_number};

use super::context::CodegenContext;
use crate::ast::{AstNode, VarScope};

/// A JavaScript string literal.
#[must_use]
pub fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// A literal value as JavaScript.
#[must_use]
pub fn js_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) if n.is_nan() => "NaN".to_string(),
        Value::Number(n) if n.is_infinite() => {
            if *n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
        }
        Value::Number(n) => format_number(*n),
        Value::String(s) => js_string(s),
    }
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Property access on `object`, dotted when the name allows it.
#[must_use]
pub fn member(object: &str, property: &str) -> String {
    if is_js_identifier(property) {
        format!("{object}.{property}")
    } else {
        format!("{object}[{}]", js_string(property))
    }
}

/// The storage location of a variable.
#[must_use]
pub fn variable(name: &str, scope: VarScope) -> String {
    match scope {
        VarScope::Local => member("ctx.locals", name),
        VarScope::Global => member("_rt.globals", name),
        VarScope::Context => member("ctx", name),
    }
}

/// Emits a value expression.
///
/// # Errors
///
/// Returns a `Codegen` error when a statement appears in value position.
pub fn expr(ctx: &mut CodegenContext<'_>, node: &AstNode) -> Result<String> {
    Ok(match node {
        AstNode::Literal { value, .. } => js_value(value),
        AstNode::Identifier { name } if is_js_identifier(name) => name.clone(),
        AstNode::Identifier { name } => js_string(name),
        AstNode::Selector {
            cache_key: Some(key),
            value,
            ..
        } => {
            ctx.cache_selector(key, value);
            format!("{key}[0]")
        }
        AstNode::Selector { value, .. } => {
            format!("document.querySelector({})", js_string(value))
        }
        AstNode::Variable { name, scope } => {
            if *scope == VarScope::Global {
                ctx.helper("globals");
            }
            variable(name, *scope)
        }
        AstNode::Binary {
            operator,
            left,
            right,
        } => {
            let l = expr(ctx, left)?;
            let r = expr(ctx, right)?;
            match operator.as_str() {
                "&" => format!("(String({l}) + String({r}))"),
                "is" => format!("({l} == {r})"),
                "is not" => format!("({l} != {r})"),
                op => format!("({l} {op} {r})"),
            }
        }
        AstNode::Logical {
            operator,
            left,
            right,
        } => {
            let op = match operator.as_str() {
                "and" | "&&" => "&&",
                _ => "||",
            };
            format!("({} {op} {})", expr(ctx, left)?, expr(ctx, right)?)
        }
        AstNode::Unary { operator, operand } => {
            let op = if operator == "-" { "-" } else { "!" };
            format!("{op}({})", expr(ctx, operand)?)
        }
        AstNode::Member { object, property } => member(&expr(ctx, object)?, property),
        AstNode::Index { object, index } => {
            format!("{}[{}]", expr(ctx, object)?, expr(ctx, index)?)
        }
        AstNode::Call { callee, args } => {
            let args = args
                .iter()
                .map(|a| expr(ctx, a))
                .collect::<Result<Vec<_>>>()?;
            format!("{}({})", expr(ctx, callee)?, args.join(", "))
        }
        AstNode::Positional { position, target } => positional(ctx, position, target.as_deref())?,
        statement => {
            return Err(Error::codegen(format!(
                "'{}' cannot be used as a value",
                statement.type_name()
            )));
        }
    })
}

fn positional(ctx: &mut CodegenContext<'_>, position: &str, target: Option<&AstNode>) -> Result<String> {
    let selector = match target {
        Some(AstNode::Selector { value, .. }) => Some(js_string(value)),
        Some(other) => Some(expr(ctx, other)?),
        None => None,
    };
    Ok(match (position, selector) {
        ("first", Some(sel)) => format!("document.querySelector({sel})"),
        ("last", Some(sel)) => format!("Array.from(document.querySelectorAll({sel})).pop()"),
        ("closest", Some(sel)) => format!("ctx.me.closest({sel})"),
        ("first", None) => "ctx.me.firstElementChild".to_string(),
        ("last", None) => "ctx.me.lastElementChild".to_string(),
        ("next", _) => "ctx.me.nextElementSibling".to_string(),
        ("previous", _) => "ctx.me.previousElementSibling".to_string(),
        _ => "ctx.me.parentElement".to_string(),
    })
}

/// Emits an iterable of the elements a target expression denotes.
///
/// `me` and a missing target both mean the handler's element.
///
/// # Errors
///
/// Propagates errors from [`expr`].
pub fn elements(ctx: &mut CodegenContext<'_>, target: Option<&AstNode>) -> Result<String> {
    Ok(match target {
        None => "[ctx.me]".to_string(),
        Some(AstNode::Selector {
            cache_key: Some(key),
            value,
            ..
        }) => {
            ctx.cache_selector(key, value);
            key.clone()
        }
        Some(AstNode::Selector { value, .. }) => {
            format!("document.querySelectorAll({})", js_string(value))
        }
        Some(other) => format!("[].concat({})", expr(ctx, other)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::CodegenOptions;

    fn emit(node: &AstNode) -> String {
        let options = CodegenOptions::default();
        let mut ctx = CodegenContext::new(&options, "_hf");
        expr(&mut ctx, node).unwrap()
    }

    #[test]
    fn literals_and_strings() {
        assert_eq!(emit(&AstNode::number(3.0)), "3");
        assert_eq!(emit(&AstNode::string("it's")), "'it\\'s'");
        assert_eq!(js_value(&Value::Null), "null");
    }

    #[test]
    fn variables_by_scope() {
        assert_eq!(emit(&AstNode::variable(":count")), "ctx.locals.count");
        assert_eq!(emit(&AstNode::variable("$total")), "_rt.globals.total");
        assert_eq!(emit(&AstNode::variable("me")), "ctx.me");
        assert_eq!(member("ctx.locals", "data-x"), "ctx.locals['data-x']");
    }

    #[test]
    fn operators() {
        let node = AstNode::binary("is not", AstNode::variable(":x"), AstNode::number(1.0));
        assert_eq!(emit(&node), "(ctx.locals.x != 1)");
        let node = AstNode::binary("&", AstNode::string("a"), AstNode::variable(":x"));
        assert_eq!(emit(&node), "(String('a') + String(ctx.locals.x))");
    }

    #[test]
    fn calls_and_positionals() {
        let call = AstNode::Call {
            callee: Box::new(AstNode::Member {
                object: Box::new(AstNode::variable("me")),
                property: "getAttribute".into(),
            }),
            args: vec![AstNode::string("data-id")],
        };
        assert_eq!(emit(&call), "ctx.me.getAttribute('data-id')");
        let first = AstNode::Positional {
            position: "first".into(),
            target: Some(Box::new(AstNode::selector(".item"))),
        };
        assert_eq!(emit(&first), "document.querySelector('.item')");
    }

    #[test]
    fn statements_are_not_values() {
        let options = CodegenOptions::default();
        let mut ctx = CodegenContext::new(&options, "_hf");
        assert!(expr(&mut ctx, &AstNode::command("halt")).is_err());
    }
}
