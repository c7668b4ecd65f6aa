//! Last-resort single-command recognizer.
//!
//! When every structured strategy fails, a handful of common English
//! one-liners (`toggle .active on #menu`, `on submit halt`) can still be
//! compiled. Anything more involved is a `NoMatch`.

use std::sync::LazyLock;

use hyperfixi_compiler::{AstNode, normalize};
use hyperfixi_foundation::{Error, Result, Value};
use regex::{Captures, Regex};

/// Element reference: an id, a class, or `me`.
const ELEMENT: &str = r"(#[\w-]+|\.[\w-]+|me)";

type Build = fn(&Captures<'_>) -> AstNode;

struct Rule {
    regex: Regex,
    build: Build,
}

static EVENT_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^on\s+([A-Za-z]+)\s+(.+)$").ok());

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let rules: [(String, Build); 7] = [
        (
            format!(r"^(toggle|add|remove)\s+([.@][\w-]+)(?:\s+(?:on|to|from)\s+{ELEMENT})?$"),
            class_command,
        ),
        (format!(r"^(show|hide|focus|blur)(?:\s+{ELEMENT})?$"), element_command),
        (r"^log\s+(.+)$".to_string(), log_command),
        (r"^wait\s+(\d+(?:\.\d+)?)(ms|s)?$".to_string(), wait_command),
        (
            format!(r"^(send|trigger)\s+([\w:-]+)(?:\s+(?:to|on)\s+{ELEMENT})?$"),
            send_command,
        ),
        (r"^go\s+to\s+(?:url\s+)?(\S+)$".to_string(), go_command),
        (r"^(halt|exit)$".to_string(), |caps| AstNode::command(&caps[1])),
    ];
    rules
        .into_iter()
        .filter_map(|(pattern, build)| Regex::new(&pattern).ok().map(|regex| Rule { regex, build }))
        .collect()
});

fn element(text: &str) -> AstNode {
    if text == "me" {
        AstNode::variable("me")
    } else {
        AstNode::selector(text)
    }
}

fn class_command(caps: &Captures<'_>) -> AstNode {
    let role = if &caps[1] == "remove" { "source" } else { "destination" };
    let command = AstNode::command(&caps[1]).with_role("patient", AstNode::selector(&caps[2]));
    match caps.get(3) {
        Some(target) => command.with_role(role, element(target.as_str())),
        None => command,
    }
}

fn element_command(caps: &Captures<'_>) -> AstNode {
    let command = AstNode::command(&caps[1]);
    match caps.get(2) {
        Some(target) => command.with_role("patient", element(target.as_str())),
        None => command,
    }
}

fn log_command(caps: &Captures<'_>) -> AstNode {
    let text = caps[1].trim();
    let value = if let Some(inner) = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .or_else(|| text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')))
    {
        AstNode::string(inner)
    } else if let Ok(n) = text.parse::<f64>() {
        AstNode::number(n)
    } else {
        AstNode::variable(text)
    };
    AstNode::command("log").with_role("patient", value)
}

fn wait_command(caps: &Captures<'_>) -> AstNode {
    let amount: f64 = caps[1].parse().unwrap_or_default();
    let unit = caps.get(2).map_or("ms", |m| m.as_str());
    let millis = if unit == "s" { amount * 1_000.0 } else { amount };
    AstNode::command("wait").with_role(
        "duration",
        AstNode::Literal {
            value: Value::Number(millis),
            raw: Some(format!("{}{unit}", &caps[1])),
        },
    )
}

fn send_command(caps: &Captures<'_>) -> AstNode {
    let command = AstNode::command(&caps[1]).with_role("event", AstNode::string(&caps[2]));
    match caps.get(3) {
        Some(target) => command.with_role("destination", element(target.as_str())),
        None => command,
    }
}

fn go_command(caps: &Captures<'_>) -> AstNode {
    AstNode::command("go").with_role("destination", AstNode::string(&caps[1]))
}

/// Recognizes one English command, optionally behind `on <event>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegexRecognizer;

impl RegexRecognizer {
    /// Builds a normalized AST.
    ///
    /// # Errors
    ///
    /// Returns `NoMatch` when no rule matches.
    pub fn recognize(self, source: &str) -> Result<AstNode> {
        let text = source.split_whitespace().collect::<Vec<_>>().join(" ");
        let (event, command) = match EVENT_PREFIX.as_ref().and_then(|re| re.captures(&text)) {
            Some(caps) => (
                caps.get(1).map(|m| m.as_str().to_string()),
                caps.get(2).map_or("", |m| m.as_str()).to_string(),
            ),
            None => (None, text.clone()),
        };
        let node = RULES
            .iter()
            .find_map(|rule| rule.regex.captures(&command).map(|caps| (rule.build)(&caps)))
            .ok_or_else(|| Error::no_match(source))?;
        Ok(match event {
            Some(event) => AstNode::event(event, vec![node]),
            None => normalize(node),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn all_rules_compile() {
        assert_eq!(RULES.len(), 7);
        assert!(EVENT_PREFIX.is_some());
    }

    #[test]
    fn class_commands() {
        let ast = RegexRecognizer.recognize("toggle .active on #menu").unwrap();
        let AstNode::Event { event, body, .. } = &ast else {
            panic!("expected event root");
        };
        assert_eq!(event, "click");
        assert_eq!(body[0].role("destination"), Some(&AstNode::selector("#menu")));
    }

    #[test]
    fn event_prefix_and_wait() {
        let ast = RegexRecognizer.recognize("on mouseover   wait 2s").unwrap();
        assert!(matches!(&ast, AstNode::Event { event, .. } if event == "mouseover"));
        let wait = &ast.body()[0];
        assert_eq!(wait.role("duration").and_then(AstNode::as_literal), Some(&Value::Number(2000.0)));
    }

    #[test]
    fn log_values() {
        let ast = RegexRecognizer.recognize("log 'hello'").unwrap();
        assert_eq!(ast.body()[0].role("patient"), Some(&AstNode::string("hello")));
        let ast = RegexRecognizer.recognize("log :count").unwrap();
        assert_eq!(ast.body()[0].role("patient"), Some(&AstNode::variable(":count")));
    }

    #[test]
    fn unmatched_is_no_match() {
        let err = RegexRecognizer.recognize("frobnicate the widget").unwrap_err();
        assert!(matches!(err.kind, hyperfixi_foundation::ErrorKind::NoMatch(_)));
    }

    proptest! {
        #[test]
        fn never_panics(source in "\\PC{0,40}") {
            let _ = RegexRecognizer.recognize(&source);
        }

        #[test]
        fn recognized_roots_are_events(class in "[a-z][a-z-]{0,10}", verb in "toggle|add|remove") {
            let ast = RegexRecognizer.recognize(&format!("{verb} .{class}")).unwrap();
            prop_assert!(matches!(ast, AstNode::Event { .. }), "expected AstNode::Event");
        }
    }
}
