//! AST construction.
//!
//! Semantic nodes, explicit bracket syntax, and the JSON interchange form
//! all end up here. Every result is normalized to an event root: a bare
//! command or block is wrapped in a synthetic `click` handler.

use hyperfixi_foundation::{Error, ErrorKind, Result};
use hyperfixi_i18n::{Language, locales};
use hyperfixi_semantic::{ExplicitSyntax, NodeKind, SemanticNode, SemanticRole, SemanticValue};

use crate::ast::AstNode;
use crate::expression::ExpressionParser;

/// Event a bare command sequence is bound to.
pub const DEFAULT_EVENT: &str = "click";

/// Builds normalized ASTs.
#[derive(Clone, Debug)]
pub struct AstBuilder {
    english: Language,
}

impl Default for AstBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AstBuilder {
    /// Creates a builder. Expression text is tokenized as English.
    #[must_use]
    pub fn new() -> Self {
        let data = locales::find("en").unwrap_or(locales::builtin()[0]);
        let english = Language::from_locale(data);
        Self { english }
    }

    /// The expression parser used for expression-valued roles.
    #[must_use]
    pub fn expressions(&self) -> ExpressionParser<'_> {
        ExpressionParser::new(&self.english)
    }

    /// Builds a normalized AST from a semantic node.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` error if an expression role does not parse.
    pub fn build(&self, node: &SemanticNode) -> Result<AstNode> {
        Ok(normalize(self.convert(node)?))
    }

    /// Builds a normalized AST from explicit bracket syntax.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` error for malformed brackets or expressions.
    pub fn build_explicit(&self, source: &str) -> Result<AstNode> {
        let node = ExplicitSyntax::parse(source)?;
        self.build(&node)
    }

    /// Builds a normalized AST from the JSON interchange form.
    ///
    /// # Errors
    ///
    /// Returns a `Json` error if the text is not a serialized AST node.
    pub fn build_json(&self, source: &str) -> Result<AstNode> {
        let node: AstNode = serde_json::from_str(source)
            .map_err(|e| Error::new(ErrorKind::Json(e.to_string())))?;
        if !node.is_statement() {
            return Err(Error::invalid_ast(format!(
                "root must be a statement, found '{}'",
                node.type_name()
            )));
        }
        Ok(normalize(node))
    }

    fn convert(&self, node: &SemanticNode) -> Result<AstNode> {
        match &node.kind {
            NodeKind::Command => {
                let mut command = AstNode::command(node.action.clone());
                for (role, value) in &node.roles {
                    command = command.with_role(role.name(), self.value(value)?);
                }
                Ok(command)
            }
            NodeKind::EventHandler { modifiers, body } => Ok(AstNode::Event {
                event: node.event_name().unwrap_or(DEFAULT_EVENT).to_string(),
                modifiers: modifiers.clone(),
                source: node
                    .role(&SemanticRole::Source)
                    .map(|v| self.value(v).map(Box::new))
                    .transpose()?,
                body: self.convert_all(body)?,
            }),
            NodeKind::Compound { body, alternate } => {
                let body = self.convert_all(body)?;
                let role = |role: SemanticRole| {
                    node.role(&role)
                        .map(|v| self.value(v).map(Box::new))
                        .transpose()
                };
                match node.action.as_str() {
                    "if" | "unless" => Ok(AstNode::If {
                        condition: role(SemanticRole::Condition)?
                            .ok_or_else(|| Error::missing_role(&node.action, "condition"))?,
                        then_branch: body,
                        else_branch: self.convert_all(alternate)?,
                        negated: node.action == "unless",
                    }),
                    "while" => Ok(AstNode::While {
                        condition: role(SemanticRole::Condition)?
                            .ok_or_else(|| Error::missing_role("while", "condition"))?,
                        body,
                    }),
                    "repeat" => Ok(AstNode::Repeat {
                        count: role(SemanticRole::Quantity)?,
                        body,
                    }),
                    "for" => {
                        let variable = node
                            .role(&SemanticRole::Patient)
                            .map(|v| v.raw().trim_start_matches([':', '$']).to_string())
                            .ok_or_else(|| Error::missing_role("for", "patient"))?;
                        Ok(AstNode::Foreach {
                            variable,
                            collection: role(SemanticRole::Source)?
                                .ok_or_else(|| Error::missing_role("for", "source"))?,
                            body,
                        })
                    }
                    _ => Ok(AstNode::Sequence {
                        body,
                        unrolled: false,
                    }),
                }
            }
        }
    }

    fn convert_all(&self, nodes: &[SemanticNode]) -> Result<Vec<AstNode>> {
        nodes.iter().map(|n| self.convert(n)).collect()
    }

    fn value(&self, value: &SemanticValue) -> Result<AstNode> {
        Ok(match value {
            SemanticValue::Selector { value } => AstNode::selector(value.clone()),
            SemanticValue::Reference { value } => AstNode::variable(value),
            SemanticValue::Literal { value, raw, subtype } => AstNode::Literal {
                value: value.clone(),
                raw: subtype.is_some().then(|| raw.clone()),
            },
            SemanticValue::Expression { raw } => self.expressions().parse(raw)?,
        })
    }
}

/// Wraps a non-event root in a `click` handler. A sequence of handlers is
/// left as is.
#[must_use]
pub fn normalize(root: AstNode) -> AstNode {
    match root {
        event @ AstNode::Event { .. } => event,
        AstNode::Sequence { body, .. } if body.iter().all(|n| matches!(n, AstNode::Event { .. })) => {
            AstNode::Sequence {
                body,
                unrolled: false,
            }
        }
        AstNode::Sequence { body, unrolled: false } => AstNode::event(DEFAULT_EVENT, body),
        other => AstNode::event(DEFAULT_EVENT, vec![other]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperfixi_foundation::Value;
    use hyperfixi_semantic::SemanticParser;

    fn build(source: &str, code: &str) -> AstNode {
        let parser = SemanticParser::new();
        let node = parser.parse(source, code).unwrap();
        AstBuilder::new().build(&node).unwrap()
    }

    #[test]
    fn bare_command_is_wrapped_in_click() {
        let ast = build("toggle .active", "en");
        let AstNode::Event { event, body, .. } = &ast else {
            panic!("expected event root");
        };
        assert_eq!(event, "click");
        assert_eq!(body[0].command_name(), Some("toggle"));
        assert_eq!(body[0].role("patient"), Some(&AstNode::selector(".active")));
    }

    #[test]
    fn handler_keeps_modifiers_and_source() {
        let ast = build("on input.debounce(200) from #search log me", "en");
        let AstNode::Event { modifiers, source, .. } = &ast else {
            panic!("expected event root");
        };
        assert_eq!(modifiers.debounce, Some(200));
        assert_eq!(source.as_deref(), Some(&AstNode::selector("#search")));
    }

    #[test]
    fn expressions_are_parsed() {
        let ast = build("set :x to :x + 1", "en");
        let set = &ast.body()[0];
        assert!(matches!(set.role("patient"), Some(AstNode::Binary { .. })));
    }

    #[test]
    fn durations_keep_raw_text() {
        let ast = build("wait 2s", "en");
        assert_eq!(
            ast.body()[0].role("duration"),
            Some(&AstNode::Literal {
                value: Value::Number(2000.0),
                raw: Some("2s".into())
            })
        );
    }

    #[test]
    fn blocks_convert() {
        let ast = build("repeat 3 times increment :n end", "en");
        assert!(matches!(&ast.body()[0], AstNode::Repeat { count: Some(_), body } if body.len() == 1));
        let ast = build("for :item in :items log :item end", "en");
        assert!(matches!(&ast.body()[0], AstNode::Foreach { variable, .. } if variable == "item"));
    }

    #[test]
    fn json_and_explicit_forms() {
        let builder = AstBuilder::new();
        let json = r#"{"type":"command","name":"toggle","roles":{"patient":{"type":"selector","value":".active"}}}"#;
        let ast = builder.build_json(json).unwrap();
        assert!(matches!(&ast, AstNode::Event { event, .. } if event == "click"));

        let explicit = builder.build_explicit("[toggle patient:.active]").unwrap();
        assert_eq!(explicit, ast);

        let err = builder.build_json("{\"type\":\"literal\",\"value\":1}").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidAst(_)));
        assert!(matches!(builder.build_json("nope").unwrap_err().kind, ErrorKind::Json(_)));
    }
}
