//! Expression parser.
//!
//! Role values that grew into expressions during semantic matching carry
//! their canonical source text (`:count + 1`, `#box.offsetWidth > 100`).
//! This module turns that text into AST nodes with a precedence-climbing
//! parser over English tokens.

use hyperfixi_foundation::{Error, Result, Value};
use hyperfixi_i18n::{KeywordCategory, Language, Token, TokenKind, Tokenizer};

use crate::ast::{AstNode, POSITIONAL_KEYWORDS};

const UNARY_PRECEDENCE: u8 = 7;

/// Parses canonical expression text.
#[derive(Clone, Copy, Debug)]
pub struct ExpressionParser<'a> {
    language: &'a Language,
}

impl<'a> ExpressionParser<'a> {
    /// Creates a parser tokenizing with `language` (normally English).
    #[must_use]
    pub const fn new(language: &'a Language) -> Self {
        Self { language }
    }

    /// Parses a complete expression.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` error for empty input, unbalanced brackets, or
    /// trailing tokens.
    pub fn parse(&self, source: &str) -> Result<AstNode> {
        let tokens = Tokenizer::tokenize(source, self.language);
        let mut cursor = Cursor {
            tokens: &tokens,
            pos: 0,
        };
        let expr = cursor.expression(0)?;
        if let Some(extra) = cursor.peek() {
            return Err(cursor.error_at(extra, &format!("unexpected '{}'", extra.text)));
        }
        Ok(expr)
    }
}

struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

/// A binary operator: canonical text, precedence, logical, token count.
struct BinaryOp {
    operator: &'static str,
    precedence: u8,
    logical: bool,
    width: usize,
}

impl<'t> Cursor<'t> {
    fn at(&self, index: usize) -> Option<&'t Token> {
        self.tokens.get(index)
    }

    fn peek(&self) -> Option<&'t Token> {
        self.at(self.pos)
    }

    fn error_at(&self, token: &Token, message: &str) -> Error {
        Error::parse(message, token.span.line, token.span.column)
    }

    fn error_here(&self, message: &str) -> Error {
        match self.peek().or_else(|| self.tokens.last()) {
            Some(token) => self.error_at(token, message),
            None => Error::parse(message, 1, 1),
        }
    }

    fn expression(&mut self, min_precedence: u8) -> Result<AstNode> {
        let mut left = self.unary()?;
        while let Some(op) = self.binary_op() {
            if op.precedence < min_precedence {
                break;
            }
            self.pos += op.width;
            let right = self.expression(op.precedence + 1)?;
            left = if op.logical {
                AstNode::Logical {
                    operator: op.operator.to_string(),
                    left: Box::new(left),
                    right: Box::new(right),
                }
            } else {
                AstNode::binary(op.operator, left, right)
            };
        }
        Ok(left)
    }

    fn binary_op(&self) -> Option<BinaryOp> {
        let token = self.peek()?;
        let op = |operator, precedence, logical, width| BinaryOp {
            operator,
            precedence,
            logical,
            width,
        };
        match token.kind {
            TokenKind::Operator => Some(match token.text.as_str() {
                "||" => op("||", 1, true, 1),
                "&&" => op("&&", 2, true, 1),
                "==" => op("==", 3, false, 1),
                "!=" => op("!=", 3, false, 1),
                "===" => op("===", 3, false, 1),
                "!==" => op("!==", 3, false, 1),
                "<" => op("<", 4, false, 1),
                ">" => op(">", 4, false, 1),
                "<=" => op("<=", 4, false, 1),
                ">=" => op(">=", 4, false, 1),
                "+" => op("+", 5, false, 1),
                "-" => op("-", 5, false, 1),
                "&" => op("&", 5, false, 1),
                "*" => op("*", 6, false, 1),
                "/" => op("/", 6, false, 1),
                "%" => op("%", 6, false, 1),
                _ => return None,
            }),
            TokenKind::Keyword if token.is("or") => Some(op("or", 1, true, 1)),
            TokenKind::Keyword if token.is("and") => Some(op("and", 2, true, 1)),
            TokenKind::Keyword if token.is("is") => {
                let negated = self.at(self.pos + 1).is_some_and(|t| t.is("not"));
                Some(if negated {
                    op("is not", 3, false, 2)
                } else {
                    op("is", 3, false, 1)
                })
            }
            _ => None,
        }
    }

    fn unary(&mut self) -> Result<AstNode> {
        let Some(token) = self.peek() else {
            return Err(self.error_here("expected an expression"));
        };
        let operator = match token.kind {
            TokenKind::Operator if token.text == "-" || token.text == "!" => Some(token.text.clone()),
            TokenKind::Keyword if token.is("not") => Some("not".to_string()),
            _ => None,
        };
        if let Some(operator) = operator {
            self.pos += 1;
            let operand = self.expression(UNARY_PRECEDENCE)?;
            return Ok(AstNode::Unary {
                operator,
                operand: Box::new(operand),
            });
        }
        let primary = self.primary()?;
        self.postfix(primary)
    }

    fn primary(&mut self) -> Result<AstNode> {
        let Some(token) = self.peek() else {
            return Err(self.error_here("expected an expression"));
        };
        self.pos += 1;
        match token.kind {
            TokenKind::Literal => Ok(literal(token)),
            TokenKind::Selector => Ok(AstNode::selector(token.text.clone())),
            TokenKind::Identifier if POSITIONAL_KEYWORDS.contains(&token.text.as_str()) => {
                let target = match self.peek() {
                    Some(next) if next.kind == TokenKind::Selector => {
                        self.pos += 1;
                        Some(Box::new(AstNode::selector(next.text.clone())))
                    }
                    _ => None,
                };
                Ok(AstNode::Positional {
                    position: token.text.clone(),
                    target,
                })
            }
            TokenKind::Identifier => Ok(AstNode::variable(&token.text)),
            TokenKind::Keyword if token.in_category(KeywordCategory::Values) => {
                Ok(match token.canonical() {
                    "true" => AstNode::literal(Value::Bool(true)),
                    "false" => AstNode::literal(Value::Bool(false)),
                    "null" => AstNode::literal(Value::Null),
                    name => AstNode::variable(name),
                })
            }
            TokenKind::Keyword => Ok(AstNode::Identifier {
                name: token.canonical().to_string(),
            }),
            TokenKind::Punctuation if token.text == "(" => {
                let inner = self.expression(0)?;
                self.expect(")")?;
                Ok(inner)
            }
            _ => Err(self.error_at(token, &format!("unexpected '{}'", token.text))),
        }
    }

    fn postfix(&mut self, mut node: AstNode) -> Result<AstNode> {
        loop {
            let (Some(prev), Some(next)) = (self.at(self.pos - 1), self.peek()) else {
                break;
            };
            if !prev.touches(next) || next.kind != TokenKind::Punctuation {
                break;
            }
            match next.text.as_str() {
                "." => {
                    let Some(member) = self.at(self.pos + 1) else {
                        break;
                    };
                    if !next.touches(member) {
                        break;
                    }
                    self.pos += 2;
                    node = AstNode::Member {
                        object: Box::new(node),
                        property: member.text.clone(),
                    };
                }
                "(" => {
                    self.pos += 1;
                    let mut args = Vec::new();
                    if !self.eat(")") {
                        loop {
                            args.push(self.expression(0)?);
                            if self.eat(")") {
                                break;
                            }
                            self.expect(",")?;
                        }
                    }
                    node = AstNode::Call {
                        callee: Box::new(node),
                        args,
                    };
                }
                "[" => {
                    self.pos += 1;
                    let index = self.expression(0)?;
                    self.expect("]")?;
                    node = AstNode::Index {
                        object: Box::new(node),
                        index: Box::new(index),
                    };
                }
                _ => break,
            }
        }
        Ok(node)
    }

    fn eat(&mut self, text: &str) -> bool {
        if self.peek().is_some_and(|t| t.text == text) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, text: &str) -> Result<()> {
        if self.eat(text) {
            Ok(())
        } else {
            Err(self.error_here(&format!("expected '{text}'")))
        }
    }
}

fn literal(token: &Token) -> AstNode {
    if let Some(millis) = token.duration_millis() {
        return AstNode::Literal {
            value: Value::Number(millis),
            raw: Some(token.canonical().to_string()),
        };
    }
    AstNode::literal(
        token
            .literal_value()
            .unwrap_or_else(|| Value::String(token.text.clone())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperfixi_i18n::LanguageRegistry;

    use crate::ast::VarScope;

    fn parse(source: &str) -> AstNode {
        let registry = LanguageRegistry::with_builtin();
        let en = registry.get("en").unwrap();
        ExpressionParser::new(en).parse(source).unwrap()
    }

    #[test]
    fn precedence() {
        let node = parse("1 + 2 * 3");
        let AstNode::Binary { operator, right, .. } = node else {
            panic!("expected binary");
        };
        assert_eq!(operator, "+");
        assert!(matches!(*right, AstNode::Binary { ref operator, .. } if operator == "*"));
    }

    #[test]
    fn is_not_is_one_operator() {
        let node = parse(":x is not 3");
        assert!(matches!(node, AstNode::Binary { ref operator, .. } if operator == "is not"));
    }

    #[test]
    fn logical_nodes() {
        let node = parse("true and not false");
        let AstNode::Logical { operator, right, .. } = node else {
            panic!("expected logical");
        };
        assert_eq!(operator, "and");
        assert!(matches!(*right, AstNode::Unary { .. }));
    }

    #[test]
    fn member_and_call() {
        let node = parse("me.getAttribute('data-x')");
        let AstNode::Call { callee, args } = node else {
            panic!("expected call");
        };
        assert_eq!(args, vec![AstNode::string("data-x")]);
        assert!(matches!(
            *callee,
            AstNode::Member { ref object, ref property }
                if property == "getAttribute"
                    && matches!(**object, AstNode::Variable { scope: VarScope::Context, .. })
        ));
    }

    #[test]
    fn durations_become_milliseconds() {
        assert_eq!(
            parse("2s"),
            AstNode::Literal {
                value: Value::Number(2000.0),
                raw: Some("2s".into())
            }
        );
    }

    #[test]
    fn positional_with_target() {
        let node = parse("first .item");
        assert!(matches!(node, AstNode::Positional { ref position, target: Some(_) } if position == "first"));
    }

    #[test]
    fn errors_report_position() {
        let registry = LanguageRegistry::with_builtin();
        let en = registry.get("en").unwrap();
        let parser = ExpressionParser::new(en);
        assert!(parser.parse("(1 + 2").is_err());
        assert!(parser.parse("").is_err());
        assert!(parser.parse("1 2").is_err());
    }
}
