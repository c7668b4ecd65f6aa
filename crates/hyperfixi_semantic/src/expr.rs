//! Value extents inside a token stream.
//!
//! Role values are usually one token, but grow into expressions across
//! operators, calls, and member access. These helpers find where a value ends
//! and turn its tokens into a [`SemanticValue`].

use hyperfixi_foundation::Value;
use hyperfixi_i18n::{KeywordCategory, Token, TokenKind};

use crate::value::{LiteralSubtype, SemanticValue, quote};

/// End index (exclusive) of the value starting at `start`, or `None` if no
/// value starts there. `stop` marks tokens that end a value outside brackets.
pub(crate) fn scan_value(
    tokens: &[Token],
    start: usize,
    stop: &dyn Fn(&Token) -> bool,
) -> Option<usize> {
    let mut end = scan_operand(tokens, start, stop)?;
    while let Some(op) = tokens.get(end) {
        if stop(op) || !is_binary_operator(op) {
            break;
        }
        let mut next = end + 1;
        if op.is("is") && tokens.get(next).is_some_and(|t| t.is("not")) {
            next += 1;
        }
        match scan_operand(tokens, next, stop) {
            Some(operand_end) => end = operand_end,
            None => break,
        }
    }
    Some(end)
}

fn scan_operand(tokens: &[Token], start: usize, stop: &dyn Fn(&Token) -> bool) -> Option<usize> {
    let token = tokens.get(start)?;
    if stop(token) {
        return None;
    }
    let mut end = match token.kind {
        TokenKind::Selector | TokenKind::Literal | TokenKind::Identifier => start + 1,
        TokenKind::Keyword
            if token.in_category(KeywordCategory::Values)
                || token.in_category(KeywordCategory::Events) =>
        {
            start + 1
        }
        TokenKind::Keyword if token.is("not") => return scan_operand(tokens, start + 1, stop),
        TokenKind::Operator if matches!(token.text.as_str(), "-" | "!") => {
            return scan_operand(tokens, start + 1, stop);
        }
        TokenKind::Punctuation if matches!(token.text.as_str(), "(" | "[") => {
            matching_close(tokens, start)? + 1
        }
        _ => return None,
    };

    // Postfix member access, calls, and indexing bind tightly.
    loop {
        let Some(next) = tokens.get(end) else {
            break;
        };
        if !tokens[end - 1].touches(next) {
            break;
        }
        match next.text.as_str() {
            "." if tokens.get(end + 1).is_some_and(|member| {
                next.touches(member)
                    && matches!(member.kind, TokenKind::Identifier | TokenKind::Keyword)
            }) =>
            {
                end += 2;
            }
            "(" | "[" if next.kind == TokenKind::Punctuation => {
                end = matching_close(tokens, end)? + 1;
            }
            _ => break,
        }
    }
    Some(end)
}

/// Index of the bracket closing the one at `open`.
pub(crate) fn matching_close(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        if token.kind != TokenKind::Punctuation {
            continue;
        }
        match token.text.as_str() {
            "(" | "[" | "{" => depth += 1,
            ")" | "]" | "}" => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_binary_operator(token: &Token) -> bool {
    match token.kind {
        TokenKind::Operator => token.text != "!",
        TokenKind::Keyword => token.is("and") || token.is("or") || token.is("is"),
        _ => false,
    }
}

/// Canonical source text of a token run: canonical keyword names, with a
/// space between tokens that do not touch.
#[must_use]
pub(crate) fn canonical_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && !tokens[i - 1].touches(token) {
            out.push(' ');
        }
        out.push_str(token.canonical());
    }
    out
}

/// Converts a token run into a semantic value.
#[must_use]
pub(crate) fn to_value(tokens: &[Token]) -> SemanticValue {
    let [token] = tokens else {
        return SemanticValue::expression(canonical_text(tokens));
    };
    match token.kind {
        TokenKind::Selector => SemanticValue::selector(token.text.clone()),
        TokenKind::Literal => literal(token),
        TokenKind::Identifier if is_variable(&token.text) => {
            SemanticValue::reference(token.text.clone())
        }
        TokenKind::Keyword if token.in_category(KeywordCategory::Values) => {
            SemanticValue::reference(token.canonical())
        }
        TokenKind::Keyword if token.in_category(KeywordCategory::Events) => {
            SemanticValue::word(token.canonical())
        }
        _ => SemanticValue::expression(token.canonical()),
    }
}

/// `:local` or `$global`.
#[must_use]
pub(crate) fn is_variable(text: &str) -> bool {
    text.len() > 1 && (text.starts_with(':') || text.starts_with('$'))
}

/// URL-like literal text.
#[must_use]
pub(crate) fn is_url(text: &str) -> bool {
    text.starts_with('/')
        || text.starts_with("./")
        || text.starts_with("../")
        || text.starts_with("http://")
        || text.starts_with("https://")
}

fn literal(token: &Token) -> SemanticValue {
    if let (Some(millis), Some(normalized)) = (token.duration_millis(), token.normalized.as_deref())
    {
        return SemanticValue::duration(normalized, millis);
    }
    if is_url(&token.text) {
        return SemanticValue::Literal {
            value: Value::String(token.text.clone()),
            raw: token.text.clone(),
            subtype: Some(LiteralSubtype::Url),
        };
    }
    match token.literal_value() {
        Some(Value::String(s)) => SemanticValue::Literal {
            raw: quote(&s),
            value: Value::String(s),
            subtype: None,
        },
        Some(Value::Number(n)) => SemanticValue::number(n),
        Some(value) => SemanticValue::Literal {
            value,
            raw: token.canonical().to_string(),
            subtype: None,
        },
        None => SemanticValue::expression(token.text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperfixi_i18n::{LanguageRegistry, Tokenizer};

    fn tokens(source: &str) -> Vec<Token> {
        let registry = LanguageRegistry::with_builtin();
        Tokenizer::tokenize(source, registry.get("en").unwrap())
    }

    fn never(_: &Token) -> bool {
        false
    }

    #[test]
    fn single_tokens() {
        let t = tokens(".active me :count 'hi' 300ms click");
        assert_eq!(to_value(&t[0..1]), SemanticValue::selector(".active"));
        assert_eq!(to_value(&t[1..2]), SemanticValue::reference("me"));
        assert_eq!(to_value(&t[2..3]), SemanticValue::reference(":count"));
        assert_eq!(to_value(&t[3..4]), SemanticValue::string("hi"));
        assert!(to_value(&t[4..5]).is_duration());
        assert_eq!(to_value(&t[5..6]), SemanticValue::word("click"));
    }

    #[test]
    fn operators_extend_values() {
        let t = tokens(":x + 1 into #out");
        let end = scan_value(&t, 0, &|tok| tok.is("into")).unwrap();
        assert_eq!(end, 3);
        assert_eq!(to_value(&t[..end]), SemanticValue::expression(":x + 1"));
    }

    #[test]
    fn calls_and_members() {
        let t = tokens("me.value.trim() then");
        let end = scan_value(&t, 0, &never).unwrap();
        assert_eq!(canonical_text(&t[..end]), "me.value.trim()");
    }

    #[test]
    fn is_not_comparison() {
        let t = tokens(":a is not :b");
        assert_eq!(scan_value(&t, 0, &never), Some(t.len()));
    }

    #[test]
    fn commands_do_not_start_values() {
        let t = tokens("toggle .a");
        assert_eq!(scan_value(&t, 0, &never), None);
    }

    #[test]
    fn url_literals() {
        let t = tokens("/api/items");
        let value = to_value(&t);
        assert_eq!(value.raw(), "/api/items");
        assert!(matches!(
            value,
            SemanticValue::Literal {
                subtype: Some(LiteralSubtype::Url),
                ..
            }
        ));
    }
}
