//! Lexer for type-expression strings.
//!
//! Clause operators are the literal characters `&` and `|`; negation is
//! the word `not`; ASCII whitespace between tokens is skipped. Word runs
//! are matched with longest-successful-match accumulation: at each start
//! position the lexer remembers the longest buffer prefix that classifies
//! as a token, so `notint` yields `not` + `int` and `stringint` yields
//! the single `stringInt` token (the longer match supersedes `string`).

use serde::Serialize;

use vouch_common::error::{ParseError, ParseErrorKind};
use vouch_common::span::Span;
use vouch_types::TypeToken;

/// A token produced by the expression lexer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExprToken {
    pub kind: ExprTokenKind,
    pub span: Span,
}

impl ExprToken {
    fn new(kind: ExprTokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: Span::new(start as u32, end as u32),
        }
    }
}

/// Every kind of token in a type expression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ExprTokenKind {
    /// `&` — conjunction clause operator.
    And,
    /// `|` — disjunction clause operator.
    Or,
    /// The `not` modifier.
    Not,
    /// A registered type token.
    Type(TypeToken),
}

impl ExprTokenKind {
    /// Short description for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            ExprTokenKind::And => "`&`",
            ExprTokenKind::Or => "`|`",
            ExprTokenKind::Not => "`not`",
            ExprTokenKind::Type(_) => "a type",
        }
    }
}

/// Tokenize an expression string.
pub fn tokenize(source: &str) -> Result<Vec<ExprToken>, ParseError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        let Some(c) = source[pos..].chars().next() else {
            break;
        };

        if c.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        match c {
            '&' => {
                tokens.push(ExprToken::new(ExprTokenKind::And, pos, pos + 1));
                pos += 1;
            }
            '|' => {
                tokens.push(ExprToken::new(ExprTokenKind::Or, pos, pos + 1));
                pos += 1;
            }
            c if c.is_ascii_alphanumeric() => {
                let run_end = word_run_end(source, pos);
                pos = lex_word(source, pos, run_end, &mut tokens)?;
            }
            c => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedCharacter(c),
                    Span::new(pos as u32, (pos + c.len_utf8()) as u32),
                ));
            }
        }
    }

    Ok(tokens)
}

/// End offset of the maximal ASCII-alphanumeric run starting at `start`.
fn word_run_end(source: &str, start: usize) -> usize {
    source[start..]
        .bytes()
        .position(|b| !b.is_ascii_alphanumeric())
        .map(|i| start + i)
        .unwrap_or(source.len())
}

/// Lex one word run with longest-successful-match accumulation.
///
/// Classification happens over a lowercased buffer; within the run, a
/// later, longer match at the same start position supersedes an earlier
/// shorter one. Content after the last successful match restarts matching
/// at its own position; a position with no match at all is an unknown
/// type.
fn lex_word(
    source: &str,
    start: usize,
    run_end: usize,
    tokens: &mut Vec<ExprToken>,
) -> Result<usize, ParseError> {
    let bytes = source.as_bytes();
    let mut cursor = start;

    while cursor < run_end {
        let mut buf = String::with_capacity(run_end - cursor);
        let mut best: Option<(ExprTokenKind, usize)> = None;

        for end in cursor + 1..=run_end {
            buf.push(bytes[end - 1].to_ascii_lowercase() as char);
            if buf == "not" {
                best = Some((ExprTokenKind::Not, end));
            } else if let Some(token) = TypeToken::lookup_folded(&buf) {
                best = Some((ExprTokenKind::Type(token), end));
            }
        }

        match best {
            Some((kind, end)) => {
                tokens.push(ExprToken::new(kind, cursor, end));
                cursor = end;
            }
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::UnknownType(source[cursor..run_end].to_string()),
                    Span::new(cursor as u32, run_end as u32),
                ));
            }
        }
    }

    Ok(run_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<ExprTokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn single_type() {
        assert_eq!(kinds("int"), vec![ExprTokenKind::Type(TypeToken::Int)]);
    }

    #[test]
    fn clauses_and_whitespace() {
        assert_eq!(
            kinds("null | int & string"),
            vec![
                ExprTokenKind::Type(TypeToken::Null),
                ExprTokenKind::Or,
                ExprTokenKind::Type(TypeToken::Int),
                ExprTokenKind::And,
                ExprTokenKind::Type(TypeToken::String),
            ]
        );
    }

    #[test]
    fn not_modifier_with_space() {
        assert_eq!(
            kinds("not int"),
            vec![ExprTokenKind::Not, ExprTokenKind::Type(TypeToken::Int)]
        );
    }

    #[test]
    fn not_modifier_fused() {
        // No separator needed: `not` is the longest match at position 0,
        // then matching restarts at the remainder.
        assert_eq!(
            kinds("notint"),
            vec![ExprTokenKind::Not, ExprTokenKind::Type(TypeToken::Int)]
        );
    }

    #[test]
    fn longest_match_wins() {
        // `stringint` must lex as the one token `stringInt`, not as
        // `string` plus an unknown remainder.
        assert_eq!(
            kinds("stringint"),
            vec![ExprTokenKind::Type(TypeToken::StringInt)]
        );
        assert_eq!(
            kinds("stringInt"),
            vec![ExprTokenKind::Type(TypeToken::StringInt)]
        );
    }

    #[test]
    fn adjacent_types_without_clause_still_lex() {
        // The parser rejects this sequence; the lexer just reports it.
        assert_eq!(
            kinds("intstring"),
            vec![
                ExprTokenKind::Type(TypeToken::Int),
                ExprTokenKind::Type(TypeToken::String),
            ]
        );
    }

    #[test]
    fn unknown_word_fails() {
        let err = tokenize("foo").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownType("foo".into()));
        assert_eq!(err.span, Span::new(0, 3));
    }

    #[test]
    fn unknown_trailing_content_fails() {
        let err = tokenize("intx").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownType("x".into()));
        assert_eq!(err.span, Span::new(3, 4));
    }

    #[test]
    fn unexpected_character_fails() {
        let err = tokenize("int?string").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter('?'));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
