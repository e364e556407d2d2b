//! Parser for type-expression strings.
//!
//! A strict state machine over token kinds: after start or a clause
//! operator the parser expects a modifier or a type; after `not` a type
//! only; after a type a clause operator or end of input. The validated
//! flat list folds into a tree by splitting on `|` into maximal `&`-runs
//! (so `|` binds looser than `&`).

use vouch_common::error::{ParseError, ParseErrorKind};
use vouch_common::span::Span;
use vouch_types::TypeToken;

use crate::ast::TypeExpr;
use crate::lexer::{tokenize, ExprTokenKind};

/// What the state machine expects next.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Expect {
    /// After start or a clause: a modifier or a type.
    Operand,
    /// After `not`: a type only.
    Type,
    /// After a type: a clause operator, or end of input.
    Clause,
}

fn describe(expect: Expect) -> &'static str {
    match expect {
        Expect::Operand => "a type or `not`",
        Expect::Type => "a type",
        Expect::Clause => "`&` or `|`",
    }
}

#[derive(Debug, Clone, Copy)]
struct Operand {
    token: TypeToken,
    negated: bool,
}

/// Parse an expression string into a [`TypeExpr`] tree.
///
/// Every word is validated against the registry during lexing, so an
/// unknown type fails here and never reaches evaluation.
pub fn parse(expression: &str) -> Result<TypeExpr, ParseError> {
    let tokens = tokenize(expression)?;

    if tokens.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::EmptyExpression,
            Span::new(0, expression.len() as u32),
        ));
    }

    // `runs` collects the `&`-joined operands between `|` separators.
    let mut runs: Vec<Vec<Operand>> = vec![Vec::new()];
    let mut expect = Expect::Operand;
    let mut negated = false;

    for token in &tokens {
        match (expect, token.kind) {
            (Expect::Operand | Expect::Type, ExprTokenKind::Type(t)) => {
                runs.last_mut()
                    .expect("runs starts non-empty")
                    .push(Operand { token: t, negated });
                negated = false;
                expect = Expect::Clause;
            }
            (Expect::Operand, ExprTokenKind::Not) => {
                negated = true;
                expect = Expect::Type;
            }
            (Expect::Clause, ExprTokenKind::And) => {
                expect = Expect::Operand;
            }
            (Expect::Clause, ExprTokenKind::Or) => {
                runs.push(Vec::new());
                expect = Expect::Operand;
            }
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken {
                        found: token.kind.describe().to_string(),
                        expected: describe(expect).to_string(),
                    },
                    token.span,
                ));
            }
        }
    }

    // Valid input ends on a type, never on a modifier or clause.
    if expect != Expect::Clause {
        let end = expression.len() as u32;
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedEnd {
                expected: describe(expect).to_string(),
            },
            Span::new(end, end),
        ));
    }

    let mut groups: Vec<TypeExpr> = runs.into_iter().map(fold_run).collect();
    Ok(if groups.len() == 1 {
        groups.pop().expect("one group")
    } else {
        TypeExpr::Any(groups)
    })
}

/// Collapse one `&`-run: a single operand stays a bare reference.
fn fold_run(run: Vec<Operand>) -> TypeExpr {
    let mut refs: Vec<TypeExpr> = run
        .into_iter()
        .map(|op| TypeExpr::Ref {
            token: op.token,
            negated: op.negated,
        })
        .collect();
    if refs.len() == 1 {
        refs.pop().expect("one ref")
    } else {
        TypeExpr::All(refs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_type_is_a_ref() {
        assert_eq!(parse("int").unwrap(), TypeExpr::of(TypeToken::Int));
    }

    #[test]
    fn negated_type() {
        assert_eq!(parse("not int").unwrap(), TypeExpr::not(TypeToken::Int));
        assert_eq!(parse("notint").unwrap(), TypeExpr::not(TypeToken::Int));
    }

    #[test]
    fn or_binds_looser_than_and() {
        assert_eq!(
            parse("int|string&null").unwrap(),
            TypeExpr::Any(vec![
                TypeExpr::of(TypeToken::Int),
                TypeExpr::All(vec![
                    TypeExpr::of(TypeToken::String),
                    TypeExpr::of(TypeToken::Null),
                ]),
            ])
        );
    }

    #[test]
    fn and_run_on_the_left() {
        assert_eq!(
            parse("not null&int|string").unwrap(),
            TypeExpr::Any(vec![
                TypeExpr::All(vec![
                    TypeExpr::not(TypeToken::Null),
                    TypeExpr::of(TypeToken::Int),
                ]),
                TypeExpr::of(TypeToken::String),
            ])
        );
    }

    #[test]
    fn empty_expression_fails() {
        assert_eq!(parse("").unwrap_err().kind, ParseErrorKind::EmptyExpression);
        assert_eq!(
            parse("  ").unwrap_err().kind,
            ParseErrorKind::EmptyExpression
        );
    }

    #[test]
    fn dangling_clause_fails() {
        let err = parse("int|").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedEnd {
                expected: "a type or `not`".into()
            }
        );
    }

    #[test]
    fn dangling_modifier_fails() {
        let err = parse("int|not").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedEnd {
                expected: "a type".into()
            }
        );
    }

    #[test]
    fn doubled_modifier_fails() {
        let err = parse("not not int").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                found: "`not`".into(),
                expected: "a type".into()
            }
        );
    }

    #[test]
    fn adjacent_types_fail() {
        let err = parse("int string").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                found: "a type".into(),
                expected: "`&` or `|`".into()
            }
        );
    }

    #[test]
    fn leading_clause_fails() {
        let err = parse("|int").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                found: "`|`".into(),
                expected: "a type or `not`".into()
            }
        );
    }

    #[test]
    fn unknown_type_fails_at_parse_time() {
        let err = parse("int|foo").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownType("foo".into()));
    }
}
