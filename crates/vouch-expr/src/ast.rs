//! The type-expression tree.

use std::fmt;

use serde::Serialize;

use vouch_types::TypeToken;

/// A parsed type expression.
///
/// Leaves are always type references; `|` binds looser than `&`, so
/// `a|b&c` parses as `Any[a, All[b, c]]`. Trees are immutable and owned
/// by the call that parsed them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TypeExpr {
    /// A single type reference, optionally negated.
    Ref { token: TypeToken, negated: bool },
    /// Conjunction: every part must match.
    All(Vec<TypeExpr>),
    /// Disjunction: some part must match.
    Any(Vec<TypeExpr>),
}

impl TypeExpr {
    /// A plain type reference.
    pub fn of(token: TypeToken) -> TypeExpr {
        TypeExpr::Ref {
            token,
            negated: false,
        }
    }

    /// A negated type reference.
    pub fn not(token: TypeToken) -> TypeExpr {
        TypeExpr::Ref {
            token,
            negated: true,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Ref { token, negated } => {
                if *negated {
                    write!(f, "not {token}")
                } else {
                    write!(f, "{token}")
                }
            }
            TypeExpr::All(parts) => write_joined(f, parts, "&"),
            TypeExpr::Any(parts) => write_joined(f, parts, "|"),
        }
    }
}

/// Render clause parts with a separator. An `All` under an `Any` needs no
/// grouping (precedence already implies it), so parser-produced trees
/// render back to parseable expressions; only hand-built trees that nest
/// a clause where precedence cannot express it get parentheses.
fn write_joined(f: &mut fmt::Formatter<'_>, parts: &[TypeExpr], sep: &str) -> fmt::Result {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        let grouped = match (sep, part) {
            ("|", TypeExpr::Any(_)) => true,
            ("&", TypeExpr::Any(_) | TypeExpr::All(_)) => true,
            _ => false,
        };
        if grouped {
            write!(f, "({part})")?;
        } else {
            write!(f, "{part}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ref() {
        assert_eq!(TypeExpr::of(TypeToken::Int).to_string(), "int");
        assert_eq!(TypeExpr::not(TypeToken::Null).to_string(), "not null");
    }

    #[test]
    fn display_clauses() {
        let expr = TypeExpr::Any(vec![
            TypeExpr::of(TypeToken::Int),
            TypeExpr::All(vec![
                TypeExpr::of(TypeToken::String),
                TypeExpr::of(TypeToken::Numeric),
            ]),
        ]);
        assert_eq!(expr.to_string(), "int|string&numeric");
    }

    #[test]
    fn display_groups_unexpressible_nesting() {
        let expr = TypeExpr::All(vec![
            TypeExpr::Any(vec![
                TypeExpr::of(TypeToken::Int),
                TypeExpr::of(TypeToken::Null),
            ]),
            TypeExpr::of(TypeToken::Numeric),
        ]);
        assert_eq!(expr.to_string(), "(int|null)&numeric");
    }
}
