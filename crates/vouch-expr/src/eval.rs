//! Short-circuiting evaluation of expression trees against values.

use vouch_common::value::Value;
use vouch_types::verify;

use crate::ast::TypeExpr;

impl TypeExpr {
    /// Whether `value` satisfies this expression.
    ///
    /// Pure and total: evaluation never fails on a parsed tree. `All`
    /// stops at the first false part and is vacuously true when empty;
    /// `Any` stops at the first true part and is false when empty.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            TypeExpr::Ref { token, negated } => verify(value, *token) != *negated,
            TypeExpr::All(parts) => parts.iter().all(|part| part.matches(value)),
            TypeExpr::Any(parts) => parts.iter().any(|part| part.matches(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use vouch_types::TypeToken;

    use super::*;

    #[test]
    fn ref_checks_the_predicate() {
        assert!(TypeExpr::of(TypeToken::Int).matches(&Value::Int(1)));
        assert!(!TypeExpr::of(TypeToken::Int).matches(&Value::string("1")));
    }

    #[test]
    fn negation_flips_the_result() {
        for value in [Value::Null, Value::Int(1), Value::string("x")] {
            for token in TypeToken::ALL {
                assert_eq!(
                    TypeExpr::not(token).matches(&value),
                    !TypeExpr::of(token).matches(&value),
                );
            }
        }
    }

    #[test]
    fn single_part_clauses_behave_like_the_part() {
        let part = TypeExpr::of(TypeToken::String);
        for value in [Value::string("x"), Value::Int(3)] {
            assert_eq!(
                TypeExpr::Any(vec![part.clone()]).matches(&value),
                part.matches(&value)
            );
            assert_eq!(
                TypeExpr::All(vec![part.clone()]).matches(&value),
                part.matches(&value)
            );
        }
    }

    #[test]
    fn empty_clauses() {
        assert!(TypeExpr::All(vec![]).matches(&Value::Null));
        assert!(!TypeExpr::Any(vec![]).matches(&Value::Null));
    }
}
