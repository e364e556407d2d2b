//! Predicate functions over the value model.
//!
//! `verify` applies a token's predicate to a value. Predicates are pure,
//! total functions: they never fail on any value, they only answer.

use vouch_common::value::Value;

use crate::token::TypeToken;

/// Apply `token`'s predicate to `value`.
pub fn verify(value: &Value, token: TypeToken) -> bool {
    match token {
        TypeToken::Bool => matches!(value, Value::Bool(_)),
        TypeToken::Int => matches!(value, Value::Int(_)),
        TypeToken::Float => matches!(value, Value::Float(_)),
        TypeToken::String => matches!(value, Value::String(_)),
        TypeToken::Array => matches!(value, Value::Array(_)),
        TypeToken::Object => matches!(value, Value::Object(_)),
        TypeToken::Null => matches!(value, Value::Null),
        TypeToken::Callable => matches!(value, Value::Callable(_)),
        TypeToken::Mixed => true,
        // The value model has no traversable objects, so iterable reduces
        // to arrays.
        TypeToken::Iterable => matches!(value, Value::Array(_)),
        TypeToken::Numeric => is_numeric(value),
        TypeToken::True => matches!(value, Value::Bool(true)),
        TypeToken::False => matches!(value, Value::Bool(false)),
        TypeToken::StringInt => is_string_int(value),
        TypeToken::Empty => is_empty(value),
    }
}

fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Int(_) | Value::Float(_) => true,
        Value::String(s) => is_numeric_string(s),
        _ => false,
    }
}

/// Whether a string is numeric: optional surrounding ASCII whitespace, an
/// optional sign, digits with an optional fraction (a bare leading-dot
/// fraction is allowed), and an optional exponent. No hex, no infinities.
fn is_numeric_string(s: &str) -> bool {
    let s = s.trim_matches(|c: char| c.is_ascii_whitespace());
    let b = s.as_bytes();
    let mut i = 0;

    if matches!(b.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - start;

    let mut frac_digits = 0;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        let start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return false;
        }
    }

    i == b.len()
}

fn is_string_int(value: &Value) -> bool {
    matches!(value, Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
}

/// The host-language "empty" convention: null, false, zero of either
/// numeric type, the empty string, the string `"0"`, and the empty array.
/// Objects and callables are never empty.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Int(i) => *i == 0,
        Value::Float(f) => *f == 0.0,
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(map) => map.is_empty(),
        Value::Object(_) | Value::Callable(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use vouch_common::value::{ArrayKey, Callable, ObjectValue};

    use super::*;

    fn samples() -> Vec<Value> {
        vec![
            Value::Null,
            Value::Bool(true),
            Value::Bool(false),
            Value::Int(0),
            Value::Int(7),
            Value::Float(0.0),
            Value::Float(1.5),
            Value::string(""),
            Value::string("0"),
            Value::string("1"),
            Value::string("1Abc"),
            Value::array::<i64, _>([]),
            Value::array([(ArrayKey::Int(0), Value::Int(1))]),
            Value::Object(ObjectValue::new("stdClass")),
            Value::Callable(Callable::new(|_| Value::Null)),
        ]
    }

    /// Which sample indices each token accepts. Order matches
    /// `samples()`.
    #[test]
    fn predicate_truth_table() {
        let cases: &[(TypeToken, &[usize])] = &[
            (TypeToken::Null, &[0]),
            (TypeToken::Bool, &[1, 2]),
            (TypeToken::True, &[1]),
            (TypeToken::False, &[2]),
            (TypeToken::Int, &[3, 4]),
            (TypeToken::Float, &[5, 6]),
            (TypeToken::String, &[7, 8, 9, 10]),
            (TypeToken::Array, &[11, 12]),
            (TypeToken::Iterable, &[11, 12]),
            (TypeToken::Object, &[13]),
            (TypeToken::Callable, &[14]),
            (TypeToken::Numeric, &[3, 4, 5, 6, 8, 9]),
            (TypeToken::StringInt, &[8, 9]),
            (TypeToken::Empty, &[0, 2, 3, 5, 7, 8, 11]),
        ];

        let samples = samples();
        for (token, accepted) in cases {
            for (i, value) in samples.iter().enumerate() {
                assert_eq!(
                    verify(value, *token),
                    accepted.contains(&i),
                    "verify({value:?}, {token}) disagreed with the table"
                );
            }
        }
    }

    #[test]
    fn mixed_accepts_everything() {
        for value in samples() {
            assert!(verify(&value, TypeToken::Mixed));
        }
    }

    /// Every token accepts at least one sample, and every token except
    /// `mixed` rejects at least one.
    #[test]
    fn every_token_accepts_and_rejects_something() {
        let samples = samples();
        for token in TypeToken::ALL {
            assert!(
                samples.iter().any(|v| verify(v, token)),
                "{token} accepted nothing"
            );
            if token != TypeToken::Mixed {
                assert!(
                    samples.iter().any(|v| !verify(v, token)),
                    "{token} rejected nothing"
                );
            }
        }
    }

    #[test]
    fn numeric_strings() {
        for ok in ["1", "0", "-3", "+4", "1.5", ".5", "3.", "1e5", "2.5E-3", " 12 "] {
            assert!(
                verify(&Value::string(ok), TypeToken::Numeric),
                "{ok:?} should be numeric"
            );
        }
        for bad in ["", "1Abc", "abc", "0x1A", "1e", "e5", ".", "+", "1.2.3", "in"] {
            assert!(
                !verify(&Value::string(bad), TypeToken::Numeric),
                "{bad:?} should not be numeric"
            );
        }
    }

    #[test]
    fn verify_is_idempotent() {
        let value = Value::string("42");
        let first = verify(&value, TypeToken::StringInt);
        let second = verify(&value, TypeToken::StringInt);
        assert_eq!(first, second);
        assert!(first);
    }
}
