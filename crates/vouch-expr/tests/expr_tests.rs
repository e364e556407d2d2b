use insta::assert_snapshot;
use vouch_common::error::TypeError;
use vouch_common::value::Value;
use vouch_expr::{ensure, parse};

// ── Precedence ───────────────────────────────────────────────────────────

#[test]
fn or_of_and_evaluates_with_correct_grouping() {
    // int OR (string AND numeric): a numeric string passes via the
    // and-branch, a non-numeric string does not.
    let expr = parse("int|string&numeric").unwrap();
    assert!(expr.matches(&Value::Int(3)));
    assert!(expr.matches(&Value::string("12")));
    assert!(!expr.matches(&Value::string("x")));
    assert!(!expr.matches(&Value::Float(1.5)));
}

#[test]
fn and_of_identical_types_is_the_type() {
    let expr = parse("int|string&string").unwrap();
    assert!(expr.matches(&Value::Int(1)));
    assert!(expr.matches(&Value::string("s")));
    assert!(!expr.matches(&Value::Null));
}

#[test]
fn negation_in_clauses() {
    // Anything but null, as long as it is not an array either.
    let expr = parse("not null&not array").unwrap();
    assert!(expr.matches(&Value::Int(1)));
    assert!(!expr.matches(&Value::Null));
    assert!(!expr.matches(&Value::array::<i64, _>([])));
}

// ── Display ──────────────────────────────────────────────────────────────

#[test]
fn display_round_trips_through_parse() {
    for source in ["int", "not null", "null|int", "not null&int|string"] {
        let expr = parse(source).unwrap();
        assert_eq!(parse(&expr.to_string()).unwrap(), expr, "{source}");
    }
}

// ── ensure ───────────────────────────────────────────────────────────────

#[test]
fn ensure_returns_the_value_unchanged() {
    let value = Value::array::<i64, _>([]);
    assert_eq!(ensure(value.clone(), "array", None).unwrap(), value);
}

#[test]
fn ensure_reports_expression_and_observed_type() {
    let err = ensure(Value::Int(3), "array", None).unwrap_err();
    assert_snapshot!(err, @"The value should be one of types array. Got: integer");
}

#[test]
fn ensure_honors_a_custom_template() {
    let err = ensure(Value::Null, "string", Some("Expected %s. Got: %s")).unwrap_err();
    assert_snapshot!(err, @"Expected string. Got: NULL");
}

#[test]
fn ensure_fails_fast_on_unknown_types() {
    let err = ensure(Value::Int(3), "int|nope", None).unwrap_err();
    assert!(matches!(err, TypeError::Parse(_)));
    assert_snapshot!(err, @"invalid type expression: unknown type: nope");
}
