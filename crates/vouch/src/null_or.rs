//! Null-short-circuiting guards: `null|T` checks that unwrap to `Option`.

use indexmap::IndexMap;

use vouch_common::error::TypeError;
use vouch_common::value::{ArrayKey, ObjectValue, Value};
use vouch_types::TypeToken;

use crate::guard::guard;

pub fn int(value: &Value, error: Option<&str>) -> Result<Option<i64>, TypeError> {
    if matches!(value, Value::Null) {
        return Ok(None);
    }
    guard(value, TypeToken::Int, error, "Expected a null|integer. Got: %s")?;
    match value {
        Value::Int(n) => Ok(Some(*n)),
        _ => unreachable!("guard verified the variant"),
    }
}

pub fn float(value: &Value, error: Option<&str>) -> Result<Option<f64>, TypeError> {
    if matches!(value, Value::Null) {
        return Ok(None);
    }
    guard(value, TypeToken::Float, error, "Expected a null|float. Got: %s")?;
    match value {
        Value::Float(f) => Ok(Some(*f)),
        _ => unreachable!("guard verified the variant"),
    }
}

pub fn string(value: &Value, error: Option<&str>) -> Result<Option<String>, TypeError> {
    if matches!(value, Value::Null) {
        return Ok(None);
    }
    guard(value, TypeToken::String, error, "Expected a null|string. Got: %s")?;
    match value {
        Value::String(s) => Ok(Some(s.clone())),
        _ => unreachable!("guard verified the variant"),
    }
}

pub fn bool(value: &Value, error: Option<&str>) -> Result<Option<bool>, TypeError> {
    if matches!(value, Value::Null) {
        return Ok(None);
    }
    guard(value, TypeToken::Bool, error, "Expected a null|boolean. Got: %s")?;
    match value {
        Value::Bool(b) => Ok(Some(*b)),
        _ => unreachable!("guard verified the variant"),
    }
}

pub fn array(
    value: &Value,
    error: Option<&str>,
) -> Result<Option<IndexMap<ArrayKey, Value>>, TypeError> {
    if matches!(value, Value::Null) {
        return Ok(None);
    }
    guard(value, TypeToken::Array, error, "Expected a null|array. Got: %s")?;
    match value {
        Value::Array(entries) => Ok(Some(entries.clone())),
        _ => unreachable!("guard verified the variant"),
    }
}

pub fn object(value: &Value, error: Option<&str>) -> Result<Option<ObjectValue>, TypeError> {
    if matches!(value, Value::Null) {
        return Ok(None);
    }
    guard(value, TypeToken::Object, error, "Expected a null|object. Got: %s")?;
    match value {
        Value::Object(object) => Ok(Some(object.clone())),
        _ => unreachable!("guard verified the variant"),
    }
}
