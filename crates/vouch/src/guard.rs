//! The typed guard helper shared by the facade and the wrappers.

use vouch_common::error::{format_template, TypeError};
use vouch_common::value::Value;
use vouch_types::{verify, TypeToken};

/// Check one token against a value, formatting the failure message.
///
/// Built-in default templates embed the expected type in prose and take
/// one slot (the observed type); caller-supplied templates are two-slot
/// (expected type, observed type).
pub(crate) fn guard(
    value: &Value,
    token: TypeToken,
    error: Option<&str>,
    default: &str,
) -> Result<(), TypeError> {
    if verify(value, token) {
        return Ok(());
    }
    let message = match error {
        Some(template) => format_template(template, &[token.name(), value.type_name()]),
        None => format_template(default, &[value.type_name()]),
    };
    Err(TypeError::wrong_type(message))
}

/// Read an optional `null|string` error-template argument.
pub(crate) fn opt_template(value: &Value) -> Option<&str> {
    match value {
        Value::String(template) => Some(template),
        _ => None,
    }
}

/// Default guard messages, one slot each (the observed type).
pub(crate) mod template {
    pub const INT: &str = "Expected an integer. Got: %s";
    pub const FLOAT: &str = "Expected a float. Got: %s";
    pub const STRING: &str = "Expected a string. Got: %s";
    pub const BOOL: &str = "Expected a boolean. Got: %s";
    pub const NULL: &str = "Expected a null. Got: %s";
    pub const ARRAY: &str = "Expected an array. Got: %s";
    pub const OBJECT: &str = "Expected an object. Got: %s";
    pub const CALLABLE: &str = "Expected a callable. Got: %s";
    pub const ITERABLE: &str = "Expected an iterable. Got: %s";
    pub const NUMERIC: &str = "Expected a numeric value. Got: %s";
    pub const STRING_INT: &str = "Expected a digit string. Got: %s";
    pub const EMPTY: &str = "Expected an empty value. Got: %s";
    pub const TRUE: &str = "Expected true. Got: %s";
    pub const FALSE: &str = "Expected false. Got: %s";
}
