//! `ArrayX`: a validated array with failing element access.

use std::sync::LazyLock;

use indexmap::IndexMap;

use vouch_common::error::TypeError;
use vouch_common::value::{ArrayKey, Value};
use vouch_dispatch::{CallTarget, MethodScheme, Resolved, SchemeTable};
use vouch_types::TypeToken;

use crate::guard::{guard, template};
use crate::mixed::MixedX;

/// A value proven to be an array, with keyed access that narrows further.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayX {
    entries: IndexMap<ArrayKey, Value>,
    error: Option<String>,
}

impl ArrayX {
    /// Validate `value` as an array, keeping `error` as the template for
    /// later checks in a chain.
    pub fn new(value: Value, error: Option<&str>) -> Result<Self, TypeError> {
        guard(&value, TypeToken::Array, error, template::ARRAY)?;
        match value {
            Value::Array(entries) => Ok(Self {
                entries,
                error: error.map(str::to_string),
            }),
            _ => unreachable!("guard verified the variant"),
        }
    }

    /// Fetch an entry for further narrowing. A missing key is
    /// `KeyNotFound`, not a type failure.
    pub fn get(&self, key: impl Into<ArrayKey>) -> Result<MixedX, TypeError> {
        let key = key.into();
        match self.entries.get(&key) {
            Some(value) => Ok(MixedX::new(value.clone())),
            None => Err(TypeError::key_not_found(key.to_string())),
        }
    }

    pub fn has(&self, key: impl Into<ArrayKey>) -> bool {
        self.entries.contains_key(&key.into())
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &IndexMap<ArrayKey, Value> {
        &self.entries
    }
}

static SCHEMES: LazyLock<SchemeTable> = LazyLock::new(|| {
    SchemeTable::new("ArrayX")
        .with(
            MethodScheme::new("get")
                .arg("key", "int|string")
                .returns_target(crate::mixed::schemes),
        )
        .with(
            MethodScheme::new("has")
                .arg("key", "int|string")
                .returns("bool"),
        )
        .with(MethodScheme::new("count").returns("int"))
        // Identity re-entry, so chains addressed at a wrapper instance
        // (`arrayXGetString` on an `ArrayX`) resolve.
        .with(MethodScheme::new("arrayX").returns_target(schemes))
});

pub(crate) fn schemes() -> &'static SchemeTable {
    &SCHEMES
}

/// Convert a scheme-validated `int|string` argument into an array key.
fn key_arg(args: &[Value]) -> Result<ArrayKey, TypeError> {
    match args.first() {
        Some(Value::Int(i)) => Ok(ArrayKey::Int(*i)),
        Some(Value::String(s)) => Ok(ArrayKey::Str(s.clone())),
        _ => Err(TypeError::argument(
            "The \"key\" argument should be an int or a string.",
        )),
    }
}

impl CallTarget for ArrayX {
    fn schemes(&self) -> &'static SchemeTable {
        schemes()
    }

    fn unwrap_value(&self) -> Value {
        Value::Array(self.entries.clone())
    }

    fn error_template(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Resolved, TypeError> {
        match method {
            "get" => self.get(key_arg(&args)?).map(Resolved::target),
            "has" => Ok(Resolved::Value(Value::Bool(self.has(key_arg(&args)?)))),
            "count" => Ok(Resolved::Value(Value::Int(self.count() as i64))),
            "arrayX" => Ok(Resolved::target(self.clone())),
            _ => Err(TypeError::method_not_found(method)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArrayX {
        ArrayX::new(
            Value::array([
                ("key0", Value::string("value0")),
                ("key1", Value::Int(12345)),
            ]),
            None,
        )
        .unwrap()
    }

    #[test]
    fn construction_validates() {
        assert!(ArrayX::new(Value::Int(3), None).is_err());
        assert_eq!(sample().count(), 2);
    }

    #[test]
    fn get_narrows_entries() {
        let array = sample();
        assert_eq!(array.get("key0").unwrap().string().unwrap(), "value0");
        assert_eq!(array.get("key1").unwrap().int().unwrap(), 12345);
        assert!(array.get("key1").unwrap().string().is_err());
    }

    #[test]
    fn missing_keys_are_key_not_found() {
        let err = sample().get("missing").unwrap_err();
        assert_eq!(err, TypeError::key_not_found("missing"));
    }

    #[test]
    fn has_and_count() {
        let array = sample();
        assert!(array.has("key0"));
        assert!(!array.has(0i64));
        assert_eq!(array.count(), 2);
    }
}
