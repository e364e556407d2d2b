//! The dynamic value model.
//!
//! `Value` is the closed set of runtime shapes the library can assert on:
//! scalars, insertion-ordered arrays keyed by ints or strings, objects
//! (a class name plus fields), and opaque callables. Every predicate in
//! `vouch-types` is a total function over this enum.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Key of an array entry. Arrays are keyed by integers or strings, and
/// the two key spaces are distinct (`1` and `"1"` address different slots).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(i) => write!(f, "{i}"),
            ArrayKey::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(key: i64) -> Self {
        ArrayKey::Int(key)
    }
}

impl From<&str> for ArrayKey {
    fn from(key: &str) -> Self {
        ArrayKey::Str(key.to_string())
    }
}

impl From<String> for ArrayKey {
    fn from(key: String) -> Self {
        ArrayKey::Str(key)
    }
}

/// An object value: a class name plus ordered named fields.
///
/// The model carries class names rather than a class hierarchy; identity
/// checks compare the name, and error messages report it.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValue {
    pub class: String,
    pub fields: IndexMap<String, Value>,
}

impl ObjectValue {
    /// Create an object of the given class with no fields.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }
}

/// An opaque callable value.
///
/// Callables are shared closures over `&[Value]`. Equality is identity
/// (`Arc::ptr_eq`): two callables are equal only if they are the same
/// allocation.
#[derive(Clone)]
pub struct Callable(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl Callable {
    /// Wrap a closure as a callable value.
    pub fn new(f: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the callable.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A dynamically typed runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Insertion-ordered array keyed by ints or strings.
    Array(IndexMap<ArrayKey, Value>),
    Object(ObjectValue),
    Callable(Callable),
}

impl Value {
    /// Build an array value from key/value pairs, preserving order.
    pub fn array<K, I>(entries: I) -> Value
    where
        K: Into<ArrayKey>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Array(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Build a string value.
    pub fn string(s: impl Into<String>) -> Value {
        Value::String(s.into())
    }

    /// The observed runtime type name used in error messages.
    ///
    /// Names follow the host-language reporting convention: `"integer"`,
    /// `"double"`, `"boolean"`, `"NULL"`, the class name for objects,
    /// and `"Closure"` for callables.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "double",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(obj) => &obj.class,
            Value::Callable(_) => "Closure",
        }
    }
}

/// Convert a JSON document into the value model.
///
/// Numbers become `Int` when they fit in `i64`, `Float` otherwise. JSON
/// arrays become int-keyed arrays; JSON objects become string-keyed arrays
/// (the associative-array convention — objects in this model are built
/// explicitly via [`ObjectValue`]).
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (ArrayKey::Int(i as i64), Value::from(v)))
                    .collect(),
            ),
            serde_json::Value::Object(map) => Value::Array(
                map.into_iter()
                    .map(|(k, v)| (ArrayKey::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(Value::Null.type_name(), "NULL");
        assert_eq!(Value::Bool(true).type_name(), "boolean");
        assert_eq!(Value::Int(1).type_name(), "integer");
        assert_eq!(Value::Float(1.5).type_name(), "double");
        assert_eq!(Value::string("x").type_name(), "string");
        assert_eq!(Value::array::<i64, _>([]).type_name(), "array");
        assert_eq!(
            Value::Object(ObjectValue::new("stdClass")).type_name(),
            "stdClass"
        );
        assert_eq!(
            Value::Callable(Callable::new(|_| Value::Null)).type_name(),
            "Closure"
        );
    }

    #[test]
    fn array_keys_are_distinct_spaces() {
        let arr = Value::array([
            (ArrayKey::Int(1), Value::string("int-keyed")),
            (ArrayKey::Str("1".into()), Value::string("str-keyed")),
        ]);
        let Value::Array(map) = arr else { unreachable!() };
        assert_eq!(map.len(), 2);
        assert_eq!(map[&ArrayKey::Int(1)], Value::string("int-keyed"));
        assert_eq!(map[&ArrayKey::Str("1".into())], Value::string("str-keyed"));
    }

    #[test]
    fn callable_equality_is_identity() {
        let a = Callable::new(|_| Value::Null);
        let b = Callable::new(|_| Value::Null);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn callable_invokes() {
        let double = Callable::new(|args| match args {
            [Value::Int(n)] => Value::Int(n * 2),
            _ => Value::Null,
        });
        assert_eq!(double.call(&[Value::Int(21)]), Value::Int(42));
    }

    #[test]
    fn from_json_scalars() {
        assert_eq!(Value::from(serde_json::json!(null)), Value::Null);
        assert_eq!(Value::from(serde_json::json!(true)), Value::Bool(true));
        assert_eq!(Value::from(serde_json::json!(3)), Value::Int(3));
        assert_eq!(Value::from(serde_json::json!(1.25)), Value::Float(1.25));
        assert_eq!(Value::from(serde_json::json!("hi")), Value::string("hi"));
    }

    #[test]
    fn from_json_containers() {
        let value = Value::from(serde_json::json!({"key0": ["a", 1]}));
        let Value::Array(map) = value else { unreachable!() };
        let Value::Array(inner) = &map[&ArrayKey::Str("key0".into())] else {
            unreachable!()
        };
        assert_eq!(inner[&ArrayKey::Int(0)], Value::string("a"));
        assert_eq!(inner[&ArrayKey::Int(1)], Value::Int(1));
    }
}
