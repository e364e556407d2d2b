//! The facade: typed guards and the dynamic-call entry point.

use std::sync::LazyLock;

use indexmap::IndexMap;

use vouch_common::error::TypeError;
use vouch_common::value::{ArrayKey, Callable, ObjectValue, Value};
use vouch_dispatch::{
    is_strict_type_call, is_transit_call, resolve_call, CallTarget, MethodScheme, Resolved,
    SchemeTable,
};
use vouch_types::TypeToken;

use crate::array::ArrayX;
use crate::guard::{guard, opt_template, template};
use crate::intx::IntX;
use crate::mixed::MixedX;
use crate::object::ObjectX;
use crate::stringx::StringX;

/// Stateless entry point for typed guards and dynamic calls.
///
/// The typed guards check one token and unwrap the payload; the dynamic
/// entry ([`Type::call`]) accepts strict-type names (`"nullOrInt"`) and
/// transit chains (`"arrayXGetString"`).
pub struct Type;

impl Type {
    pub fn int(value: &Value, error: Option<&str>) -> Result<i64, TypeError> {
        guard(value, TypeToken::Int, error, template::INT)?;
        match value {
            Value::Int(n) => Ok(*n),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn float(value: &Value, error: Option<&str>) -> Result<f64, TypeError> {
        guard(value, TypeToken::Float, error, template::FLOAT)?;
        match value {
            Value::Float(f) => Ok(*f),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn string(value: &Value, error: Option<&str>) -> Result<String, TypeError> {
        guard(value, TypeToken::String, error, template::STRING)?;
        match value {
            Value::String(s) => Ok(s.clone()),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn bool(value: &Value, error: Option<&str>) -> Result<bool, TypeError> {
        guard(value, TypeToken::Bool, error, template::BOOL)?;
        match value {
            Value::Bool(b) => Ok(*b),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn null(value: &Value, error: Option<&str>) -> Result<(), TypeError> {
        guard(value, TypeToken::Null, error, template::NULL)
    }

    pub fn array(
        value: &Value,
        error: Option<&str>,
    ) -> Result<IndexMap<ArrayKey, Value>, TypeError> {
        guard(value, TypeToken::Array, error, template::ARRAY)?;
        match value {
            Value::Array(entries) => Ok(entries.clone()),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn object(value: &Value, error: Option<&str>) -> Result<ObjectValue, TypeError> {
        guard(value, TypeToken::Object, error, template::OBJECT)?;
        match value {
            Value::Object(object) => Ok(object.clone()),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn callable(value: &Value, error: Option<&str>) -> Result<Callable, TypeError> {
        guard(value, TypeToken::Callable, error, template::CALLABLE)?;
        match value {
            Value::Callable(callable) => Ok(callable.clone()),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn iterable(
        value: &Value,
        error: Option<&str>,
    ) -> Result<IndexMap<ArrayKey, Value>, TypeError> {
        guard(value, TypeToken::Iterable, error, template::ITERABLE)?;
        match value {
            Value::Array(entries) => Ok(entries.clone()),
            _ => unreachable!("guard verified the variant"),
        }
    }

    /// Ints, floats, and numeric strings pass through unchanged.
    pub fn numeric(value: &Value, error: Option<&str>) -> Result<Value, TypeError> {
        guard(value, TypeToken::Numeric, error, template::NUMERIC)?;
        Ok(value.clone())
    }

    pub fn string_int(value: &Value, error: Option<&str>) -> Result<String, TypeError> {
        guard(value, TypeToken::StringInt, error, template::STRING_INT)?;
        match value {
            Value::String(s) => Ok(s.clone()),
            _ => unreachable!("guard verified the variant"),
        }
    }

    /// Values empty by the host convention pass through unchanged.
    pub fn empty(value: &Value, error: Option<&str>) -> Result<Value, TypeError> {
        guard(value, TypeToken::Empty, error, template::EMPTY)?;
        Ok(value.clone())
    }

    /// Strict identity with `true`. Named `is_true` because `true` is a
    /// keyword; the dynamic path still accepts the `"true"` token.
    pub fn is_true(value: &Value, error: Option<&str>) -> Result<bool, TypeError> {
        guard(value, TypeToken::True, error, template::TRUE)?;
        Ok(true)
    }

    /// Strict identity with `false`.
    pub fn is_false(value: &Value, error: Option<&str>) -> Result<bool, TypeError> {
        guard(value, TypeToken::False, error, template::FALSE)?;
        Ok(false)
    }

    pub fn mixed_x(value: Value) -> MixedX {
        MixedX::new(value)
    }

    pub fn array_x(value: Value, error: Option<&str>) -> Result<ArrayX, TypeError> {
        ArrayX::new(value, error)
    }

    pub fn object_x(value: Value, error: Option<&str>) -> Result<ObjectX, TypeError> {
        ObjectX::new(value, error)
    }

    pub fn int_x(value: Value, error: Option<&str>) -> Result<IntX, TypeError> {
        IntX::new(value, error)
    }

    pub fn string_x(value: Value, error: Option<&str>) -> Result<StringX, TypeError> {
        StringX::new(value, error)
    }

    /// The dynamic entry point: strict-type names and transit chains.
    pub fn call(name: &str, args: Vec<Value>) -> Result<Resolved, TypeError> {
        resolve_call(name, args, Box::new(Root))
    }

    /// Whether [`Type::call`] can resolve `name`.
    pub fn supports(name: &str) -> bool {
        is_strict_type_call(name) || is_transit_call(name, root_schemes())
    }
}

/// The dispatch target behind [`Type::call`]. Carries no state; chains
/// start here and thread their first argument into a wrapper.
#[derive(Debug, Clone, Copy)]
struct Root;

static ROOT_SCHEMES: LazyLock<SchemeTable> = LazyLock::new(|| {
    SchemeTable::new("Type")
        .with(
            MethodScheme::new("mixedX")
                .arg("value", "mixed")
                .returns_target(crate::mixed::schemes),
        )
        .with(
            MethodScheme::new("arrayX")
                .arg("value", "mixed")
                .arg("error", "null|string")
                .default_value(Value::Null)
                .returns_target(crate::array::schemes),
        )
        .with(
            MethodScheme::new("objectX")
                .arg("value", "mixed")
                .arg("error", "null|string")
                .default_value(Value::Null)
                .returns_target(crate::object::schemes),
        )
        .with(
            MethodScheme::new("intX")
                .arg("value", "mixed")
                .arg("error", "null|string")
                .default_value(Value::Null)
                .returns_target(crate::intx::schemes),
        )
        .with(
            MethodScheme::new("stringX")
                .arg("value", "mixed")
                .arg("error", "null|string")
                .default_value(Value::Null)
                .returns_target(crate::stringx::schemes),
        )
});

pub(crate) fn root_schemes() -> &'static SchemeTable {
    &ROOT_SCHEMES
}

impl CallTarget for Root {
    fn schemes(&self) -> &'static SchemeTable {
        root_schemes()
    }

    fn unwrap_value(&self) -> Value {
        // The root narrows no value; a chain always enters a wrapper
        // before any trailing type check can run.
        Value::Null
    }

    fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Resolved, TypeError> {
        let mut args = args.into_iter();
        let value = args.next().ok_or_else(|| {
            TypeError::argument(format!(
                "The first argument of the \"{method}\" method should be a value."
            ))
        })?;
        let error_arg = args.next().unwrap_or(Value::Null);
        let error = opt_template(&error_arg);

        match method {
            "mixedX" => Ok(Resolved::target(MixedX::new(value))),
            "arrayX" => ArrayX::new(value, error).map(Resolved::target),
            "objectX" => ObjectX::new(value, error).map(Resolved::target),
            "intX" => IntX::new(value, error).map(Resolved::target),
            "stringX" => StringX::new(value, error).map(Resolved::target),
            _ => Err(TypeError::method_not_found(method)),
        }
    }
}
