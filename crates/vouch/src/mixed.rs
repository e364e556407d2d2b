//! `MixedX`: fluent narrowing of a single dynamic value.

use std::sync::LazyLock;

use indexmap::IndexMap;

use vouch_common::error::TypeError;
use vouch_common::value::{ArrayKey, Callable, ObjectValue, Value};
use vouch_dispatch::{CallTarget, MethodScheme, Resolved, SchemeTable};
use vouch_expr::parse;
use vouch_types::TypeToken;

use crate::array::ArrayX;
use crate::guard::{guard, opt_template, template};
use crate::intx::IntX;
use crate::object::ObjectX;
use crate::stringx::StringX;

/// A value of unknown type with fluent, failing accessors.
///
/// Each accessor checks the wrapped value and unwraps it, raising
/// `WrongType` on mismatch. An error template attached with
/// [`MixedX::error_if_not`] overrides the default message of every
/// subsequent check.
#[derive(Debug, Clone, PartialEq)]
pub struct MixedX {
    value: Value,
    error: Option<String>,
}

impl MixedX {
    pub fn new(value: Value) -> Self {
        Self { value, error: None }
    }

    /// Attach (or clear) the custom error template used by later checks.
    pub fn error_if_not(mut self, error: Option<&str>) -> Self {
        self.error = error.map(str::to_string);
        self
    }

    pub fn int(&self) -> Result<i64, TypeError> {
        guard(&self.value, TypeToken::Int, self.error.as_deref(), template::INT)?;
        match self.value {
            Value::Int(n) => Ok(n),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn float(&self) -> Result<f64, TypeError> {
        guard(&self.value, TypeToken::Float, self.error.as_deref(), template::FLOAT)?;
        match self.value {
            Value::Float(f) => Ok(f),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn string(&self) -> Result<String, TypeError> {
        guard(&self.value, TypeToken::String, self.error.as_deref(), template::STRING)?;
        match &self.value {
            Value::String(s) => Ok(s.clone()),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn bool(&self) -> Result<bool, TypeError> {
        guard(&self.value, TypeToken::Bool, self.error.as_deref(), template::BOOL)?;
        match self.value {
            Value::Bool(b) => Ok(b),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn null(&self) -> Result<(), TypeError> {
        guard(&self.value, TypeToken::Null, self.error.as_deref(), template::NULL)
    }

    pub fn array(&self) -> Result<IndexMap<ArrayKey, Value>, TypeError> {
        guard(&self.value, TypeToken::Array, self.error.as_deref(), template::ARRAY)?;
        match &self.value {
            Value::Array(entries) => Ok(entries.clone()),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn object(&self) -> Result<ObjectValue, TypeError> {
        guard(&self.value, TypeToken::Object, self.error.as_deref(), template::OBJECT)?;
        match &self.value {
            Value::Object(object) => Ok(object.clone()),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn callable(&self) -> Result<Callable, TypeError> {
        guard(&self.value, TypeToken::Callable, self.error.as_deref(), template::CALLABLE)?;
        match &self.value {
            Value::Callable(callable) => Ok(callable.clone()),
            _ => unreachable!("guard verified the variant"),
        }
    }

    /// The wrapped value, unchecked.
    pub fn mixed(&self) -> Value {
        self.value.clone()
    }

    pub fn array_x(&self) -> Result<ArrayX, TypeError> {
        ArrayX::new(self.value.clone(), self.error.as_deref())
    }

    pub fn object_x(&self) -> Result<ObjectX, TypeError> {
        ObjectX::new(self.value.clone(), self.error.as_deref())
    }

    pub fn int_x(&self) -> Result<IntX, TypeError> {
        IntX::new(self.value.clone(), self.error.as_deref())
    }

    pub fn string_x(&self) -> Result<StringX, TypeError> {
        StringX::new(self.value.clone(), self.error.as_deref())
    }

    /// Non-throwing check of the value against a type expression.
    pub fn is(&self, expression: &str) -> Result<bool, TypeError> {
        let expr = parse(expression)?;
        Ok(expr.matches(&self.value))
    }
}

static SCHEMES: LazyLock<SchemeTable> = LazyLock::new(|| {
    SchemeTable::new("MixedX")
        .with(MethodScheme::new("int").returns("int"))
        .with(MethodScheme::new("float").returns("float"))
        .with(MethodScheme::new("string").returns("string"))
        .with(MethodScheme::new("bool").returns("bool"))
        .with(MethodScheme::new("null").returns("null"))
        .with(MethodScheme::new("array").returns("array"))
        .with(MethodScheme::new("object").returns("object"))
        .with(MethodScheme::new("callable").returns("callable"))
        .with(MethodScheme::new("mixed").returns("mixed"))
        .with(MethodScheme::new("mixedX").returns_target(schemes))
        .with(MethodScheme::new("arrayX").returns_target(crate::array::schemes))
        .with(MethodScheme::new("objectX").returns_target(crate::object::schemes))
        .with(MethodScheme::new("intX").returns_target(crate::intx::schemes))
        .with(MethodScheme::new("stringX").returns_target(crate::stringx::schemes))
        .with(
            MethodScheme::new("errorIfNot")
                .arg("error", "null|string")
                .returns_target(schemes),
        )
        .with(
            MethodScheme::new("is")
                .arg("expression", "string")
                .returns("bool"),
        )
});

pub(crate) fn schemes() -> &'static SchemeTable {
    &SCHEMES
}

impl CallTarget for MixedX {
    fn schemes(&self) -> &'static SchemeTable {
        schemes()
    }

    fn unwrap_value(&self) -> Value {
        self.value.clone()
    }

    fn error_template(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Resolved, TypeError> {
        match method {
            "int" => self.int().map(Value::Int).map(Resolved::Value),
            "float" => self.float().map(Value::Float).map(Resolved::Value),
            "string" => self.string().map(Value::String).map(Resolved::Value),
            "bool" => self.bool().map(Value::Bool).map(Resolved::Value),
            "null" => self.null().map(|()| Resolved::Value(Value::Null)),
            "array" => self.array().map(Value::Array).map(Resolved::Value),
            "object" => self.object().map(Value::Object).map(Resolved::Value),
            "callable" => self.callable().map(Value::Callable).map(Resolved::Value),
            "mixed" => Ok(Resolved::Value(self.mixed())),
            "mixedX" => Ok(Resolved::target(self.clone())),
            "arrayX" => self.array_x().map(Resolved::target),
            "objectX" => self.object_x().map(Resolved::target),
            "intX" => self.int_x().map(Resolved::target),
            "stringX" => self.string_x().map(Resolved::target),
            "errorIfNot" => {
                let template = args.first().and_then(opt_template);
                Ok(Resolved::target(self.clone().error_if_not(template)))
            }
            "is" => {
                let Some(Value::String(expression)) = args.first() else {
                    return Err(TypeError::argument(
                        "The \"expression\" argument of the \"is\" method should be a string.",
                    ));
                };
                self.is(expression)
                    .map(Value::Bool)
                    .map(Resolved::Value)
            }
            _ => Err(TypeError::method_not_found(method)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_narrow_or_fail() {
        let mixed = MixedX::new(Value::Int(5));
        assert_eq!(mixed.int().unwrap(), 5);
        assert!(mixed.string().is_err());
        assert_eq!(mixed.mixed(), Value::Int(5));
    }

    #[test]
    fn default_messages_name_the_expectation() {
        let err = MixedX::new(Value::Null).int().unwrap_err();
        assert_eq!(err.to_string(), "Expected an integer. Got: NULL");
    }

    #[test]
    fn custom_template_overrides_the_default() {
        let err = MixedX::new(Value::Null)
            .error_if_not(Some("Custom error [%s type, given %s]"))
            .int()
            .unwrap_err();
        assert_eq!(err.to_string(), "Custom error [int type, given NULL]");
    }

    #[test]
    fn is_checks_without_raising() {
        let mixed = MixedX::new(Value::string("12"));
        assert!(mixed.is("string&numeric").unwrap());
        assert!(!mixed.is("int").unwrap());
        assert!(mixed.is("nope").is_err());
    }
}
