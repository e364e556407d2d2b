//! `ObjectX`: a validated object with failing field access.

use std::sync::LazyLock;

use vouch_common::error::{format_template, TypeError};
use vouch_common::value::{ObjectValue, Value};
use vouch_dispatch::{CallTarget, MethodScheme, Resolved, SchemeTable};
use vouch_types::TypeToken;

use crate::guard::{guard, template};
use crate::mixed::MixedX;

/// A value proven to be an object, with field access that narrows further.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectX {
    object: ObjectValue,
    error: Option<String>,
}

impl ObjectX {
    pub fn new(value: Value, error: Option<&str>) -> Result<Self, TypeError> {
        guard(&value, TypeToken::Object, error, template::OBJECT)?;
        match value {
            Value::Object(object) => Ok(Self {
                object,
                error: error.map(str::to_string),
            }),
            _ => unreachable!("guard verified the variant"),
        }
    }

    /// Fetch a field for further narrowing.
    pub fn get(&self, field: &str) -> Result<MixedX, TypeError> {
        match self.object.fields.get(field) {
            Some(value) => Ok(MixedX::new(value.clone())),
            None => Err(TypeError::key_not_found(field)),
        }
    }

    pub fn has(&self, field: &str) -> bool {
        self.object.fields.contains_key(field)
    }

    pub fn class_name(&self) -> &str {
        &self.object.class
    }

    /// Require the object to be of the named class.
    pub fn ensure_class(&self, class: &str) -> Result<&ObjectValue, TypeError> {
        if self.object.class == class {
            Ok(&self.object)
        } else {
            Err(TypeError::wrong_type(format_template(
                "Expected an instance of %s. Got: %s",
                &[class, &self.object.class],
            )))
        }
    }
}

static SCHEMES: LazyLock<SchemeTable> = LazyLock::new(|| {
    SchemeTable::new("ObjectX")
        .with(
            MethodScheme::new("get")
                .arg("field", "string")
                .returns_target(crate::mixed::schemes),
        )
        .with(
            MethodScheme::new("has")
                .arg("field", "string")
                .returns("bool"),
        )
        .with(MethodScheme::new("className").returns("string"))
        .with(MethodScheme::new("objectX").returns_target(schemes))
});

pub(crate) fn schemes() -> &'static SchemeTable {
    &SCHEMES
}

fn field_arg(args: &[Value]) -> Result<String, TypeError> {
    match args.first() {
        Some(Value::String(field)) => Ok(field.clone()),
        _ => Err(TypeError::argument(
            "The \"field\" argument should be a string.",
        )),
    }
}

impl CallTarget for ObjectX {
    fn schemes(&self) -> &'static SchemeTable {
        schemes()
    }

    fn unwrap_value(&self) -> Value {
        Value::Object(self.object.clone())
    }

    fn error_template(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Resolved, TypeError> {
        match method {
            "get" => self.get(&field_arg(&args)?).map(Resolved::target),
            "has" => Ok(Resolved::Value(Value::Bool(self.has(&field_arg(&args)?)))),
            "className" => Ok(Resolved::Value(Value::string(self.class_name()))),
            "objectX" => Ok(Resolved::target(self.clone())),
            _ => Err(TypeError::method_not_found(method)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ObjectX {
        ObjectX::new(
            Value::Object(
                ObjectValue::new("User")
                    .with_field("name", Value::string("ada"))
                    .with_field("age", Value::Int(37)),
            ),
            None,
        )
        .unwrap()
    }

    #[test]
    fn construction_validates() {
        assert!(ObjectX::new(Value::string("x"), None).is_err());
    }

    #[test]
    fn field_access_narrows() {
        let object = sample();
        assert_eq!(object.get("name").unwrap().string().unwrap(), "ada");
        assert_eq!(object.get("age").unwrap().int().unwrap(), 37);
        assert!(object.get("missing").is_err());
        assert!(object.has("name"));
    }

    #[test]
    fn class_checks() {
        let object = sample();
        assert_eq!(object.class_name(), "User");
        assert!(object.ensure_class("User").is_ok());
        let err = object.ensure_class("Account").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected an instance of Account. Got: User"
        );
    }
}
