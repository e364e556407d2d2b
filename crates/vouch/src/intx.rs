//! `IntX`: a validated integer with range refinements.

use std::sync::LazyLock;

use vouch_common::error::{format_template, TypeError};
use vouch_common::value::Value;
use vouch_dispatch::{CallTarget, MethodScheme, Resolved, SchemeTable};
use vouch_types::TypeToken;

use crate::guard::{guard, template};

/// A value proven to be an integer, refinable by comparisons.
#[derive(Debug, Clone, PartialEq)]
pub struct IntX {
    value: i64,
    error: Option<String>,
}

impl IntX {
    pub fn new(value: Value, error: Option<&str>) -> Result<Self, TypeError> {
        guard(&value, TypeToken::Int, error, template::INT)?;
        match value {
            Value::Int(value) => Ok(Self {
                value,
                error: error.map(str::to_string),
            }),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn int(&self) -> i64 {
        self.value
    }

    /// Require `min <= value <= max`.
    pub fn range(&self, min: i64, max: i64) -> Result<i64, TypeError> {
        if self.value < min || self.value > max {
            return Err(self.refinement_error(format_template(
                "Expected a value between %s and %s. Got: %s",
                &[&min.to_string(), &max.to_string(), &self.value.to_string()],
            )));
        }
        Ok(self.value)
    }

    pub fn greater(&self, than: i64) -> Result<i64, TypeError> {
        if self.value <= than {
            return Err(self.refinement_error(format_template(
                "Expected a value greater than %s. Got: %s",
                &[&than.to_string(), &self.value.to_string()],
            )));
        }
        Ok(self.value)
    }

    pub fn greater_eq(&self, than: i64) -> Result<i64, TypeError> {
        if self.value < than {
            return Err(self.refinement_error(format_template(
                "Expected a value greater than or equal to %s. Got: %s",
                &[&than.to_string(), &self.value.to_string()],
            )));
        }
        Ok(self.value)
    }

    pub fn less(&self, than: i64) -> Result<i64, TypeError> {
        if self.value >= than {
            return Err(self.refinement_error(format_template(
                "Expected a value less than %s. Got: %s",
                &[&than.to_string(), &self.value.to_string()],
            )));
        }
        Ok(self.value)
    }

    pub fn less_eq(&self, than: i64) -> Result<i64, TypeError> {
        if self.value > than {
            return Err(self.refinement_error(format_template(
                "Expected a value less than or equal to %s. Got: %s",
                &[&than.to_string(), &self.value.to_string()],
            )));
        }
        Ok(self.value)
    }

    fn refinement_error(&self, default: String) -> TypeError {
        match &self.error {
            Some(custom) => TypeError::wrong_type(format_template(
                custom,
                &["int", &self.value.to_string()],
            )),
            None => TypeError::wrong_type(default),
        }
    }
}

static SCHEMES: LazyLock<SchemeTable> = LazyLock::new(|| {
    SchemeTable::new("IntX")
        .with(MethodScheme::new("int").returns("int"))
        .with(
            MethodScheme::new("range")
                .arg("min", "int")
                .arg("max", "int")
                .returns("int"),
        )
        .with(MethodScheme::new("greater").arg("than", "int").returns("int"))
        .with(MethodScheme::new("greaterEq").arg("than", "int").returns("int"))
        .with(MethodScheme::new("less").arg("than", "int").returns("int"))
        .with(MethodScheme::new("lessEq").arg("than", "int").returns("int"))
        .with(MethodScheme::new("intX").returns_target(schemes))
});

pub(crate) fn schemes() -> &'static SchemeTable {
    &SCHEMES
}

fn int_arg(args: &[Value], index: usize) -> Result<i64, TypeError> {
    match args.get(index) {
        Some(Value::Int(n)) => Ok(*n),
        _ => Err(TypeError::argument("Expected an integer argument.")),
    }
}

impl CallTarget for IntX {
    fn schemes(&self) -> &'static SchemeTable {
        schemes()
    }

    fn unwrap_value(&self) -> Value {
        Value::Int(self.value)
    }

    fn error_template(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Resolved, TypeError> {
        let value = match method {
            "int" => Ok(self.int()),
            "range" => self.range(int_arg(&args, 0)?, int_arg(&args, 1)?),
            "greater" => self.greater(int_arg(&args, 0)?),
            "greaterEq" => self.greater_eq(int_arg(&args, 0)?),
            "less" => self.less(int_arg(&args, 0)?),
            "lessEq" => self.less_eq(int_arg(&args, 0)?),
            "intX" => return Ok(Resolved::target(self.clone())),
            _ => return Err(TypeError::method_not_found(method)),
        };
        value.map(Value::Int).map(Resolved::Value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intx(value: i64) -> IntX {
        IntX::new(Value::Int(value), None).unwrap()
    }

    #[test]
    fn construction_validates() {
        assert!(IntX::new(Value::string("5"), None).is_err());
        assert_eq!(intx(5).int(), 5);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert_eq!(intx(5).range(5, 10).unwrap(), 5);
        assert_eq!(intx(10).range(5, 10).unwrap(), 10);
        assert!(intx(4).range(5, 10).is_err());
        assert!(intx(11).range(5, 10).is_err());
    }

    #[test]
    fn comparisons() {
        assert_eq!(intx(5).greater(4).unwrap(), 5);
        assert!(intx(5).greater(5).is_err());
        assert_eq!(intx(5).greater_eq(5).unwrap(), 5);
        assert_eq!(intx(5).less(6).unwrap(), 5);
        assert!(intx(5).less(5).is_err());
        assert_eq!(intx(5).less_eq(5).unwrap(), 5);
    }

    #[test]
    fn range_error_names_the_bounds() {
        let err = intx(11).range(5, 10).unwrap_err();
        assert_eq!(err.to_string(), "Expected a value between 5 and 10. Got: 11");
    }
}
