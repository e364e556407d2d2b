//! `StringX`: a validated string with length and pattern refinements.

use std::sync::LazyLock;

use regex::Regex;

use vouch_common::error::{format_template, TypeError};
use vouch_common::value::Value;
use vouch_dispatch::{CallTarget, MethodScheme, Resolved, SchemeTable};
use vouch_types::TypeToken;

use crate::guard::{guard, template};

/// A value proven to be a string, refinable by length and pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct StringX {
    value: String,
    error: Option<String>,
}

impl StringX {
    pub fn new(value: Value, error: Option<&str>) -> Result<Self, TypeError> {
        guard(&value, TypeToken::String, error, template::STRING)?;
        match value {
            Value::String(value) => Ok(Self {
                value,
                error: error.map(str::to_string),
            }),
            _ => unreachable!("guard verified the variant"),
        }
    }

    pub fn string(&self) -> String {
        self.value.clone()
    }

    /// Require the byte length to be within `min..=max`.
    pub fn length(&self, min: usize, max: usize) -> Result<String, TypeError> {
        let length = self.value.len();
        if length < min || length > max {
            return Err(TypeError::wrong_type(format_template(
                "Expected a value to contain between %s and %s characters. Got: %s",
                &[&min.to_string(), &max.to_string(), &length.to_string()],
            )));
        }
        Ok(self.value.clone())
    }

    pub fn length_min(&self, min: usize) -> Result<String, TypeError> {
        let length = self.value.len();
        if length < min {
            return Err(TypeError::wrong_type(format_template(
                "Expected a value to contain at least %s characters. Got: %s",
                &[&min.to_string(), &length.to_string()],
            )));
        }
        Ok(self.value.clone())
    }

    pub fn length_max(&self, max: usize) -> Result<String, TypeError> {
        let length = self.value.len();
        if length > max {
            return Err(TypeError::wrong_type(format_template(
                "Expected a value to contain at most %s characters. Got: %s",
                &[&max.to_string(), &length.to_string()],
            )));
        }
        Ok(self.value.clone())
    }

    pub fn length_eq(&self, expected: usize) -> Result<String, TypeError> {
        let length = self.value.len();
        if length != expected {
            return Err(TypeError::wrong_type(format_template(
                "Expected a value to contain %s characters. Got: %s",
                &[&expected.to_string(), &length.to_string()],
            )));
        }
        Ok(self.value.clone())
    }

    /// Require the value to match a regular expression. An invalid
    /// pattern is an argument error, not a type failure.
    pub fn pattern(&self, pattern: &str) -> Result<String, TypeError> {
        let regex = Regex::new(pattern).map_err(|err| {
            TypeError::argument(format!("Invalid pattern {pattern:?}: {err}"))
        })?;
        if !regex.is_match(&self.value) {
            return Err(TypeError::wrong_type(format_template(
                "The value does not match the expected pattern %s.",
                &[pattern],
            )));
        }
        Ok(self.value.clone())
    }
}

static SCHEMES: LazyLock<SchemeTable> = LazyLock::new(|| {
    SchemeTable::new("StringX")
        .with(MethodScheme::new("string").returns("string"))
        .with(
            MethodScheme::new("length")
                .arg("min", "int")
                .arg("max", "int")
                .returns("string"),
        )
        .with(MethodScheme::new("lengthMin").arg("min", "int").returns("string"))
        .with(MethodScheme::new("lengthMax").arg("max", "int").returns("string"))
        .with(MethodScheme::new("lengthEq").arg("length", "int").returns("string"))
        .with(
            MethodScheme::new("pattern")
                .arg("pattern", "string")
                .returns("string"),
        )
        .with(MethodScheme::new("stringX").returns_target(schemes))
});

pub(crate) fn schemes() -> &'static SchemeTable {
    &SCHEMES
}

fn usize_arg(args: &[Value], index: usize) -> Result<usize, TypeError> {
    match args.get(index) {
        Some(Value::Int(n)) if *n >= 0 => Ok(*n as usize),
        _ => Err(TypeError::argument(
            "Expected a non-negative integer argument.",
        )),
    }
}

impl CallTarget for StringX {
    fn schemes(&self) -> &'static SchemeTable {
        schemes()
    }

    fn unwrap_value(&self) -> Value {
        Value::String(self.value.clone())
    }

    fn error_template(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Resolved, TypeError> {
        let value = match method {
            "string" => Ok(self.string()),
            "length" => self.length(usize_arg(&args, 0)?, usize_arg(&args, 1)?),
            "lengthMin" => self.length_min(usize_arg(&args, 0)?),
            "lengthMax" => self.length_max(usize_arg(&args, 0)?),
            "lengthEq" => self.length_eq(usize_arg(&args, 0)?),
            "pattern" => {
                let Some(Value::String(pattern)) = args.first() else {
                    return Err(TypeError::argument(
                        "The \"pattern\" argument should be a string.",
                    ));
                };
                self.pattern(pattern)
            }
            "stringX" => return Ok(Resolved::target(self.clone())),
            _ => return Err(TypeError::method_not_found(method)),
        };
        value.map(Value::String).map(Resolved::Value)
    }
}
