//! Runtime value-type assertion and fluent type-narrowing.
//!
//! Callers pass a dynamic [`Value`] and a type expression (`"int"`,
//! `"null|string"`, `"not int"`) and receive the value back validated, or
//! a [`TypeError`] describing the mismatch:
//!
//! ```
//! use vouch::{ensure, Type, Value};
//!
//! let five = ensure(Value::Int(5), "null|int", None).unwrap();
//! assert_eq!(five, Value::Int(5));
//!
//! let name = Type::mixed_x(Value::string("ada")).string().unwrap();
//! assert_eq!(name, "ada");
//! ```
//!
//! A single camel-case call name can also bundle a whole chain of
//! accessor steps plus a trailing type check:
//!
//! ```
//! use vouch::{Type, Value};
//!
//! let map = Value::array([("key0", Value::string("value0"))]);
//! let got = Type::call("arrayXGetString", vec![map, Value::string("key0")])
//!     .unwrap()
//!     .into_value();
//! assert_eq!(got, Value::string("value0"));
//! ```

mod array;
mod facade;
mod guard;
mod intx;
mod mixed;
pub mod null_or;
mod object;
mod stringx;

pub use array::ArrayX;
pub use facade::Type;
pub use intx::IntX;
pub use mixed::MixedX;
pub use object::ObjectX;
pub use stringx::StringX;

pub use vouch_common::error::{ParseError, ParseErrorKind, TypeError};
pub use vouch_common::span::Span;
pub use vouch_common::value::{ArrayKey, Callable, ObjectValue, Value};
pub use vouch_dispatch::{
    call_transit, is_strict_type_call, is_transit_call, resolve_call, strict_type_call,
    CallTarget, MethodArg, MethodScheme, Resolved, SchemeReturn, SchemeTable,
};
pub use vouch_expr::{ensure, parse, TypeExpr};
pub use vouch_types::{has_type, verify, TypeToken};

/// Look up and apply a type token by name, failing on unregistered names.
pub fn verify_name(value: &Value, name: &str) -> Result<bool, TypeError> {
    match TypeToken::from_name(name) {
        Some(token) => Ok(verify(value, token)),
        None => Err(TypeError::Parse(ParseError::new(
            ParseErrorKind::UnknownType(name.to_string()),
            Span::new(0, name.len() as u32),
        ))),
    }
}
