//! Type-expression engine: lexer, parser, and evaluator.
//!
//! A type expression combines registered type tokens with the negation
//! modifier `not` and the clause operators `&` (conjunction) and `|`
//! (disjunction), with `|` binding looser than `&`:
//!
//! - `"int"` — the value is an int
//! - `"null|string"` — the value is null or a string
//! - `"not int"` — the value is anything but an int
//! - `"int|string&numeric"` — an int, or a numeric string
//!
//! [`parse`] compiles an expression string into a [`TypeExpr`] tree,
//! validating every token against the registry up front; evaluation is a
//! short-circuiting walk via [`TypeExpr::matches`]. [`ensure`] combines
//! the two into the guard clause every accessor uses.

pub mod ast;
mod eval;
pub mod lexer;
pub mod parser;

pub use ast::TypeExpr;
pub use lexer::{tokenize, ExprToken, ExprTokenKind};
pub use parser::parse;

use vouch_common::error::{format_template, TypeError, WRONG_TYPE_TEMPLATE};
use vouch_common::value::Value;

/// Check `value` against `expression`, returning the value unchanged on
/// success and a `WrongType` failure otherwise.
///
/// `template` overrides the default two-slot error message; the first
/// `%s` receives the expression, the second the observed type name.
pub fn ensure(value: Value, expression: &str, template: Option<&str>) -> Result<Value, TypeError> {
    let expr = parse(expression)?;
    if expr.matches(&value) {
        Ok(value)
    } else {
        Err(TypeError::wrong_type(format_template(
            template.unwrap_or(WRONG_TYPE_TEMPLATE),
            &[expression, value.type_name()],
        )))
    }
}
