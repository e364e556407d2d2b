//! The error taxonomy.
//!
//! Every failure the library can signal is a variant of [`TypeError`].
//! Failures are first-class expected outcomes — a wrong-typed value is the
//! primary result a caller handles, not an infrastructure fault — so
//! nothing here is retried or swallowed.

use std::fmt;

use serde::Serialize;

use crate::span::Span;

/// Default message template for failed type checks.
///
/// Templates are two-slot printf-style strings: the first `%s` receives the
/// rendered type expression, the second the observed runtime type name.
pub const WRONG_TYPE_TEMPLATE: &str = "The value should be one of types %s. Got: %s";

/// A failed parse of a type-expression string, with location information.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The specific kind of parse error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParseErrorKind {
    /// The expression string was empty or only whitespace.
    EmptyExpression,
    /// A character that cannot start any token.
    UnexpectedCharacter(char),
    /// A word that names neither a registered type nor the `not` modifier.
    ///
    /// Unknown tokens fail at parse time, never at evaluation time.
    UnknownType(String),
    /// A token that is not valid in its position.
    UnexpectedToken { found: String, expected: String },
    /// Input ended after a modifier or clause operator.
    UnexpectedEnd { expected: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "empty type expression"),
            Self::UnexpectedCharacter(c) => write!(f, "unexpected character: {c:?}"),
            Self::UnknownType(name) => write!(f, "unknown type: {name}"),
            Self::UnexpectedToken { found, expected } => {
                write!(f, "unexpected {found}, expected {expected}")
            }
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of expression, expected {expected}")
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ParseError {}

/// Any failure the library can report.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeError {
    /// A value failed a type check. Carries the fully formatted message.
    WrongType { message: String },
    /// A malformed type-expression string.
    Parse(ParseError),
    /// A malformed call argument (missing value, non-string error template).
    Argument { message: String },
    /// A transit step received fewer arguments than its scheme requires.
    ArgumentCount {
        method: String,
        required: usize,
        given: usize,
    },
    /// No method-name decomposition exists for a dynamic call.
    MethodNotFound { method: String },
    /// An array or object member access missed.
    KeyNotFound { key: String },
}

impl TypeError {
    /// A wrong-type failure with an already formatted message.
    pub fn wrong_type(message: impl Into<String>) -> Self {
        TypeError::WrongType {
            message: message.into(),
        }
    }

    /// An argument failure with an already formatted message.
    pub fn argument(message: impl Into<String>) -> Self {
        TypeError::Argument {
            message: message.into(),
        }
    }

    pub fn method_not_found(method: impl Into<String>) -> Self {
        TypeError::MethodNotFound {
            method: method.into(),
        }
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        TypeError::KeyNotFound { key: key.into() }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongType { message } => write!(f, "{message}"),
            Self::Parse(err) => write!(f, "invalid type expression: {err}"),
            Self::Argument { message } => write!(f, "{message}"),
            Self::ArgumentCount {
                method,
                required,
                given,
            } => write!(
                f,
                "method \"{method}\" requires {required} argument(s), {given} given"
            ),
            Self::MethodNotFound { method } => {
                write!(f, "method \"{method}\" does not exist")
            }
            Self::KeyNotFound { key } => write!(f, "the key \"{key}\" does not exist"),
        }
    }
}

impl std::error::Error for TypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for TypeError {
    fn from(err: ParseError) -> Self {
        TypeError::Parse(err)
    }
}

/// Fill a printf-style template, replacing each `%s` with the next argument.
///
/// Slots beyond the supplied arguments are left verbatim; surplus arguments
/// are ignored. This mirrors how callers supply two-slot custom error
/// templates with either zero, one, or both slots used.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();
    while let Some(idx) = rest.find("%s") {
        out.push_str(&rest[..idx]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("%s"),
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}
