use std::fmt;

use serde::Serialize;

/// Every registered type token.
///
/// This enum is the complete registry. Names are case-normalized to
/// lower-camel (`int`, `stringInt`, ...); membership is closed — there is
/// no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeToken {
    // ── Base types ─────────────────────────────────────────────────────
    Bool,
    Int,
    Float,
    String,
    Array,
    Object,
    Null,
    Callable,
    /// Matches any value.
    Mixed,

    // ── Pseudo types ───────────────────────────────────────────────────
    Iterable,
    Numeric,
    /// Strict identity with `true`, never truthiness.
    True,
    /// Strict identity with `false`.
    False,

    // ── Custom types ───────────────────────────────────────────────────
    /// A string of only ASCII digits, length >= 1.
    StringInt,
    /// The host-language "empty" convention.
    Empty,
}

impl TypeToken {
    /// All registered tokens, in registry order.
    pub const ALL: [TypeToken; 15] = [
        TypeToken::Bool,
        TypeToken::Int,
        TypeToken::Float,
        TypeToken::String,
        TypeToken::Array,
        TypeToken::Object,
        TypeToken::Null,
        TypeToken::Callable,
        TypeToken::Mixed,
        TypeToken::Iterable,
        TypeToken::Numeric,
        TypeToken::True,
        TypeToken::False,
        TypeToken::StringInt,
        TypeToken::Empty,
    ];

    /// The canonical lower-camel name of the token.
    pub fn name(self) -> &'static str {
        match self {
            TypeToken::Bool => "bool",
            TypeToken::Int => "int",
            TypeToken::Float => "float",
            TypeToken::String => "string",
            TypeToken::Array => "array",
            TypeToken::Object => "object",
            TypeToken::Null => "null",
            TypeToken::Callable => "callable",
            TypeToken::Mixed => "mixed",
            TypeToken::Iterable => "iterable",
            TypeToken::Numeric => "numeric",
            TypeToken::True => "true",
            TypeToken::False => "false",
            TypeToken::StringInt => "stringInt",
            TypeToken::Empty => "empty",
        }
    }

    /// Look up a token by its exact lower-camel name.
    pub fn from_name(name: &str) -> Option<TypeToken> {
        TypeToken::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// ASCII-case-insensitive lookup.
    ///
    /// The expression lexer scans a lowercased buffer, so `stringint`
    /// must resolve to [`TypeToken::StringInt`].
    pub fn lookup_folded(name: &str) -> Option<TypeToken> {
        TypeToken::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `name` is a registered type token, in its exact lower-camel form.
pub fn has_type(name: &str) -> bool {
    TypeToken::from_name(name).is_some()
}
