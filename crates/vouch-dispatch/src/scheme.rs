//! Method schemes: declarative signatures for dispatchable methods.
//!
//! A scheme records a method's argument names, type expressions, and
//! defaults, plus what the method returns. Schemes are built once per
//! target type with the fluent builder and are immutable afterwards; the
//! resolvers query them to validate and auto-supply arguments, and to
//! walk transit chains statically.

use std::fmt;

use rustc_hash::FxHashMap;

use vouch_common::value::Value;

/// A declared argument of a method scheme.
#[derive(Debug, Clone)]
pub struct MethodArg {
    name: String,
    expression: String,
    default: Option<Value>,
}

impl MethodArg {
    /// The argument's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type expression the bound value must satisfy.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The declared default, if the argument is optional.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// What a method yields: a plain value described by a type expression, or
/// another dispatch target described by its scheme table.
///
/// The table is behind a function pointer so mutually referring targets
/// (`ArrayX::get` returns `MixedX`, `MixedX::arrayX` returns `ArrayX`)
/// can describe each other.
#[derive(Clone, Copy)]
pub enum SchemeReturn {
    Expr(&'static str),
    Table(fn() -> &'static SchemeTable),
}

impl fmt::Debug for SchemeReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeReturn::Expr(expr) => write!(f, "Expr({expr:?})"),
            SchemeReturn::Table(table) => write!(f, "Table({})", table().target()),
        }
    }
}

/// A declarative method signature.
///
/// Built with the fluent builder:
///
/// ```
/// use vouch_common::value::Value;
/// use vouch_dispatch::MethodScheme;
///
/// let get = MethodScheme::new("get")
///     .arg("key", "int|string")
///     .arg("error", "null|string")
///     .default_value(Value::Null)
///     .returns("mixed");
/// assert_eq!(get.required_count(), 1);
/// assert_eq!(get.arity(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MethodScheme {
    name: String,
    args: Vec<MethodArg>,
    returns: SchemeReturn,
}

impl MethodScheme {
    /// Start a scheme for the given dynamic method name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            returns: SchemeReturn::Expr("mixed"),
        }
    }

    /// Declare the next argument with its type expression.
    pub fn arg(mut self, name: impl Into<String>, expression: impl Into<String>) -> Self {
        self.args.push(MethodArg {
            name: name.into(),
            expression: expression.into(),
            default: None,
        });
        self
    }

    /// Attach a default to the most recently declared argument, making it
    /// optional. Required arguments must precede defaulted ones.
    pub fn default_value(mut self, value: Value) -> Self {
        let arg = self
            .args
            .last_mut()
            .expect("default_value requires a declared argument");
        arg.default = Some(value);
        self
    }

    /// Declare a plain-value return type expression.
    pub fn returns(mut self, expression: &'static str) -> Self {
        self.returns = SchemeReturn::Expr(expression);
        self
    }

    /// Declare that the method yields another dispatch target.
    pub fn returns_target(mut self, table: fn() -> &'static SchemeTable) -> Self {
        self.returns = SchemeReturn::Table(table);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[MethodArg] {
        &self.args
    }

    pub fn return_kind(&self) -> SchemeReturn {
        self.returns
    }

    /// Number of leading arguments without defaults.
    pub fn required_count(&self) -> usize {
        self.args
            .iter()
            .take_while(|arg| arg.default.is_none())
            .count()
    }

    /// Total number of declared arguments.
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

/// The dispatchable methods of one target type, keyed by dynamic
/// (camel-case) method name.
#[derive(Debug, Clone)]
pub struct SchemeTable {
    target: &'static str,
    methods: FxHashMap<String, MethodScheme>,
}

impl SchemeTable {
    /// Start a table for the named target type.
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            methods: FxHashMap::default(),
        }
    }

    /// Builder-style scheme registration, keyed by the scheme's name.
    pub fn with(mut self, scheme: MethodScheme) -> Self {
        self.methods.insert(scheme.name.clone(), scheme);
        self
    }

    /// Look up a scheme by dynamic method name.
    pub fn get(&self, name: &str) -> Option<&MethodScheme> {
        self.methods.get(name)
    }

    /// Whether the table declares the method.
    pub fn has(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// The display name of the owning target type.
    pub fn target(&self) -> &'static str {
        self.target
    }
}
