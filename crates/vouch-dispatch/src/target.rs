//! Dispatch targets.

use std::fmt;

use vouch_common::error::TypeError;
use vouch_common::value::Value;

use crate::scheme::SchemeTable;

/// A value or wrapper that dynamic calls can be dispatched onto.
///
/// This is the explicit replacement for magic-call interception: the
/// resolver asks a target for its scheme table, matches method-name
/// prefixes against it, and invokes matched methods with validated,
/// default-filled arguments, threading each result forward as the next
/// target.
pub trait CallTarget {
    /// The scheme table describing this target's dispatchable methods.
    fn schemes(&self) -> &'static SchemeTable;

    /// The plain value this target narrows. The trailing type check of a
    /// transit call runs against it.
    fn unwrap_value(&self) -> Value;

    /// A stored error template applied to the trailing type check when
    /// the caller supplies none.
    fn error_template(&self) -> Option<&str> {
        None
    }

    /// Invoke a declared method with bound arguments.
    ///
    /// The resolver has already validated the arguments against the
    /// method's scheme and filled defaults; `method` is always a key of
    /// [`CallTarget::schemes`].
    fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Resolved, TypeError>;
}

/// Result of a dynamic call: a plain value, or a wrapper to keep
/// dispatching onto.
pub enum Resolved {
    Value(Value),
    Target(Box<dyn CallTarget>),
}

impl Resolved {
    /// Wrap a target.
    pub fn target(target: impl CallTarget + 'static) -> Resolved {
        Resolved::Target(Box::new(target))
    }

    /// Collapse to the underlying plain value.
    pub fn into_value(self) -> Value {
        match self {
            Resolved::Value(value) => value,
            Resolved::Target(target) => target.unwrap_value(),
        }
    }
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Resolved::Target(target) => write!(f, "Target({})", target.schemes().target()),
        }
    }
}
