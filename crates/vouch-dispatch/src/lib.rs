//! Dynamic method-name decomposition and call resolution.
//!
//! A single camel-case call name such as `arrayXGetErrorIfNotNullOrInt`
//! decomposes into a sequence of chained accessor invocations (`arrayX`,
//! `get`, `errorIfNot`) followed by a trailing type check (`null|int`).
//! This crate provides the pieces:
//!
//! - [`name`] — the camel-case tokenizer, in fine-grained and
//!   `Or`-delimited composed modes;
//! - [`scheme`] — declarative method signatures ([`MethodScheme`]) and
//!   per-target tables, built once and queried by the resolvers;
//! - [`target`] — the [`CallTarget`] trait, the explicit replacement for
//!   magic-call interception;
//! - [`resolver`] — strict-type and transit call resolution with greedy
//!   longest-prefix matching.

pub mod name;
pub mod resolver;
pub mod scheme;
pub mod target;

pub use resolver::{
    call_transit, is_strict_type_call, is_transit_call, resolve_call, strict_type_call,
};
pub use scheme::{MethodArg, MethodScheme, SchemeReturn, SchemeTable};
pub use target::{CallTarget, Resolved};
