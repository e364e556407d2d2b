//! The type-token registry and verifier.
//!
//! A closed mapping from type-name tokens to predicate functions over the
//! dynamic [`Value`](vouch_common::value::Value) model. The registry is a
//! tagged enum rather than an open string table: unregistered names are
//! rejected by lookup, and the set of tokens is fixed at compile time.

pub mod token;
pub mod verify;

pub use token::{has_type, TypeToken};
pub use verify::verify;
