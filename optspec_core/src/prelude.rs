//! Traits which, typically, may be imported without concern: `use optspec::prelude::*`.
use crate::api::Value;

/// Behaviour for validating and coercing the raw input of a named value type.
// Needs to be imported in order to implement a custom type handler.
pub trait ValueType: Send + Sync {
    /// Whether `raw` is acceptable for this type.
    fn test(&self, raw: &str) -> bool;

    /// Coerce `raw` into this type.
    /// Only called after `test` has accepted the same input.
    fn parse(&self, raw: &str) -> Value;
}
