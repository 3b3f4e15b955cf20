//! Value type handlers, looked up by type name.
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{is_numeric, truncate_numeric, Value};
use crate::prelude::ValueType;

/// The type name of the builtin string type (`=s` in a spec string).
pub const STRING_TYPE: &str = "string";
/// The type name of the builtin number type (`=i` in a spec string).
pub const NUMBER_TYPE: &str = "number";
/// The type name of the builtin boolean type.
pub const BOOLEAN_TYPE: &str = "boolean";

/// Accepts any input as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringType;

impl ValueType for StringType {
    fn test(&self, _raw: &str) -> bool {
        true
    }

    fn parse(&self, raw: &str) -> Value {
        Value::Text(raw.to_string())
    }
}

/// Accepts numeric input, coerced to an integer by truncation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumberType;

impl ValueType for NumberType {
    fn test(&self, raw: &str) -> bool {
        is_numeric(raw)
    }

    /// Input that fails [`NumberType::test`] is kept as text.
    fn parse(&self, raw: &str) -> Value {
        match truncate_numeric(raw) {
            Ok(number) => Value::Integer(number),
            Err(_) => Value::Text(raw.to_string()),
        }
    }
}

/// Accepts `true/false`, `1/0`, `yes/no` and `on/off` (case insensitive).
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanType;

impl BooleanType {
    fn truth(raw: &str) -> Option<bool> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}

impl ValueType for BooleanType {
    fn test(&self, raw: &str) -> bool {
        BooleanType::truth(raw).is_some()
    }

    /// Input that fails [`BooleanType::test`] is kept as text.
    fn parse(&self, raw: &str) -> Value {
        match BooleanType::truth(raw) {
            Some(truth) => Value::Boolean(truth),
            None => Value::Text(raw.to_string()),
        }
    }
}

/// A mapping from type name to value type handler.
///
/// ### Example
/// ```
/// # use optspec_core as optspec;
/// use optspec::prelude::*;
/// use optspec::{TypeRegistry, Value};
///
/// struct Even;
///
/// impl ValueType for Even {
///     fn test(&self, raw: &str) -> bool {
///         raw.parse::<i64>().map(|n| n % 2 == 0).unwrap_or(false)
///     }
///
///     fn parse(&self, raw: &str) -> Value {
///         Value::Integer(raw.parse().unwrap())
///     }
/// }
///
/// let mut registry = TypeRegistry::builtin();
/// registry.register("even", Even);
/// assert!(registry.get("even").unwrap().test("4"));
/// assert!(registry.get("odd").is_none());
/// ```
#[derive(Clone, Default)]
pub struct TypeRegistry {
    handlers: HashMap<String, Arc<dyn ValueType>>,
}

impl TypeRegistry {
    /// Create a registry without any handlers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry with the builtin `string`, `number` and `boolean` handlers.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(STRING_TYPE, StringType);
        registry.register(NUMBER_TYPE, NumberType);
        registry.register(BOOLEAN_TYPE, BooleanType);
        registry
    }

    /// Register a handler under `name`.
    /// If repeated, only the final handler will apply.
    pub fn register(&mut self, name: impl Into<String>, handler: impl ValueType + 'static) {
        self.register_shared(name, Arc::new(handler));
    }

    /// Register an already shared handler under `name`.
    pub fn register_shared(&mut self, name: impl Into<String>, handler: Arc<dyn ValueType>) {
        let name = name.into();
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering value type '{name}'.");
        }
        self.handlers.insert(name, handler);
    }

    /// The handler for `name`, if one is registered.
    /// An unknown name is not an error; it means the value is untyped.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ValueType>> {
        self.handlers.get(name).cloned()
    }

    /// Whether a handler is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// The registered type names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Process-wide registry, seeded with the builtin handlers.
static GLOBAL_REGISTRY: Lazy<RwLock<TypeRegistry>> =
    Lazy::new(|| RwLock::new(TypeRegistry::builtin()));

/// Register a handler in the process-wide registry.
///
/// This should be done before any option using `name` receives values.
pub fn register_type(name: impl Into<String>, handler: impl ValueType + 'static) {
    GLOBAL_REGISTRY.write().register(name, handler);
}

/// Look up a handler in the process-wide registry.
pub fn lookup_type(name: &str) -> Option<Arc<dyn ValueType>> {
    GLOBAL_REGISTRY.read().get(name)
}

/// A snapshot of the process-wide registry.
pub fn global_registry() -> TypeRegistry {
    GLOBAL_REGISTRY.read().clone()
}
