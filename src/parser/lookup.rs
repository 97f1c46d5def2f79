//! Field access over dynamic sources.
//!
//! [`Lookup`] abstracts keyed field access so the fetch operations work
//! uniformly over JSON documents, plain maps, and custom sources: indexed
//! access where the source supports it, attribute-style access where a
//! custom implementation provides it. A `None` from `lookup` is the
//! absence the fetch disposition rules interpret.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde_json::Value;

/// Keyed access into a dynamic source.
///
/// Implementations decide what a key means: an object field, an array
/// index, a struct attribute. Absent keys and explicit nulls both
/// surface as `None`.
pub trait Lookup {
    /// The value type a successful lookup yields.
    type Item;

    /// Fetches the value at `key`, or `None` when the source has nothing
    /// meaningful there.
    fn lookup(&self, key: &str) -> Option<Self::Item>;
}

impl Lookup for Value {
    type Item = Value;

    /// Object field access, with a numeric array-index fallback. JSON
    /// `null` counts as absent.
    fn lookup(&self, key: &str) -> Option<Value> {
        let found = match self {
            Self::Object(fields) => fields.get(key).cloned(),
            Self::Array(items) => key
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index).cloned()),
            _ => None,
        };
        found.filter(|value| !value.is_null())
    }
}

impl<V: Clone> Lookup for HashMap<String, V> {
    type Item = V;

    fn lookup(&self, key: &str) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<V: Clone> Lookup for BTreeMap<String, V> {
    type Item = V;

    fn lookup(&self, key: &str) -> Option<V> {
        self.get(key).cloned()
    }
}

/// The runtime type classes a [`type_check`](crate::parser::Parser::type_check)
/// can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool,
    /// Any numeric value.
    Number,
    /// A string.
    String,
    /// An ordered sequence.
    Array,
    /// A keyed mapping.
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Null => "Null",
            Self::Bool => "Bool",
            Self::Number => "Number",
            Self::String => "String",
            Self::Array => "Array",
            Self::Object => "Object",
        };
        formatter.write_str(label)
    }
}

/// A payload whose runtime type class can be inspected.
pub trait TypedPayload {
    /// The kind this value belongs to.
    fn kind_of(&self) -> ValueKind;
}

impl TypedPayload for Value {
    fn kind_of(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }
}
