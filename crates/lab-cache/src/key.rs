//! Cache key derivation
//!
//! A key is `"{namespace}:{json}"` where `json` is the canonical form of the
//! parameters: object keys are sorted at every depth, so two parameter sets
//! with equal values always map to the same key regardless of field order.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to serialize cache key: {0}")]
    Key(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for a bare namespace with no parameters
    pub fn namespace(namespace: &str) -> Self {
        Self(namespace.to_string())
    }

    pub fn derive<P: Serialize + ?Sized>(namespace: &str, params: &P) -> Result<Self, CacheError> {
        let value = serde_json::to_value(params)?;
        let json = serde_json::to_string(&canonicalize(value))?;
        Ok(Self(format!("{namespace}:{json}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rebuild `value` with every object's keys in sorted order
pub fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, canonicalize(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
