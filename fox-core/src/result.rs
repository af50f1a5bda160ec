//! Unified result envelope
//!
//! Every vendor call yields exactly one [`ServiceResult`]. Results are folded
//! into a [`UnifiedResult`], which always carries every category so that
//! consumers never see an undefined key.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::{Category, ServiceSpec};

/// Outcome of one vendor call
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResult {
    Ok(Value),
    Err(String),
}

impl ServiceResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, ServiceResult::Ok(_))
    }
}

impl<E: std::fmt::Display> From<Result<Value, E>> for ServiceResult {
    fn from(result: Result<Value, E>) -> Self {
        match result {
            Ok(payload) => ServiceResult::Ok(payload),
            Err(e) => ServiceResult::Err(e.to_string()),
        }
    }
}

/// Marker written in place of a payload when a vendor call failed
pub fn error_marker(message: &str) -> Value {
    json!({ "error": message })
}

/// Merged, normalized results keyed by category name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnifiedResult(Map<String, Value>);

impl UnifiedResult {
    /// Envelope with every category at its empty default
    pub fn new() -> Self {
        let mut categories = Map::new();
        for category in Category::ALL {
            categories.insert(category.key().to_string(), category.empty());
        }
        Self(categories)
    }

    pub fn set(&mut self, category: Category, value: Value) {
        self.0.insert(category.key().to_string(), value);
    }

    pub fn get(&self, category: Category) -> Option<&Value> {
        self.0.get(category.key())
    }

    /// Fold one service outcome into its category
    pub fn record(&mut self, spec: &ServiceSpec, result: ServiceResult) {
        let value = match result {
            ServiceResult::Ok(payload) => (spec.normalize)(&payload),
            ServiceResult::Err(message) => error_marker(&message),
        };
        self.set(spec.category, value);
    }

    /// Whether a category holds an error marker
    pub fn is_error(&self, category: Category) -> bool {
        self.get(category)
            .and_then(|v| v.get("error"))
            .is_some()
    }

    pub fn error_count(&self) -> usize {
        Category::ALL.iter().filter(|c| self.is_error(**c)).count()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl Default for UnifiedResult {
    fn default() -> Self {
        Self::new()
    }
}
