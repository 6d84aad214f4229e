use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Marker key flagging a column as event-driven (change-of-value).
///
/// A COV column records a sample only when the signal changes, so its
/// timestamp spacing carries no periodic meaning.
pub const COV_MARKER: &str = "cov";

/// Key→value metadata attached to one grid column.
///
/// Values are open-ended JSON so hosts can carry arbitrary tags; the
/// alignment pipeline itself consults a single marker, [`COV_MARKER`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMeta(BTreeMap<String, serde_json::Value>);

impl ColumnMeta {
    /// Empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a metadata value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Set a metadata value, returning `self` for chained construction.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Set a marker key (the value carries no payload).
    #[must_use]
    pub fn with_marker(self, key: impl Into<String>) -> Self {
        self.with(key, serde_json::Value::Null)
    }

    /// True when the key is present, regardless of its value.
    #[must_use]
    pub fn has_marker(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// True when the column is flagged as event-driven sampling.
    #[must_use]
    pub fn is_cov(&self) -> bool {
        self.has_marker(COV_MARKER)
    }
}
