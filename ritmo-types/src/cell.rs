use serde::{Deserialize, Serialize};

/// A single reading in a history column.
///
/// `Null` is ordinary absence (the row exists but this column has no
/// sample there). `Na` is the explicit "not available" sentinel: a value
/// intentionally recorded as undefined, e.g. produced by an aggregator
/// whose inputs were unusable. The two are never equal and every filter
/// in the workspace distinguishes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Ordinary absence of a sample.
    Null,
    /// Explicit "not available" marker, distinct from absence.
    Na,
    /// Numeric reading.
    Num(f64),
    /// Boolean reading.
    Bool(bool),
    /// Textual reading.
    Str(String),
}

impl Cell {
    /// True only for ordinary absence; `Na` is not null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True only for the explicit "not available" sentinel.
    #[must_use]
    pub const fn is_na(&self) -> bool {
        matches!(self, Self::Na)
    }

    /// Numeric view of the cell, if it holds a number.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Num(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<bool> for Cell {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
