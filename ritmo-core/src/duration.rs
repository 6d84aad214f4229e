//! Duration values with strict and fail-soft conversion to seconds.

use serde::{Deserialize, Serialize};

use crate::types::RitmoError;

/// A duration as supplied by a host: either raw seconds or free-form
/// text with a unit suffix (`"30s"`, `"5min"`, `"2hr"`, `"1day"`).
///
/// Deserializes untagged, so JSON `90` and `"90s"` both work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    /// Duration in seconds. Fractional values are allowed.
    Seconds(f64),
    /// Magnitude plus unit suffix, e.g. `"15min"`.
    Text(String),
}

impl DurationValue {
    /// Strict conversion to seconds.
    ///
    /// # Errors
    /// Returns `RitmoError::InvalidArg` for non-finite or negative
    /// magnitudes and for text that is not a `<magnitude><unit>`
    /// duration.
    pub fn to_seconds(&self) -> Result<f64, RitmoError> {
        match self {
            Self::Seconds(s) if s.is_finite() && *s >= 0.0 => Ok(*s),
            Self::Seconds(s) => Err(RitmoError::invalid_arg(format!("not a duration: {s}"))),
            Self::Text(t) => parse_seconds(t),
        }
    }

    /// Fail-soft conversion: attempt [`DurationValue::to_seconds`] and
    /// substitute `0.0` on any failure, never propagating the error.
    ///
    /// ```
    /// use ritmo_core::DurationValue;
    ///
    /// assert_eq!(DurationValue::Text("5min".into()).to_seconds_or_zero(), 300.0);
    /// assert_eq!(DurationValue::Text("bogus".into()).to_seconds_or_zero(), 0.0);
    /// assert_eq!(DurationValue::Seconds(-1.0).to_seconds_or_zero(), 0.0);
    /// ```
    #[must_use]
    pub fn to_seconds_or_zero(&self) -> f64 {
        self.to_seconds().unwrap_or(0.0)
    }
}

impl From<f64> for DurationValue {
    fn from(s: f64) -> Self {
        Self::Seconds(s)
    }
}

impl From<&str> for DurationValue {
    fn from(t: &str) -> Self {
        Self::Text(t.to_string())
    }
}

impl From<chrono::TimeDelta> for DurationValue {
    fn from(d: chrono::TimeDelta) -> Self {
        Self::Seconds(d.num_milliseconds() as f64 / 1000.0)
    }
}

fn parse_seconds(text: &str) -> Result<f64, RitmoError> {
    let t = text.trim();
    let split = t
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(t.len());
    let (magnitude, unit) = t.split_at(split);
    let magnitude: f64 = magnitude
        .trim()
        .parse()
        .map_err(|_| RitmoError::invalid_arg(format!("not a duration: {text}")))?;
    if !magnitude.is_finite() || magnitude < 0.0 {
        return Err(RitmoError::invalid_arg(format!("not a duration: {text}")));
    }
    let scale = match unit.trim() {
        "" | "s" | "sec" | "secs" => 1.0,
        "min" | "mins" => 60.0,
        "h" | "hr" | "hrs" => 3600.0,
        "day" | "days" => 86_400.0,
        other => {
            return Err(RitmoError::invalid_arg(format!(
                "unknown duration unit: {other}"
            )));
        }
    };
    Ok(magnitude * scale)
}
