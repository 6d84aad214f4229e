use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the ritmo workspace.
///
/// Alignment itself is fail-soft and never surfaces an error for inputs
/// that merely lack enough data; this type guards structural misuse of
/// the grid model and the strict duration-parsing path.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RitmoError {
    /// Issues with the shape of provided data (ragged columns, unsorted
    /// timestamps, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl RitmoError {
    /// Helper: build a `Data` error from any displayable message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Helper: build an `InvalidArg` error from any displayable message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }
}
