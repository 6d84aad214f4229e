//! Re-export of foundational types from `ritmo-types`.
// Consolidated re-exports so downstream crates can depend on `ritmo-core` only

pub use ritmo_types::{COV_MARKER, Cell, Column, ColumnMeta, Grid, RitmoError, Row};
