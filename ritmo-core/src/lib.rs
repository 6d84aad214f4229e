//! ritmo-core
//!
//! Algorithms for aligning multiple sampled histories ("columns" of one
//! grid) onto a common interval ahead of columnar merge operations.
//!
//! - `duration`: duration values with strict and fail-soft conversion to
//!   seconds.
//! - `timeseries`: clip, interval inference, candidate snapping, rollup,
//!   and the aligner itself.
//!
//! The aligner is a pure synchronous function of its inputs: no I/O, no
//! shared state, no async runtime. Independent invocations on different
//! grids may be parallelized freely by the caller.
#![warn(missing_docs)]

pub mod duration;
/// Time-series utilities: clip, inference, snapping, rollup, alignment.
pub mod timeseries;
pub mod types;

pub use duration::DurationValue;
pub use timeseries::aggregate;
pub use timeseries::align::{AlignOptions, align_to_common_interval};
pub use timeseries::clip::clip_to_covered;
pub use timeseries::infer::{IntervalEstimate, estimate_grid_interval, mean_spacing_seconds};
pub use timeseries::rollup::rollup;
pub use timeseries::snap::{DEFAULT_CANDIDATES, snap_to_candidate};
pub use types::*;
