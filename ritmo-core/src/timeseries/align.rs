use crate::duration::DurationValue;
use crate::timeseries::infer::estimate_grid_interval;
use crate::timeseries::rollup::rollup;
use crate::timeseries::snap::{DEFAULT_CANDIDATES, snap_to_candidate};
use crate::types::{Cell, Grid};

/// Options for [`align_to_common_interval`].
#[derive(Debug, Clone, PartialEq)]
pub struct AlignOptions {
    /// `true`: drop every row holding any null cell. `false`: rewrite
    /// null cells to the NA sentinel instead.
    pub remove_missing: bool,
    /// Floor for the chosen interval. Malformed values degrade to no
    /// floor; they never fail the call.
    pub min_interval: Option<DurationValue>,
    /// Candidate intervals in seconds for snapping, in preference order.
    pub candidates: Vec<i64>,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            remove_missing: false,
            min_interval: None,
            candidates: DEFAULT_CANDIDATES.to_vec(),
        }
    }
}

/// Align every history column of `grid` onto one common interval.
///
/// Each column's native cadence is estimated over its covered span, the
/// estimates are folded through `combine` (pass `f64::min` to pick the
/// finest cadence present), the result is floored by
/// `opts.min_interval`, snapped to the nearest entry of
/// `opts.candidates`, and the grid is rolled up at the snapped interval
/// with `agg` reducing each bucket.
///
/// Degenerate inputs never fail: a grid with no periodic columns, a zero
/// combined estimate, or an event-driven (COV) column without an
/// explicit floor all pass the grid through with its original
/// timestamps. A COV column *with* a caller floor rolls up at exactly
/// that floor, bypassing the candidate list. The missing-value pass of
/// `opts.remove_missing` runs in every case.
///
/// ```
/// use chrono::DateTime;
/// use ritmo_core::{AlignOptions, Cell, Column, Grid, aggregate, align_to_common_interval};
///
/// let ts: Vec<_> = (0..10i64)
///     .map(|i| DateTime::from_timestamp(i * 5, 0).unwrap())
///     .collect();
/// let col = Column::new("temp", (0..10).map(|i| Cell::Num(f64::from(i))).collect());
/// let grid = Grid::new(ts, vec![col]).unwrap();
///
/// let out = align_to_common_interval(&grid, aggregate::avg, f64::min, &AlignOptions::default());
/// assert_eq!(out.len(), 10);
/// assert!(out.ts().windows(2).all(|w| (w[1] - w[0]).num_seconds() == 5));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "ritmo::align",
        skip(grid, agg, combine, opts),
        fields(rows = grid.len(), cols = grid.columns().len()),
    )
)]
pub fn align_to_common_interval<A, C>(
    grid: &Grid,
    agg: A,
    combine: C,
    opts: &AlignOptions,
) -> Grid
where
    A: Fn(&[Cell]) -> Cell,
    C: Fn(f64, f64) -> f64,
{
    let min_floor = opts
        .min_interval
        .as_ref()
        .map_or(0.0, DurationValue::to_seconds_or_zero);

    let mut estimate = estimate_grid_interval(grid, combine);
    if min_floor > 0.0 {
        estimate.combined = estimate.combined.map(|c| c.max(min_floor));
    }

    let rolled = match (estimate.cov, estimate.combined) {
        (true, _) if min_floor > 0.0 => {
            // COV spacing is meaningless for snapping; an explicit floor
            // still sets the rollup granularity.
            let interval = min_floor.round() as i64;
            #[cfg(feature = "tracing")]
            tracing::debug!(interval, "rolling up COV grid at caller floor");
            rollup(grid, interval, &agg).unwrap_or_else(|_| grid.clone())
        }
        (true, _) | (false, None) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(cov = estimate.cov, "no usable common interval; passing through");
            grid.clone()
        }
        (false, Some(combined)) if combined <= 0.0 => {
            #[cfg(feature = "tracing")]
            tracing::debug!("zero combined interval; passing through");
            grid.clone()
        }
        (false, Some(combined)) => {
            let interval = snap_to_candidate(combined, &opts.candidates);
            #[cfg(feature = "tracing")]
            tracing::debug!(combined, interval, "snapped combined interval");
            rollup(grid, interval, &agg).unwrap_or_else(|_| grid.clone())
        }
    };

    if opts.remove_missing {
        rolled.filter_rows(|row| row.cells().all(|c| !c.is_null()))
    } else {
        rolled.map_cells(|c| if c.is_null() { Cell::Na } else { c.clone() })
    }
}
