use chrono::{DateTime, TimeDelta, Utc};

use crate::timeseries::clip::clip_to_covered;
use crate::types::Grid;

/// Mean sample spacing in seconds over an ordered timestamp run:
/// first-to-last span divided by the number of gaps (not the number of
/// samples). Returns `None` for fewer than two entries.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use ritmo_core::mean_spacing_seconds;
///
/// fn t(sec: i64) -> DateTime<Utc> { DateTime::from_timestamp(sec, 0).unwrap() }
///
/// // 10 samples spanning 45 seconds: 45 / 9 gaps = 5s
/// let ts: Vec<_> = (0..10).map(|i| t(i * 5)).collect();
/// assert_eq!(mean_spacing_seconds(&ts), Some(5.0));
///
/// assert_eq!(mean_spacing_seconds(&[t(0)]), None);
/// ```
#[must_use]
pub fn mean_spacing_seconds(ts: &[DateTime<Utc>]) -> Option<f64> {
    if ts.len() < 2 {
        return None;
    }
    let span: TimeDelta = ts[ts.len() - 1] - ts[0];
    let gaps = (ts.len() - 1) as f64;
    Some(span.num_milliseconds() as f64 / 1000.0 / gaps)
}

/// Combined interval estimate for a grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntervalEstimate {
    /// Per-column mean spacings folded into one value, in seconds.
    /// `None` when no column had at least two recorded samples.
    pub combined: Option<f64>,
    /// Sticky flag: true once any contributing column is marked as
    /// event-driven (COV) sampling.
    pub cov: bool,
}

/// Estimate a common interval for every value column of `grid`.
///
/// Each column is projected to `ts` plus itself, clipped to its covered
/// span, and filtered to rows where it holds a recorded sample; columns
/// with fewer than two such rows contribute nothing. The first
/// contributing column sets the combined estimate directly and later
/// ones fold in through `combine` (pass `f64::min` to pick the finest
/// cadence present).
///
/// A COV-flagged column still contributes its spacing; it additionally
/// latches [`IntervalEstimate::cov`], which callers use to decide that
/// snapping against the estimate is meaningless.
pub fn estimate_grid_interval<C>(grid: &Grid, combine: C) -> IntervalEstimate
where
    C: Fn(f64, f64) -> f64,
{
    let names: Vec<String> = grid.col_names().map(str::to_string).collect();
    names
        .iter()
        .fold(IntervalEstimate::default(), |mut acc, name| {
            let projected = grid.project(&[name.as_str()]);
            let clipped = clip_to_covered(&projected, name);
            let sampled =
                clipped.filter_rows(|row| row.cell(name).is_some_and(|c| !c.is_null()));
            let Some(estimate) = mean_spacing_seconds(sampled.ts()) else {
                return acc;
            };
            if grid.col(name).is_some_and(|c| c.meta.is_cov()) {
                acc.cov = true;
            }
            acc.combined = Some(match acc.combined {
                Some(current) => combine(current, estimate),
                None => estimate,
            });
            acc
        })
}
