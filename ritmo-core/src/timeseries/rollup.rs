use chrono::{DateTime, Utc};

use crate::types::{Cell, Column, Grid, RitmoError};

/// Roll a grid up to a fixed interval.
///
/// Rows are bucketed by `floor(epoch / interval) * interval` (windows
/// aligned to the Unix epoch) and each bucket is reduced per-column with
/// `agg`. The output is dense: one row per interval from the first to
/// the last occupied bucket, so consecutive output timestamps are always
/// exactly `interval_seconds` apart. A bucket holding no input rows gets
/// a null cell in every column, so absence of a bucket stays distinct
/// from any NA sentinel the reducer may produce.
///
/// Column metadata is carried through unchanged. A non-positive interval
/// or an empty grid passes through untouched.
///
/// # Errors
/// Returns `RitmoError::Data` when a bucket timestamp falls outside the
/// representable range.
pub fn rollup<A>(grid: &Grid, interval_seconds: i64, agg: A) -> Result<Grid, RitmoError>
where
    A: Fn(&[Cell]) -> Cell,
{
    if interval_seconds <= 0 || grid.is_empty() {
        return Ok(grid.clone());
    }
    let step = interval_seconds;
    let bucket_of = |ts: &DateTime<Utc>| -> i64 {
        let s = ts.timestamp();
        s - s.rem_euclid(step)
    };

    let first = bucket_of(&grid.ts()[0]);
    let last = bucket_of(&grid.ts()[grid.len() - 1]);
    let n_buckets = usize::try_from((last - first) / step + 1)
        .map_err(|_| RitmoError::data("rollup bucket range overflow"))?;

    // ts is sorted, so every row lands in [first, last].
    let mut rows_per_bucket: Vec<Vec<usize>> = vec![Vec::new(); n_buckets];
    for (i, ts) in grid.ts().iter().enumerate() {
        let slot = usize::try_from((bucket_of(ts) - first) / step)
            .map_err(|_| RitmoError::data("unsorted ts in rollup"))?;
        rows_per_bucket[slot].push(i);
    }

    let mut ts_out: Vec<DateTime<Utc>> = Vec::with_capacity(n_buckets);
    let mut epoch = first;
    while ts_out.len() < n_buckets {
        let ts = DateTime::from_timestamp(epoch, 0)
            .ok_or_else(|| RitmoError::data("bucket timestamp out of range"))?;
        ts_out.push(ts);
        epoch += step;
    }

    let cols = grid
        .columns()
        .iter()
        .map(|c| {
            let cells = rows_per_bucket
                .iter()
                .map(|rows| {
                    if rows.is_empty() {
                        Cell::Null
                    } else {
                        let bucket: Vec<Cell> = rows.iter().map(|&i| c.cells[i].clone()).collect();
                        agg(&bucket)
                    }
                })
                .collect();
            Column {
                name: c.name.clone(),
                meta: c.meta.clone(),
                cells,
            }
        })
        .collect();

    Grid::new(ts_out, cols)
}
