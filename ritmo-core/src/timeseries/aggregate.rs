//! Standard bucket reducers for [`rollup`](crate::rollup).
//!
//! Shared semantics: any NA input poisons the bucket to NA (the sentinel
//! is propagated, never silently dropped), null inputs are skipped, and
//! a bucket with no usable inputs folds to null. `count` is the one
//! exception to the last rule and yields `0`.

use crate::types::Cell;

/// Scan a bucket's cells: `None` when NA-poisoned, otherwise the numeric
/// inputs with nulls and non-numeric cells skipped.
fn scan_numeric(cells: &[Cell]) -> Option<Vec<f64>> {
    let mut nums = Vec::with_capacity(cells.len());
    for c in cells {
        if c.is_na() {
            return None;
        }
        if let Some(v) = c.as_f64() {
            nums.push(v);
        }
    }
    Some(nums)
}

fn fold_numeric(cells: &[Cell], f: impl Fn(&[f64]) -> f64) -> Cell {
    match scan_numeric(cells) {
        None => Cell::Na,
        Some(nums) if nums.is_empty() => Cell::Null,
        Some(nums) => Cell::Num(f(&nums)),
    }
}

/// Arithmetic mean of the bucket's numeric cells.
#[must_use]
pub fn avg(cells: &[Cell]) -> Cell {
    fold_numeric(cells, |nums| {
        nums.iter().sum::<f64>() / nums.len() as f64
    })
}

/// Sum of the bucket's numeric cells.
#[must_use]
pub fn sum(cells: &[Cell]) -> Cell {
    fold_numeric(cells, |nums| nums.iter().sum())
}

/// Smallest numeric cell in the bucket.
#[must_use]
pub fn min(cells: &[Cell]) -> Cell {
    fold_numeric(cells, |nums| nums.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Largest numeric cell in the bucket.
#[must_use]
pub fn max(cells: &[Cell]) -> Cell {
    fold_numeric(cells, |nums| {
        nums.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Number of non-null cells in the bucket; `0` for an all-null bucket.
#[must_use]
pub fn count(cells: &[Cell]) -> Cell {
    if cells.iter().any(Cell::is_na) {
        return Cell::Na;
    }
    Cell::Num(cells.iter().filter(|c| !c.is_null()).count() as f64)
}

/// Earliest non-null cell in the bucket, of any kind.
#[must_use]
pub fn first(cells: &[Cell]) -> Cell {
    if cells.iter().any(Cell::is_na) {
        return Cell::Na;
    }
    cells
        .iter()
        .find(|c| !c.is_null())
        .cloned()
        .unwrap_or(Cell::Null)
}

/// Latest non-null cell in the bucket, of any kind.
#[must_use]
pub fn last(cells: &[Cell]) -> Cell {
    if cells.iter().any(Cell::is_na) {
        return Cell::Na;
    }
    cells
        .iter()
        .rev()
        .find(|c| !c.is_null())
        .cloned()
        .unwrap_or(Cell::Null)
}
