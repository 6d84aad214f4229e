use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Cell, ColumnMeta, RitmoError};

/// One named value column: metadata plus one cell per grid row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within a grid and never `"ts"`.
    pub name: String,
    /// Per-column metadata tags.
    pub meta: ColumnMeta,
    /// Cell per row, aligned with the grid's `ts` column.
    pub cells: Vec<Cell>,
}

impl Column {
    /// Build a column with empty metadata.
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            meta: ColumnMeta::new(),
            cells,
        }
    }

    /// Replace the column metadata, returning `self` for chained construction.
    #[must_use]
    pub fn with_meta(mut self, meta: ColumnMeta) -> Self {
        self.meta = meta;
        self
    }
}

/// A table of histories: one shared `ts` column (monotonically
/// non-decreasing) plus an ordered set of named value columns, all
/// row-aligned.
///
/// Grids are transient value types; every operation below produces a
/// fresh grid and leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    ts: Vec<DateTime<Utc>>,
    cols: Vec<Column>,
}

/// Borrowed view of one grid row, handed to row predicates.
pub struct Row<'g> {
    grid: &'g Grid,
    idx: usize,
}

impl Row<'_> {
    /// The row's timestamp.
    #[must_use]
    pub fn ts(&self) -> DateTime<Utc> {
        self.grid.ts[self.idx]
    }

    /// Cell of the named column at this row.
    #[must_use]
    pub fn cell(&self, name: &str) -> Option<&Cell> {
        self.grid.col(name).map(|c| &c.cells[self.idx])
    }

    /// Cells of every value column at this row, in declared order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.cols.iter().map(|c| &c.cells[self.idx])
    }
}

impl Grid {
    /// Build a grid, validating shape invariants.
    ///
    /// # Errors
    /// - `RitmoError::Data` when timestamps are not monotonically
    ///   non-decreasing or a column's length differs from `ts`.
    /// - `RitmoError::InvalidArg` when a column is named `"ts"` or two
    ///   columns share a name.
    pub fn new(ts: Vec<DateTime<Utc>>, cols: Vec<Column>) -> Result<Self, RitmoError> {
        if ts.windows(2).any(|w| w[0] > w[1]) {
            return Err(RitmoError::data("ts column is not sorted"));
        }
        for (i, col) in cols.iter().enumerate() {
            if col.name == "ts" {
                return Err(RitmoError::invalid_arg("\"ts\" is a reserved column name"));
            }
            if col.cells.len() != ts.len() {
                return Err(RitmoError::data(format!(
                    "column {} has {} cells for {} rows",
                    col.name,
                    col.cells.len(),
                    ts.len()
                )));
            }
            if cols[..i].iter().any(|c| c.name == col.name) {
                return Err(RitmoError::invalid_arg(format!(
                    "duplicate column name: {}",
                    col.name
                )));
            }
        }
        Ok(Self { ts, cols })
    }

    /// A grid with no rows and no value columns.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ts: Vec::new(),
            cols: Vec::new(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ts.len()
    }

    /// True when the grid has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ts.is_empty()
    }

    /// The shared timestamp column.
    #[must_use]
    pub fn ts(&self) -> &[DateTime<Utc>] {
        &self.ts
    }

    /// Value columns in declared order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.cols
    }

    /// Value-column names in declared order. The `ts` column is
    /// structural and never appears here.
    pub fn col_names(&self) -> impl Iterator<Item = &str> {
        self.cols.iter().map(|c| c.name.as_str())
    }

    /// Look up a value column by name.
    #[must_use]
    pub fn col(&self, name: &str) -> Option<&Column> {
        self.cols.iter().find(|c| c.name == name)
    }

    /// Cells of the named column, row-aligned with [`Grid::ts`].
    #[must_use]
    pub fn col_values(&self, name: &str) -> Option<&[Cell]> {
        self.col(name).map(|c| c.cells.as_slice())
    }

    /// Projection keeping `ts` plus the named columns, in the requested
    /// order. Unknown names are skipped.
    #[must_use]
    pub fn project(&self, names: &[&str]) -> Self {
        let cols = names.iter().filter_map(|n| self.col(n).cloned()).collect();
        Self {
            ts: self.ts.clone(),
            cols,
        }
    }

    /// All columns except the named one.
    #[must_use]
    pub fn remove_col(&self, name: &str) -> Self {
        let cols = self
            .cols
            .iter()
            .filter(|c| c.name != name)
            .cloned()
            .collect();
        Self {
            ts: self.ts.clone(),
            cols,
        }
    }

    /// Contiguous row range `[start, end)`, clamped to the grid bounds.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.ts.len());
        let start = start.min(end);
        let cols = self
            .cols
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                meta: c.meta.clone(),
                cells: c.cells[start..end].to_vec(),
            })
            .collect();
        Self {
            ts: self.ts[start..end].to_vec(),
            cols,
        }
    }

    /// Keep only rows for which the predicate holds. Columns and their
    /// metadata survive; rows stay aligned.
    #[must_use]
    pub fn filter_rows<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&Row<'_>) -> bool,
    {
        let keep: Vec<usize> = (0..self.ts.len())
            .filter(|&idx| pred(&Row { grid: self, idx }))
            .collect();
        let cols = self
            .cols
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                meta: c.meta.clone(),
                cells: keep.iter().map(|&i| c.cells[i].clone()).collect(),
            })
            .collect();
        Self {
            ts: keep.iter().map(|&i| self.ts[i]).collect(),
            cols,
        }
    }

    /// Pointwise cell rewrite over every value column. Timestamps and
    /// metadata are untouched.
    #[must_use]
    pub fn map_cells<F>(&self, f: F) -> Self
    where
        F: Fn(&Cell) -> Cell,
    {
        let cols = self
            .cols
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                meta: c.meta.clone(),
                cells: c.cells.iter().map(&f).collect(),
            })
            .collect();
        Self {
            ts: self.ts.clone(),
            cols,
        }
    }
}
