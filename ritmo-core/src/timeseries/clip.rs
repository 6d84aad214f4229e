use crate::types::Grid;

/// Trim `grid` to the minimal contiguous row span covering the named
/// column's recorded samples.
///
/// Leading and trailing rows where the column is null are dropped; the
/// NA sentinel counts as a recorded sample and anchors the span like any
/// other value. Interior nulls survive. An unknown column, or a column
/// with no recorded samples at all, yields an empty grid.
#[must_use]
pub fn clip_to_covered(grid: &Grid, col: &str) -> Grid {
    let Some(cells) = grid.col_values(col) else {
        return Grid::empty();
    };
    let Some(first) = cells.iter().position(|c| !c.is_null()) else {
        return Grid::empty();
    };
    let last = cells.iter().rposition(|c| !c.is_null()).unwrap_or(first);
    grid.slice(first, last + 1)
}
