use chrono::{DateTime, Utc};
use ritmo_types::{Cell, Column, ColumnMeta, Grid, RitmoError};

fn t(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}

fn num_col(name: &str, vals: &[Option<f64>]) -> Column {
    Column::new(
        name,
        vals.iter().map(|v| v.map_or(Cell::Null, Cell::Num)).collect(),
    )
}

fn sample_grid() -> Grid {
    Grid::new(
        vec![t(0), t(10), t(20), t(30)],
        vec![
            num_col("a", &[Some(1.0), Some(2.0), None, Some(4.0)]),
            num_col("b", &[None, Some(20.0), Some(30.0), None]),
        ],
    )
    .unwrap()
}

#[test]
fn construction_rejects_unsorted_ts() {
    let res = Grid::new(vec![t(10), t(0)], vec![num_col("a", &[Some(1.0), Some(2.0)])]);
    assert!(matches!(res, Err(RitmoError::Data(_))));
}

#[test]
fn construction_accepts_duplicate_timestamps() {
    // Non-decreasing, not strictly increasing.
    let res = Grid::new(vec![t(0), t(0), t(5)], vec![]);
    assert!(res.is_ok());
}

#[test]
fn construction_rejects_ragged_column() {
    let res = Grid::new(vec![t(0), t(10)], vec![num_col("a", &[Some(1.0)])]);
    assert!(matches!(res, Err(RitmoError::Data(_))));
}

#[test]
fn construction_rejects_reserved_and_duplicate_names() {
    let res = Grid::new(vec![t(0)], vec![num_col("ts", &[Some(1.0)])]);
    assert!(matches!(res, Err(RitmoError::InvalidArg(_))));

    let res = Grid::new(
        vec![t(0)],
        vec![num_col("a", &[Some(1.0)]), num_col("a", &[Some(2.0)])],
    );
    assert!(matches!(res, Err(RitmoError::InvalidArg(_))));
}

#[test]
fn col_names_excludes_ts_and_preserves_order() {
    let g = sample_grid();
    let names: Vec<&str> = g.col_names().collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn project_keeps_requested_order_and_skips_unknown() {
    let g = sample_grid();
    let p = g.project(&["b", "missing", "a"]);
    let names: Vec<&str> = p.col_names().collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(p.ts(), g.ts());
}

#[test]
fn remove_col_leaves_others_intact() {
    let g = sample_grid();
    let r = g.remove_col("a");
    assert_eq!(r.col_names().collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(r.col_values("b"), g.col_values("b"));
}

#[test]
fn slice_clamps_to_bounds() {
    let g = sample_grid();
    let s = g.slice(1, 3);
    assert_eq!(s.ts(), &[t(10), t(20)]);
    assert_eq!(
        s.col_values("a").unwrap(),
        &[Cell::Num(2.0), Cell::Null]
    );

    let oversized = g.slice(2, 99);
    assert_eq!(oversized.len(), 2);
    let inverted = g.slice(3, 1);
    assert!(inverted.is_empty());
}

#[test]
fn filter_rows_keeps_columns_aligned() {
    let g = sample_grid();
    let f = g.filter_rows(|row| row.cell("a").is_some_and(|c| !c.is_null()));
    assert_eq!(f.ts(), &[t(0), t(10), t(30)]);
    assert_eq!(
        f.col_values("b").unwrap(),
        &[Cell::Null, Cell::Num(20.0), Cell::Null]
    );
}

#[test]
fn map_cells_rewrites_every_value_column() {
    let g = sample_grid();
    let m = g.map_cells(|c| if c.is_null() { Cell::Na } else { c.clone() });
    assert_eq!(m.ts(), g.ts());
    assert_eq!(
        m.col_values("b").unwrap(),
        &[Cell::Na, Cell::Num(20.0), Cell::Num(30.0), Cell::Na]
    );
    // Non-null cells are untouched.
    assert_eq!(m.col_values("a").unwrap()[0], Cell::Num(1.0));
}

#[test]
fn column_meta_travels_through_grid_ops() {
    let col = num_col("a", &[Some(1.0), Some(2.0)]).with_meta(ColumnMeta::new().with_marker("cov"));
    let g = Grid::new(vec![t(0), t(10)], vec![col]).unwrap();
    let p = g.project(&["a"]).filter_rows(|_| true).map_cells(Clone::clone);
    assert!(p.col("a").unwrap().meta.is_cov());
}
