/// Canonical rollup intervals in seconds: 1–30 s, 1–30 min, 1–24 hr.
pub const DEFAULT_CANDIDATES: [i64; 18] = [
    1, 2, 5, 10, 15, 30, // seconds
    60, 120, 180, 300, 600, 900, 1800, // minutes
    3600, 7200, 21_600, 43_200, 86_400, // hours
];

/// Snap an estimated interval to the closest candidate by absolute
/// distance in seconds.
///
/// The ranking uses a stable sort, so an exact-distance tie resolves to
/// the earliest candidate in the supplied order. An empty candidate list
/// is out of contract and degrades to rounding the input rather than
/// panicking.
///
/// ```
/// use ritmo_core::{DEFAULT_CANDIDATES, snap_to_candidate};
///
/// // |7-5| = 2 beats |7-10| = 3
/// assert_eq!(snap_to_candidate(7.0, &[5, 10]), 5);
/// // exact tie: 7.5 is equidistant from 5 and 10; earliest wins
/// assert_eq!(snap_to_candidate(7.5, &[5, 10]), 5);
/// assert_eq!(snap_to_candidate(60.0, &DEFAULT_CANDIDATES), 60);
/// ```
#[must_use]
pub fn snap_to_candidate(seconds: f64, candidates: &[i64]) -> i64 {
    let mut ranked: Vec<i64> = candidates.to_vec();
    // sort_by is stable: equal distances keep the supplied order.
    ranked.sort_by(|a, b| {
        let da = (*a as f64 - seconds).abs();
        let db = (*b as f64 - seconds).abs();
        da.total_cmp(&db)
    });
    ranked
        .first()
        .copied()
        .unwrap_or_else(|| seconds.round() as i64)
}
