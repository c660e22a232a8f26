/// Computes `hits * 100 / total` rounded to one decimal place.
///
/// Rounding is half away from zero on the exact ratio, done in integer tenths
/// so the same inputs always give the same value. Callers guarantee
/// `total > 0` and `0 <= hits`.
pub fn compute_percent(hits: i64, total: i64) -> f64 {
    debug_assert!(total > 0 && hits >= 0);

    let hits = i128::from(hits);
    let total = i128::from(total);
    let tenths = (hits * 2000 + total) / (2 * total);

    tenths as f64 / 10.0
}
