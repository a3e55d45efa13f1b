//! Integer axis ticks shared by the window and PNG charts.

/// Upper bound on ticks per axis before the step grows past one.
pub const MAX_TICKS: usize = 50;

/// Integer step for an axis spanning `lo..=hi`.
///
/// One unit while the span fits in [`MAX_TICKS`], otherwise the smallest
/// integer step that keeps the tick count within it.
pub fn integer_step(lo: f64, hi: f64) -> f64 {
    let span = (hi - lo).abs();
    if !span.is_finite() || span <= MAX_TICKS as f64 {
        1.0
    } else {
        (span / MAX_TICKS as f64).ceil()
    }
}

/// Integer tick positions inside `lo..=hi`, all multiples of [`integer_step`].
pub fn integer_ticks(lo: f64, hi: f64) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let step = integer_step(lo, hi);

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_step_for_small_span() {
        assert_eq!(integer_step(0.0, 10.0), 1.0);
        assert_eq!(integer_ticks(-0.4, 3.6), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_reversed_bounds() {
        assert_eq!(integer_ticks(2.5, 0.5), vec![1.0, 2.0]);
    }

    #[test]
    fn test_large_span_keeps_integer_step() {
        let ticks = integer_ticks(0.0, 1000.0);
        let step = integer_step(0.0, 1000.0);

        assert_eq!(step, 20.0);
        assert!(ticks.len() <= MAX_TICKS + 1);
        assert!(ticks.iter().all(|t| t.fract() == 0.0));
        assert!(ticks.windows(2).all(|w| w[1] - w[0] == step));
    }

    #[test]
    fn test_non_finite_bounds() {
        assert!(integer_ticks(f64::NEG_INFINITY, 1.0).is_empty());
        assert!(integer_ticks(0.0, f64::NAN).is_empty());
    }
}
