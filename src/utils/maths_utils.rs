use argminmax::ArgMinMax;

/// (min, max) of a slice, None when empty.
#[inline]
pub(crate) fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let (min_index, max_index): (usize, usize) = values.argminmax();
    Some((values[min_index], values[max_index]))
}

/// Widens `[min, max]` by `pct` of its span on both sides.
/// A zero-width range is widened by `pct` of its magnitude (or by 1.0 at zero) so the
/// plot never collapses to a line.
pub(crate) fn padded_range(min: f64, max: f64, pct: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > f64::EPSILON {
        span * pct
    } else if min.abs() > f64::EPSILON {
        min.abs() * pct
    } else {
        1.0
    };
    (min - pad, max + pad)
}
