pub mod positioning;
pub mod proportion;
pub mod symmetry;
pub mod validator;

use crate::error::RatingError;

/// min_max_ratio returns `min(a, b) / max(a, b)`, or `None` when the larger
/// distance is zero.
pub(crate) fn min_max_ratio(a: f64, b: f64) -> Option<f64> {
    let max = a.max(b);
    if max == 0.0 {
        return None;
    }
    Some(a.min(b) / max)
}

/// ensure_finite rejects derived distances that overflowed `f64`.
pub(crate) fn ensure_finite(metric: &'static str, values: &[f64]) -> Result<(), RatingError> {
    if values.iter().all(|v| v.is_finite()) {
        return Ok(());
    }
    Err(RatingError::degenerate(metric, "reference distances overflow f64"))
}
