use crate::error::RatingError;
use crate::utils::coordinate::{LandmarkSet, Point2D};

/// u8_to_f32_vec decodes little-endian `f32` values; trailing bytes that do not
/// form a whole value are ignored.
pub fn u8_to_f32_vec(v: &[u8]) -> Vec<f32> {
    v.chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// landmarks_from_le_bytes builds a landmark set from a raw detector output tensor.
///
/// The tensor is a flat sequence of little-endian `f32` values laid out as
/// `x0, y0, x1, y1, ...`.
///
/// # Arguments
/// * `raw` - Raw output bytes of the landmark model
///
/// # Returns
/// * `Result<LandmarkSet, RatingError>`
pub fn landmarks_from_le_bytes(raw: &[u8]) -> Result<LandmarkSet, RatingError> {
    if raw.len() % 8 != 0 {
        return Err(RatingError::MalformedLandmarks(format!(
            "raw tensor of {} bytes is not a whole number of f32 (x, y) pairs",
            raw.len()
        )));
    }

    let values = u8_to_f32_vec(raw);
    Ok(values
        .chunks_exact(2)
        .map(|pair| Point2D::new(pair[0] as f64, pair[1] as f64))
        .collect())
}
