use nalgebra::distance;

use crate::error::RatingError;
use crate::modules::{ensure_finite, min_max_ratio};
use crate::utils::coordinate::FaceLandmark;

pub(crate) const METRIC: &str = "symmetry";

/// symmetry_score measures bilateral symmetry about the nose tip.
///
/// The nose-to-eye and nose-to-mouth-corner distances are compared pairwise
/// as `min / max`; the score is the mean of the eye and mouth ratios.
///
/// # Arguments
/// * `face` - The five reference points
///
/// # Returns
/// * `Result<f64, RatingError>` - score in `[0, 1]`, 1 for perfectly mirrored distances
pub fn symmetry_score(face: &FaceLandmark) -> Result<f64, RatingError> {
    let nose = face.nose();

    let left_eye_distance = distance(&nose, &face.left_eye());
    let right_eye_distance = distance(&nose, &face.right_eye());
    let left_mouth_distance = distance(&nose, &face.left_mouth());
    let right_mouth_distance = distance(&nose, &face.right_mouth());
    ensure_finite(
        METRIC,
        &[left_eye_distance, right_eye_distance, left_mouth_distance, right_mouth_distance],
    )?;

    let eye_symmetry = min_max_ratio(left_eye_distance, right_eye_distance)
        .ok_or(RatingError::degenerate(METRIC, "both eye corners coincide with the nose tip"))?;
    let mouth_symmetry = min_max_ratio(left_mouth_distance, right_mouth_distance)
        .ok_or(RatingError::degenerate(METRIC, "both mouth corners coincide with the nose tip"))?;

    Ok((eye_symmetry + mouth_symmetry) / 2.0)
}
