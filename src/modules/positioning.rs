use nalgebra::{center, distance, Point2};

use crate::config::config::PositioningConfig;
use crate::error::RatingError;
use crate::modules::ensure_finite;
use crate::utils::coordinate::FaceLandmark;

pub(crate) const METRIC: &str = "positioning";

/// Distances the nose placement ratio is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NosePlacement {
    pub actual: f64,
    pub ideal: f64,
}

pub(crate) fn nose_placement(face: &FaceLandmark, config: &PositioningConfig) -> NosePlacement {
    let nose = face.nose();
    let left_eye_to_nose = distance(&face.left_eye(), &nose);
    let right_eye_to_nose = distance(&face.right_eye(), &nose);

    let mouth_mid = center(&face.left_mouth(), &face.right_mouth());
    let nose_to_mouth = distance(&mouth_mid, &nose);

    NosePlacement {
        actual: left_eye_to_nose.min(right_eye_to_nose),
        ideal: nose_to_mouth / config.nose_divisor,
    }
}

/// eye_alignment_score rates how level the eye line is.
///
/// Full credit for a horizontal eye line, falling linearly to 0 at
/// `tilt_tolerance` radians and staying at 0 beyond it.
pub fn eye_alignment_score(left_eye: Point2<f64>, right_eye: Point2<f64>, tilt_tolerance: f64) -> f64 {
    let eye_angle = (right_eye.y - left_eye.y).atan2(right_eye.x - left_eye.x).abs();
    (1.0 - eye_angle / tilt_tolerance).max(0.0)
}

/// positioning_score combines nose placement and eye-line alignment.
///
/// The nose tip should sit a third of the nose-to-mouth distance away from
/// the nearer eye corner; its ratio to the actual distance is averaged with
/// [`eye_alignment_score`].
///
/// # Arguments
/// * `face` - The five reference points
/// * `config` - Nose divisor and tilt tolerance
///
/// # Returns
/// * `Result<f64, RatingError>` - score in `[0, 1]`
pub fn positioning_score(face: &FaceLandmark, config: &PositioningConfig) -> Result<f64, RatingError> {
    let placement = nose_placement(face, config);
    ensure_finite(METRIC, &[placement.actual, placement.ideal])?;
    if placement.actual == 0.0 {
        return Err(RatingError::degenerate(METRIC, "an eye corner coincides with the nose tip"));
    }
    if placement.ideal == 0.0 {
        return Err(RatingError::degenerate(METRIC, "mouth midpoint coincides with the nose tip"));
    }

    let nose_position_ratio =
        placement.actual.min(placement.ideal) / placement.actual.max(placement.ideal);
    let alignment = eye_alignment_score(face.left_eye(), face.right_eye(), config.tilt_tolerance);

    Ok((nose_position_ratio + alignment) / 2.0)
}
