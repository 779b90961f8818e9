use nalgebra::distance;

use crate::config::config::RatingConfig;
use crate::error::RatingError;
use crate::helper::landmark_model::LandmarkModel;
use crate::modules::{ensure_finite, positioning, proportion, symmetry};
use crate::utils::coordinate::{FaceLandmark, LandmarkSet};

/// validate_landmarks checks a landmark set before any metric runs.
///
/// Rejects sets too short for the configured indices, reference points with
/// non-finite coordinates, and geometry for which any metric ratio would be
/// undefined. On success returns the five reference points.
///
/// # Arguments
/// * `landmarks` - Full landmark set from the detector
/// * `config` - Index layout and metric parameters
///
/// # Returns
/// * `Result<FaceLandmark, RatingError>`
pub fn validate_landmarks(landmarks: &LandmarkSet, config: &RatingConfig) -> Result<FaceLandmark, RatingError> {
    let model = LandmarkModel::new(config.indices);
    let required = model.required_len();
    if landmarks.len() < required {
        return Err(RatingError::InsufficientLandmarks {
            required,
            actual: landmarks.len(),
        });
    }

    let face = model.face_landmark(landmarks)?;
    let points = [
        face.left_eye,
        face.right_eye,
        face.nose,
        face.left_mouth,
        face.right_mouth,
    ];
    if let Some((index, _)) = config
        .indices
        .as_array()
        .into_iter()
        .zip(points)
        .find(|(_, point)| !point.is_finite())
    {
        return Err(RatingError::NonFiniteCoordinate { index });
    }

    validate_geometry(&face, config)?;
    Ok(face)
}

/// validate_geometry enforces the zero-distance and overflow preconditions of
/// every metric.
pub fn validate_geometry(face: &FaceLandmark, config: &RatingConfig) -> Result<(), RatingError> {
    let nose = face.nose();
    let left_eye_distance = distance(&nose, &face.left_eye());
    let right_eye_distance = distance(&nose, &face.right_eye());
    let left_mouth_distance = distance(&nose, &face.left_mouth());
    let right_mouth_distance = distance(&nose, &face.right_mouth());
    ensure_finite(
        symmetry::METRIC,
        &[left_eye_distance, right_eye_distance, left_mouth_distance, right_mouth_distance],
    )?;
    if left_eye_distance == 0.0 && right_eye_distance == 0.0 {
        return Err(RatingError::degenerate(
            symmetry::METRIC,
            "both eye corners coincide with the nose tip",
        ));
    }
    if left_mouth_distance == 0.0 && right_mouth_distance == 0.0 {
        return Err(RatingError::degenerate(
            symmetry::METRIC,
            "both mouth corners coincide with the nose tip",
        ));
    }

    let face_width = distance(&face.left_eye(), &face.right_eye());
    let face_height = proportion::face_height(face);
    ensure_finite(proportion::METRIC, &[face_width, face_height])?;
    if face_height == 0.0 {
        return Err(RatingError::degenerate(
            proportion::METRIC,
            "eye and mouth midpoints coincide",
        ));
    }

    let placement = positioning::nose_placement(face, &config.positioning);
    ensure_finite(positioning::METRIC, &[placement.actual, placement.ideal])?;
    if placement.actual == 0.0 {
        return Err(RatingError::degenerate(
            positioning::METRIC,
            "an eye corner coincides with the nose tip",
        ));
    }
    if placement.ideal == 0.0 {
        return Err(RatingError::degenerate(
            positioning::METRIC,
            "mouth midpoint coincides with the nose tip",
        ));
    }
    Ok(())
}
