use nalgebra::{center, distance};

use crate::config::config::ProportionConfig;
use crate::error::RatingError;
use crate::modules::ensure_finite;
use crate::utils::coordinate::FaceLandmark;

pub(crate) const METRIC: &str = "proportion";

/// face_height is the distance between the eye-line and mouth-line midpoints.
pub(crate) fn face_height(face: &FaceLandmark) -> f64 {
    let eye_center = center(&face.left_eye(), &face.right_eye());
    let mouth_center = center(&face.left_mouth(), &face.right_mouth());
    distance(&eye_center, &mouth_center)
}

/// proportion_score rates how close the face width / height ratio is to the golden ratio.
///
/// Width is the eye-corner span and height the distance between the eye and
/// mouth midpoints. The score falls off linearly with the relative deviation
/// from the target and floors at 0.
///
/// # Arguments
/// * `face` - The five reference points
/// * `config` - Target ratio
///
/// # Returns
/// * `Result<f64, RatingError>` - score in `[0, 1]`
pub fn proportion_score(face: &FaceLandmark, config: &ProportionConfig) -> Result<f64, RatingError> {
    let face_width = distance(&face.left_eye(), &face.right_eye());
    let face_height = face_height(face);
    ensure_finite(METRIC, &[face_width, face_height])?;
    if face_height == 0.0 {
        return Err(RatingError::degenerate(METRIC, "eye and mouth midpoints coincide"));
    }

    let ratio = face_width / face_height;
    let deviation = (ratio - config.golden_ratio).abs() / config.golden_ratio;

    Ok((1.0 - deviation).max(0.0))
}

#[cfg(test)]
mod tests {
    use crate::config::config::ProportionConfig;
    use crate::error::RatingError;
    use crate::modules::fixtures::golden_face;
    use crate::modules::proportion::proportion_score;
    use crate::utils::coordinate::Point2D;

    #[test]
    fn test_golden_ratio_face() {
        let score = proportion_score(&golden_face(), &ProportionConfig::default()).unwrap();
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_falloff() {
        // width 161.8 over height 200 -> ratio 0.809, half the target
        let mut face = golden_face();
        face.left_mouth = Point2D::new(-30.0, 200.0);
        face.right_mouth = Point2D::new(30.0, 200.0);

        let score = proportion_score(&face, &ProportionConfig::default()).unwrap();
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_ratio_floors_at_zero() {
        // width 161.8 over height 10 -> ratio 16.18, deviation 9
        let mut face = golden_face();
        face.left_mouth = Point2D::new(-30.0, 10.0);
        face.right_mouth = Point2D::new(30.0, 10.0);

        let score = proportion_score(&face, &ProportionConfig::default()).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_zero_height_is_degenerate() {
        let mut face = golden_face();
        face.left_mouth = Point2D::new(-30.0, 0.0);
        face.right_mouth = Point2D::new(30.0, 0.0);

        assert!(matches!(
            proportion_score(&face, &ProportionConfig::default()),
            Err(RatingError::DegenerateGeometry { metric: "proportion", .. })
        ));
    }
}
