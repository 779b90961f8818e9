use crate::config::config::RatingConfig;
use crate::error::{ConfigError, RatingError};
use crate::modules::positioning::positioning_score;
use crate::modules::proportion::proportion_score;
use crate::modules::symmetry::symmetry_score;
use crate::modules::validator::validate_landmarks;
use crate::pipeline::aggregator::{aggregate, MetricScores, RatingResult};
use crate::utils::coordinate::LandmarkSet;

/// Stateless face rating service.
///
/// Holds only immutable configuration, so a single rater can be shared
/// across threads and called concurrently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceRater {
    config: RatingConfig,
}

impl FaceRater {
    /// new initializes a rater after validating its configuration.
    pub fn new(config: RatingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(FaceRater { config })
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// metric_scores computes the three raw metric scores of a face.
    ///
    /// # Arguments
    /// * `landmarks` - Full landmark set from the detector
    ///
    /// # Returns
    /// * `Result<MetricScores, RatingError>`
    pub fn metric_scores(&self, landmarks: &LandmarkSet) -> Result<MetricScores, RatingError> {
        let face = validate_landmarks(landmarks, &self.config)?;

        Ok(MetricScores {
            symmetry: symmetry_score(&face)?,
            proportions: proportion_score(&face, &self.config.proportion)?,
            landmarks: positioning_score(&face, &self.config.positioning)?,
        })
    }

    /// rate scores a single face.
    ///
    /// # Arguments
    /// * `landmarks` - Full landmark set from the detector
    ///
    /// # Returns
    /// * `Result<RatingResult, RatingError>`
    pub fn rate(&self, landmarks: &LandmarkSet) -> Result<RatingResult, RatingError> {
        let scores = self.metric_scores(landmarks)?;
        Ok(aggregate(&scores, &self.config.weights))
    }

    /// rate_detections scores the only face of a detection result.
    ///
    /// Fails when the detector found no face or more than one.
    ///
    /// # Arguments
    /// * `detections` - Landmark sets of every face found in one frame
    ///
    /// # Returns
    /// * `Result<RatingResult, RatingError>`
    pub fn rate_detections(&self, detections: &[LandmarkSet]) -> Result<RatingResult, RatingError> {
        match detections {
            [] => Err(RatingError::NoFaceDetected),
            [face] => self.rate(face),
            faces => Err(RatingError::MultipleFacesDetected { count: faces.len() }),
        }
    }
}

/// score_face rates a 68-point landmark set with the canonical weights and constants.
pub fn score_face(landmarks: &LandmarkSet) -> Result<RatingResult, RatingError> {
    FaceRater::default().rate(landmarks)
}
