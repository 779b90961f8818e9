use crate::config::config::LandmarkIndices;
use crate::error::RatingError;
use crate::utils::coordinate::{FaceLandmark, LandmarkSet, Point2D};

/// Maps a detector's landmark layout to the five reference points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LandmarkModel {
    indices: LandmarkIndices,
}

impl LandmarkModel {
    /// new initializes a model for the given index layout.
    pub fn new(indices: LandmarkIndices) -> Self {
        LandmarkModel { indices }
    }

    pub fn indices(&self) -> &LandmarkIndices {
        &self.indices
    }

    /// required_len is the minimum number of points a landmark set must carry.
    pub fn required_len(&self) -> usize {
        self.indices.required_len()
    }

    pub fn left_eye(&self, landmarks: &LandmarkSet) -> Result<Point2D, RatingError> {
        self.point(landmarks, self.indices.left_eye)
    }

    pub fn right_eye(&self, landmarks: &LandmarkSet) -> Result<Point2D, RatingError> {
        self.point(landmarks, self.indices.right_eye)
    }

    pub fn nose(&self, landmarks: &LandmarkSet) -> Result<Point2D, RatingError> {
        self.point(landmarks, self.indices.nose)
    }

    pub fn left_mouth(&self, landmarks: &LandmarkSet) -> Result<Point2D, RatingError> {
        self.point(landmarks, self.indices.left_mouth)
    }

    pub fn right_mouth(&self, landmarks: &LandmarkSet) -> Result<Point2D, RatingError> {
        self.point(landmarks, self.indices.right_mouth)
    }

    /// face_landmark extracts all five reference points at once.
    ///
    /// # Arguments
    /// * `landmarks` - Full landmark set from the detector
    ///
    /// # Returns
    /// * `Result<FaceLandmark, RatingError>`
    pub fn face_landmark(&self, landmarks: &LandmarkSet) -> Result<FaceLandmark, RatingError> {
        Ok(FaceLandmark {
            left_eye: self.left_eye(landmarks)?,
            right_eye: self.right_eye(landmarks)?,
            nose: self.nose(landmarks)?,
            left_mouth: self.left_mouth(landmarks)?,
            right_mouth: self.right_mouth(landmarks)?,
        })
    }

    fn point(&self, landmarks: &LandmarkSet, index: usize) -> Result<Point2D, RatingError> {
        landmarks
            .get(index)
            .ok_or(RatingError::InsufficientLandmarks {
                required: self.required_len(),
                actual: landmarks.len(),
            })
    }
}
