use std::f64::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tolerance on the sum of the rating weights.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Positions of the five reference points inside a detector's landmark set.
///
/// The default is the 68-point facial landmark convention.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LandmarkIndices {
    pub left_eye: usize,
    pub right_eye: usize,
    pub nose: usize,
    pub left_mouth: usize,
    pub right_mouth: usize,
}

impl LandmarkIndices {
    /// Outer eye corners, nose tip and mouth corners of the 68-point scheme.
    pub const IBUG_68: LandmarkIndices = LandmarkIndices {
        left_eye: 36,
        right_eye: 45,
        nose: 30,
        left_mouth: 48,
        right_mouth: 54,
    };

    pub fn as_array(&self) -> [usize; 5] {
        [
            self.left_eye,
            self.right_eye,
            self.nose,
            self.left_mouth,
            self.right_mouth,
        ]
    }

    /// Minimum landmark set length able to serve every index.
    pub fn required_len(&self) -> usize {
        self.as_array().into_iter().max().unwrap_or(0) + 1
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let indices = self.as_array();
        for (i, a) in indices.iter().enumerate() {
            if indices[i + 1..].contains(a) {
                return Err(ConfigError::Invalid(format!(
                    "landmark index {a} is assigned to more than one reference point"
                )));
            }
        }
        Ok(())
    }
}

impl Default for LandmarkIndices {
    fn default() -> Self {
        LandmarkIndices::IBUG_68
    }
}

/// Weights of the three metrics in the total score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RatingWeights {
    pub symmetry: f64,
    pub proportions: f64,
    pub landmarks: f64,
}

impl RatingWeights {
    pub(crate) fn new() -> Self {
        RatingWeights {
            symmetry: 0.3,
            proportions: 0.4,
            landmarks: 0.3,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let weights = [self.symmetry, self.proportions, self.landmarks];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::Invalid(
                "rating weights must be finite and non-negative".to_string(),
            ));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::Invalid(format!(
                "rating weights must sum to 1, got {sum}"
            )));
        }
        Ok(())
    }
}

impl Default for RatingWeights {
    fn default() -> Self {
        RatingWeights::new()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProportionConfig {
    /// Target ratio of face width to face height.
    pub golden_ratio: f64,
}

impl ProportionConfig {
    pub(crate) fn new() -> Self {
        ProportionConfig {
            golden_ratio: 1.618,
        }
    }
}

impl Default for ProportionConfig {
    fn default() -> Self {
        ProportionConfig::new()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PositioningConfig {
    /// The ideal nose position is `nose_to_mouth / nose_divisor`.
    pub nose_divisor: f64,
    /// Eye-line tilt, in radians, at which alignment scores zero.
    pub tilt_tolerance: f64,
}

impl PositioningConfig {
    pub(crate) fn new() -> Self {
        PositioningConfig {
            nose_divisor: 3.0,
            tilt_tolerance: PI / 6.0,
        }
    }
}

impl Default for PositioningConfig {
    fn default() -> Self {
        PositioningConfig::new()
    }
}

/// Full configuration of a [`FaceRater`](crate::pipeline::pipeline::FaceRater).
///
/// `RatingConfig::default()` reproduces the canonical scoring constants. Any
/// field missing from a config file takes its default.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RatingConfig {
    pub indices: LandmarkIndices,
    pub weights: RatingWeights,
    pub proportion: ProportionConfig,
    pub positioning: PositioningConfig,
}

impl RatingConfig {
    /// from_json parses and validates a config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RatingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// from_json_file reads, parses and validates a config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        RatingConfig::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.indices.validate()?;
        self.weights.validate()?;

        let golden_ratio = self.proportion.golden_ratio;
        if !golden_ratio.is_finite() || golden_ratio <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "golden ratio must be a positive number, got {golden_ratio}"
            )));
        }

        let PositioningConfig {
            nose_divisor,
            tilt_tolerance,
        } = self.positioning;
        if !nose_divisor.is_finite() || nose_divisor <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "nose divisor must be a positive number, got {nose_divisor}"
            )));
        }
        if !tilt_tolerance.is_finite() || tilt_tolerance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tilt tolerance must be a positive angle, got {tilt_tolerance}"
            )));
        }
        Ok(())
    }
}
