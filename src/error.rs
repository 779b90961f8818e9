use thiserror::Error;

/// Errors raised while turning a landmark set into a rating.
///
/// Every variant is terminal for the scoring attempt that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    #[error("landmark set has {actual} points, at least {required} are required")]
    InsufficientLandmarks { required: usize, actual: usize },

    #[error("degenerate geometry in {metric} metric: {reason}")]
    DegenerateGeometry {
        metric: &'static str,
        reason: &'static str,
    },

    #[error("landmark {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("malformed landmark data: {0}")]
    MalformedLandmarks(String),

    #[error("no face detected")]
    NoFaceDetected,

    #[error("{count} faces detected, exactly one is required")]
    MultipleFacesDetected { count: usize },
}

impl RatingError {
    pub(crate) fn degenerate(metric: &'static str, reason: &'static str) -> Self {
        RatingError::DegenerateGeometry { metric, reason }
    }
}

/// Errors raised while loading or validating a [`RatingConfig`](crate::config::config::RatingConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
