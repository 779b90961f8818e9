//! Facial attractiveness rating from 2-D landmarks.
//!
//! A landmark set following the 68-point convention is reduced to five
//! reference points (outer eye corners, nose tip, mouth corners) and scored
//! on three metrics:
//!
//! - **symmetry**: nose-to-feature distance balance between both sides
//! - **proportions**: face width / height against the golden ratio
//! - **landmarks**: nose placement and eye-line alignment
//!
//! The metrics are weighted 0.3 / 0.4 / 0.3 into a total out of 10. Scoring is
//! pure and deterministic: no I/O, no logging, no shared state.
//!
//! ```rust,ignore
//! use face_rating::{score_face, LandmarkSet};
//!
//! let landmarks: LandmarkSet = serde_json::from_str(&detector_output)?;
//! let rating = score_face(&landmarks)?;
//! println!("{rating}");
//! ```

pub mod config;
pub mod error;
pub mod helper;
pub mod modules;
pub mod pipeline;
pub mod utils;

pub use config::config::{
    LandmarkIndices, PositioningConfig, ProportionConfig, RatingConfig, RatingWeights,
};
pub use error::{ConfigError, RatingError};
pub use helper::landmark_model::LandmarkModel;
pub use pipeline::aggregator::{aggregate, MetricScores, RatingResult};
pub use pipeline::pipeline::{score_face, FaceRater};
pub use utils::coordinate::{FaceLandmark, LandmarkSet, Point2D};
