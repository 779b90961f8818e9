use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::config::RatingWeights;

/// Raw metric scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScores {
    pub symmetry: f64,
    pub proportions: f64,
    pub landmarks: f64,
}

/// Final rating of one face.
///
/// `total` is on a 0-10 scale with one decimal; the sub-scores are
/// percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    pub total: f64,
    pub symmetry: u8,
    pub proportions: u8,
    pub landmarks: u8,
}

impl fmt::Display for RatingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {:.1} / 10", self.total)?;
        writeln!(f, "Symmetry: {}%", self.symmetry)?;
        writeln!(f, "Proportions: {}%", self.proportions)?;
        write!(f, "Landmarks: {}%", self.landmarks)
    }
}

fn percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// aggregate combines the three metric scores into a rating.
///
/// `total = round(weighted_sum * 10, 1 decimal)`; each sub-score is scaled
/// to a percentage and rounded to the nearest integer.
///
/// # Arguments
/// * `scores` - Raw metric scores
/// * `weights` - Metric weights, summing to 1
///
/// # Returns
/// * `RatingResult`
pub fn aggregate(scores: &MetricScores, weights: &RatingWeights) -> RatingResult {
    let total_raw = scores.symmetry * weights.symmetry
        + scores.proportions * weights.proportions
        + scores.landmarks * weights.landmarks;
    let total = ((total_raw * 100.0).round() / 10.0).clamp(0.0, 10.0);

    RatingResult {
        total,
        symmetry: percent(scores.symmetry),
        proportions: percent(scores.proportions),
        landmarks: percent(scores.landmarks),
    }
}
