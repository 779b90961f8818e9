use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A single 2-D landmark position in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Point2D> for Point2<f64> {
    fn from(p: Point2D) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<Point2<f64>> for Point2D {
    fn from(p: Point2<f64>) -> Self {
        Point2D::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

/// Ordered landmark positions as produced by a face-landmark detector.
///
/// Serializes as a plain JSON array of `{"x": .., "y": ..}` points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: Vec<Point2D>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point2D>) -> Self {
        LandmarkSet { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point2D> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }
}

impl From<Vec<Point2D>> for LandmarkSet {
    fn from(points: Vec<Point2D>) -> Self {
        LandmarkSet::new(points)
    }
}

impl FromIterator<Point2D> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        LandmarkSet::new(iter.into_iter().collect())
    }
}

/// The five reference points every metric is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceLandmark {
    pub left_eye: Point2D,
    pub right_eye: Point2D,
    pub nose: Point2D,
    pub left_mouth: Point2D,
    pub right_mouth: Point2D,
}

impl FaceLandmark {
    pub(crate) fn left_eye(&self) -> Point2<f64> {
        self.left_eye.into()
    }

    pub(crate) fn right_eye(&self) -> Point2<f64> {
        self.right_eye.into()
    }

    pub(crate) fn nose(&self) -> Point2<f64> {
        self.nose.into()
    }

    pub(crate) fn left_mouth(&self) -> Point2<f64> {
        self.left_mouth.into()
    }

    pub(crate) fn right_mouth(&self) -> Point2<f64> {
        self.right_mouth.into()
    }
}
