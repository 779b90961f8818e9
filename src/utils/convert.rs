use ndarray::{Array2, ArrayView2};

use crate::error::RatingError;
use crate::utils::coordinate::{FaceLandmark, LandmarkSet, Point2D};

/// landmarks_from_array converts an `(N, 2)` landmark array into a landmark set.
///
/// # Arguments
/// * `arr` - Two-dimensional array where each row is an `(x, y)` point
///
/// # Returns
/// * `Result<LandmarkSet, RatingError>`
pub fn landmarks_from_array<T>(arr: ArrayView2<T>) -> Result<LandmarkSet, RatingError>
where
    T: Copy + Into<f64>,
{
    let ncols = arr.ncols();
    if ncols != 2 {
        return Err(RatingError::MalformedLandmarks(format!(
            "expected 2 columns per landmark, got {ncols}"
        )));
    }

    Ok(arr
        .rows()
        .into_iter()
        .map(|row| Point2D::new(row[0].into(), row[1].into()))
        .collect())
}

/// face_landmark_to_array flattens the five reference points into a `(5, 2)` array
/// ordered left eye, right eye, nose, left mouth, right mouth.
pub fn face_landmark_to_array(face: &FaceLandmark) -> Array2<f64> {
    let ordered = [
        face.left_eye,
        face.right_eye,
        face.nose,
        face.left_mouth,
        face.right_mouth,
    ];

    let mut arr = Array2::<f64>::zeros((ordered.len(), 2));
    for (mut row, point) in arr.rows_mut().into_iter().zip(ordered) {
        row[0] = point.x;
        row[1] = point.y;
    }
    arr
}
