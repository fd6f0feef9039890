//! Viewable reconstruction of eigenfaces.
//!
//! Undoes the mean subtraction so an eigenface can be looked at as an
//! image. Components zeroed by the normalization floor are gone for good,
//! so the output is a degraded, best-effort view.

use crate::eigen::Eigenface;
use crate::error::{Error, Result};
use ndarray::Array1;

/// Add the mean face back onto each eigenface, clamping components above
/// 1 down to 1.
///
/// Only the upper bound is clamped here; the lower bound was already
/// floored during normalization and is not recovered.
pub fn renderable(mean_face: &Array1<f64>, eigenfaces: &[Eigenface]) -> Result<Vec<Array1<f64>>> {
    let mut vectors = Vec::with_capacity(eigenfaces.len());
    for face in eigenfaces {
        if face.values.len() != mean_face.len() {
            return Err(Error::DimensionMismatch {
                expected: mean_face.len(),
                actual: face.values.len(),
            });
        }
        vectors.push(
            face.values
                .iter()
                .zip(mean_face.iter())
                .map(|(&component, &mean)| (component + mean).min(1.0))
                .collect(),
        );
    }
    Ok(vectors)
}

/// Scale a renderable vector into 8-bit grayscale bytes.
///
/// Components are multiplied by 255; the float-to-u8 cast saturates, so
/// residual negative components land at 0.
pub fn to_gray_bytes(vector: &Array1<f64>) -> Vec<u8> {
    vector.iter().map(|&v| (v * 255.0) as u8).collect()
}
