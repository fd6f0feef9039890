//! Projection of pixel-space vectors onto the retained eigenfaces.

use crate::eigen::Eigenface;
use crate::error::{Error, Result};
use crate::types::EigenspacePoint;
use ndarray::ArrayView1;

/// Project a pixel-space vector into eigenspace.
///
/// One coordinate per eigenface, in the eigenfaces' given order: the dot
/// product of that eigenface with the vector.
pub fn project(eigenfaces: &[Eigenface], vector: ArrayView1<'_, f64>) -> Result<EigenspacePoint> {
    let mut coords = Vec::with_capacity(eigenfaces.len());
    for face in eigenfaces {
        if face.values.len() != vector.len() {
            return Err(Error::DimensionMismatch {
                expected: face.values.len(),
                actual: vector.len(),
            });
        }
        coords.push(face.values.dot(&vector));
    }
    Ok(EigenspacePoint { coords })
}

/// Project several vectors independently and average the resulting points.
///
/// Used when multiple training images represent one identity: the
/// component-wise mean is that identity's single representative point.
/// Projection is linear, so a sequence repeating one vector averages back
/// to that vector's own projection.
pub fn project_averaged(
    eigenfaces: &[Eigenface],
    vectors: &[ArrayView1<'_, f64>],
) -> Result<EigenspacePoint> {
    if vectors.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    let mut sum = vec![0.0f64; eigenfaces.len()];
    for vector in vectors {
        let point = project(eigenfaces, *vector)?;
        for (acc, coord) in sum.iter_mut().zip(point.coords) {
            *acc += coord;
        }
    }

    let count = vectors.len() as f64;
    Ok(EigenspacePoint {
        coords: sum.into_iter().map(|c| c / count).collect(),
    })
}
