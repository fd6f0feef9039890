//! Corpus normalization: mean face computation and clamped subtraction.

use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// A sample matrix with its mean face subtracted row-wise.
pub struct NormalizedCorpus {
    /// Element-wise mean of the unnormalized sample rows.
    pub mean_face: Array1<f64>,
    /// Mean-subtracted rows, floored at zero.
    pub samples: Array2<f64>,
}

/// Element-wise mean across all rows of the sample matrix.
pub fn mean_face(matrix: &Array2<f64>) -> Result<Array1<f64>> {
    matrix.mean_axis(Axis(0)).ok_or(Error::EmptyCorpus)
}

/// Subtract the mean face from one sample, flooring each component at zero.
///
/// The floor discards negative residuals irreversibly; the renderer's
/// mean add-back cannot restore them. Positive overshoot is left alone
/// here and only clamped on the render path.
pub fn subtract_mean(row: ArrayView1<'_, f64>, mean: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
    if row.len() != mean.len() {
        return Err(Error::DimensionMismatch {
            expected: mean.len(),
            actual: row.len(),
        });
    }
    Ok(row
        .iter()
        .zip(mean.iter())
        .map(|(&sample, &mean)| (sample - mean).max(0.0))
        .collect())
}

/// Apply [`subtract_mean`] to every row using the corpus's own mean face.
pub fn normalize_corpus(matrix: &Array2<f64>) -> Result<NormalizedCorpus> {
    let mean = mean_face(matrix)?;
    let mut samples = Array2::zeros(matrix.raw_dim());
    for (index, row) in matrix.outer_iter().enumerate() {
        let centered = subtract_mean(row, mean.view())?;
        samples.row_mut(index).assign(&centered);
    }
    Ok(NormalizedCorpus {
        mean_face: mean,
        samples,
    })
}
