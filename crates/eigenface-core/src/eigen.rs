//! Low-rank eigenspace construction.
//!
//! For N training images of D pixels each, the D x D pixel covariance is
//! intractable when D is large. The N x N sample correlation matrix
//! `S = X * X^T` shares its nonzero eigenvalues, so the eigenproblem is
//! solved there and each length-N eigenvector is expanded back into pixel
//! space as a weighted sum of the normalized training rows. For N > D the
//! shortcut buys nothing but stays numerically valid.

use crate::error::{Error, Result};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

/// Convergence tolerance for the symmetric eigensolver.
const EIGEN_EPSILON: f64 = 1.0e-12;
/// Solver iteration limit per sample row.
const EIGEN_SWEEPS_PER_SAMPLE: usize = 30;

/// A pixel-space principal component of the training corpus.
///
/// Carried with the eigenvalue it was derived from; the full sequence is
/// ordered by descending eigenvalue. The expanded vector is not
/// re-normalized to unit length, so projection magnitudes scale with the
/// corpus energy.
#[derive(Debug, Clone)]
pub struct Eigenface {
    pub eigenvalue: f64,
    /// Pixel-space component, one value per image pixel.
    pub values: Array1<f64>,
}

/// Compute all N eigenfaces of a normalized N x D sample matrix, ordered
/// by descending eigenvalue.
///
/// The symmetric solver guarantees real eigenvalues; its native output
/// order is unspecified, so a stable index sort on the eigenvalue
/// sequence fixes the final ordering (equal eigenvalues keep their solver
/// index order).
pub fn compute_eigenfaces(normalized: &Array2<f64>) -> Result<Vec<Eigenface>> {
    let samples = normalized.nrows();
    if samples == 0 {
        return Err(Error::EmptyCorpus);
    }

    let gram = normalized.dot(&normalized.t());
    let gram = DMatrix::from_fn(samples, samples, |r, c| gram[[r, c]]);

    let max_iterations = EIGEN_SWEEPS_PER_SAMPLE * samples;
    let eigen = gram
        .try_symmetric_eigen(EIGEN_EPSILON, max_iterations)
        .ok_or(Error::Decomposition {
            iterations: max_iterations,
        })?;

    let mut order: Vec<usize> = (0..samples).collect();
    order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));

    let mut faces = Vec::with_capacity(samples);
    for &column in &order {
        let weights = eigen.eigenvectors.column(column);
        let mut values = Array1::<f64>::zeros(normalized.ncols());
        for (index, row) in normalized.outer_iter().enumerate() {
            values.scaled_add(weights[index], &row);
        }
        faces.push(Eigenface {
            eigenvalue: eigen.eigenvalues[column],
            values,
        });
    }

    tracing::debug!(
        samples,
        dimension = normalized.ncols(),
        "eigenfaces computed"
    );

    Ok(faces)
}
