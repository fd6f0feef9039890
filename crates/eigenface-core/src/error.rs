use thiserror::Error;

/// Failure taxonomy of the eigenface pipeline.
///
/// Every stage propagates these to its caller; no stage substitutes a
/// default or retries.
#[derive(Error, Debug)]
pub enum Error {
    /// An image or vector disagrees with the dimensionality fixed at the
    /// start of the run.
    #[error("dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Zero training images, or zero samples at an aggregation point.
    #[error("empty corpus: at least one sample is required")]
    EmptyCorpus,

    /// An all-zero image cannot be scaled by its own maximum intensity.
    #[error("degenerate image: all pixels are zero")]
    DegenerateImage,

    /// The symmetric eigensolver did not converge.
    #[error("eigendecomposition did not converge within {iterations} iterations")]
    Decomposition { iterations: usize },

    /// Retained eigenface count outside 1..=N.
    #[error("eigenface count {requested} outside the valid range 1..={available}")]
    InvalidEigenfaceCount { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
