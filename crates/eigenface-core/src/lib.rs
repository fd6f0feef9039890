//! Eigenface face classification.
//!
//! Implements the classic appearance-based recognition pipeline: per-image
//! intensity scaling, corpus mean subtraction, low-rank eigendecomposition
//! of the sample correlation matrix, eigenspace projection and
//! nearest-neighbor classification with a rejection threshold.
//!
//! [`FaceSpace`] ties the stages together for the usual train-once,
//! classify-probes flow; the stage modules stay public for callers that
//! need a single step.

pub mod classify;
pub mod eigen;
pub mod error;
pub mod facespace;
pub mod normalize;
pub mod projection;
pub mod render;
pub mod types;
pub mod vectorize;

pub use eigen::Eigenface;
pub use error::{Error, Result};
pub use facespace::FaceSpace;
pub use types::{Classification, EigenspacePoint, GrayImage};
