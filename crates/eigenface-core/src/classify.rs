//! Nearest-neighbor classification in eigenspace.

use crate::error::{Error, Result};
use crate::types::{Classification, EigenspacePoint};

/// Strategy for matching a probe point against a gallery of training points.
pub trait Matcher {
    fn classify(
        &self,
        gallery: &[EigenspacePoint],
        probe: &EigenspacePoint,
        max_distance: f64,
    ) -> Result<Classification>;
}

/// Euclidean nearest-neighbor matcher with a rejection threshold.
///
/// Scans every gallery entry; ties keep the first index in input order.
/// A probe matches iff its minimum distance is at most `max_distance`
/// (the threshold is inclusive).
pub struct NearestNeighborMatcher;

impl Matcher for NearestNeighborMatcher {
    fn classify(
        &self,
        gallery: &[EigenspacePoint],
        probe: &EigenspacePoint,
        max_distance: f64,
    ) -> Result<Classification> {
        if gallery.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let mut best_index = 0usize;
        let mut best_distance = f64::INFINITY;

        for (index, point) in gallery.iter().enumerate() {
            if point.coords.len() != probe.coords.len() {
                return Err(Error::DimensionMismatch {
                    expected: point.coords.len(),
                    actual: probe.coords.len(),
                });
            }
            let distance = probe.euclidean_distance(point);
            if distance < best_distance {
                best_distance = distance;
                best_index = index;
            }
        }

        tracing::debug!(best_index, best_distance, max_distance, "nearest gallery point");

        if best_distance <= max_distance {
            Ok(Classification::Match {
                index: best_index,
                distance: best_distance,
            })
        } else {
            Ok(Classification::NoMatch {
                min_distance: best_distance,
            })
        }
    }
}
