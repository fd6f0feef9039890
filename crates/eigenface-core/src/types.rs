use serde::{Deserialize, Serialize};

/// A decoded grayscale image: row-major intensity bytes plus dimensions.
#[derive(Debug, Clone)]
pub struct GrayImage {
    /// Grayscale pixel data (width * height bytes, row-major).
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl GrayImage {
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Pixel count implied by the dimensions, width * height.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A point in the reduced face space: one coordinate per retained eigenface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenspacePoint {
    pub coords: Vec<f64>,
}

impl EigenspacePoint {
    /// Euclidean distance to another point.
    ///
    /// Symmetric, and zero exactly when the two points are identical
    /// component-wise.
    pub fn euclidean_distance(&self, other: &EigenspacePoint) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

/// Outcome of classifying a probe against the training gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Classification {
    /// The nearest training sample was within the rejection threshold.
    Match { index: usize, distance: f64 },
    /// No training sample was close enough. Carries the minimum distance
    /// observed, for diagnostics.
    NoMatch { min_distance: f64 },
}

impl Classification {
    pub fn is_match(&self) -> bool {
        matches!(self, Classification::Match { .. })
    }
}
