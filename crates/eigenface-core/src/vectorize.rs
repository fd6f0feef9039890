//! Per-image intensity vectorization and sample matrix assembly.
//!
//! Each image is flattened row-major and scaled to [0, 1] by its own
//! maximum intensity. The scaling is per-image, not per-corpus: two images
//! of different brightness both end up with a maximum component of 1.

use crate::error::{Error, Result};
use crate::types::GrayImage;
use ndarray::{Array2, ArrayView1};

/// Flatten a grayscale image into a [0, 1] intensity vector.
///
/// The outer loop runs over rows, the inner over columns. Every component
/// is divided by the largest intensity found in this image; an all-zero
/// image has no usable scale and fails with [`Error::DegenerateImage`].
pub fn intensity_vector(image: &GrayImage) -> Result<Vec<f64>> {
    let expected = image.pixel_count();
    if image.pixels.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: image.pixels.len(),
        });
    }

    let width = image.width as usize;
    let height = image.height as usize;

    let mut highest = 0u8;
    for y in 0..height {
        for x in 0..width {
            highest = highest.max(image.pixels[y * width + x]);
        }
    }
    if highest == 0 {
        return Err(Error::DegenerateImage);
    }

    let scale = f64::from(highest);
    let mut vector = Vec::with_capacity(expected);
    for y in 0..height {
        for x in 0..width {
            vector.push(f64::from(image.pixels[y * width + x]) / scale);
        }
    }
    Ok(vector)
}

/// Vectorize an ordered image sequence into an N x D sample matrix.
///
/// `expected_len` is the pixel dimensionality fixed for the run; any image
/// whose width * height disagrees fails with [`Error::DimensionMismatch`].
pub fn build_sample_matrix(images: &[GrayImage], expected_len: usize) -> Result<Array2<f64>> {
    if images.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    let mut matrix = Array2::zeros((images.len(), expected_len));
    for (row, image) in images.iter().enumerate() {
        if image.pixel_count() != expected_len {
            return Err(Error::DimensionMismatch {
                expected: expected_len,
                actual: image.pixel_count(),
            });
        }
        let vector = intensity_vector(image)?;
        matrix.row_mut(row).assign(&ArrayView1::from(&vector[..]));
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_vector_scales_by_own_maximum() {
        let image = GrayImage::new(vec![10, 20, 30, 40], 2, 2);
        let vector = intensity_vector(&image).unwrap();
        assert_eq!(vector, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_intensity_vector_row_major_order() {
        // 3x2 image: first row 0 10 20, second row 30 40 50
        let image = GrayImage::new(vec![0, 10, 20, 30, 40, 50], 3, 2);
        let vector = intensity_vector(&image).unwrap();
        assert_eq!(vector[0], 0.0);
        assert_eq!(vector[2], 0.4);
        assert_eq!(vector[3], 0.6);
        assert_eq!(vector[5], 1.0);
    }

    #[test]
    fn test_intensity_vector_all_zero_is_degenerate() {
        let image = GrayImage::new(vec![0u8; 9], 3, 3);
        let result = intensity_vector(&image);
        assert!(matches!(result, Err(Error::DegenerateImage)));
    }

    #[test]
    fn test_intensity_vector_rejects_short_buffer() {
        let image = GrayImage::new(vec![1, 2, 3], 2, 2);
        let result = intensity_vector(&image);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_sample_matrix_shape() {
        let images = vec![
            GrayImage::new(vec![1, 2, 3, 4], 2, 2),
            GrayImage::new(vec![5, 6, 7, 8], 2, 2),
            GrayImage::new(vec![9, 10, 11, 12], 2, 2),
        ];
        let matrix = build_sample_matrix(&images, 4).unwrap();
        assert_eq!(matrix.nrows(), 3);
        assert_eq!(matrix.ncols(), 4);
    }

    #[test]
    fn test_sample_matrix_normalization_is_per_image() {
        // Different absolute brightness, same relative shape: identical rows.
        let images = vec![
            GrayImage::new(vec![50, 100], 2, 1),
            GrayImage::new(vec![10, 20], 2, 1),
        ];
        let matrix = build_sample_matrix(&images, 2).unwrap();
        assert_eq!(matrix.row(0), matrix.row(1));
        assert_eq!(matrix[[0, 1]], 1.0);
    }

    #[test]
    fn test_sample_matrix_rejects_mismatched_image() {
        let images = vec![
            GrayImage::new(vec![1, 2, 3, 4], 2, 2),
            GrayImage::new(vec![1, 2, 3, 4, 5, 6], 3, 2),
        ];
        let result = build_sample_matrix(&images, 4);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 4,
                actual: 6
            })
        ));
    }

    #[test]
    fn test_sample_matrix_empty_corpus() {
        let result = build_sample_matrix(&[], 4);
        assert!(matches!(result, Err(Error::EmptyCorpus)));
    }
}
