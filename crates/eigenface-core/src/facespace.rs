//! Trained eigenspace model and classification entry points.

use crate::classify::{Matcher, NearestNeighborMatcher};
use crate::eigen::{compute_eigenfaces, Eigenface};
use crate::error::{Error, Result};
use crate::normalize::{normalize_corpus, subtract_mean};
use crate::projection::{project, project_averaged};
use crate::render;
use crate::types::{Classification, EigenspacePoint, GrayImage};
use crate::vectorize::{build_sample_matrix, intensity_vector};
use ndarray::Array1;

/// A face space trained from one corpus: the mean face, the retained
/// eigenfaces and the projected training gallery.
///
/// Valid for exactly one pixel dimensionality, fixed by the first training
/// image; everything is recomputed from scratch per training run.
pub struct FaceSpace {
    dimension: usize,
    mean_face: Array1<f64>,
    eigenfaces: Vec<Eigenface>,
    gallery: Vec<EigenspacePoint>,
}

impl FaceSpace {
    /// Train on the corpus and retain the `eigenface_count` leading
    /// eigenfaces.
    ///
    /// `eigenface_count` must lie in 1..=N for N training images. The
    /// classifier later reports gallery indices in the order of `images`.
    pub fn train(images: &[GrayImage], eigenface_count: usize) -> Result<Self> {
        let first = images.first().ok_or(Error::EmptyCorpus)?;
        let dimension = first.pixel_count();

        let matrix = build_sample_matrix(images, dimension)?;
        let corpus = normalize_corpus(&matrix)?;
        let faces = compute_eigenfaces(&corpus.samples)?;

        if eigenface_count == 0 || eigenface_count > faces.len() {
            return Err(Error::InvalidEigenfaceCount {
                requested: eigenface_count,
                available: faces.len(),
            });
        }
        let eigenfaces: Vec<Eigenface> = faces.into_iter().take(eigenface_count).collect();

        let mut gallery = Vec::with_capacity(corpus.samples.nrows());
        for row in corpus.samples.outer_iter() {
            gallery.push(project(&eigenfaces, row)?);
        }

        tracing::info!(
            samples = gallery.len(),
            retained = eigenfaces.len(),
            dimension,
            "face space trained"
        );

        Ok(Self {
            dimension,
            mean_face: corpus.mean_face,
            eigenfaces,
            gallery,
        })
    }

    /// Classify a probe image against the training gallery.
    pub fn classify(&self, probe: &GrayImage, max_distance: f64) -> Result<Classification> {
        let point = self.probe_point(probe)?;
        NearestNeighborMatcher.classify(&self.gallery, &point, max_distance)
    }

    /// Project a probe image into the trained eigenspace.
    ///
    /// The probe runs through the same normalization as the corpus rows:
    /// per-image maximum scaling, then clamped mean subtraction.
    pub fn probe_point(&self, probe: &GrayImage) -> Result<EigenspacePoint> {
        let centered = self.centered_vector(probe)?;
        project(&self.eigenfaces, centered.view())
    }

    /// Representative point for several images of one identity: each image
    /// is projected independently and the points are averaged.
    pub fn averaged_point(&self, images: &[GrayImage]) -> Result<EigenspacePoint> {
        if images.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let mut centered = Vec::with_capacity(images.len());
        for image in images {
            centered.push(self.centered_vector(image)?);
        }
        let views: Vec<_> = centered.iter().map(|v| v.view()).collect();
        project_averaged(&self.eigenfaces, &views)
    }

    /// Viewable reconstructions of the retained eigenfaces, in eigenvalue
    /// order, for an external image writer.
    pub fn renderable_eigenfaces(&self) -> Result<Vec<Array1<f64>>> {
        render::renderable(&self.mean_face, &self.eigenfaces)
    }

    fn centered_vector(&self, image: &GrayImage) -> Result<Array1<f64>> {
        if image.pixel_count() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                actual: image.pixel_count(),
            });
        }
        let vector = Array1::from_vec(intensity_vector(image)?);
        subtract_mean(vector.view(), self.mean_face.view())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn mean_face(&self) -> &Array1<f64> {
        &self.mean_face
    }

    pub fn eigenfaces(&self) -> &[Eigenface] {
        &self.eigenfaces
    }

    pub fn gallery(&self) -> &[EigenspacePoint] {
        &self.gallery
    }
}
