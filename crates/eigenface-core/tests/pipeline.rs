//! End-to-end pipeline tests over small literal corpora.

use eigenface_core::{Classification, Error, FaceSpace, GrayImage};

fn image_2x2(pixels: [u8; 4]) -> GrayImage {
    GrayImage::new(pixels.to_vec(), 2, 2)
}

fn known_corpus() -> Vec<GrayImage> {
    vec![
        image_2x2([1, 2, 3, 4]),
        image_2x2([5, 6, 7, 8]),
        image_2x2([9, 10, 11, 12]),
        image_2x2([13, 14, 15, 16]),
    ]
}

#[test]
fn self_probe_matches_its_own_training_index_at_distance_zero() {
    let space = FaceSpace::train(&known_corpus(), 2).unwrap();

    // The probe is training image 0 unmodified, so it follows bit-for-bit
    // the same normalization and projection path as gallery entry 0.
    let result = space.classify(&image_2x2([1, 2, 3, 4]), 0.0).unwrap();
    match result {
        Classification::Match { index, distance } => {
            assert_eq!(index, 0);
            assert!(distance.abs() < 1e-12, "expected exact self-match, got {distance}");
        }
        Classification::NoMatch { min_distance } => {
            panic!("self-probe rejected at minimum distance {min_distance}")
        }
    }
}

#[test]
fn identical_corpus_probe_matches_first_index_at_zero_threshold() {
    // Three identical images normalize to all-zero rows; every projection
    // collapses to the origin and ties resolve to the first index.
    let images = vec![
        image_2x2([10, 20, 30, 40]),
        image_2x2([10, 20, 30, 40]),
        image_2x2([10, 20, 30, 40]),
    ];
    let space = FaceSpace::train(&images, 2).unwrap();

    let result = space.classify(&image_2x2([10, 20, 30, 40]), 0.0).unwrap();
    assert_eq!(
        result,
        Classification::Match {
            index: 0,
            distance: 0.0
        }
    );
}

#[test]
fn negative_threshold_rejects_an_exact_match() {
    let space = FaceSpace::train(&known_corpus(), 2).unwrap();
    let result = space.classify(&image_2x2([1, 2, 3, 4]), -1.0).unwrap();
    match result {
        Classification::NoMatch { min_distance } => assert!(min_distance.abs() < 1e-12),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn distant_probe_reports_minimum_distance() {
    let space = FaceSpace::train(&known_corpus(), 2).unwrap();

    // A probe far from every training ray, under a threshold of zero.
    let result = space.classify(&image_2x2([255, 1, 1, 255]), 0.0).unwrap();
    match result {
        Classification::NoMatch { min_distance } => {
            assert!(min_distance > 0.0, "diagnostic distance must be positive");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn probe_with_wrong_dimensions_is_rejected() {
    let space = FaceSpace::train(&known_corpus(), 2).unwrap();
    let probe = GrayImage::new(vec![1, 2, 3, 4, 5, 6], 3, 2);
    let result = space.classify(&probe, 100.0);
    assert!(matches!(
        result,
        Err(Error::DimensionMismatch {
            expected: 4,
            actual: 6
        })
    ));
}

#[test]
fn degenerate_probe_is_rejected() {
    let space = FaceSpace::train(&known_corpus(), 2).unwrap();
    let result = space.classify(&image_2x2([0, 0, 0, 0]), 100.0);
    assert!(matches!(result, Err(Error::DegenerateImage)));
}

#[test]
fn renderable_eigenfaces_stay_at_or_below_one() {
    let space = FaceSpace::train(&known_corpus(), 3).unwrap();
    assert_eq!(space.mean_face().len(), 4);

    let vectors = space.renderable_eigenfaces().unwrap();
    assert_eq!(vectors.len(), 3);
    for vector in &vectors {
        assert_eq!(vector.len(), 4);
        assert!(vector.iter().all(|&v| v <= 1.0));
    }
}

#[test]
fn retaining_all_eigenfaces_still_self_matches() {
    let space = FaceSpace::train(&known_corpus(), 4).unwrap();
    let result = space.classify(&image_2x2([9, 10, 11, 12]), 0.0).unwrap();
    assert_eq!(
        result,
        Classification::Match {
            index: 2,
            distance: 0.0
        }
    );
}
