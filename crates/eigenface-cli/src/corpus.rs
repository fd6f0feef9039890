//! Training corpus discovery, decoding and eigenface image output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use eigenface_core::GrayImage;

/// List image files in `dir` with the given extension, sorted by path.
///
/// The sorted order fixes the training indices the classifier reports.
/// Extension matching is case-insensitive.
pub fn scan_directory(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{}", extension.to_lowercase());
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading training directory {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.to_lowercase().ends_with(&suffix))
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        bail!("no .{extension} images found in {}", dir.display());
    }
    Ok(paths)
}

/// Decode one image file to grayscale.
pub fn load_image(path: &Path) -> Result<GrayImage> {
    let decoded = image::open(path).with_context(|| format!("decoding {}", path.display()))?;
    let gray = decoded.into_luma8();
    let (width, height) = gray.dimensions();
    tracing::debug!(path = %path.display(), width, height, "decoded grayscale image");
    Ok(GrayImage::new(gray.into_raw(), width, height))
}

/// Decode every path, preserving the given order.
pub fn load_images(paths: &[PathBuf]) -> Result<Vec<GrayImage>> {
    paths.iter().map(|path| load_image(path)).collect()
}

/// Create the output directory if needed and delete leftover PNGs, so
/// renders from a larger previous run cannot linger next to fresh ones.
pub fn clean_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if path.is_file() && is_png {
            fs::remove_file(&path)
                .with_context(|| format!("removing stale render {}", path.display()))?;
        }
    }
    Ok(())
}

/// Encode one rendered eigenface as an 8-bit grayscale PNG.
pub fn write_gray_png(path: &Path, width: u32, height: u32, bytes: Vec<u8>) -> Result<()> {
    let buffer = image::GrayImage::from_raw(width, height, bytes)
        .context("pixel buffer does not match image dimensions")?;
    buffer
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote eigenface image");
    Ok(())
}
