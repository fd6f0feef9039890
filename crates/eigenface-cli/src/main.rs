use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use eigenface_core::{render, Classification, FaceSpace};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod config;
mod corpus;

use config::Config;

#[derive(Parser)]
#[command(name = "eigenface", about = "Eigenface face classification CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a probe image against a directory of training images
    Classify {
        /// Directory containing the training images
        #[arg(short, long)]
        train_dir: PathBuf,
        /// Probe image to classify
        #[arg(short, long)]
        probe: PathBuf,
        /// Eigenfaces to retain (default: EIGENFACE_COUNT or 3, capped at
        /// the corpus size)
        #[arg(short = 'k', long)]
        eigenfaces: Option<usize>,
        /// Rejection threshold on the nearest-neighbor distance
        #[arg(short, long)]
        max_distance: Option<f64>,
        /// Training image file extension
        #[arg(short, long)]
        extension: Option<String>,
        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render the retained eigenfaces as grayscale PNG images
    Render {
        /// Directory containing the training images
        #[arg(short, long)]
        train_dir: PathBuf,
        /// Output directory for vector_<i>.png files; stale PNGs are
        /// removed first
        #[arg(short, long)]
        out_dir: PathBuf,
        /// Eigenfaces to retain (default: EIGENFACE_COUNT or 3, capped at
        /// the corpus size)
        #[arg(short = 'k', long)]
        eigenfaces: Option<usize>,
        /// Training image file extension
        #[arg(short, long)]
        extension: Option<String>,
    },
}

/// Classification outcome for `--json` output.
#[derive(Serialize)]
struct ClassifyReport {
    matched: bool,
    /// Path of the matched training image, if any.
    origin: Option<String>,
    /// Match distance, or the minimum distance observed on rejection.
    distance: f64,
}

/// A face space trained from a directory, with the paths that named its
/// gallery indices and the run's image dimensions.
struct TrainedCorpus {
    space: FaceSpace,
    paths: Vec<PathBuf>,
    width: u32,
    height: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let defaults = Config::from_env();

    match cli.command {
        Commands::Classify {
            train_dir,
            probe,
            eigenfaces,
            max_distance,
            extension,
            json,
        } => {
            let extension = extension.unwrap_or_else(|| defaults.extension.clone());
            let max_distance = max_distance.unwrap_or(defaults.max_distance);
            let trained = train_corpus(&train_dir, &extension, eigenfaces, &defaults)?;
            run_classify(&trained, &probe, max_distance, json)
        }
        Commands::Render {
            train_dir,
            out_dir,
            eigenfaces,
            extension,
        } => {
            let extension = extension.unwrap_or_else(|| defaults.extension.clone());
            let trained = train_corpus(&train_dir, &extension, eigenfaces, &defaults)?;
            run_render(&trained, &out_dir)
        }
    }
}

/// Scan, decode and train. An explicit eigenface count is passed through
/// unchanged; the default from the environment is capped at the corpus
/// size so small corpora still train.
fn train_corpus(
    train_dir: &Path,
    extension: &str,
    requested: Option<usize>,
    defaults: &Config,
) -> Result<TrainedCorpus> {
    let paths = corpus::scan_directory(train_dir, extension)?;
    let images = corpus::load_images(&paths)?;
    let count = match requested {
        Some(count) => count,
        None => defaults.eigenface_count.min(images.len()),
    };

    let (width, height) = (images[0].width, images[0].height);
    let space = FaceSpace::train(&images, count)?;

    Ok(TrainedCorpus {
        space,
        paths,
        width,
        height,
    })
}

fn run_classify(
    trained: &TrainedCorpus,
    probe_path: &Path,
    max_distance: f64,
    json: bool,
) -> Result<()> {
    let probe = corpus::load_image(probe_path)?;
    let result = trained.space.classify(&probe, max_distance)?;

    if json {
        let report = match &result {
            Classification::Match { index, distance } => ClassifyReport {
                matched: true,
                origin: Some(trained.paths[*index].display().to_string()),
                distance: *distance,
            },
            Classification::NoMatch { min_distance } => ClassifyReport {
                matched: false,
                origin: None,
                distance: *min_distance,
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Distances are rounded for display only; the threshold comparison
    // above used the exact value.
    match result {
        Classification::Match { index, distance } => {
            println!("Probe: {}", probe_path.display());
            println!("Best match: {}", trained.paths[index].display());
            println!("Distance: {distance:.2}");
        }
        Classification::NoMatch { min_distance } => {
            println!("No match within threshold (minimum distance: {min_distance:.2})");
        }
    }
    Ok(())
}

fn run_render(trained: &TrainedCorpus, out_dir: &Path) -> Result<()> {
    let vectors = trained.space.renderable_eigenfaces()?;
    corpus::clean_output_dir(out_dir)?;

    for (index, vector) in vectors.iter().enumerate() {
        let bytes = render::to_gray_bytes(vector);
        let path = out_dir.join(format!("vector_{index}.png"));
        corpus::write_gray_png(&path, trained.width, trained.height, bytes)?;
    }

    println!(
        "Wrote {} eigenface images to {}",
        vectors.len(),
        out_dir.display()
    );
    Ok(())
}
