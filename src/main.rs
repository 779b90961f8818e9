mod telemetry;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use face_rating::utils::convert::face_landmark_to_array;
use face_rating::utils::utils::landmarks_from_le_bytes;
use face_rating::{FaceRater, LandmarkModel, LandmarkSet, RatingConfig};

use crate::telemetry::{get_subscriber, init_subscriber};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// JSON list of faces, `{"faces": [...]}`, or a single face's point list
    Json,
    /// One face as raw little-endian f32 (x, y) pairs
    F32le,
}

/// Rate the face found in a landmark detector's output.
#[derive(Debug, Parser)]
#[command(name = "face-rating", version, about)]
struct Cli {
    /// Detection file to score
    input: PathBuf,

    /// Format of the detection file
    #[arg(long, value_enum, default_value = "json")]
    format: InputFormat,

    /// JSON rating config; missing fields take their defaults
    #[arg(long, env = "FACE_RATING_CONFIG")]
    config: Option<PathBuf>,

    /// Print the rating as JSON
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DetectionFile {
    Faces(Vec<LandmarkSet>),
    Wrapped { faces: Vec<LandmarkSet> },
    Single(LandmarkSet),
}

impl DetectionFile {
    fn into_faces(self) -> Vec<LandmarkSet> {
        match self {
            DetectionFile::Faces(faces) | DetectionFile::Wrapped { faces } => faces,
            DetectionFile::Single(face) => vec![face],
        }
    }
}

fn load_detections(cli: &Cli) -> Result<Vec<LandmarkSet>> {
    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let faces = match cli.format {
        InputFormat::Json => serde_json::from_slice::<DetectionFile>(&bytes)
            .with_context(|| format!("{} is not a valid detection file", cli.input.display()))?
            .into_faces(),
        InputFormat::F32le => vec![landmarks_from_le_bytes(&bytes)?],
    };
    Ok(faces)
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RatingConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RatingConfig::default(),
    };
    let rater = FaceRater::new(config)?;
    tracing::debug!(?config, "rater configured");

    let detections = load_detections(&cli)?;
    tracing::info!(
        faces = detections.len(),
        input = %cli.input.display(),
        "detections loaded"
    );

    if let [face] = detections.as_slice() {
        if let Ok(points) = LandmarkModel::new(rater.config().indices).face_landmark(face) {
            tracing::debug!(
                "reference points (left eye, right eye, nose, left mouth, right mouth):\n{}",
                face_landmark_to_array(&points)
            );
        }
    }

    let rating = rater
        .rate_detections(&detections)
        .context("failed to rate face")?;
    tracing::info!(total = rating.total, "face rated");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rating)?);
    } else {
        println!("{rating}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_subscriber(get_subscriber(&cli.log_level, std::io::stderr))?;

    if let Err(err) = run(cli) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}
