//! Landmark file loading.
//!
//! Accepts either a bare JSON array of `{x, y, z?}` points or an object with a
//! `landmarks` array, as written by face-mesh exporters.

use anyhow::{Context, Result};
use faceshape_core::Landmark;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarkFile {
    Bare(Vec<Landmark>),
    Wrapped { landmarks: Vec<Landmark> },
}

pub fn parse_landmarks(json: &str) -> Result<Vec<Landmark>, serde_json::Error> {
    let file: LandmarkFile = serde_json::from_str(json)?;
    Ok(match file {
        LandmarkFile::Bare(points) => points,
        LandmarkFile::Wrapped { landmarks } => landmarks,
    })
}

pub fn read_landmarks(path: &Path) -> Result<Vec<Landmark>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let points = parse_landmarks(&json)
        .with_context(|| format!("{} is not a landmark list", path.display()))?;
    tracing::debug!(path = %path.display(), count = points.len(), "landmarks loaded");
    Ok(points)
}
