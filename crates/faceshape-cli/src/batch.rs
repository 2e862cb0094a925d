//! Concurrent classification of many landmark files.
//!
//! Classification is pure, so files are handed to blocking worker threads
//! with no coordination beyond a permit count. Results come back in input
//! order regardless of completion order.

use crate::input::read_landmarks;
use anyhow::{anyhow, Context, Result};
use faceshape_core::{classify_landmarks, Classification};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Outcome for one input file.
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Classification>,
}

/// Load and classify a single landmark file.
pub fn classify_file(path: &Path) -> Result<Classification> {
    let landmarks = read_landmarks(path)?;
    let result = classify_landmarks(&landmarks)
        .with_context(|| format!("cannot classify {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        shape = result.label(),
        confidence = result.confidence,
        "classified"
    );
    Ok(result)
}

async fn run_job(permits: Arc<Semaphore>, path: PathBuf) -> Result<Classification> {
    let _permit = permits
        .acquire_owned()
        .await
        .map_err(|_| anyhow!("worker pool closed"))?;
    tokio::task::spawn_blocking(move || classify_file(&path))
        .await
        .map_err(|e| anyhow!("worker failed: {e}"))?
}

/// Classify every file with at most `workers` running at once.
pub async fn classify_files(paths: Vec<PathBuf>, workers: usize) -> Vec<FileOutcome> {
    let permits = Arc::new(Semaphore::new(workers.max(1)));
    tracing::debug!(files = paths.len(), workers, "starting batch");

    let mut tasks = Vec::with_capacity(paths.len());
    for path in paths {
        let permits = Arc::clone(&permits);
        let task = tokio::spawn(run_job(permits, path.clone()));
        tasks.push((path, task));
    }

    let mut outcomes = Vec::with_capacity(tasks.len());
    for (path, task) in tasks {
        let result = match task.await {
            Ok(result) => result,
            Err(e) => Err(anyhow!("worker failed: {e}")),
        };
        if let Err(e) = &result {
            tracing::warn!(path = %path.display(), error = %format!("{e:#}"), "classification failed");
        }
        outcomes.push(FileOutcome { path, result });
    }
    outcomes
}
