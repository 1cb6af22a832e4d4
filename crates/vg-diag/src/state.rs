//! Persisted analysis state for run-over-run diffing.
//!
//! A single JSON file holds the most recent [`AnalysisStats`]; each run
//! overwrites it. No history, no locking — overlapping invocations racing
//! on this file are a documented limitation of the single-batch design.

use std::path::{Path, PathBuf};

use crate::types::AnalysisStats;

/// Loads and saves the latest analysis snapshot.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the previous run's stats.
    ///
    /// Absence, unreadability, and corruption all mean the same thing here:
    /// no previous data. Never returns an error.
    pub async fn load(&self) -> Option<AnalysisStats> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "no previous state");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(stats) => Some(stats),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "state file corrupt, treating as first run"
                );
                None
            }
        }
    }

    /// Persist `stats` for the next run's diff.
    ///
    /// Write failure is logged and swallowed — it must never keep the
    /// current run from producing its report.
    pub async fn save(&self, stats: &AnalysisStats) {
        if let Err(e) = self.try_save(stats).await {
            tracing::error!(path = %self.path.display(), error = %e, "failed to save state");
        }
    }

    async fn try_save(&self, stats: &AnalysisStats) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(stats).map_err(std::io::Error::other)?;

        // Write-then-rename so a crash mid-write cannot truncate the live
        // file into the "corrupt" load path.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await
    }
}
