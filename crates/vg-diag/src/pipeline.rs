//! The canonical diagnostic pipeline: fetch → parse → analyze → diff →
//! render.
//!
//! Both callers (the scheduled batch run and the on-demand REST bridge)
//! share this one composition. A run never fails: connectivity problems
//! degrade to an empty entry sequence, state problems degrade to a
//! first-run diff, and a save failure still returns the report.

use chrono::Local;

use crate::fetch::FetchOrchestrator;
use crate::state::StateStore;
use crate::types::{HealthReport, SystemSnapshot};
use crate::{analyzer, parser, report, trend};

pub struct Pipeline {
    fetcher: FetchOrchestrator,
    state: StateStore,
}

impl Pipeline {
    pub fn new(fetcher: FetchOrchestrator, state: StateStore) -> Self {
        Self { fetcher, state }
    }

    /// Execute one full diagnostic run.
    pub async fn run(&self, system: &SystemSnapshot) -> HealthReport {
        let raw = self.fetcher.fetch().await;

        let entries = parser::parse_log(&raw);
        tracing::info!(entries = entries.len(), "parsed log entries");

        let stats = analyzer::analyze(&entries);

        let previous = self.state.load().await;
        let trend = trend::trend_note(stats.error_count, previous.as_ref());
        tracing::debug!(trend = %trend, "computed trend");

        self.state.save(&stats).await;

        let markdown = report::render(&stats, system, &trend, Local::now());
        let summary = report::summarize(&stats);
        tracing::info!(
            errors = stats.error_count,
            warnings = stats.warning_count,
            status = ?summary.status,
            "health packet generated"
        );

        HealthReport {
            markdown,
            summary,
            stats,
        }
    }
}
