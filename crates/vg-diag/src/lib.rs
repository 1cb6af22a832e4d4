//! Log diagnostic pipeline for Vigil.
//!
//! Fetches raw hub log text over a primary channel with automatic fallback,
//! reconstructs multi-line entries, groups them by signature, diffs the
//! error count against the persisted previous run, and renders a markdown
//! health packet plus a machine-readable summary.

pub mod analyzer;
pub mod error;
pub mod fetch;
pub mod mock;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod state;
pub mod trend;
pub mod types;

// Re-export key types for convenience
pub use error::{DiagError, DiagResult};
pub use fetch::{FetchOrchestrator, LogChannel};
pub use mock::MockChannel;
pub use pipeline::Pipeline;
pub use state::StateStore;
pub use types::{
    AnalysisStats, HealthReport, HealthStatus, HealthSummary, LogEntry, Offender,
    SignatureRecord, SystemSnapshot,
};
