//! Core diagnostic types shared across the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── Log Entry ─────────────────────────────────────────────────

/// One reconstructed diagnostic record.
///
/// Every entry corresponds to exactly one severity-marked line in the raw
/// text; continuation lines (stack traces etc.) only extend `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// First two space-delimited tokens of the marker line, joined by a
    /// space. Opaque passthrough — never parsed or validated.
    pub timestamp: String,
    /// Severity token from the marker line (e.g. "ERROR", "WARNING").
    pub level: String,
    /// Marker-line remainder plus all continuation lines, newline-joined.
    pub message: String,
}

// ── Analysis ──────────────────────────────────────────────────

/// Aggregate record for one deduplicated signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub count: u64,
    /// Timestamp of the first entry seen for this signature.
    pub first_seen: String,
    /// Timestamp of the most recently *processed* entry — encounter order,
    /// never a chronological comparison.
    pub last_seen: String,
    /// Message of the first entry, truncated to 200 characters.
    pub example: String,
}

/// A signature paired with its record, ranked by count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offender {
    pub signature: String,
    #[serde(flatten)]
    pub record: SignatureRecord,
}

/// Aggregate result of one analysis pass.
///
/// This is also the persisted state shape — the state store serializes it
/// verbatim and the next run diffs against it. CRITICAL entries are parsed
/// and grouped but counted in neither bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    #[serde(default)]
    pub error_count: u64,
    #[serde(default)]
    pub warning_count: u64,
    /// Signature → record, for every signature seen this run.
    #[serde(default)]
    pub unique_errors: HashMap<String, SignatureRecord>,
    /// The ≤20 highest-count signatures, descending; ties keep the order
    /// signatures were first encountered in.
    #[serde(default)]
    pub top_offenders: Vec<Offender>,
}

// ── System Snapshot ───────────────────────────────────────────

/// Hub system information, as reported by `/api/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    #[serde(default = "default_unknown")]
    pub version: String,
    #[serde(default = "default_unknown")]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

fn default_unknown() -> String {
    "unknown".to_string()
}

impl SystemSnapshot {
    /// Snapshot used when the hub API cannot be reached. A missing snapshot
    /// never aborts a run.
    pub fn unreachable() -> Self {
        Self {
            version: "unreachable".to_string(),
            state: "unreachable".to_string(),
            time_zone: None,
        }
    }
}

// ── Health Summary ────────────────────────────────────────────

/// Overall health verdict for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Issues,
}

/// Compact machine-readable result for callers that don't want the full
/// markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub status: HealthStatus,
    pub summary: String,
    pub errors: u64,
    pub warnings: u64,
}

/// Output of one pipeline run: the rendered document plus the structured
/// summary, so callers holding this never need to re-scrape the text.
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub markdown: String,
    pub summary: HealthSummary,
    pub stats: AnalysisStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&HealthStatus::Ok).unwrap(), r#""ok""#);
        assert_eq!(
            serde_json::to_string(&HealthStatus::Issues).unwrap(),
            r#""issues""#
        );
    }

    #[test]
    fn offender_serializes_flat() {
        let offender = Offender {
            signature: "boom".to_string(),
            record: SignatureRecord {
                count: 3,
                first_seen: "2024-01-15 07:00:00".to_string(),
                last_seen: "2024-01-15 08:00:00".to_string(),
                example: "boom".to_string(),
            },
        };
        let json = serde_json::to_value(&offender).unwrap();
        assert_eq!(json["signature"], "boom");
        assert_eq!(json["count"], 3);
        assert_eq!(json["last_seen"], "2024-01-15 08:00:00");
    }

    #[test]
    fn snapshot_tolerates_partial_config() {
        let snap: SystemSnapshot = serde_json::from_str(r#"{"version": "2024.1.0"}"#).unwrap();
        assert_eq!(snap.version, "2024.1.0");
        assert_eq!(snap.state, "unknown");
        assert!(snap.time_zone.is_none());
    }

    #[test]
    fn stats_tolerates_missing_fields() {
        let stats: AnalysisStats = serde_json::from_str(r#"{"error_count": 4}"#).unwrap();
        assert_eq!(stats.error_count, 4);
        assert_eq!(stats.warning_count, 0);
        assert!(stats.top_offenders.is_empty());
    }
}
