//! Health packet rendering and summary extraction.
//!
//! `extract_summary` scans the renderer's own output, so the two must stay
//! in lexical lockstep — any change to the status-line wording here has to
//! update both (and the tests pin this). Callers that hold the stats should
//! prefer [`summarize`], which is a field access instead of a text scrape.

use chrono::{DateTime, Local};

use crate::types::{AnalysisStats, HealthStatus, HealthSummary, SystemSnapshot};

/// Render the markdown health packet.
///
/// `generated` is an explicit parameter so rendering is deterministic:
/// the same stats, snapshot, trend, and timestamp always produce
/// byte-identical output.
pub fn render(
    stats: &AnalysisStats,
    system: &SystemSnapshot,
    trend: &str,
    generated: DateTime<Local>,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# Hub Health Packet: {}", generated.format("%Y-%m-%d")));

    if stats.error_count == 0 && stats.warning_count == 0 {
        lines.push("## Status: All Clear".to_string());
    } else {
        lines.push(format!(
            "## Issues Detected: {} Errors, {} Warnings",
            stats.error_count, stats.warning_count
        ));
    }

    if !trend.is_empty() {
        lines.push(format!("\n> {trend}\n"));
    }

    lines.push("## System Snapshot".to_string());
    lines.push(format!("- **Version**: {}", system.version));
    lines.push(format!("- **State**: {}", system.state));
    lines.push(format!("- **Generated**: {}", generated.to_rfc3339()));

    if !stats.top_offenders.is_empty() {
        lines.push("\n## Top Unique Issues".to_string());
        lines.push("| Count | Level | Signature | Last Seen |".to_string());
        lines.push("| :--- | :--- | :--- | :--- |".to_string());

        for item in &stats.top_offenders {
            let level = if item.signature.contains("ERROR") {
                "ERR"
            } else {
                "WARN"
            };
            // Pipes would break the table syntax.
            let signature = item.signature.replace('|', "/");
            lines.push(format!(
                "| {} | {level} | `{signature}` | {} |",
                item.record.count, item.record.last_seen
            ));
        }
    }

    lines.join("\n")
}

/// Build the compact summary directly from the stats.
pub fn summarize(stats: &AnalysisStats) -> HealthSummary {
    summary_for(stats.error_count, stats.warning_count)
}

/// Recover a compact summary from a rendered packet.
///
/// Best-effort scan over the renderer's output format: an "All Clear" line
/// means ok; an "Issues Detected" line means issues, with the first two
/// numeric tokens on that line read as error count then warning count.
pub fn extract_summary(report: &str) -> HealthSummary {
    for line in report.lines() {
        if line.contains("Issues Detected:") {
            let mut numbers = line
                .split_whitespace()
                .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()))
                .filter_map(|word| word.parse::<u64>().ok());
            let errors = numbers.next().unwrap_or(0);
            let warnings = numbers.next().unwrap_or(0);
            return summary_for(errors, warnings);
        }
        if line.contains("All Clear") {
            break;
        }
    }
    summary_for(0, 0)
}

fn summary_for(errors: u64, warnings: u64) -> HealthSummary {
    if errors == 0 && warnings == 0 {
        HealthSummary {
            status: HealthStatus::Ok,
            summary: "Hub is healthy. No errors or warnings found.".to_string(),
            errors: 0,
            warnings: 0,
        }
    } else {
        HealthSummary {
            status: HealthStatus::Issues,
            summary: format!(
                "Found {errors} errors and {warnings} warnings. Check the health report for details."
            ),
            errors,
            warnings,
        }
    }
}
