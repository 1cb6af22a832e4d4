//! Entry aggregation: severity counts, signature grouping, top offenders.

use std::collections::HashMap;

use crate::types::{AnalysisStats, LogEntry, Offender, SignatureRecord};

/// Maximum number of signatures reported as top offenders.
pub const TOP_OFFENDER_LIMIT: usize = 20;

/// Signature = first message line capped at this many characters. Strips
/// the volatile tail (IDs, addresses) so repeats collapse together.
const SIGNATURE_MAX_CHARS: usize = 100;

/// Example excerpt cap.
const EXAMPLE_MAX_CHARS: usize = 200;

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Aggregate an ordered entry sequence into [`AnalysisStats`].
///
/// Severity buckets use a substring test on the level token (an exotic
/// level like "ERRORX" still counts as an error — matching the log format's
/// own looseness). CRITICAL entries are grouped but counted in neither
/// bucket. Pure function of its input.
pub fn analyze(entries: &[LogEntry]) -> AnalysisStats {
    let mut error_count = 0u64;
    let mut warning_count = 0u64;

    // Grouped in encounter order; the map indexes into the vec so the
    // stable sort below keeps first-insertion order for count ties.
    let mut groups: Vec<(String, SignatureRecord)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        if entry.level.contains("ERROR") {
            error_count += 1;
        } else if entry.level.contains("WARNING") {
            warning_count += 1;
        }

        let signature = truncate_chars(
            entry.message.lines().next().unwrap_or(""),
            SIGNATURE_MAX_CHARS,
        );

        match index.get(&signature) {
            Some(&i) => {
                let record = &mut groups[i].1;
                record.count += 1;
                // Most recently processed, not chronologically latest.
                record.last_seen = entry.timestamp.clone();
            }
            None => {
                index.insert(signature.clone(), groups.len());
                groups.push((
                    signature,
                    SignatureRecord {
                        count: 1,
                        first_seen: entry.timestamp.clone(),
                        last_seen: entry.timestamp.clone(),
                        example: truncate_chars(&entry.message, EXAMPLE_MAX_CHARS),
                    },
                ));
            }
        }
    }

    let mut ranked = groups.clone();
    ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count));
    let top_offenders = ranked
        .into_iter()
        .take(TOP_OFFENDER_LIMIT)
        .map(|(signature, record)| Offender { signature, record })
        .collect();

    AnalysisStats {
        error_count,
        warning_count,
        unique_errors: groups.into_iter().collect(),
        top_offenders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(timestamp: &str, level: &str, message: &str) -> LogEntry {
        LogEntry {
            timestamp: timestamp.to_string(),
            level: level.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn counts_errors_and_warnings() {
        let entries = vec![
            entry("t1", "ERROR", "a"),
            entry("t2", "ERROR", "b"),
            entry("t3", "WARNING", "c"),
        ];
        let stats = analyze(&entries);
        assert_eq!(stats.error_count, 2);
        assert_eq!(stats.warning_count, 1);
    }

    #[test]
    fn critical_counted_in_neither_bucket() {
        let entries = vec![
            entry("t1", "CRITICAL", "disk on fire"),
            entry("t2", "ERROR", "a"),
            entry("t3", "WARNING", "b"),
        ];
        let stats = analyze(&entries);
        assert_eq!(stats.error_count, 1);
        assert_eq!(stats.warning_count, 1);
        assert!(stats.error_count + stats.warning_count <= entries.len() as u64);
        // Still grouped, though.
        assert!(stats.unique_errors.contains_key("disk on fire"));
    }

    #[test]
    fn level_match_is_substring() {
        let stats = analyze(&[entry("t1", "ERRORX", "weird level")]);
        assert_eq!(stats.error_count, 1);
    }

    #[test]
    fn repeats_group_under_one_signature() {
        let entries = vec![
            entry("t1", "ERROR", "db down\ntrace a"),
            entry("t2", "ERROR", "db down\ntrace b"),
            entry("t3", "ERROR", "db down"),
        ];
        let stats = analyze(&entries);
        assert_eq!(stats.unique_errors.len(), 1);
        let record = &stats.unique_errors["db down"];
        assert_eq!(record.count, 3);
        assert_eq!(record.first_seen, "t1");
        assert_eq!(record.last_seen, "t3");
        // Example comes from the first occurrence.
        assert_eq!(record.example, "db down\ntrace a");
    }

    #[test]
    fn last_seen_follows_processing_order() {
        // Out-of-order timestamps: last_seen is the last *processed*, even
        // though it sorts earlier. Documented behavior, not a bug.
        let entries = vec![
            entry("2024-01-15 09:00:00", "ERROR", "x"),
            entry("2024-01-15 07:00:00", "ERROR", "x"),
        ];
        let stats = analyze(&entries);
        assert_eq!(stats.unique_errors["x"].last_seen, "2024-01-15 07:00:00");
    }

    #[test]
    fn signature_caps_at_100_chars() {
        let long = "e".repeat(150);
        let stats = analyze(&[entry("t1", "ERROR", &long)]);
        let signature = stats.unique_errors.keys().next().unwrap();
        assert_eq!(signature.chars().count(), 100);
    }

    #[test]
    fn example_caps_at_200_chars() {
        let long = "e".repeat(300);
        let stats = analyze(&[entry("t1", "ERROR", &long)]);
        let record = stats.unique_errors.values().next().unwrap();
        assert_eq!(record.example.chars().count(), 200);
    }

    #[test]
    fn signature_is_first_line_only() {
        let stats = analyze(&[entry("t1", "ERROR", "head\nbody line")]);
        assert!(stats.unique_errors.contains_key("head"));
    }

    #[test]
    fn top_offenders_capped_and_sorted() {
        let mut entries = Vec::new();
        for i in 0..30 {
            // Signature i appears i+1 times.
            for _ in 0..=i {
                entries.push(entry("t", "ERROR", &format!("signature {i:02}")));
            }
        }
        let stats = analyze(&entries);
        assert_eq!(stats.top_offenders.len(), TOP_OFFENDER_LIMIT);
        for pair in stats.top_offenders.windows(2) {
            assert!(pair[0].record.count >= pair[1].record.count);
        }
        assert_eq!(stats.top_offenders[0].signature, "signature 29");
        assert_eq!(stats.top_offenders[0].record.count, 30);
    }

    #[test]
    fn top_offender_ties_keep_encounter_order() {
        let entries = vec![
            entry("t1", "ERROR", "first seen"),
            entry("t2", "ERROR", "second seen"),
            entry("t3", "ERROR", "third seen"),
        ];
        let stats = analyze(&entries);
        let order: Vec<&str> = stats
            .top_offenders
            .iter()
            .map(|o| o.signature.as_str())
            .collect();
        assert_eq!(order, ["first seen", "second seen", "third seen"]);
    }

    #[test]
    fn empty_input_yields_default_stats() {
        let stats = analyze(&[]);
        assert_eq!(stats, AnalysisStats::default());
    }
}
