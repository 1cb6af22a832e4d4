//! Line-oriented log reconstruction.
//!
//! Hub logs are unstructured text where a severity-marked line opens an
//! entry and everything up to the next marker (tracebacks, wrapped output)
//! belongs to it. Marker detection is a plain substring test on purpose —
//! the format is too loose for anything stricter to survive contact with
//! real logs.

use crate::types::LogEntry;

/// Severity tokens that open a new entry, space-delimited and
/// case-sensitive.
const MARKERS: [&str; 3] = [" ERROR ", " WARNING ", " CRITICAL "];

/// The fields a marker line splits into: timestamp date, timestamp time,
/// severity token, message remainder.
const MARKER_FIELDS: usize = 4;

fn is_marker_line(line: &str) -> bool {
    MARKERS.iter().any(|marker| line.contains(marker))
}

/// Reconstruct ordered entries from raw multi-line log text.
///
/// A marker line with fewer than four space-delimited fields finalizes the
/// previous entry but starts no replacement; continuation lines that follow
/// it are discarded until the next well-formed marker. Lines before the
/// first marker are noise and dropped.
pub fn parse_log(text: &str) -> Vec<LogEntry> {
    let mut entries = Vec::new();
    let mut current: Option<LogEntry> = None;

    for line in text.lines() {
        if is_marker_line(line) {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }

            let fields: Vec<&str> = line.splitn(MARKER_FIELDS, ' ').collect();
            if fields.len() >= MARKER_FIELDS {
                current = Some(LogEntry {
                    timestamp: format!("{} {}", fields[0], fields[1]),
                    level: fields[2].to_string(),
                    message: fields[3].to_string(),
                });
            }
        } else if let Some(entry) = current.as_mut() {
            entry.message.push('\n');
            entry.message.push_str(line);
        }
    }

    if let Some(entry) = current {
        entries.push(entry);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
2024-01-15 07:00:00.123 ERROR (MainThread) [zwave] Connection to controller lost
Traceback (most recent call last):
  File \"serial.py\", line 10, in read
serial.SerialException: device disconnected
2024-01-15 07:00:05.456 WARNING (MainThread) [sensor] Update took longer than scheduled";

    #[test]
    fn entry_per_marker_line() {
        let entries = parse_log(SAMPLE);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, "ERROR");
        assert_eq!(entries[1].level, "WARNING");
    }

    #[test]
    fn timestamp_is_first_two_fields() {
        let entries = parse_log(SAMPLE);
        assert_eq!(entries[0].timestamp, "2024-01-15 07:00:00.123");
        assert_eq!(entries[1].timestamp, "2024-01-15 07:00:05.456");
    }

    #[test]
    fn continuation_lines_extend_message() {
        let entries = parse_log(SAMPLE);
        assert_eq!(
            entries[0].message,
            "(MainThread) [zwave] Connection to controller lost\n\
             Traceback (most recent call last):\n\
             \u{20} File \"serial.py\", line 10, in read\n\
             serial.SerialException: device disconnected"
        );
    }

    #[test]
    fn message_remainder_kept_unsplit() {
        let entries = parse_log("2024-01-15 07:00:00 ERROR one two three four");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "one two three four");
    }

    #[test]
    fn empty_input_yields_no_entries() {
        assert!(parse_log("").is_empty());
    }

    #[test]
    fn pre_entry_noise_discarded() {
        let text = "random startup banner\nanother line\n\
                    2024-01-15 07:00:00 ERROR boom";
        let entries = parse_log(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "boom");
    }

    #[test]
    fn short_marker_line_drops_itself_and_closes_previous() {
        // "x ERROR y" contains the marker but splits into only 3 fields.
        let text = "2024-01-15 07:00:00 ERROR first\nx ERROR y\ntrailing line";
        let entries = parse_log(text);
        assert_eq!(entries.len(), 1);
        // The trailing line follows the degenerate marker, so it is
        // discarded rather than appended to the finalized entry.
        assert_eq!(entries[0].message, "first");
    }

    #[test]
    fn critical_lines_open_entries_too() {
        let entries = parse_log("2024-01-15 07:00:00 CRITICAL kernel panic");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, "CRITICAL");
    }

    #[test]
    fn lowercase_severity_is_not_a_marker() {
        let entries = parse_log("2024-01-15 07:00:00 error lowercase severity");
        assert!(entries.is_empty());
    }

    #[test]
    fn entry_count_matches_well_formed_markers() {
        let text = "\
a b ERROR one
a b WARNING two
short ERROR x
a b CRITICAL three
noise line
a b ERROR four";
        // "short ERROR x" has only 3 fields; the other four markers parse.
        assert_eq!(parse_log(text).len(), 4);
    }
}
