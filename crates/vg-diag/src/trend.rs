//! Run-over-run trend comparison.

use crate::types::AnalysisStats;

/// One-line trend statement comparing the current error count against the
/// previous run. Pure function; `None` means no prior state existed.
pub fn trend_note(current_errors: u64, previous: Option<&AnalysisStats>) -> String {
    let Some(prev) = previous else {
        return "first run, no previous data.".to_string();
    };

    let delta = current_errors as i64 - prev.error_count as i64;
    if delta > 0 {
        format!("+{delta} errors since last run.")
    } else if delta < 0 {
        // delta renders with its own minus sign.
        format!("{delta} errors (improvement).")
    } else {
        "stable error count.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with_errors(error_count: u64) -> AnalysisStats {
        AnalysisStats {
            error_count,
            ..Default::default()
        }
    }

    #[test]
    fn first_run() {
        assert_eq!(trend_note(3, None), "first run, no previous data.");
    }

    #[test]
    fn errors_increased() {
        let prev = stats_with_errors(2);
        assert_eq!(trend_note(5, Some(&prev)), "+3 errors since last run.");
    }

    #[test]
    fn errors_decreased() {
        let prev = stats_with_errors(5);
        assert_eq!(trend_note(2, Some(&prev)), "-3 errors (improvement).");
    }

    #[test]
    fn stable() {
        let prev = stats_with_errors(5);
        assert_eq!(trend_note(5, Some(&prev)), "stable error count.");
    }

    #[test]
    fn stable_at_zero() {
        let prev = stats_with_errors(0);
        assert_eq!(trend_note(0, Some(&prev)), "stable error count.");
    }
}
