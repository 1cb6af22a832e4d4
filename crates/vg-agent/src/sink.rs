//! Dated report file sink.

use anyhow::Context;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Write the packet as `{YYYY-MM-DD}_health.md` under `data_dir`.
///
/// One file per calendar day; a re-run on the same day overwrites it.
pub async fn write_report(
    data_dir: &Path,
    date: NaiveDate,
    markdown: &str,
) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .with_context(|| format!("creating {}", data_dir.display()))?;

    let path = data_dir.join(format!("{}_health.md", date.format("%Y-%m-%d")));
    tokio::fs::write(&path, markdown)
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(path)
}
