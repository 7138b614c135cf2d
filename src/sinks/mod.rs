pub mod csv;
pub mod html;
pub mod json;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::deals::types::DealRecord;

pub const JSON_FILE: &str = "wing_deals.json";
pub const CSV_FILE: &str = "wing_deals.csv";
pub const HTML_FILE: &str = "wing_deals.html";

/// Where a run's artifacts landed. `csv` is `None` when there was nothing
/// to write.
#[derive(Debug, Clone, PartialEq)]
pub struct Written {
    pub json: PathBuf,
    pub csv: Option<PathBuf>,
    pub html: PathBuf,
}

/// Write JSON, CSV and HTML for `deals` into `out_dir`, creating it if needed.
pub fn write_all(out_dir: &Path, deals: &[DealRecord]) -> Result<Written> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let json_path = out_dir.join(JSON_FILE);
    json::write_json(&json_path, deals)?;
    info!(path = %json_path.display(), count = deals.len(), "Saved deals to JSON");

    let csv_path = out_dir.join(CSV_FILE);
    let csv = if csv::write_csv(&csv_path, deals)? {
        info!(path = %csv_path.display(), "Saved deals to CSV");
        Some(csv_path)
    } else {
        info!("No deals, CSV not written");
        None
    };

    let html_path = out_dir.join(HTML_FILE);
    html::write_html(&html_path, deals)?;
    info!(path = %html_path.display(), "Generated HTML file");

    Ok(Written {
        json: json_path,
        csv,
        html: html_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::data::CANNED_DEALS;

    #[test]
    fn test_write_all_creates_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/out");
        let deals: Vec<DealRecord> = CANNED_DEALS.iter().map(DealRecord::canned).collect();

        let written = write_all(&out, &deals).unwrap();
        assert!(written.json.exists());
        assert!(written.html.exists());
        assert_eq!(written.csv.as_deref(), Some(out.join(CSV_FILE).as_path()));

        let back = json::read_json(&written.json).unwrap();
        assert_eq!(back, deals);
    }

    #[test]
    fn test_write_all_skips_csv_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_all(dir.path(), &[]).unwrap();
        assert!(written.csv.is_none());
        assert_eq!(std::fs::read_to_string(&written.json).unwrap(), "[]");
    }
}
