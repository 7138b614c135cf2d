use std::path::Path;

use anyhow::{Context, Result};

use crate::deals::types::DealRecord;

/// Pretty JSON array, 2-space indent, non-ASCII written as-is.
pub fn to_json(deals: &[DealRecord]) -> Result<String> {
    serde_json::to_string_pretty(deals).context("serialize deals")
}

pub fn write_json(path: &Path, deals: &[DealRecord]) -> Result<()> {
    std::fs::write(path, to_json(deals)?)
        .with_context(|| format!("Failed to write {}", path.display()))
}

pub fn read_json(path: &Path) -> Result<Vec<DealRecord>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::CannedDeal;
    use crate::registry::types::Confidence;

    #[test]
    fn test_written_file_reads_back_with_unicode_intact() {
        let deal = DealRecord::canned(&CannedDeal {
            restaurant: "Café Bleu",
            deal_text: "Wing Night: jalapeño wings 50¢ every Thursday",
            source: "Café Bleu Website",
            confidence: Confidence::Low,
        });
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wing_deals.json");
        write_json(&path, std::slice::from_ref(&deal)).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"restaurant\": \"Café Bleu\""));
        assert!(raw.contains("50¢"));

        let back = read_json(&path).unwrap();
        assert_eq!(back, vec![deal]);
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = read_json(Path::new("/nonexistent/wing_deals.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/wing_deals.json"));
    }
}
