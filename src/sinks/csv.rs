use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::deals::types::DealRecord;

pub const HEADER: [&str; 5] = ["restaurant", "deal_text", "source", "date_found", "confidence"];

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// One CRLF-terminated row; fields with separators, quotes or line breaks
/// are quoted with inner quotes doubled.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    w.write_all(b"\r\n")
}

pub fn write_deals<W: Write>(mut w: W, deals: &[DealRecord]) -> io::Result<()> {
    write_row(&mut w, &HEADER)?;
    for d in deals {
        write_row(
            &mut w,
            &[
                d.restaurant.as_str(),
                d.deal_text.as_str(),
                d.source.as_str(),
                &d.date_found_string(),
                d.confidence.as_str(),
            ],
        )?;
    }
    w.flush()
}

/// Returns false (and writes nothing) when there are no deals.
pub fn write_csv(path: &Path, deals: &[DealRecord]) -> Result<bool> {
    if deals.is_empty() {
        return Ok(false);
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_deals(io::BufWriter::new(file), deals)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::Confidence;
    use chrono::NaiveDateTime;

    fn deal(text: &str) -> DealRecord {
        DealRecord {
            restaurant: "JT's Pizza & Pub".to_string(),
            deal_text: text.to_string(),
            source: "JT's Pizza & Pub Website".to_string(),
            date_found: NaiveDateTime::parse_from_str("2024-01-02 03:04:05", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            confidence: Confidence::Medium,
        }
    }

    #[test]
    fn test_header_and_plain_row() {
        let mut buf = Vec::new();
        write_deals(&mut buf, &[deal("Wing Night Special: 20 wings for $13.99")]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "restaurant,deal_text,source,date_found,confidence\r\n\
             JT's Pizza & Pub,Wing Night Special: 20 wings for $13.99,JT's Pizza & Pub Website,2024-01-02 03:04:05,medium\r\n"
        );
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_quoted() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["wings, fries", "the \"big\" deal", "plain"]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\"wings, fries\",\"the \"\"big\"\" deal\",plain\r\n"
        );
    }

    #[test]
    fn test_empty_deal_list_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wing_deals.csv");
        assert!(!write_csv(&path, &[]).unwrap());
        assert!(!path.exists());

        assert!(write_csv(&path, &[deal("Wing Tuesday: 50 cent wings")]).unwrap());
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
