use std::collections::HashSet;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::registry::types::{CannedDeal, Confidence};

/// One detected or canned promotion, as written to every sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealRecord {
    pub restaurant: String,
    pub deal_text: String,
    pub source: String,
    #[serde(with = "timestamp")]
    pub date_found: NaiveDateTime,
    pub confidence: Confidence,
}

impl DealRecord {
    /// Record built from page text. Extracted records always carry `medium`.
    pub fn extracted(source: &str, deal_text: String) -> Self {
        Self {
            restaurant: source.to_string(),
            deal_text,
            source: source.to_string(),
            date_found: now(),
            confidence: Confidence::Medium,
        }
    }

    pub fn canned(deal: &CannedDeal) -> Self {
        Self {
            restaurant: deal.restaurant.to_string(),
            deal_text: deal.deal_text.to_string(),
            source: deal.source.to_string(),
            date_found: now(),
            confidence: deal.confidence,
        }
    }

    pub fn date_found_string(&self) -> String {
        self.date_found.format(timestamp::FORMAT).to_string()
    }
}

/// Second precision, local time.
fn now() -> NaiveDateTime {
    let ts = Local::now().naive_local();
    ts.with_nanosecond(0).unwrap_or(ts)
}

/// Totals printed after a run and shown in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealSummary {
    pub total_deals: usize,
    pub restaurants: usize,
    pub high_confidence: usize,
}

impl DealSummary {
    pub fn from_deals(deals: &[DealRecord]) -> Self {
        let restaurants: HashSet<&str> = deals.iter().map(|d| d.restaurant.as_str()).collect();
        Self {
            total_deals: deals.len(),
            restaurants: restaurants.len(),
            high_confidence: deals
                .iter()
                .filter(|d| d.confidence == Confidence::High)
                .count(),
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS` on the wire.
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(restaurant: &str, confidence: Confidence) -> DealRecord {
        DealRecord {
            restaurant: restaurant.to_string(),
            deal_text: format!("{} has wings on special tonight", restaurant),
            source: restaurant.to_string(),
            date_found: NaiveDateTime::parse_from_str("2024-06-04 18:30:00", timestamp::FORMAT)
                .unwrap(),
            confidence,
        }
    }

    #[test]
    fn test_serializes_timestamp_and_confidence() {
        let json = serde_json::to_value(record("Hooters", Confidence::High)).unwrap();
        assert_eq!(json["date_found"], "2024-06-04 18:30:00");
        assert_eq!(json["confidence"], "high");

        let back: DealRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back.date_found_string(), "2024-06-04 18:30:00");
    }

    #[test]
    fn test_extracted_records_are_medium_and_self_sourced() {
        let deal = DealRecord::extracted("Roosters", "wing night every thursday".to_string());
        assert_eq!(deal.restaurant, "Roosters");
        assert_eq!(deal.source, "Roosters");
        assert_eq!(deal.confidence, Confidence::Medium);
        assert_eq!(deal.date_found_string().len(), 19);
    }

    #[test]
    fn test_summary_counts_distinct_restaurants() {
        let deals = vec![
            record("Hooters", Confidence::High),
            record("Hooters", Confidence::Medium),
            record("Wingstop", Confidence::High),
            record("Roosters", Confidence::Low),
        ];
        let summary = DealSummary::from_deals(&deals);
        assert_eq!(
            summary,
            DealSummary {
                total_deals: 4,
                restaurants: 3,
                high_confidence: 2,
            }
        );
    }
}
