use std::collections::HashSet;

use tracing::debug;

use super::types::DealRecord;
use crate::registry::patterns::PatternRegistry;

/// Characters of surrounding text kept on each side of a match.
pub const CONTEXT_CHARS: usize = 100;

/// Contexts this short (or shorter) are noise, not deals.
pub const MIN_DEAL_CHARS: usize = 20;

/// Turns page text into deal records. Holds the run-wide dedup set, so one
/// engine must live exactly as long as one aggregation run.
pub struct ExtractionEngine {
    patterns: PatternRegistry,
    seen: HashSet<String>,
    deals: Vec<DealRecord>,
}

impl ExtractionEngine {
    pub fn new(patterns: PatternRegistry) -> Self {
        Self {
            patterns,
            seen: HashSet::new(),
            deals: Vec::new(),
        }
    }

    /// Scan `text` and return only the records this call added to the
    /// running collection. A context already seen earlier in the run (from
    /// any source or pattern) is dropped; the dedup key is the text alone.
    pub fn extract(&mut self, text: &str, source: &str) -> Vec<DealRecord> {
        let lowered = text.to_lowercase();
        let mut added = Vec::new();
        let mut matches = 0usize;

        for pattern in self.patterns.iter() {
            for m in pattern.find_iter(&lowered) {
                matches += 1;
                let context =
                    normalize_whitespace(context_window(&lowered, m.start(), m.end(), CONTEXT_CHARS));
                if context.chars().count() <= MIN_DEAL_CHARS {
                    continue;
                }
                if !self.seen.insert(context.clone()) {
                    continue;
                }
                let record = DealRecord::extracted(source, context);
                self.deals.push(record.clone());
                added.push(record);
            }
        }

        debug!(source, matches, added = added.len(), "text scanned");
        added
    }

    /// Everything extracted so far, in discovery order.
    pub fn deals(&self) -> &[DealRecord] {
        &self.deals
    }

    pub fn into_deals(self) -> Vec<DealRecord> {
        self.deals
    }
}

/// Slice of `text` from `radius` chars before byte `start` to `radius` chars
/// after byte `end`, clamped to the text. Offsets must sit on char boundaries.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}

/// Collapse whitespace runs to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
