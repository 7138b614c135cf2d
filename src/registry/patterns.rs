use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Phrases that suggest a wing promotion. Order matters: the extraction
/// engine walks them in this order and the first context to surface wins.
pub const DEAL_PATTERNS: &[&str] = &[
    // Price
    r"wing.*\$[\d\.]+",
    r"wing.*\$\d+\.\d+",
    r"wing.*\d+\s*cent",
    r"wing.*\d+\s*cents",
    r"wing.*\$\d+",
    // Percentage
    r"wing.*\d+%\s*off",
    r"wing.*\d+\s*percent\s*off",
    r"wing.*half\s*off",
    r"wing.*50%\s*off",
    // Free
    r"wing.*free",
    r"wing.*buy.*get",
    r"wing.*bogo",
    r"wing.*buy\s*one.*get",
    // Day
    r"wing.*monday",
    r"wing.*tuesday",
    r"wing.*wednesday",
    r"wing.*thursday",
    r"wing.*friday",
    r"wing.*saturday",
    r"wing.*sunday",
    r"wing.*weekend",
    // Time
    r"wing.*happy\s*hour",
    r"wing.*\d+.*\d+\s*pm",
    r"wing.*\d+.*\d+\s*am",
    r"wing.*all\s*day",
    r"wing.*night",
    // Quantity
    r"wing.*\d+\s*for",
    r"wing.*\d+\s*wings",
    r"wing.*all\s*you\s*can\s*eat",
    r"wing.*unlimited",
    // General
    r"wing.*deal",
    r"wing.*special",
    r"wing.*promotion",
    r"wing.*discount",
    r"wing.*offer",
    r"wing.*sale",
    r"wing.*price",
    r"wing.*savings",
    r"wing.*value",
];

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid deal pattern `{pattern}`: {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Compiled, read-only pattern list.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<Regex>,
}

impl PatternRegistry {
    /// Compile every pattern case-insensitively, rejecting the whole set on
    /// the first malformed one.
    pub fn new<I, S>(sources: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = sources
            .into_iter()
            .map(|src| {
                let src = src.as_ref();
                RegexBuilder::new(src)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| PatternError::Invalid {
                        pattern: src.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn builtin() -> Result<Self, PatternError> {
        Self::new(DEAL_PATTERNS.iter().copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Regex> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_compiles_in_order() {
        let registry = PatternRegistry::builtin().unwrap();
        assert_eq!(registry.len(), DEAL_PATTERNS.len());
        let first = registry.iter().next().unwrap();
        assert_eq!(first.as_str(), DEAL_PATTERNS[0]);
    }

    #[test]
    fn test_patterns_ignore_case() {
        let registry = PatternRegistry::new(["wing.*bogo"]).unwrap();
        let re = registry.iter().next().unwrap();
        assert!(re.is_match("WINGS are BOGO today"));
    }

    #[test]
    fn test_invalid_pattern_rejects_registry() {
        let err = PatternRegistry::new(["wing.*deal", "wing.*(unclosed"]).unwrap_err();
        match err {
            PatternError::Invalid { pattern, .. } => assert_eq!(pattern, "wing.*(unclosed"),
        }
    }

    #[test]
    fn test_empty_registry_is_allowed() {
        let registry = PatternRegistry::new(Vec::<String>::new()).unwrap();
        assert!(registry.is_empty());
    }
}
