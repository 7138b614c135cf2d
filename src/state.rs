use std::path::PathBuf;
use std::str::FromStr;

use crate::deals::FallbackPolicy;
use crate::pacing::Pacer;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Scrape run parameters. Environment (and `.env`) first, CLI flags on top.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeConfig {
    pub delay_min_secs: f64,
    pub delay_max_secs: f64,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// html2text line width; wide so deal phrases stay on one line.
    pub text_width: usize,
    pub out_dir: PathBuf,
    pub restaurants_file: Option<PathBuf>,
    pub fallback: FallbackPolicy,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            delay_min_secs: 1.0,
            delay_max_secs: 3.0,
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            text_width: 1000,
            out_dir: PathBuf::from("."),
            restaurants_file: None,
            fallback: FallbackPolicy::Always,
        }
    }
}

impl ScrapeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    /// Unset or unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            delay_min_secs: parse_or(get("WING_DEALS_DELAY_MIN_SECS"), defaults.delay_min_secs),
            delay_max_secs: parse_or(get("WING_DEALS_DELAY_MAX_SECS"), defaults.delay_max_secs),
            timeout_secs: parse_or(get("WING_DEALS_TIMEOUT_SECS"), defaults.timeout_secs),
            user_agent: get("WING_DEALS_USER_AGENT").unwrap_or(defaults.user_agent),
            text_width: parse_or(get("WING_DEALS_TEXT_WIDTH"), defaults.text_width),
            out_dir: get("WING_DEALS_OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.out_dir),
            restaurants_file: get("WING_DEALS_RESTAURANTS_FILE").map(PathBuf::from),
            fallback: parse_or(get("WING_DEALS_FALLBACK"), defaults.fallback),
        }
    }

    pub fn pacer(&self) -> Pacer {
        Pacer::new(self.delay_min_secs, self.delay_max_secs)
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
