use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::{debug, info, warn};

use crate::deals::extract::ExtractionEngine;
use crate::deals::types::{DealRecord, DealSummary};
use crate::deals::{DealAggregator, FallbackPolicy, Source};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::pacing::Pacer;
use crate::registry::data::CANNED_DEALS;
use crate::registry::patterns::PatternRegistry;
use crate::registry::RestaurantStore;
use crate::sinks::{self, Written};
use crate::state::ScrapeConfig;

#[derive(Debug, Default, Args)]
pub struct ScrapeArgs {
    /// Directory for wing_deals.{json,csv,html}
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Restaurant list (JSON) to scan instead of the built-in one
    #[arg(long)]
    pub restaurants: Option<PathBuf>,
    /// Skip the pause between page visits
    #[arg(long)]
    pub no_delay: bool,
    /// When to add the curated deals: always | when-empty
    #[arg(long)]
    pub fallback: Option<FallbackPolicy>,
}

impl ScrapeArgs {
    /// Flags win over environment values.
    pub fn apply(self, mut config: ScrapeConfig) -> ScrapeConfig {
        if let Some(dir) = self.out_dir {
            config.out_dir = dir;
        }
        if let Some(file) = self.restaurants {
            config.restaurants_file = Some(file);
        }
        if self.no_delay {
            config.delay_min_secs = 0.0;
            config.delay_max_secs = 0.0;
        }
        if let Some(fallback) = self.fallback {
            config.fallback = fallback;
        }
        config
    }
}

pub async fn run(config: &ScrapeConfig) -> Result<()> {
    let fetcher = HttpFetcher::new(config)?;
    let (deals, written) = scrape_with(config, &fetcher, config.pacer()).await?;
    print_report(&deals, &written);
    Ok(())
}

/// Full pipeline against any fetcher: load sources, aggregate, write sinks.
pub async fn scrape_with(
    config: &ScrapeConfig,
    fetcher: &dyn PageFetcher,
    pacer: Pacer,
) -> Result<(Vec<DealRecord>, Written)> {
    let store = RestaurantStore::load_or_builtin(config.restaurants_file.as_deref())?;
    let sources = Source::from_store(&store);
    info!(
        restaurants = store.restaurants().len(),
        deal_sites = store.deal_sites().len(),
        fallback = %config.fallback,
        "Starting Columbus wing deals scraper"
    );

    let patterns = PatternRegistry::builtin()?;
    if patterns.is_empty() {
        warn!("no deal patterns configured, only curated deals will be written");
    }
    debug!(patterns = patterns.len(), sources = sources.len(), "extraction ready");
    let engine = ExtractionEngine::new(patterns);
    let deals = DealAggregator::new(engine, pacer, config.fallback, CANNED_DEALS)
        .run(&sources, fetcher)
        .await;

    let written = sinks::write_all(&config.out_dir, &deals)?;
    Ok((deals, written))
}

fn print_report(deals: &[DealRecord], written: &Written) {
    let summary = DealSummary::from_deals(deals);

    println!("Columbus Wing Deals");
    println!("{}", "=".repeat(50));
    println!("Found {} wing deals", summary.total_deals);
    println!();
    println!("Generated files:");
    println!("  {}  (HTML page with all deals)", written.html.display());
    println!("  {}  (raw deal data)", written.json.display());
    match &written.csv {
        Some(path) => println!("  {}  (spreadsheet export)", path.display()),
        None => println!("  (no CSV, nothing to export)"),
    }
    println!();
    println!("Summary:");
    println!("  Total deals found:     {}", summary.total_deals);
    println!("  Restaurants:           {}", summary.restaurants);
    println!("  High confidence deals: {}", summary.high_confidence);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::fetch::FetchError;
    use crate::registry::types::{Category, Confidence, RestaurantEntry};
    use crate::sinks::json;

    struct Offline;

    #[async_trait]
    impl PageFetcher for Offline {
        async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
            Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    struct SamePage(&'static str);

    #[async_trait]
    impl PageFetcher for SamePage {
        async fn fetch_text(&self, _url: &str) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_flags_override_config() {
        let args = ScrapeArgs {
            out_dir: Some(PathBuf::from("out")),
            restaurants: None,
            no_delay: true,
            fallback: Some(FallbackPolicy::WhenEmpty),
        };
        let config = args.apply(ScrapeConfig::default());
        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert_eq!(config.pacer(), Pacer::none());
        assert_eq!(config.fallback, FallbackPolicy::WhenEmpty);
        assert_eq!(config.restaurants_file, None);

        assert_eq!(ScrapeArgs::default().apply(ScrapeConfig::default()), ScrapeConfig::default());
    }

    #[tokio::test]
    async fn test_offline_run_writes_canned_deals() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScrapeConfig {
            out_dir: dir.path().to_path_buf(),
            ..ScrapeConfig::default()
        };

        let (deals, written) = scrape_with(&config, &Offline, Pacer::none()).await.unwrap();
        assert_eq!(deals.len(), CANNED_DEALS.len());
        assert!(written.csv.is_some());
        assert_eq!(json::read_json(&written.json).unwrap(), deals);
    }

    #[tokio::test]
    async fn test_custom_restaurant_file_is_scanned() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("restaurants.json");
        let mut store = RestaurantStore::new(Vec::new(), Vec::new());
        store
            .add(RestaurantEntry {
                name: "Pub Wings".to_string(),
                url: "https://pubwings.example".to_string(),
                category: Category::BarsPubs,
                locations: vec!["Clintonville".to_string()],
                known_deals: vec!["Wing Night".to_string()],
                confidence: Confidence::Low,
            })
            .unwrap();
        store.save(&file).unwrap();

        let config = ScrapeConfig {
            out_dir: dir.path().join("out"),
            restaurants_file: Some(file),
            fallback: FallbackPolicy::WhenEmpty,
            ..ScrapeConfig::default()
        };
        let page = SamePage("This Thursday only: wing night with 50 cent wings at the bar");
        let (deals, _) = scrape_with(&config, &page, Pacer::none()).await.unwrap();

        assert!(!deals.is_empty());
        assert!(deals.iter().all(|d| d.restaurant == "Pub Wings"));
    }
}
