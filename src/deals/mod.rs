pub mod extract;
pub mod types;

use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};

use crate::fetch::PageFetcher;
use crate::pacing::Pacer;
use crate::registry::types::CannedDeal;
use crate::registry::RestaurantStore;

use extract::ExtractionEngine;
use types::DealRecord;

/// When to append the canned deals after live extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Always append them.
    Always,
    /// Only when extraction found nothing.
    WhenEmpty,
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackPolicy::Always => f.write_str("always"),
            FallbackPolicy::WhenEmpty => f.write_str("when-empty"),
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(FallbackPolicy::Always),
            "when-empty" | "when_empty" => Ok(FallbackPolicy::WhenEmpty),
            other => Err(format!(
                "unknown fallback policy '{}' (expected always or when-empty)",
                other
            )),
        }
    }
}

/// A page to visit, labelled with the name its deals are attributed to.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub name: String,
    pub url: String,
}

impl Source {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Restaurants first, then deal aggregator sites.
    pub fn from_store(store: &RestaurantStore) -> Vec<Source> {
        let restaurants = store
            .restaurants()
            .iter()
            .map(|r| Source::new(&r.name, &r.url));
        let sites = store.deal_sites().iter().map(|s| Source::new(&s.name, &s.url));
        restaurants.chain(sites).collect()
    }
}

/// One scrape run. Consumed by `run`, so the dedup set never outlives it.
pub struct DealAggregator {
    engine: ExtractionEngine,
    pacer: Pacer,
    fallback: FallbackPolicy,
    canned: &'static [CannedDeal],
}

impl DealAggregator {
    pub fn new(
        engine: ExtractionEngine,
        pacer: Pacer,
        fallback: FallbackPolicy,
        canned: &'static [CannedDeal],
    ) -> Self {
        Self {
            engine,
            pacer,
            fallback,
            canned,
        }
    }

    /// Visit every source in order. A failed fetch is logged and skipped;
    /// the run itself cannot fail. Output is the extracted records followed
    /// by the canned ones.
    pub async fn run(mut self, sources: &[Source], fetcher: &dyn PageFetcher) -> Vec<DealRecord> {
        for (i, source) in sources.iter().enumerate() {
            if i > 0 {
                self.pacer.pause().await;
            }
            info!(source = %source.name, "Scraping {}...", source.name);

            match fetcher.fetch_text(&source.url).await {
                Ok(text) => {
                    let added = self.engine.extract(&text, &source.name);
                    if !added.is_empty() {
                        info!(
                            source = %source.name,
                            count = added.len(),
                            total = self.engine.deals().len(),
                            "deals extracted"
                        );
                    }
                }
                Err(e) => {
                    warn!(source = %source.name, url = %source.url, error = %e, "Error scraping {}", source.name);
                }
            }
        }

        let mut deals = self.engine.into_deals();
        let extracted = deals.len();

        let append = match self.fallback {
            FallbackPolicy::Always => true,
            FallbackPolicy::WhenEmpty => deals.is_empty(),
        };
        if append {
            deals.extend(self.canned.iter().map(DealRecord::canned));
        }

        info!(
            sources = sources.len(),
            extracted,
            canned = deals.len() - extracted,
            "scrape run complete"
        );
        deals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::fetch::FetchError;
    use crate::registry::data::CANNED_DEALS;
    use crate::registry::patterns::PatternRegistry;
    use crate::registry::types::Confidence;

    /// Serves canned page text by URL; unknown URLs answer 503.
    #[derive(Default)]
    struct FakeFetcher {
        pages: HashMap<String, String>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeFetcher {
        fn with_page(mut self, url: &str, text: &str) -> Self {
            self.pages.insert(url.to_string(), text.to_string());
            self
        }
    }

    #[async_trait]
    impl PageFetcher for FakeFetcher {
        async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
            self.calls.lock().unwrap().push(url.to_string());
            self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 503,
            })
        }
    }

    const SHORT_CANNED: &[CannedDeal] = &[
        CannedDeal {
            restaurant: "Wingstop",
            deal_text: "Wing Wednesday: 50% off all wings every Wednesday from 3-6 PM.",
            source: "Wingstop Website",
            confidence: Confidence::High,
        },
        CannedDeal {
            restaurant: "Roosters",
            deal_text: "Wing Night every Thursday: 50 cent wings with any drink.",
            source: "Roosters Website",
            confidence: Confidence::Medium,
        },
    ];

    fn aggregator(fallback: FallbackPolicy, canned: &'static [CannedDeal]) -> DealAggregator {
        let engine = ExtractionEngine::new(PatternRegistry::builtin().unwrap());
        DealAggregator::new(engine, Pacer::none(), fallback, canned)
    }

    fn sources() -> Vec<Source> {
        vec![
            Source::new("Buffalo Wild Wings", "https://bww.example/promotions"),
            Source::new("Hooters", "https://hooters.example/promotions"),
            Source::new("Groupon Columbus", "https://groupon.example/columbus"),
        ]
    }

    #[tokio::test]
    async fn test_all_fetches_failing_yields_exactly_canned_set() {
        let fetcher = FakeFetcher::default();
        let deals = aggregator(FallbackPolicy::Always, CANNED_DEALS)
            .run(&sources(), &fetcher)
            .await;

        assert_eq!(deals.len(), CANNED_DEALS.len());
        for (deal, canned) in deals.iter().zip(CANNED_DEALS) {
            assert_eq!(deal.restaurant, canned.restaurant);
            assert_eq!(deal.deal_text, canned.deal_text);
            assert_eq!(deal.source, canned.source);
            assert_eq!(deal.confidence, canned.confidence);
        }
        // every source was still attempted
        assert_eq!(fetcher.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_same_text_from_two_sources_is_attributed_to_first() {
        let text = "wing night tuesday special all day wing night tuesday special all day...";
        let fetcher = FakeFetcher::default()
            .with_page("https://bww.example/promotions", text)
            .with_page("https://hooters.example/promotions", text);

        let deals = aggregator(FallbackPolicy::WhenEmpty, SHORT_CANNED)
            .run(&sources(), &fetcher)
            .await;

        assert_eq!(deals.len(), 1);
        assert_eq!(deals[0].restaurant, "Buffalo Wild Wings");
        assert_eq!(deals[0].source, "Buffalo Wild Wings");
        assert_eq!(deals[0].deal_text, text);
    }

    #[tokio::test]
    async fn test_extracted_records_come_before_canned() {
        let fetcher = FakeFetcher::default().with_page(
            "https://hooters.example/promotions",
            "Wing Wednesday: 50 cent wings all day Wednesday at every location.",
        );

        let deals = aggregator(FallbackPolicy::Always, SHORT_CANNED)
            .run(&sources(), &fetcher)
            .await;

        assert_eq!(deals.len(), 1 + SHORT_CANNED.len());
        assert_eq!(deals[0].restaurant, "Hooters");
        assert_eq!(deals[0].confidence, Confidence::Medium);
        assert_eq!(deals[1].restaurant, "Wingstop");
        assert_eq!(deals[2].restaurant, "Roosters");
    }

    #[tokio::test]
    async fn test_canned_set_bypasses_dedup() {
        const LOWERCASE_CANNED: &[CannedDeal] = &[CannedDeal {
            restaurant: "Wingstop",
            deal_text: "wing wednesday: 50% off all wings every wednesday from 3-6 pm.",
            source: "Wingstop Website",
            confidence: Confidence::High,
        }];
        let fetcher = FakeFetcher::default()
            .with_page("https://bww.example/promotions", LOWERCASE_CANNED[0].deal_text);

        let deals = aggregator(FallbackPolicy::Always, LOWERCASE_CANNED)
            .run(&sources(), &fetcher)
            .await;

        assert_eq!(deals.len(), 2);
        assert_eq!(deals[0].deal_text, deals[1].deal_text);
        assert_eq!(deals[0].restaurant, "Buffalo Wild Wings");
        assert_eq!(deals[1].source, "Wingstop Website");
    }

    #[tokio::test]
    async fn test_when_empty_skips_canned_after_success() {
        let fetcher = FakeFetcher::default().with_page(
            "https://groupon.example/columbus",
            "Columbus deal: 20 wings for $12.99 at participating bars",
        );
        let deals = aggregator(FallbackPolicy::WhenEmpty, SHORT_CANNED)
            .run(&sources(), &fetcher)
            .await;
        assert_eq!(deals.len(), 1);
        assert_eq!(deals[0].restaurant, "Groupon Columbus");
    }

    #[tokio::test]
    async fn test_no_sources_still_returns_canned() {
        let fetcher = FakeFetcher::default();
        let deals = aggregator(FallbackPolicy::WhenEmpty, SHORT_CANNED)
            .run(&[], &fetcher)
            .await;
        assert_eq!(deals.len(), SHORT_CANNED.len());
    }

    #[tokio::test]
    async fn test_pause_runs_between_visits_even_after_failures() {
        let delay = std::time::Duration::from_millis(150);
        let secs = delay.as_secs_f64();
        let engine = ExtractionEngine::new(PatternRegistry::builtin().unwrap());
        let aggregator = DealAggregator::new(
            engine,
            Pacer::new(secs, secs),
            FallbackPolicy::WhenEmpty,
            &[],
        );
        let fetcher = FakeFetcher::default();
        let four: Vec<Source> = (0..4)
            .map(|i| Source::new(format!("Down {}", i), format!("https://down{}.example", i)))
            .collect();

        let started = std::time::Instant::now();
        let deals = aggregator.run(&four, &fetcher).await;
        let elapsed = started.elapsed();

        assert!(deals.is_empty());
        assert_eq!(fetcher.calls.lock().unwrap().len(), 4);
        // three gaps, no pause before the first visit
        assert!(elapsed >= delay * 3, "elapsed {:?}", elapsed);
        assert!(elapsed < delay * 4, "elapsed {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_single_source_is_not_paced() {
        let engine = ExtractionEngine::new(PatternRegistry::builtin().unwrap());
        let aggregator =
            DealAggregator::new(engine, Pacer::new(0.5, 0.5), FallbackPolicy::WhenEmpty, &[]);
        let one = [Source::new("Down", "https://down.example")];

        let started = std::time::Instant::now();
        aggregator.run(&one, &FakeFetcher::default()).await;
        assert!(started.elapsed() < std::time::Duration::from_millis(500));
    }

    #[test]
    fn test_sources_list_restaurants_then_sites() {
        let store = RestaurantStore::builtin();
        let sources = Source::from_store(&store);
        assert_eq!(sources.len(), 39 + 5);
        assert_eq!(sources[0].name, "Buffalo Wild Wings");
        assert_eq!(sources[39].name, "Groupon Columbus");
    }

    #[test]
    fn test_fallback_policy_parse() {
        assert_eq!("Always".parse::<FallbackPolicy>(), Ok(FallbackPolicy::Always));
        assert_eq!("when_empty".parse::<FallbackPolicy>(), Ok(FallbackPolicy::WhenEmpty));
        assert!("never".parse::<FallbackPolicy>().is_err());
        assert_eq!(FallbackPolicy::WhenEmpty.to_string(), "when-empty");
    }
}
