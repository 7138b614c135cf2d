use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How much we trust that a restaurant or deal is real and current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const ALL: [Confidence; 3] = [Confidence::High, Confidence::Medium, Confidence::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            other => Err(format!("unknown confidence '{}'", other)),
        }
    }
}

/// Restaurant grouping used for filtering and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MajorChains,
    LocalChains,
    Independent,
    FoodTrucks,
    BarsPubs,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::MajorChains,
        Category::LocalChains,
        Category::Independent,
        Category::FoodTrucks,
        Category::BarsPubs,
    ];

    /// Key as stored on disk and typed into the menu.
    pub fn key(&self) -> &'static str {
        match self {
            Category::MajorChains => "major_chains",
            Category::LocalChains => "local_chains",
            Category::Independent => "independent",
            Category::FoodTrucks => "food_trucks",
            Category::BarsPubs => "bars_pubs",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::MajorChains => "Major national/regional chains",
            Category::LocalChains => "Local Columbus chains",
            Category::Independent => "Independent restaurants",
            Category::FoodTrucks => "Food trucks and mobile vendors",
            Category::BarsPubs => "Bars and pubs with food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| format!("unknown category '{}'", wanted))
    }
}

/// A restaurant whose promotions page we scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantEntry {
    pub name: String,
    pub url: String,
    pub category: Category,
    pub locations: Vec<String>,
    pub known_deals: Vec<String>,
    pub confidence: Confidence,
}

/// Partial update applied by `RestaurantStore::update`. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct RestaurantUpdate {
    pub url: Option<String>,
    pub category: Option<Category>,
    pub locations: Option<Vec<String>>,
    pub known_deals: Option<Vec<String>>,
    pub confidence: Option<Confidence>,
}

/// A deal aggregation site (Groupon and friends).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealSite {
    pub name: String,
    pub url: String,
    /// e.g. "deal_aggregator" or "local_deals"
    pub category: String,
    pub confidence: Confidence,
}

/// A hand-authored fallback deal, stamped with a timestamp when inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct CannedDeal {
    pub restaurant: &'static str,
    pub deal_text: &'static str,
    pub source: &'static str,
    pub confidence: Confidence,
}
