pub mod data;
pub mod patterns;
pub mod types;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use types::{Category, Confidence, DealSite, RestaurantEntry, RestaurantUpdate};

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("restaurant name is required")]
    EmptyName,
    #[error("restaurant '{0}' already exists")]
    Duplicate(String),
}

/// On-disk layout. Deal sites are optional so a hand-written file may list
/// restaurants only.
#[derive(Serialize, Deserialize)]
struct StoreFile {
    restaurants: Vec<RestaurantEntry>,
    #[serde(default = "data::deal_sites")]
    deal_sites: Vec<DealSite>,
}

/// Counts shown by the management menu.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreStats {
    pub total: usize,
    /// In order of first appearance.
    pub by_category: Vec<(Category, usize)>,
    pub by_confidence: Vec<(Confidence, usize)>,
}

/// Owns the restaurant list for one process. Names compare case-insensitively.
#[derive(Debug, Clone)]
pub struct RestaurantStore {
    restaurants: Vec<RestaurantEntry>,
    deal_sites: Vec<DealSite>,
}

impl RestaurantStore {
    pub fn new(restaurants: Vec<RestaurantEntry>, deal_sites: Vec<DealSite>) -> Self {
        Self {
            restaurants,
            deal_sites,
        }
    }

    pub fn builtin() -> Self {
        Self::new(data::restaurants(), data::deal_sites())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read restaurant file {}", path.display()))?;
        let file: StoreFile = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse restaurant file {}", path.display()))?;
        debug!(
            path = %path.display(),
            restaurants = file.restaurants.len(),
            deal_sites = file.deal_sites.len(),
            "restaurant file loaded"
        );
        Ok(Self::new(file.restaurants, file.deal_sites))
    }

    /// Load `path` when it exists, otherwise start from the built-in data.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p.exists() => Self::load(p),
            Some(p) => {
                info!(path = %p.display(), "restaurant file not found, using built-in list");
                Ok(Self::builtin())
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = StoreFile {
            restaurants: self.restaurants.clone(),
            deal_sites: self.deal_sites.clone(),
        };
        let json = serde_json::to_string_pretty(&file).context("serialize restaurants")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write restaurant file {}", path.display()))?;
        info!(path = %path.display(), count = self.restaurants.len(), "restaurants saved");
        Ok(())
    }

    pub fn restaurants(&self) -> &[RestaurantEntry] {
        &self.restaurants
    }

    pub fn deal_sites(&self) -> &[DealSite] {
        &self.deal_sites
    }

    pub fn by_category(&self, category: Category) -> Vec<&RestaurantEntry> {
        self.restaurants
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.restaurants.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&RestaurantEntry> {
        self.position(name).map(|i| &self.restaurants[i])
    }

    pub fn add(&mut self, entry: RestaurantEntry) -> Result<(), StoreError> {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if self.get(name).is_some() {
            return Err(StoreError::Duplicate(name.to_string()));
        }
        self.restaurants.push(entry);
        Ok(())
    }

    /// Returns false when no restaurant has that name.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(i) => {
                self.restaurants.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn update(&mut self, name: &str, update: RestaurantUpdate) -> bool {
        let Some(i) = self.position(name) else {
            return false;
        };
        let entry = &mut self.restaurants[i];
        if let Some(url) = update.url {
            entry.url = url;
        }
        if let Some(category) = update.category {
            entry.category = category;
        }
        if let Some(locations) = update.locations {
            entry.locations = locations;
        }
        if let Some(known_deals) = update.known_deals {
            entry.known_deals = known_deals;
        }
        if let Some(confidence) = update.confidence {
            entry.confidence = confidence;
        }
        true
    }

    pub fn stats(&self) -> StoreStats {
        let mut by_category: Vec<(Category, usize)> = Vec::new();
        let mut by_confidence: Vec<(Confidence, usize)> = Vec::new();
        for r in &self.restaurants {
            bump(&mut by_category, r.category);
            bump(&mut by_confidence, r.confidence);
        }
        StoreStats {
            total: self.restaurants.len(),
            by_category,
            by_confidence,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.restaurants
            .iter()
            .position(|r| r.name.to_lowercase() == wanted)
    }
}

fn bump<K: PartialEq>(counts: &mut Vec<(K, usize)>, key: K) {
    match counts.iter_mut().find(|(k, _)| *k == key) {
        Some((_, n)) => *n += 1,
        None => counts.push((key, 1)),
    }
}
