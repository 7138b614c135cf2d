use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::registry::types::{Category, Confidence, RestaurantEntry, RestaurantUpdate};
use crate::registry::RestaurantStore;

#[derive(Debug, Args)]
pub struct ManageArgs {
    /// Restaurant list to edit; changes are saved here on exit
    #[arg(long)]
    pub restaurants: Option<PathBuf>,
}

const MENU: &[&str] = &[
    "List all restaurants",
    "Add new restaurant",
    "Remove restaurant",
    "Update restaurant",
    "Show statistics",
    "Exit",
];

pub fn run(args: &ManageArgs) -> Result<()> {
    let mut store = RestaurantStore::load_or_builtin(args.restaurants.as_deref())?;
    menu(&mut store)?;
    match &args.restaurants {
        Some(path) => {
            store.save(path)?;
            println!("Saved {} restaurants to {}", store.restaurants().len(), path.display());
        }
        None => println!("No --restaurants file given, changes were not saved."),
    }
    Ok(())
}

fn menu(store: &mut RestaurantStore) -> Result<()> {
    let theme = ColorfulTheme::default();
    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Restaurant Management Menu")
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => print!("{}", format_restaurants(store)),
            1 => add(&theme, store)?,
            2 => remove(&theme, store)?,
            3 => update(&theme, store)?,
            4 => print!("{}", format_stats(store)),
            _ => return Ok(()),
        }
    }
}

fn add(theme: &ColorfulTheme, store: &mut RestaurantStore) -> Result<()> {
    let name = prompt(theme, "Restaurant name", "")?;
    if let Some(existing) = store.get(&name) {
        println!("Restaurant '{}' already exists!", existing.name);
        return Ok(());
    }

    let categories: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{}: {}", c.key(), c.description()))
        .collect();
    let category = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&categories)
        .default(0)
        .interact()?;
    let url = prompt(theme, "Website URL", "")?;
    let locations = prompt(theme, "Locations (comma-separated)", "")?;
    let known_deals = prompt(theme, "Known deals (comma-separated)", "")?;
    let levels: Vec<&str> = Confidence::ALL.iter().map(|c| c.as_str()).collect();
    let confidence = prompt(theme, &format!("Confidence ({})", levels.join("/")), "medium")?;

    let entry = match new_entry(
        &name,
        &url,
        Category::ALL[category],
        &locations,
        &known_deals,
        &confidence,
    ) {
        Ok(entry) => entry,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };
    match store.add(entry) {
        Ok(()) => println!("Added '{}'.", name.trim()),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn remove(theme: &ColorfulTheme, store: &mut RestaurantStore) -> Result<()> {
    let Some(name) = pick_restaurant(theme, store, "Restaurant to remove")? else {
        return Ok(());
    };
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Are you sure you want to remove '{}'?", name))
        .default(false)
        .interact()?;
    if !confirmed {
        println!("Removal cancelled.");
    } else if store.remove(&name) {
        println!("Removed '{}'.", name);
    } else {
        println!("Restaurant '{}' not found!", name);
    }
    Ok(())
}

fn update(theme: &ColorfulTheme, store: &mut RestaurantStore) -> Result<()> {
    let Some(name) = pick_restaurant(theme, store, "Restaurant to update")? else {
        return Ok(());
    };
    let Some(current) = store.get(&name).cloned() else {
        println!("Restaurant '{}' not found!", name);
        return Ok(());
    };
    print!("{}", format_entry(&current));
    println!("Enter new values (leave empty to keep the current value):");

    let inputs = UpdateInputs {
        url: prompt(theme, &format!("URL [{}]", current.url), "")?,
        category: prompt(theme, &format!("Category [{}]", current.category.key()), "")?,
        locations: prompt(theme, &format!("Locations [{}]", current.locations.join(", ")), "")?,
        known_deals: prompt(
            theme,
            &format!("Known deals [{}]", current.known_deals.join(", ")),
            "",
        )?,
        confidence: prompt(theme, &format!("Confidence [{}]", current.confidence), "")?,
    };

    let (changes, warnings) = inputs.into_update();
    for w in warnings {
        println!("{}", w);
    }
    if store.update(&name, changes) {
        println!("Updated '{}'.", name);
    }
    Ok(())
}

fn pick_restaurant(
    theme: &ColorfulTheme,
    store: &RestaurantStore,
    prompt: &str,
) -> Result<Option<String>> {
    if store.restaurants().is_empty() {
        println!("No restaurants in the list.");
        return Ok(None);
    }
    let mut items: Vec<&str> = store.names();
    items.push("Cancel");
    let choice = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    if choice + 1 == items.len() {
        return Ok(None);
    }
    Ok(Some(items[choice].to_string()))
}

fn prompt(theme: &ColorfulTheme, text: &str, default: &str) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(text)
        .allow_empty(true);
    if !default.is_empty() {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?.trim().to_string())
}

/// Split comma-separated input, dropping blank items.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Build a new entry from raw menu input. Empty lists get the usual
/// placeholders; an unknown confidence becomes `medium`.
pub fn new_entry(
    name: &str,
    url: &str,
    category: Category,
    locations: &str,
    known_deals: &str,
    confidence: &str,
) -> Result<RestaurantEntry> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Restaurant name is required!");
    }
    let url = url.trim();
    if url.is_empty() {
        bail!("URL is required!");
    }

    let mut locations = parse_list(locations);
    if locations.is_empty() {
        locations = vec!["Columbus".to_string()];
    }
    let mut known_deals = parse_list(known_deals);
    if known_deals.is_empty() {
        known_deals = vec!["Wing specials".to_string(), "Daily deals".to_string()];
    }

    Ok(RestaurantEntry {
        name: name.to_string(),
        url: url.to_string(),
        category,
        locations,
        known_deals,
        confidence: confidence.parse().unwrap_or(Confidence::Medium),
    })
}

/// Raw answers from the update prompts.
#[derive(Debug, Default)]
pub struct UpdateInputs {
    pub url: String,
    pub category: String,
    pub locations: String,
    pub known_deals: String,
    pub confidence: String,
}

impl UpdateInputs {
    /// Empty answers keep the current value, and so do unrecognised
    /// category or confidence names (reported in the returned warnings).
    pub fn into_update(self) -> (RestaurantUpdate, Vec<String>) {
        let mut warnings = Vec::new();
        let non_empty = |s: String| Some(s).filter(|s| !s.trim().is_empty());

        let category = non_empty(self.category).and_then(|c| match c.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => {
                warnings.push("Invalid category! Keeping current value.".to_string());
                None
            }
        });
        let confidence = non_empty(self.confidence).and_then(|c| match c.parse::<Confidence>() {
            Ok(confidence) => Some(confidence),
            Err(_) => {
                warnings.push("Invalid confidence! Keeping current value.".to_string());
                None
            }
        });
        let list = |s: String| non_empty(s).map(|s| parse_list(&s)).filter(|l| !l.is_empty());

        let update = RestaurantUpdate {
            url: non_empty(self.url).map(|u| u.trim().to_string()),
            category,
            locations: list(self.locations),
            known_deals: list(self.known_deals),
            confidence,
        };
        (update, warnings)
    }
}

pub fn format_entry(r: &RestaurantEntry) -> String {
    format!(
        "     Category: {}\n     URL: {}\n     Locations: {}\n     Confidence: {}\n     Known Deals: {}\n",
        r.category.key(),
        r.url,
        r.locations.join(", "),
        r.confidence,
        r.known_deals.join(", "),
    )
}

/// Grouped by category, numbered across the whole list.
pub fn format_restaurants(store: &RestaurantStore) -> String {
    let mut out = String::from("\nCurrent Restaurants in Database:\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');
    let mut n = 0;
    for category in Category::ALL {
        let entries = store.by_category(category);
        if entries.is_empty() {
            continue;
        }
        out.push_str(&format!("\n[{}]\n", category.description()));
        for r in entries {
            n += 1;
            out.push_str(&format!("{:2}. {}\n", n, r.name));
            out.push_str(&format_entry(r));
            out.push('\n');
        }
    }
    out
}

pub fn format_stats(store: &RestaurantStore) -> String {
    let stats = store.stats();
    let mut out = String::from("\nRestaurant Database Statistics\n");
    out.push_str(&"=".repeat(40));
    out.push_str(&format!("\nTotal restaurants: {}\n\nBy category:\n", stats.total));
    for (category, count) in &stats.by_category {
        out.push_str(&format!("  {}: {}\n", category.description(), count));
    }
    out.push_str("\nBy confidence level:\n");
    for (confidence, count) in &stats.by_confidence {
        out.push_str(&format!("  {}: {}\n", confidence, count));
    }
    out
}
