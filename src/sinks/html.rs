use std::path::Path;

use anyhow::{Context, Result};

use crate::deals::types::DealRecord;

const TEMPLATE: &str = include_str!("wing_deals.html");
const PLACEHOLDER: &str = "{{DEALS_DATA}}";

/// Self-contained page with the deals embedded as a JSON literal.
pub fn render_page(deals: &[DealRecord]) -> Result<String> {
    let json = serde_json::to_string_pretty(deals).context("serialize deals for page")?;
    // a "</script>" inside any deal text must not end the script block
    let json = json.replace("</", "<\\/");
    Ok(TEMPLATE.replace(PLACEHOLDER, &json))
}

pub fn write_html(path: &Path, deals: &[DealRecord]) -> Result<()> {
    std::fs::write(path, render_page(deals)?)
        .with_context(|| format!("Failed to write {}", path.display()))
}
