use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;
use tracing::info;

use crate::sinks::{self, html, json};

#[derive(Debug, Args)]
pub struct HtmlArgs {
    #[arg(long, default_value = sinks::JSON_FILE)]
    pub input: PathBuf,
    #[arg(long, default_value = sinks::HTML_FILE)]
    pub output: PathBuf,
}

pub fn run(args: &HtmlArgs) -> Result<()> {
    let count = regenerate(&args.input, &args.output)?;
    println!("Generated {} with {} deals", args.output.display(), count);
    println!("Open it in your web browser to view the deals.");
    Ok(())
}

/// Rebuild the page from a previous run's JSON. Returns the deal count.
pub fn regenerate(input: &Path, output: &Path) -> Result<usize> {
    if !input.exists() {
        bail!(
            "{} not found. Run `wing-deals scrape` first.",
            input.display()
        );
    }
    let deals = json::read_json(input)?;
    html::write_html(output, &deals)?;
    info!(input = %input.display(), output = %output.display(), count = deals.len(), "page regenerated");
    Ok(deals.len())
}
