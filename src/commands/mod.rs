pub mod html;
pub mod manage;
pub mod scrape;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan restaurant and deal sites, then write JSON, CSV and HTML
    Scrape(scrape::ScrapeArgs),
    /// Rebuild the HTML page from an existing JSON file
    Html(html::HtmlArgs),
    /// Browse and edit the restaurant list interactively
    Manage(manage::ManageArgs),
}
