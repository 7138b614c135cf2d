mod commands;
mod deals;
mod fetch;
mod pacing;
mod registry;
mod sinks;
mod state;

use clap::Parser;
use tracing::{debug, Level};

use commands::Command;
use state::ScrapeConfig;

/// Columbus wing deals scraper
#[derive(Debug, Parser)]
#[command(name = "wing-deals", version)]
struct Cli {
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    // Load env
    let _ = dotenv::dotenv();

    match cli.command {
        Command::Scrape(args) => {
            let config = args.apply(ScrapeConfig::from_env());
            debug!(?config, "scrape configuration");
            commands::scrape::run(&config).await
        }
        Command::Html(args) => commands::html::run(&args),
        Command::Manage(args) => {
            let args = commands::manage::ManageArgs {
                restaurants: args
                    .restaurants
                    .or_else(|| ScrapeConfig::from_env().restaurants_file),
            };
            commands::manage::run(&args)
        }
    }
}
