//! Phone Book Crawler - Main entry point
//!
//! Looks up a single name in a JSON phone book and prints the result to
//! stdout. Logs go to stderr.

use anyhow::Result;
use clap::Parser;
use phonebook_crawler::repositories::{load_entries, InMemoryDirectory};
use phonebook_crawler::{Config, DirectoryCrawler};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phonebook-crawler")]
#[command(about = "Look up a phone number by name", long_about = None)]
#[command(version)]
struct Cli {
    /// Exact, case-sensitive name to look up
    name: String,

    /// JSON phone book file (overrides PHONEBOOK_DATA_FILE)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Print the whole entry, falling back to DEFAULT_ENTRY on a miss
    #[arg(long)]
    entry: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env();

    // Initialize logging (stderr only, stdout carries the lookup result)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let data_file = cli.data_file.unwrap_or(config.data_file);
    let entries = match load_entries(&data_file) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to load phone book: {}", e);
            return Err(e.into());
        }
    };
    info!(
        "Loaded {} entries from {}",
        entries.len(),
        data_file.display()
    );

    let crawler = DirectoryCrawler::new(InMemoryDirectory::new(entries));

    if cli.entry {
        crawler.print_entry_to_stdout(&cli.name)?;
    } else {
        crawler.print_phone_number_to_stdout(&cli.name)?;
    }

    Ok(())
}
