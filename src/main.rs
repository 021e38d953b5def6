use clap::Parser;
use std::path::PathBuf;
use tracing::error;

mod constants;
mod error;
mod export;
mod fetcher;
mod logging;
mod parser;
mod pipeline;
mod types;

#[derive(Parser)]
#[command(name = "books_scraper")]
#[command(about = "Simple books.toscrape.com catalogue page scraper")]
#[command(version = "0.1.0")]
struct Cli {
    /// Page URL to scrape (defaults to the books.toscrape travel category)
    #[arg(default_value = constants::DEFAULT_CATALOGUE_URL)]
    url: String,

    /// Output CSV file
    #[arg(short, long, default_value = constants::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    logging::init_logging();

    // A failed run is logged but does not change the exit status
    if let Err(e) = pipeline::run(&cli.url, &cli.output) {
        error!("Error during scraping: {}", e);
    }
}
