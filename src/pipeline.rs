use crate::error::Result;
use crate::{export, fetcher, parser};
use std::path::Path;
use tracing::{info, warn};

/// Run the scrape end to end: fetch the page, parse it, write the CSV.
///
/// Runs entirely on the calling thread. An empty parse is a warning, not a
/// failure; the output file is still written with its header row. Fetch and
/// export errors propagate to the caller.
pub fn run(url: &str, output_path: &Path) -> Result<()> {
    info!("Fetching {}", url);
    let html = fetcher::fetch_page(url)?;

    let books = parser::parse_books_page(&html);
    if books.is_empty() {
        warn!("No items found on the page");
    }

    export::write_csv(&books, output_path)?;
    info!("Scraping completed. Data saved to {}", output_path.display());
    Ok(())
}
