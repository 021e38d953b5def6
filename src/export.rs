use crate::constants::CSV_HEADERS;
use crate::error::Result;
use crate::types::Book;
use std::path::Path;
use tracing::debug;

/// Write the records to a CSV file at `path`, replacing any existing file.
///
/// The header row is always written, so an empty record set still produces a
/// well-formed single-line file. An absent rating is written as an empty field.
pub fn write_csv(books: &[Book], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(CSV_HEADERS)?;
    for book in books {
        writer.serialize(book)?;
    }
    writer.flush()?;
    debug!("Wrote {} rows to {}", books.len(), path.display());
    Ok(())
}
