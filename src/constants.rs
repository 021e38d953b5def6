/// Defaults and fixed lookup data shared across the codebase

/// Catalogue page scraped when no URL argument is given
pub const DEFAULT_CATALOGUE_URL: &str =
    "https://books.toscrape.com/catalogue/category/books/travel_2/index.html";

/// Default output file for scraped records
pub const DEFAULT_OUTPUT_FILE: &str = "scraped_books.csv";

/// Column order of the exported CSV
pub const CSV_HEADERS: [&str; 3] = ["Title", "Price", "Rating"];

/// Convert a star-rating word label from the page markup to its numeric value
pub fn rating_from_label(label: &str) -> Option<u8> {
    match label {
        "One" => Some(1),
        "Two" => Some(2),
        "Three" => Some(3),
        "Four" => Some(4),
        "Five" => Some(5),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_from_label_known_labels() {
        assert_eq!(rating_from_label("One"), Some(1));
        assert_eq!(rating_from_label("Two"), Some(2));
        assert_eq!(rating_from_label("Three"), Some(3));
        assert_eq!(rating_from_label("Four"), Some(4));
        assert_eq!(rating_from_label("Five"), Some(5));
    }

    #[test]
    fn test_rating_from_label_unknown_labels() {
        assert_eq!(rating_from_label("Six"), None);
        assert_eq!(rating_from_label("five"), None);
        assert_eq!(rating_from_label(""), None);
    }
}
