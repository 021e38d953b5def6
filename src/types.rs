use serde::{Deserialize, Serialize};

/// One parsed book listing from a catalogue page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Title text, may be empty when the source markup omits it
    #[serde(rename = "Title")]
    pub title: String,
    /// Price as displayed, currency symbol stripped, not parsed numerically
    #[serde(rename = "Price")]
    pub price: String,
    /// Star rating 1-5, `None` when the source label is unrecognized
    #[serde(rename = "Rating")]
    pub rating: Option<u8>,
}
