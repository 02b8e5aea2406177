use chrono::Local;
use serde::{Deserialize, Serialize};

/// Display format for note timestamps, e.g. `07-03-2024 18:45:02`.
pub const DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// A single note. The three field names are the on-disk contract for the
/// persisted document and must not be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub content: String,
    // Preformatted local timestamp. The string itself is the value; it is
    // matched by prefix, never reparsed as a calendar date.
    pub date: String,
}

impl Note {
    /// Create a note stamped with the current local time.
    pub fn new(title: String, content: String) -> Self {
        Self::with_date(title, content, Local::now().format(DATE_FORMAT).to_string())
    }

    pub fn with_date(title: String, content: String, date: String) -> Self {
        Self {
            title,
            content,
            date,
        }
    }
}
