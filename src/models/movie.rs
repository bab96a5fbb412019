use serde::{Deserialize, Serialize};

/// A single catalog entry, as stored in the catalog file and returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub genre: String,
    pub description: String,
    pub rating: f64,
}

impl Movie {
    /// Text fed to the vectorizer: title, genre and description
    pub fn document(&self) -> String {
        format!("{} {} {}", self.title, self.genre, self.description)
    }

    /// Case-insensitive title comparison used by recommendation lookup
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}
