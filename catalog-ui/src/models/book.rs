use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
    // author id
    pub author: String,
    pub image: String,
    pub description: String,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Book {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}
