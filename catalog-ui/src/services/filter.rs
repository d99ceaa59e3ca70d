use crate::models::book::Book;
use serde::{Deserialize, Serialize};

/// Select value meaning "no constraint".
pub const ANY: &str = "any";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub title: String,
    #[serde(default = "any")]
    pub author: String,
    #[serde(default = "any")]
    pub genre: String,
}

fn any() -> String {
    ANY.to_string()
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: any(),
            genre: any(),
        }
    }
}

impl FilterCriteria {
    pub fn matches(&self, book: &Book) -> bool {
        self.title_matches(book) && self.author_matches(book) && self.genre_matches(book)
    }

    fn title_matches(&self, book: &Book) -> bool {
        // Only the emptiness check trims; the substring test keeps the raw query.
        self.title.trim().is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase())
    }

    fn author_matches(&self, book: &Book) -> bool {
        self.author == ANY || book.author == self.author
    }

    fn genre_matches(&self, book: &Book) -> bool {
        self.genre == ANY || book.has_genre(&self.genre)
    }
}

/// Stable linear scan: matching books in catalog order.
pub fn filter_books(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    books
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect()
}
