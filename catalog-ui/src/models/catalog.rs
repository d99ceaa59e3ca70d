use crate::models::book::Book;
use crate::services::lookup::find_book;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate book id: {0}")]
    DuplicateBook(String),
    #[error("Page size must be at least 1")]
    InvalidPageSize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    books: Vec<Book>,
    #[serde(default)]
    authors: BTreeMap<String, String>,
    #[serde(default)]
    genres: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new(
        books: Vec<Book>,
        authors: BTreeMap<String, String>,
        genres: BTreeMap<String, String>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            books,
            authors,
            genres,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for book in &self.books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::DuplicateBook(book.id.clone()));
            }
        }
        Ok(())
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &BTreeMap<String, String> {
        &self.authors
    }

    pub fn genres(&self) -> &BTreeMap<String, String> {
        &self.genres
    }

    pub fn author_name(&self, id: &str) -> &str {
        self.authors.get(id).map(String::as_str).unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Looks in the full list, regardless of any active search.
    pub fn find_book(&self, id: &str) -> Option<&Book> {
        find_book(&self.books, id)
    }
}
