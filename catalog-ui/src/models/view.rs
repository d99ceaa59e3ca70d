use crate::models::book::Book;
use crate::models::catalog::Catalog;
use crate::services::filter::ANY;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPreview {
    pub id: String,
    pub title: String,
    pub image: String,
    pub author_name: String,
    pub aria_label: String,
}

impl BookPreview {
    pub fn new(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            image: book.image.clone(),
            author_name: catalog.author_name(&book.author).to_string(),
            aria_label: format!("View details for {}", book.title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub image: String,
    pub title: String,
    /// `"{author} ({year})"`
    pub subtitle: String,
    pub description: String,
}

impl BookDetail {
    pub fn new(book: &Book, catalog: &Catalog) -> Self {
        Self {
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!(
                "{} ({})",
                catalog.author_name(&book.author),
                book.published_year()
            ),
            description: book.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowMoreButton {
    pub remaining: usize,
    pub disabled: bool,
}

impl ShowMoreButton {
    pub fn new(remaining: usize) -> Self {
        Self {
            remaining,
            disabled: remaining < 1,
        }
    }

    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    /// The "no constraint" entry followed by one option per lookup entry.
    pub fn with_any(any_text: &str, entries: &BTreeMap<String, String>) -> Vec<Self> {
        let mut options = Vec::with_capacity(entries.len() + 1);
        options.push(Self {
            value: ANY.to_string(),
            text: any_text.to_string(),
        });
        options.extend(entries.iter().map(|(id, name)| Self {
            value: id.clone(),
            text: name.clone(),
        }));
        options
    }
}
