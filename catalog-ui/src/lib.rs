pub mod controller;
pub mod models;
pub mod page;
pub mod services;
pub mod terminal;

pub use controller::{CatalogApp, UiState};
pub use models::book::Book;
pub use models::catalog::{Catalog, CatalogError};
pub use page::{Hook, Overlay, Page};
pub use services::filter::{filter_books, FilterCriteria, ANY};
pub use services::lookup::PreviewNode;
pub use services::pagination::Pagination;
pub use services::theme::Theme;

pub const BOOKS_PER_PAGE: usize = 36;
