use crate::models::book::Book;
use crate::models::catalog::{Catalog, CatalogError};
use crate::models::view::{BookDetail, BookPreview, SelectOption, ShowMoreButton};
use crate::page::{Hook, Overlay, Page};
use crate::services::filter::{filter_books, FilterCriteria};
use crate::services::lookup::{find_preview_id, PreviewNode};
use crate::services::pagination::Pagination;
use crate::services::theme::Theme;
use std::ops::Range;
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct UiState {
    pagination: Pagination,
    matches: Vec<Book>,
}

impl UiState {
    fn new(books: &[Book], page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            matches: books.to_vec(),
        }
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn matches(&self) -> &[Book] {
        &self.matches
    }

    pub fn visible(&self) -> &[Book] {
        self.pagination.window(&self.matches)
    }

    pub fn remaining(&self) -> usize {
        self.pagination.remaining(self.matches.len())
    }
}

pub struct CatalogApp<P: Page> {
    catalog: Catalog,
    state: UiState,
    page: P,
}

impl<P: Page> CatalogApp<P> {
    pub fn new(catalog: Catalog, page_size: usize, page: P) -> Result<Self, CatalogError> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize);
        }
        let state = UiState::new(catalog.books(), page_size);
        Ok(Self {
            catalog,
            state,
            page,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn into_page(self) -> P {
        self.page
    }

    fn require(&self, hook: Hook) -> bool {
        let present = self.page.has_hook(hook);
        if !present {
            error!("Element {} not found", hook.selector());
        }
        present
    }

    fn previews(&self, range: Range<usize>) -> Vec<BookPreview> {
        self.state.matches[range]
            .iter()
            .map(|book| BookPreview::new(book, &self.catalog))
            .collect()
    }

    pub fn initialize(&mut self) {
        self.state = UiState::new(self.catalog.books(), self.state.pagination.page_size());

        if self.require(Hook::ListItems) {
            let previews = self.previews(self.state.pagination.visible(self.state.matches.len()));
            self.page.append_previews(&previews);
        }

        if self.require(Hook::SearchGenres) {
            let options = SelectOption::with_any("All Genres", self.catalog.genres());
            self.page.populate_select(Hook::SearchGenres, &options);
        }

        if self.require(Hook::SearchAuthors) {
            let options = SelectOption::with_any("All Authors", self.catalog.authors());
            self.page.populate_select(Hook::SearchAuthors, &options);
        }

        let theme = Theme::from_preference(self.page.prefers_dark());
        if self.require(Hook::SettingsTheme) {
            self.page.set_theme_field(theme);
            self.page.apply_style_variables(&theme.variables());
        }

        info!(
            "Catalog initialized with {} books, theme {}",
            self.state.matches.len(),
            theme.as_str()
        );

        self.update_show_more();
    }

    fn update_show_more(&mut self) {
        if !self.require(Hook::ListButton) {
            return;
        }
        let button = ShowMoreButton::new(self.state.remaining());
        self.page.render_show_more(&button);
    }

    /// Replaces the match set and starts again from page one.
    pub fn submit_search(&mut self, criteria: &FilterCriteria) {
        let result = filter_books(self.catalog.books(), criteria);
        info!("Search {:?} matched {} books", criteria, result.len());

        self.state.pagination.reset();
        self.state.matches = result;

        if self.page.has_hook(Hook::ListMessage) && self.page.has_hook(Hook::ListItems) {
            self.page.set_message_visible(self.state.matches.is_empty());
            self.page.clear_previews();
            let previews = self.previews(self.state.pagination.visible(self.state.matches.len()));
            self.page.append_previews(&previews);
        } else {
            error!(
                "Element {} or {} not found",
                Hook::ListMessage.selector(),
                Hook::ListItems.selector()
            );
        }

        self.update_show_more();
        self.page.scroll_to_top();
        self.set_overlay(Overlay::Search, false);
    }

    /// Reveals the next page. Returns `false` when nothing was added.
    pub fn show_more(&mut self) -> bool {
        let len = self.state.matches.len();
        if !self.state.pagination.has_more(len) {
            debug!("Show more ignored, all {} matches visible", len);
            return false;
        }
        if !self.require(Hook::ListItems) {
            return false;
        }

        let Some(range) = self.state.pagination.advance(len) else {
            return false;
        };
        let previews = self.previews(range);
        self.page.append_previews(&previews);
        self.update_show_more();
        true
    }

    pub fn open_preview<N: PreviewNode>(&mut self, target: &N) -> bool {
        find_preview_id(target).map_or(false, |id| self.open_detail(id))
    }

    /// Unknown ids are ignored.
    pub fn open_detail(&mut self, id: &str) -> bool {
        let Some(book) = self.catalog.find_book(id) else {
            debug!("No book with id {}", id);
            return false;
        };
        let detail = BookDetail::new(book, &self.catalog);

        if !self.require(Hook::ListActive) {
            return false;
        }
        self.page.set_overlay_open(Overlay::Detail, true);
        self.page.show_detail(&detail);
        true
    }

    pub fn close_detail(&mut self) {
        self.set_overlay(Overlay::Detail, false);
    }

    pub fn open_search(&mut self) {
        if !self.page.has_hook(Hook::SearchOverlay) {
            return;
        }
        self.page.set_overlay_open(Overlay::Search, true);
        if self.page.has_hook(Hook::SearchTitle) {
            self.page.focus_search_title();
        }
    }

    pub fn cancel_search(&mut self) {
        self.set_overlay(Overlay::Search, false);
    }

    pub fn open_settings(&mut self) {
        self.set_overlay(Overlay::Settings, true);
    }

    pub fn cancel_settings(&mut self) {
        self.set_overlay(Overlay::Settings, false);
    }

    pub fn submit_theme(&mut self, value: &str) -> Theme {
        let theme = Theme::from(value);
        self.page.apply_style_variables(&theme.variables());
        self.set_overlay(Overlay::Settings, false);
        theme
    }

    fn set_overlay(&mut self, overlay: Overlay, open: bool) {
        if self.require(overlay.hook()) {
            self.page.set_overlay_open(overlay, open);
        }
    }
}
