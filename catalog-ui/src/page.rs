use crate::models::view::{BookDetail, BookPreview, SelectOption, ShowMoreButton};
use crate::services::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    ListItems,
    ListMessage,
    ListButton,
    ListActive,
    SearchOverlay,
    SearchTitle,
    SearchGenres,
    SearchAuthors,
    SettingsOverlay,
    SettingsTheme,
}

impl Hook {
    pub fn selector(self) -> &'static str {
        match self {
            Hook::ListItems => "[data-list-items]",
            Hook::ListMessage => "[data-list-message]",
            Hook::ListButton => "[data-list-button]",
            Hook::ListActive => "[data-list-active]",
            Hook::SearchOverlay => "[data-search-overlay]",
            Hook::SearchTitle => "[data-search-title]",
            Hook::SearchGenres => "[data-search-genres]",
            Hook::SearchAuthors => "[data-search-authors]",
            Hook::SettingsOverlay => "[data-settings-overlay]",
            Hook::SettingsTheme => "[data-settings-theme]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Search,
    Settings,
    Detail,
}

impl Overlay {
    pub fn hook(self) -> Hook {
        match self {
            Overlay::Search => Hook::SearchOverlay,
            Overlay::Settings => Hook::SettingsOverlay,
            Overlay::Detail => Hook::ListActive,
        }
    }
}

// Methods touching an element are only called once has_hook confirmed it.
pub trait Page {
    fn has_hook(&self, hook: Hook) -> bool;

    fn prefers_dark(&self) -> bool;

    fn append_previews(&mut self, previews: &[BookPreview]);
    fn clear_previews(&mut self);
    fn set_message_visible(&mut self, visible: bool);
    fn render_show_more(&mut self, button: &ShowMoreButton);
    fn populate_select(&mut self, hook: Hook, options: &[SelectOption]);
    fn set_theme_field(&mut self, theme: Theme);
    fn apply_style_variables(&mut self, variables: &[(&'static str, &'static str)]);
    fn set_overlay_open(&mut self, overlay: Overlay, open: bool);
    fn show_detail(&mut self, detail: &BookDetail);
    fn focus_search_title(&mut self);
    fn scroll_to_top(&mut self);
}
