use catalog_ui::models::view::{BookDetail, BookPreview, SelectOption, ShowMoreButton};
use catalog_ui::{
    Book, Catalog, CatalogApp, CatalogError, FilterCriteria, Hook, Overlay, Page, PreviewNode,
    Theme, ANY,
};
use chrono::{TimeZone, Utc};
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Default)]
struct RecordingPage {
    missing: HashSet<Hook>,
    prefers_dark: bool,
    list: Vec<BookPreview>,
    message_visible: bool,
    button: Option<ShowMoreButton>,
    selects: HashMap<Hook, Vec<SelectOption>>,
    theme_field: Option<Theme>,
    style: Vec<(&'static str, &'static str)>,
    overlays: HashMap<Overlay, bool>,
    detail: Option<BookDetail>,
    focused: bool,
    scrolls: usize,
}

impl RecordingPage {
    fn without(hooks: &[Hook]) -> Self {
        Self {
            missing: hooks.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn list_ids(&self) -> Vec<&str> {
        self.list.iter().map(|p| p.id.as_str()).collect()
    }

    fn is_open(&self, overlay: Overlay) -> bool {
        self.overlays.get(&overlay).copied().unwrap_or(false)
    }
}

impl Page for RecordingPage {
    fn has_hook(&self, hook: Hook) -> bool {
        !self.missing.contains(&hook)
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn append_previews(&mut self, previews: &[BookPreview]) {
        self.list.extend_from_slice(previews);
    }

    fn clear_previews(&mut self) {
        self.list.clear();
    }

    fn set_message_visible(&mut self, visible: bool) {
        self.message_visible = visible;
    }

    fn render_show_more(&mut self, button: &ShowMoreButton) {
        self.button = Some(*button);
    }

    fn populate_select(&mut self, hook: Hook, options: &[SelectOption]) {
        self.selects.insert(hook, options.to_vec());
    }

    fn set_theme_field(&mut self, theme: Theme) {
        self.theme_field = Some(theme);
    }

    fn apply_style_variables(&mut self, variables: &[(&'static str, &'static str)]) {
        self.style = variables.to_vec();
    }

    fn set_overlay_open(&mut self, overlay: Overlay, open: bool) {
        self.overlays.insert(overlay, open);
    }

    fn show_detail(&mut self, detail: &BookDetail) {
        self.detail = Some(detail.clone());
    }

    fn focus_search_title(&mut self) {
        self.focused = true;
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}

/// 42 books: every third is by "herbert", every seventh is "scifi".
/// Book 5 is titled "Dune Messiah".
fn catalog() -> Catalog {
    let books = (0..42)
        .map(|i| Book {
            id: format!("b{i}"),
            title: if i == 5 {
                "Dune Messiah".to_string()
            } else {
                format!("Volume {i}")
            },
            author: if i % 3 == 0 { "herbert" } else { "austen" }.to_string(),
            image: format!("https://covers.example/{i}.jpg"),
            description: format!("Description {i}"),
            published: Utc.with_ymd_and_hms(1900 + i, 6, 1, 0, 0, 0).unwrap(),
            genres: if i % 7 == 0 {
                vec!["scifi".to_string()]
            } else {
                vec!["romance".to_string()]
            },
        })
        .collect();

    let mut authors = BTreeMap::new();
    authors.insert("herbert".to_string(), "Frank Herbert".to_string());
    let mut genres = BTreeMap::new();
    genres.insert("scifi".to_string(), "Science Fiction".to_string());
    genres.insert("romance".to_string(), "Romance".to_string());

    Catalog::new(books, authors, genres).unwrap()
}

fn app(page: RecordingPage) -> CatalogApp<RecordingPage> {
    let mut app = CatalogApp::new(catalog(), 30, page).unwrap();
    app.initialize();
    app
}

fn criteria(title: &str, author: &str, genre: &str) -> FilterCriteria {
    FilterCriteria {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
    }
}

struct Node {
    preview: Option<String>,
    parent: Option<Box<Node>>,
}

impl PreviewNode for Node {
    fn preview_id(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }
}

#[test]
fn zero_page_size_is_rejected() {
    let result = CatalogApp::new(catalog(), 0, RecordingPage::default());
    assert!(matches!(result, Err(CatalogError::InvalidPageSize)));
}

#[test]
fn initialize_renders_first_page_and_dropdowns() {
    let app = app(RecordingPage::default());
    let page = app.page();

    assert_eq!(app.state().page(), 1);
    assert_eq!(app.state().matches().len(), 42);
    assert_eq!(page.list.len(), 30);
    assert_eq!(page.list[0].id, "b0");
    assert_eq!(page.list[0].author_name, "Frank Herbert");
    assert_eq!(page.list[1].author_name, "Unknown Author");
    assert_eq!(page.list[0].aria_label, "View details for Volume 0");

    assert_eq!(page.button, Some(ShowMoreButton::new(12)));

    let genres = &page.selects[&Hook::SearchGenres];
    assert_eq!(genres[0].value, ANY);
    assert_eq!(genres[0].text, "All Genres");
    assert_eq!(genres.len(), 3);
    assert_eq!(page.selects[&Hook::SearchAuthors][0].text, "All Authors");
}

#[test]
fn initialize_follows_dark_preference() {
    let app = app(RecordingPage {
        prefers_dark: true,
        ..Default::default()
    });
    assert_eq!(app.page().theme_field, Some(Theme::Night));
    assert_eq!(app.page().style, Theme::Night.variables().to_vec());
}

#[test]
fn show_more_reveals_remaining_then_stops() {
    let mut app = app(RecordingPage::default());

    assert!(app.show_more());
    assert_eq!(app.state().page(), 2);
    assert_eq!(app.state().visible().len(), 42);
    assert_eq!(app.state().remaining(), 0);
    assert_eq!(app.page().list.len(), 42);
    assert_eq!(app.page().list[30].id, "b30");

    let button = app.page().button.unwrap();
    assert_eq!(button.remaining, 0);
    assert!(button.disabled);

    assert!(!app.show_more());
    assert_eq!(app.state().page(), 2);
    assert_eq!(app.page().list.len(), 42);
}

#[test]
fn empty_criteria_keeps_full_catalog_in_order() {
    let mut app = app(RecordingPage::default());
    app.show_more();

    app.submit_search(&criteria("  ", ANY, ANY));

    let ids: Vec<String> = app.state().matches().iter().map(|b| b.id.clone()).collect();
    let expected: Vec<String> = (0..42).map(|i| format!("b{i}")).collect();
    assert_eq!(ids, expected);
    assert_eq!(app.state().page(), 1);
    assert_eq!(app.page().list.len(), 30);
    assert!(!app.page().message_visible);
}

#[test]
fn search_is_case_insensitive_and_conjunctive() {
    let mut app = app(RecordingPage::default());

    app.submit_search(&criteria("DUNE", ANY, ANY));
    assert_eq!(app.page().list_ids(), ["b5"]);

    app.submit_search(&criteria("", "herbert", "scifi"));
    assert_eq!(app.page().list_ids(), ["b0", "b21"]);
    assert_eq!(app.page().button, Some(ShowMoreButton::new(0)));

    app.submit_search(&criteria("dune", "herbert", ANY));
    assert!(app.state().matches().is_empty());
    assert!(app.page().message_visible);
}

#[test]
fn search_closes_overlay_and_scrolls() {
    let mut app = app(RecordingPage::default());
    app.open_search();
    assert!(app.page().is_open(Overlay::Search));
    assert!(app.page().focused);

    app.submit_search(&FilterCriteria::default());
    assert!(!app.page().is_open(Overlay::Search));
    assert_eq!(app.page().scrolls, 1);
}

#[test]
fn cancel_closes_search_and_settings() {
    let mut app = app(RecordingPage::default());
    app.open_search();
    app.open_settings();
    assert!(app.page().is_open(Overlay::Search));
    assert!(app.page().is_open(Overlay::Settings));

    app.cancel_search();
    app.cancel_settings();
    assert!(!app.page().is_open(Overlay::Search));
    assert!(!app.page().is_open(Overlay::Settings));
    assert_eq!(app.state().page(), 1);
}

#[test]
fn open_search_without_overlay_does_nothing() {
    let mut app = app(RecordingPage::without(&[Hook::SearchOverlay]));
    app.open_search();
    assert!(!app.page().is_open(Overlay::Search));
    assert!(!app.page().focused);
}

#[test]
fn detail_lookup_ignores_active_filter() {
    let mut app = app(RecordingPage::default());
    app.submit_search(&criteria("no such title", ANY, ANY));
    assert!(app.state().matches().is_empty());

    assert!(app.open_detail("b5"));
    let detail = app.page().detail.clone().unwrap();
    assert_eq!(detail.title, "Dune Messiah");
    assert_eq!(detail.subtitle, "Unknown Author (1905)");
    assert_eq!(detail.description, "Description 5");
    assert!(app.page().is_open(Overlay::Detail));

    app.close_detail();
    assert!(!app.page().is_open(Overlay::Detail));
}

#[test]
fn unknown_detail_id_is_ignored() {
    let mut app = app(RecordingPage::default());
    assert!(!app.open_detail("missing"));
    assert!(app.page().detail.is_none());
    assert!(!app.page().is_open(Overlay::Detail));
}

#[test]
fn preview_click_walks_to_annotated_ancestor() {
    let mut app = app(RecordingPage::default());
    let target = Node {
        preview: None,
        parent: Some(Box::new(Node {
            preview: Some("b3".to_string()),
            parent: None,
        })),
    };

    assert!(app.open_preview(&target));
    let detail = app.page().detail.clone().unwrap();
    assert_eq!(detail.subtitle, "Frank Herbert (1903)");

    let stray = Node {
        preview: None,
        parent: None,
    };
    assert!(!app.open_preview(&stray));
}

#[test]
fn theme_submit_applies_variables_and_closes_settings() {
    let mut app = app(RecordingPage::default());
    app.open_settings();
    assert!(app.page().is_open(Overlay::Settings));

    assert_eq!(app.submit_theme("night"), Theme::Night);
    assert_eq!(app.page().style, Theme::Night.variables().to_vec());
    assert!(!app.page().is_open(Overlay::Settings));

    assert_eq!(app.submit_theme("sepia"), Theme::Day);
    assert_eq!(app.page().style, Theme::Day.variables().to_vec());
}

#[test]
fn missing_hooks_skip_features_without_failing() {
    let mut app = app(RecordingPage::without(&[
        Hook::ListItems,
        Hook::ListButton,
        Hook::SearchGenres,
        Hook::ListActive,
        Hook::SettingsTheme,
    ]));

    assert!(app.page().list.is_empty());
    assert!(app.page().button.is_none());
    assert!(!app.page().selects.contains_key(&Hook::SearchGenres));
    assert!(app.page().selects.contains_key(&Hook::SearchAuthors));
    assert!(app.page().theme_field.is_none());
    assert!(app.page().style.is_empty());

    assert!(!app.show_more());
    assert_eq!(app.state().page(), 1);

    assert!(!app.open_detail("b1"));
    assert!(app.page().detail.is_none());

    app.submit_search(&criteria("dune", ANY, ANY));
    assert_eq!(app.state().matches().len(), 1);
    assert!(app.page().list.is_empty());
}
