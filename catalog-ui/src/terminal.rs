use crate::models::view::{BookDetail, BookPreview, SelectOption, ShowMoreButton};
use crate::page::{Hook, Overlay, Page};
use crate::services::theme::Theme;
use tracing::debug;

pub const EMPTY_MESSAGE: &str = "No results found. Your filters might be too narrow.";

#[derive(Debug, Default)]
pub struct TerminalPage {
    prefers_dark: bool,
    output: Vec<String>,
}

impl TerminalPage {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark,
            output: Vec::new(),
        }
    }

    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}

impl Page for TerminalPage {
    fn has_hook(&self, _hook: Hook) -> bool {
        true
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn append_previews(&mut self, previews: &[BookPreview]) {
        for preview in previews {
            self.output.push(format!(
                "  [{}] {} by {}",
                preview.id, preview.title, preview.author_name
            ));
        }
    }

    fn clear_previews(&mut self) {
        self.output.push("--- results ---".to_string());
    }

    fn set_message_visible(&mut self, visible: bool) {
        if visible {
            self.output.push(EMPTY_MESSAGE.to_string());
        }
    }

    fn render_show_more(&mut self, button: &ShowMoreButton) {
        self.output.push(button.label());
    }

    fn populate_select(&mut self, hook: Hook, options: &[SelectOption]) {
        debug!("{} populated with {} options", hook.selector(), options.len());
    }

    fn set_theme_field(&mut self, theme: Theme) {
        debug!("Theme field set to {}", theme.as_str());
    }

    fn apply_style_variables(&mut self, variables: &[(&'static str, &'static str)]) {
        let rendered: Vec<String> = variables
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        self.output.push(format!("style {}", rendered.join("; ")));
    }

    fn set_overlay_open(&mut self, overlay: Overlay, open: bool) {
        debug!("{:?} overlay open={}", overlay, open);
    }

    fn show_detail(&mut self, detail: &BookDetail) {
        self.output.push(format!("=== {} ===", detail.title));
        self.output.push(detail.subtitle.clone());
        self.output.push(detail.description.clone());
    }

    fn focus_search_title(&mut self) {}

    fn scroll_to_top(&mut self) {}
}
