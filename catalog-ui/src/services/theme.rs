use serde::{Deserialize, Serialize};

pub const COLOR_DARK: &str = "--color-dark";
pub const COLOR_LIGHT: &str = "--color-light";

const DARK_RGB: &str = "10, 10, 20";
const LIGHT_RGB: &str = "255, 255, 255";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Night
        } else {
            Theme::Day
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    pub fn variables(self) -> [(&'static str, &'static str); 2] {
        match self {
            Theme::Day => [(COLOR_DARK, DARK_RGB), (COLOR_LIGHT, LIGHT_RGB)],
            Theme::Night => [(COLOR_DARK, LIGHT_RGB), (COLOR_LIGHT, DARK_RGB)],
        }
    }
}

/// Anything other than `"night"` selects the day theme.
impl From<&str> for Theme {
    fn from(value: &str) -> Self {
        match value {
            "night" => Theme::Night,
            _ => Theme::Day,
        }
    }
}
