use crate::constants::*;

/// Color scheme for the page and the particle globe.
///
/// Persisted in browser storage under [`Theme::STORAGE_KEY`]; an absent or
/// unrecognized stored value falls back to dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub const STORAGE_KEY: &'static str = "theme";

    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Base RGB for points and connection lines.
    pub fn base_color(self) -> [u8; 3] {
        match self {
            Theme::Dark => DARK_BASE_COLOR,
            Theme::Light => LIGHT_BASE_COLOR,
        }
    }

    /// Opacity applied to the canvas container element.
    pub fn canvas_opacity(self) -> f32 {
        match self {
            Theme::Dark => CANVAS_OPACITY_DARK,
            Theme::Light => CANVAS_OPACITY_LIGHT,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}
