use super::theme::Theme;
use serde::Deserialize;
use serde::Serialize;

/// Represents all user prefs. Lives for the session only; nothing is saved.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
pub struct UiPreferences {
    theme: Theme,
    raw_panel_expanded: bool,
}

impl UiPreferences {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            raw_panel_expanded: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn raw_panel_expanded(&self) -> bool {
        self.raw_panel_expanded
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_raw_panel(&mut self) {
        self.raw_panel_expanded = !self.raw_panel_expanded;
    }
}
