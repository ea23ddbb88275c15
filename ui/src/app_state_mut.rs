//! Defines the mutable, reactive state for the application's UI.

use api::prefs::user_prefs::UiPreferences;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Holds `Signal`s for UI-related state that needs to change and trigger
/// re-renders anywhere in the tree. The analyzer's own state lives with the
/// screen that owns it, see [`crate::hooks::use_analyzer`].
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Theme and raw panel toggles. Session-only.
    pub prefs: Signal<UiPreferences>,
}

impl AppStateMut {
    pub fn toggle_theme(&mut self) {
        self.prefs.write().toggle_theme();
    }

    pub fn toggle_raw_panel(&mut self) {
        self.prefs.write().toggle_raw_panel();
    }
}
