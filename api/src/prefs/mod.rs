//! Session-only user interface preferences.

pub mod theme;
pub mod user_prefs;
