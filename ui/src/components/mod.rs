//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They are used to define the pieces of the analyzer screen: the drop zone, the result card and the theme toggle.
pub mod dropzone;
pub mod empty_state;
pub mod pico;
pub mod result_card;
pub mod theme_toggle;
