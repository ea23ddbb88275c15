use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use dioxus::prelude::*;

/// Flips between the light and dark theme.
#[component]
pub fn ThemeToggle() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let is_dark = app_state_mut.prefs.read().theme().is_dark();

    rsx! {
        Button {
            button_type: ButtonType::Contrast,
            outline: true,
            on_click: move |_| app_state_mut.toggle_theme(),
            if is_dark { "☀" } else { "☾" }
        }
    }
}
