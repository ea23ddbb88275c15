// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state_mut;
pub mod compat;
mod components;
pub mod controller;
pub mod hooks;
pub mod preview;
pub mod request_state;
mod screens;

use api::prefs::theme::Theme;
use api::prefs::user_prefs::UiPreferences;
use app_state_mut::AppStateMut;
use components::pico::Container;
use components::theme_toggle::ThemeToggle;
use screens::analyzer::AnalyzerScreen;

pub use controller::UploadAnalysisController;
pub use request_state::AnalyzerError;
pub use request_state::RequestState;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.azure.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        min-height: 100%;
        margin: 0;
        padding: 0;
    }

    /* --- APP FRAME --- */
    .app-main-container {
        min-height: 100vh;
        padding: 1.5rem;
        background-color: var(--pico-background-color);
        color: var(--pico-color);
        transition: background-color 0.5s, color 0.5s;
    }

    .app-main-container > .container {
        max-width: 600px;
    }

    .app-toolbar {
        display: flex;
        justify-content: flex-end;
        margin-bottom: 1rem;
    }

    .app-header {
        text-align: center;
        margin-bottom: 2rem;
    }
    .app-header p { color: var(--pico-muted-color); font-size: 1.1rem; }

    /* --- DROP ZONE --- */
    .dropzone {
        position: relative;
        min-height: 240px;
        display: flex;
        align-items: stretch;
        justify-content: center;
        border-radius: var(--pico-border-radius);
    }
    .dropzone.has-preview { overflow: hidden; }
    .dropzone.dragging {
        outline: 2px dashed var(--pico-primary);
        outline-offset: 4px;
    }
    .dropzone-input {
        position: absolute;
        inset: 0;
        opacity: 0;
        cursor: pointer;
        height: 100%;
        margin: 0;
    }
    .dropzone-preview { position: relative; width: 100%; }
    .dropzone-preview img {
        width: 100%;
        height: 16rem;
        object-fit: cover;
        border-radius: var(--pico-border-radius);
    }
    .dropzone-remove {
        position: absolute;
        top: 0.75rem;
        right: 0.75rem;
        width: auto;
        padding: 0.25rem 0.6rem;
        border-radius: 999px;
        background: rgba(0, 0, 0, 0.6);
        border: none;
        color: white;
    }
    .dropzone-remove:hover { background: var(--pico-del-color); }

    .empty-state {
        flex: 1;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 2.5rem;
        text-align: center;
        color: var(--pico-muted-color);
        border: 2px dashed var(--pico-muted-border-color);
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-card-sectioning-background-color);
        transition: border-color 0.3s, background-color 0.3s;
    }
    .empty-state.highlighted {
        border-color: var(--pico-primary);
        background-color: color-mix(in srgb, var(--pico-primary), transparent 95%);
    }
    .empty-state-icon { font-size: 2.5rem; margin-bottom: 1rem; }
    .empty-state-title { margin-bottom: 0.25rem; color: var(--pico-primary); }

    /* --- REQUEST --- */
    .analyzer-error { color: var(--pico-del-color); margin-top: 1rem; }
    button.full-width { width: 100%; margin-top: 2rem; }

    /* --- RESULT --- */
    .result-header { display: flex; align-items: center; gap: 0.75rem; }
    .result-header h2 { margin: 0; font-size: 1.25rem; }
    .result-badge { color: var(--pico-ins-color); font-weight: bold; }
    .result-json, .result-raw { overflow-x: auto; }
    .result-json code { color: var(--pico-primary); }
    .result-actions { display: flex; justify-content: flex-end; }
    .raw-toggle {
        display: flex;
        justify-content: space-between;
        margin-top: 1.5rem;
        color: var(--pico-muted-color);
        text-decoration: none;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

/// Provides the shared UI state and applies the theme to everything below it.
#[component]
fn AppBody() -> Element {
    let prefs = use_signal(|| UiPreferences::new(Theme::default()));
    use_context_provider(|| AppStateMut { prefs });

    // The theme is scoped to this subtree instead of toggled on <html>.
    let theme = prefs.read().theme().as_attr();

    rsx! {
        div {
            class: "app-main-container",
            "data-theme": "{theme}",
            Container {
                div {
                    class: "app-toolbar",
                    ThemeToggle {}
                }
                header {
                    class: "app-header",
                    h1 { "Screenshot Analyzer" }
                    p { "Extract insights from your UI captures instantly." }
                }
                AnalyzerScreen {}
            }
        }
    }
}
