//=============================================================================
// File: src/screens/analyzer.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::dropzone::Dropzone;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::result_card::ResultCard;
use crate::hooks::use_analyzer::use_analyzer;
use dioxus::prelude::*;

#[component]
pub fn AnalyzerScreen() -> Element {
    let analyzer = use_analyzer();
    let mut app_state_mut = use_context::<AppStateMut>();

    // Copy what the view needs so no borrow outlives this render.
    let controller = analyzer.controller();
    let (preview_url, in_flight, can_submit, error, result) = {
        let ctl = controller.read();
        (
            ctl.selected().map(|s| s.preview_url().to_string()),
            ctl.is_in_flight(),
            ctl.can_submit(),
            ctl.error(),
            ctl.result().cloned(),
        )
    };
    let raw_expanded = app_state_mut.prefs.read().raw_panel_expanded();

    rsx! {
        Card {
            Dropzone {
                preview_url,
                on_file: move |file| analyzer.select_file(file),
                on_clear: move |_| analyzer.clear(),
            }

            if let Some(err) = error {
                p {
                    class: "analyzer-error",
                    role: "alert",
                    "{err}"
                }
            }

            Button {
                full_width: true,
                disabled: !can_submit,
                busy: in_flight,
                on_click: move |_| analyzer.submit(),
                if in_flight { "Analyzing..." } else { "Analyze Screenshot" }
            }
        }

        if let Some(result) = result {
            ResultCard {
                result,
                raw_expanded,
                on_toggle_raw: move |_| app_state_mut.toggle_raw_panel(),
            }
        }
    }
}
