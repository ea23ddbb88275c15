use crate::compat;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use api::AnalysisResult;
use dioxus::prelude::*;

/// Shows an analysis result verbatim, pretty-printed, with a collapsible
/// single-line raw view.
#[component]
pub fn ResultCard(
    result: AnalysisResult,
    raw_expanded: bool,
    on_toggle_raw: EventHandler<()>,
) -> Element {
    // The text last copied; a new result no longer matches it.
    let mut copied = use_signal(|| None::<String>);
    let pretty = result.pretty();
    let compact = result.compact();
    let copy_text = pretty.clone();
    let label = copy_label(copied.read().as_deref(), &pretty);

    rsx! {
        Card {
            header {
                class: "result-header",
                span { class: "result-badge", "✓" }
                h2 { "Analysis Complete" }
            }

            pre {
                class: "result-json",
                code { "{pretty}" }
            }

            div {
                class: "result-actions",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| {
                        let text = copy_text.clone();
                        spawn(async move {
                            let text_copied = text.clone();
                            let ok = compat::clipboard_set(text).await;
                            if !ok {
                                dioxus_logger::tracing::warn!("clipboard write failed");
                            }
                            copied.set(ok.then_some(text_copied));
                        });
                    },
                    "{label}"
                }
            }

            a {
                href: "#",
                class: "raw-toggle",
                "aria-expanded": if raw_expanded { "true" } else { "false" },
                onclick: move |evt| {
                    evt.prevent_default();
                    on_toggle_raw.call(());
                },
                span { "Raw Data" }
                span { if raw_expanded { "▲" } else { "▼" } }
            }

            if raw_expanded {
                pre {
                    class: "result-raw",
                    code { "{compact}" }
                }
            }
        }
    }
}

fn copy_label(copied: Option<&str>, shown: &str) -> &'static str {
    if copied == Some(shown) {
        "Copied"
    } else {
        "Copy JSON"
    }
}
