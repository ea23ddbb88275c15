// File: src/components/empty_state.rs
use dioxus::prelude::*;

/// Placeholder shown inside the drop zone while no image is staged.
#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    icon: Option<Element>,
    /// Emphasized while something is dragged over the zone.
    #[props(default = false)]
    highlighted: bool,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: if props.highlighted { "empty-state highlighted" } else { "empty-state" },

            if let Some(icon) = props.icon {
                div {
                    class: "empty-state-icon",
                    {icon}
                }
            }

            p {
                class: "empty-state-title",
                "{props.title}"
            }

            if let Some(desc) = props.description {
                small {
                    "{desc}"
                }
            }
        }
    }
}
