//=============================================================================
// File: src/components/dropzone.rs
//=============================================================================
use crate::components::empty_state::EmptyState;
use dioxus::html::FileData;
use dioxus::html::HasFileData;
use dioxus::prelude::*;

/// Where the user picks or drops an image, and where its preview is shown.
///
/// Only the first file of a drop or pick is passed on.
#[component]
pub fn Dropzone(
    preview_url: Option<String>,
    on_file: EventHandler<FileData>,
    on_clear: EventHandler<()>,
) -> Element {
    let mut is_dragging = use_signal(|| false);

    let zone_class = zone_class(is_dragging(), preview_url.is_some());

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                is_dragging.set(true);
            },
            ondragleave: move |_| is_dragging.set(false),
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                is_dragging.set(false);
                if let Some(file) = evt.files().into_iter().next() {
                    on_file.call(file);
                }
            },

            if let Some(url) = preview_url {
                div {
                    class: "dropzone-preview",
                    img { src: "{url}", alt: "Preview" }
                    button {
                        class: "dropzone-remove",
                        "aria-label": "Remove image",
                        onclick: move |_| on_clear.call(()),
                        "✕"
                    }
                }
            } else {
                EmptyState {
                    title: "Upload a file or drag and drop",
                    description: "PNG, JPG, GIF or WebP screenshots".to_string(),
                    icon: rsx! { "🖼" },
                    highlighted: is_dragging(),
                }
                input {
                    r#type: "file",
                    class: "dropzone-input",
                    accept: "image/*",
                    onchange: move |evt: FormEvent| {
                        if let Some(file) = evt.files().into_iter().next() {
                            on_file.call(file);
                        }
                    },
                }
            }
        }
    }
}

fn zone_class(dragging: bool, has_preview: bool) -> &'static str {
    match (dragging, has_preview) {
        (true, true) => "dropzone has-preview dragging",
        (true, false) => "dropzone dragging",
        (false, true) => "dropzone has-preview",
        (false, false) => "dropzone",
    }
}
