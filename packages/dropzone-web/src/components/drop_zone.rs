use dioxus::prelude::*;
use dropzone_core::PROCESSING_MESSAGE;

/// What the drop zone shows while it waits for a file.
#[component]
pub fn DropPrompt(#[props(!optional)] hint: Option<String>) -> Element {
    rsx! {
        div { class: "upload-icon", "⬆" }
        div { class: "upload-text", "Drag & Drop or Click to Upload" }
        if let Some(hint) = hint {
            div { class: "upload-subtext", "{hint}" }
        }
    }
}

/// Replaces the prompt while an upload is running.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "loading-spinner" }
            p { "{PROCESSING_MESSAGE}" }
        }
    }
}
