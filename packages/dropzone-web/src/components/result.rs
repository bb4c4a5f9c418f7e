use dioxus::prelude::*;
use dropzone_core::Phase;

/// The endpoint's answer after an upload, or why it failed.
#[component]
pub fn UploadResult(phase: Phase) -> Element {
    match phase {
        Phase::Completed { status, body } => rsx! {
            div { class: "upload-result", "data-status": "{status}",
                h3 { "Upload complete" }
                div { class: "upload-response", dangerous_inner_html: "{body}" }
            }
        },
        Phase::Failed { message } => rsx! {
            div { class: "upload-error", "role": "alert", "{message}" }
        },
        Phase::Idle | Phase::Submitting => rsx! {},
    }
}
