use dioxus::prelude::*;
use dropzone_core::{Preview, SelectedFile, PREVIEW_UNAVAILABLE};

/// Name, size and preview of the selected file. Renders nothing until a file is chosen.
#[component]
pub fn PreviewSection(
    #[props(!optional)] file: Option<SelectedFile>,
    preview: Preview,
) -> Element {
    let Some(file) = file else {
        return rsx! {};
    };
    let size = file.display_size();

    rsx! {
        div { id: "previewSection", class: "preview-section",
            p { class: "file-info",
                "File: "
                span { id: "fileName", "{file.name}" }
            }
            p { class: "file-info",
                "Size: "
                span { id: "fileSize", "{size}" }
            }
            div { id: "imagePreview", class: "image-preview",
                match preview {
                    Preview::Image { data_url } => rsx! {
                        img { src: "{data_url}", alt: "Preview" }
                    },
                    Preview::Unavailable => rsx! {
                        p { "{PREVIEW_UNAVAILABLE}" }
                    },
                    Preview::Loading => rsx! {
                        p { class: "preview-loading", "Loading preview..." }
                    },
                    Preview::Empty => rsx! {},
                }
            }
        }
    }
}
