use dioxus::prelude::*;

use crate::components::UploadForm;
use crate::config;

const STYLE: Asset = asset!("/assets/dropzone.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(config::embedded);

    rsx! {
        Stylesheet { href: STYLE }
        main { class: "container",
            h1 { "Upload a file" }
            UploadForm { config }
        }
    }
}
