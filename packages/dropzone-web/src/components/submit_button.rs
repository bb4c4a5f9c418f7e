use dioxus::prelude::*;

#[component]
pub fn SubmitButton(enabled: bool, label: String) -> Element {
    rsx! {
        button {
            id: "submitBtn",
            class: "submit-btn",
            r#type: "submit",
            disabled: !enabled,
            "{label}"
        }
    }
}
