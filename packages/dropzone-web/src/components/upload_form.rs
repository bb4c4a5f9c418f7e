use std::rc::Rc;

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use dropzone_core::{first_of, PreviewRequest, UploadConfig, UploadController};

use super::{DropPrompt, LoadingIndicator, PreviewSection, SubmitButton, UploadResult};
use crate::files::{read_preview, WebFile};
use crate::platform::{self, BodyDragGuard, FILE_INPUT_ID};
use crate::submit::{self, UploadTarget};

/// The drop zone, its hidden file input, the preview and the submit button.
///
/// Owns the [`UploadController`] for as long as it is mounted. Every event is forwarded to the controller and
/// the view is redrawn from [`UploadController::ui`].
#[component]
pub fn UploadForm(config: UploadConfig) -> Element {
    let mut controller = use_signal(|| UploadController::<WebFile>::new(&config));
    let target = use_hook(|| UploadTarget::from(&config));
    use_hook(|| Rc::new(BodyDragGuard::install()));

    let start_preview = move |request: Option<PreviewRequest<WebFile>>| {
        let Some(request) = request else {
            return;
        };
        spawn(async move {
            let outcome = read_preview(&request).await;
            controller.write().finish_preview(request.ticket, outcome);
        });
    };

    let mut highlight = move |evt: DragEvent, on: bool| {
        evt.prevent_default();
        evt.stop_propagation();
        controller.write().set_highlighted(on);
    };

    let state = controller.read();
    let ui = state.ui();
    let selected = state.selected().cloned();
    let preview = state.preview().clone();
    let phase = state.phase().clone();
    drop(state);

    let accept = config.accept_attribute();
    let field_name = config.field_name.clone();

    rsx! {
        form {
            id: "uploadForm",
            class: "upload-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let Some(submission) = controller.write().begin_submit() else {
                    return;
                };
                let target = target.clone();
                spawn(async move {
                    let outcome = submit::upload(&target, submission).await;
                    controller.write().finish_submit(outcome);
                });
            },

            div {
                id: "dropZone",
                class: if ui.highlighted { "drop-zone dragover" } else { "drop-zone" },
                ondragenter: move |evt| highlight(evt, true),
                ondragover: move |evt| highlight(evt, true),
                ondragleave: move |evt| highlight(evt, false),
                ondrop: move |evt: DragEvent| {
                    evt.prevent_default();
                    evt.stop_propagation();
                    let files = evt.files().into_iter().map(WebFile::from);
                    let request = controller.write().drop_files(files);
                    start_preview(request);
                },
                onclick: move |_| {
                    if !controller.read().is_submitting() {
                        platform::open_file_picker(FILE_INPUT_ID);
                    }
                },
                if ui.loading {
                    LoadingIndicator {}
                } else {
                    DropPrompt { hint: config.hint() }
                }
            }

            input {
                id: FILE_INPUT_ID,
                class: "file-input",
                r#type: "file",
                name: "{field_name}",
                accept: "{accept}",
                display: "none",
                onchange: move |evt: FormEvent| {
                    let file = first_of(evt.files()).map(WebFile::from);
                    let request = controller.write().select(file);
                    start_preview(request);
                },
            }

            PreviewSection { file: selected, preview }

            SubmitButton { enabled: ui.submit_enabled, label: ui.submit_label }

            UploadResult { phase }
        }
    }
}
