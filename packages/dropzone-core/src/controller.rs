//! The upload interaction as a plain state machine.
//!
//! The renderer forwards every gesture (drag, drop, pick, submit) to an [`UploadController`] and draws whatever
//! [`UploadController::ui`] reports. Asynchronous work (reading an image for its preview, posting the form) is
//! started by the renderer and handed back through [`UploadController::finish_preview`] and
//! [`UploadController::finish_submit`].

use tracing::{debug, info, warn};

use crate::{data_url, first_of, Error, Preview, PreviewTicket, Result, SelectedFile, UploadConfig};

/// Label of the submit button while an upload is running.
pub const PROCESSING_LABEL: &str = "Processing...";

/// Text next to the spinner that replaces the drop zone's content during an upload.
pub const PROCESSING_MESSAGE: &str = "Processing your file...";

/// A file handle as provided by the platform.
///
/// The controller keeps the handle next to the metadata so the bytes can be read later for the preview and the
/// upload itself.
pub trait PickedFile: Clone {
    fn describe(&self) -> SelectedFile;
}

impl PickedFile for SelectedFile {
    fn describe(&self) -> SelectedFile {
        self.clone()
    }
}

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Completed { status: u16, body: String },
    Failed { message: String },
}

/// What the endpoint answered to a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub status: u16,
    pub body: String,
}

/// Everything the view needs, derived from the controller on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub highlighted: bool,
    pub preview_visible: bool,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub loading: bool,
}

/// A preview read the renderer should perform.
#[derive(Debug, Clone)]
pub struct PreviewRequest<F> {
    pub ticket: PreviewTicket,
    pub file: F,
    pub mime: String,
}

impl<F> PreviewRequest<F> {
    /// Turn the bytes of the file into the completion expected by [`UploadController::finish_preview`].
    pub fn encode(&self, bytes: &[u8]) -> String {
        data_url(&self.mime, bytes)
    }
}

/// An upload the renderer should perform.
///
/// `file` is `None` when the form was submitted without a selection. The request is still sent, like a native
/// form post would be, and the endpoint decides what to answer.
#[derive(Debug, Clone)]
pub struct Submission<F> {
    pub file: Option<F>,
}

#[derive(Debug, Clone)]
struct Selection<F> {
    meta: SelectedFile,
    handle: F,
}

#[derive(Debug, Clone)]
pub struct UploadController<F> {
    selection: Option<Selection<F>>,
    highlighted: bool,
    preview: Preview,
    phase: Phase,
    generation: u64,
    submit_label: String,
}

impl<F: PickedFile> UploadController<F> {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            selection: None,
            highlighted: false,
            preview: Preview::Empty,
            phase: Phase::Idle,
            generation: 0,
            submit_label: config.submit_label.clone(),
        }
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selection.as_ref().map(|s| &s.meta)
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn set_highlighted(&mut self, on: bool) {
        self.highlighted = on;
    }

    /// Handle a drop on the zone. Only the first file is kept; an empty drop changes nothing but the highlight.
    pub fn drop_files(&mut self, files: impl IntoIterator<Item = F>) -> Option<PreviewRequest<F>> {
        self.set_highlighted(false);
        match first_of(files) {
            Some(file) => self.select(Some(file)),
            None => {
                debug!("Drop carried no files");
                None
            }
        }
    }

    /// Make `file` the current selection.
    ///
    /// Returns a [`PreviewRequest`] when the preview has to be read asynchronously (images). Non-images get their
    /// placeholder immediately. `None` leaves everything as it was.
    pub fn select(&mut self, file: Option<F>) -> Option<PreviewRequest<F>> {
        let file = file?;

        if self.is_submitting() {
            debug!("Ignoring selection while an upload is running");
            return None;
        }

        let meta = file.describe();
        debug!(name = %meta.name, size = meta.size, mime = %meta.mime, "File selected");

        self.generation += 1;
        if matches!(self.phase, Phase::Completed { .. } | Phase::Failed { .. }) {
            self.phase = Phase::Idle;
        }

        let request = if meta.is_image() {
            self.preview = Preview::Loading;
            Some(PreviewRequest {
                ticket: PreviewTicket(self.generation),
                file: file.clone(),
                mime: meta.mime.clone(),
            })
        } else {
            self.preview = Preview::Unavailable;
            None
        };

        self.selection = Some(Selection { meta, handle: file });
        request
    }

    /// Apply the outcome of a preview read. Returns `false` if the read belonged to an older selection and was
    /// discarded.
    pub fn finish_preview(&mut self, ticket: PreviewTicket, outcome: Result<String>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                stale = ticket.0,
                current = self.generation,
                "Discarding preview for a replaced selection"
            );
            return false;
        }

        self.preview = match outcome {
            Ok(data_url) => Preview::Image { data_url },
            Err(err) => {
                warn!("Preview unavailable: {err}");
                Preview::Empty
            }
        };
        true
    }

    /// Start an upload. Returns `None` if one is already running.
    pub fn begin_submit(&mut self) -> Option<Submission<F>> {
        if self.is_submitting() {
            debug!("Upload already in progress");
            return None;
        }

        self.phase = Phase::Submitting;
        self.highlighted = false;

        let file = self.selection.as_ref().map(|s| s.handle.clone());
        match self.selected() {
            Some(meta) => info!(name = %meta.name, "Submitting upload"),
            None => info!("Submitting upload without a file"),
        }

        Some(Submission { file })
    }

    /// Apply the outcome of the upload started by [`UploadController::begin_submit`].
    pub fn finish_submit(&mut self, outcome: Result<Receipt>) {
        if !self.is_submitting() {
            debug!("Upload finished after the form left the submitting state");
            return;
        }

        self.phase = match outcome {
            Ok(Receipt { status, body }) => {
                info!(status, "Upload complete");
                Phase::Completed { status, body }
            }
            Err(err) => {
                warn!("{err}");
                Phase::Failed {
                    message: err.user_message(),
                }
            }
        };
    }

    pub fn ui(&self) -> UiState {
        let has_file = self.selection.is_some();
        let loading = self.is_submitting();
        let finished = matches!(self.phase, Phase::Completed { .. });

        UiState {
            highlighted: self.highlighted,
            preview_visible: has_file,
            submit_enabled: has_file && !loading && !finished,
            submit_label: if loading {
                PROCESSING_LABEL.to_string()
            } else {
                self.submit_label.clone()
            },
            loading,
        }
    }
}

/// Build the error a renderer reports for a failed preview read.
pub fn read_error(name: impl Into<String>, message: impl ToString) -> Error {
    Error::Read {
        name: name.into(),
        message: message.to_string(),
    }
}
