//! Dropzone core
//!
//! ## Overview
//! ------------
//! Everything the drag-and-drop file picker decides, with none of the DOM. The renderer (see `dropzone-web`) owns a
//! single [`UploadController`], forwards user gestures to it and draws the [`UiState`] it derives.
//!
//! Two pieces of work are asynchronous and happen in the renderer:
//! - reading an image to show it as a preview, tracked with a [`PreviewTicket`] so late reads for a replaced
//!   selection are ignored
//! - posting the form, whose [`Receipt`] or [`Error`] decides what the form shows next

mod config;
mod controller;
mod error;
mod file;
mod preview;
mod size;

pub use config::UploadConfig;
pub use controller::{
    read_error, Phase, PickedFile, PreviewRequest, Receipt, Submission, UiState, UploadController,
    PROCESSING_LABEL, PROCESSING_MESSAGE,
};
pub use error::{Error, Result};
pub use file::{first_of, SelectedFile};
pub use preview::{data_url, Preview, PreviewTicket, PREVIEW_UNAVAILABLE};
pub use size::{format_size, UNITS};
