//! Dropzone for the web
//!
//! A Dioxus front end for `dropzone-core`: drag a file onto the zone (or click it to browse), check the preview and
//! submit. The upload is posted as `multipart/form-data` and the form shows the endpoint's answer.

mod app;
pub mod components;
pub mod config;
pub mod files;
pub mod platform;
pub mod submit;

pub use app::App;
