//! The views of the drop zone. Only [`UploadForm`] holds state; everything else renders what it is given.

mod drop_zone;
mod preview;
mod result;
mod submit_button;
mod upload_form;

pub use drop_zone::{DropPrompt, LoadingIndicator};
pub use preview::PreviewSection;
pub use result::UploadResult;
pub use submit_button::SubmitButton;
pub use upload_form::UploadForm;
