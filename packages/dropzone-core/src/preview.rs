use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Text shown in place of a preview for anything that is not an image.
pub const PREVIEW_UNAVAILABLE: &str = "Video preview not available";

/// What the preview region currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preview {
    /// Nothing selected, or the image could not be read.
    #[default]
    Empty,

    /// An image read is in flight.
    Loading,

    /// An image, ready to be used as the `src` of an `<img>`.
    Image { data_url: String },

    /// A non-image file. Rendered as [`PREVIEW_UNAVAILABLE`].
    Unavailable,
}

/// Identifies the selection an asynchronous preview read was started for.
///
/// Every new selection bumps the controller's generation, so a read that finishes after the user picked
/// something else carries an outdated ticket and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewTicket(pub(crate) u64);

impl PreviewTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Encode file contents as a `data:` URL, the same shape `FileReader.readAsDataURL` produces.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_is_base64() {
        assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(data_url("image/gif", b""), "data:image/gif;base64,");
    }

    #[test]
    fn missing_mime_falls_back_to_octet_stream() {
        assert_eq!(
            data_url("", b"abc"),
            "data:application/octet-stream;base64,YWJj"
        );
    }
}
