use crate::format_size;

/// The file the user picked or dropped.
///
/// Only metadata lives here. The platform handle that owns the bytes stays with the renderer and is read on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Whether the browser can show this file inline as an `<img>`.
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// The size as shown next to the file name.
    pub fn display_size(&self) -> String {
        format_size(self.size)
    }
}

/// Pick the entry the drop zone works with out of a multi-file selection.
///
/// Drops and pickers can hand over several files. Only the first one is ever used.
pub fn first_of<T>(files: impl IntoIterator<Item = T>) -> Option<T> {
    files.into_iter().next()
}
