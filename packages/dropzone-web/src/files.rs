use dioxus::html::FileData;
use dropzone_core::{read_error, PickedFile, PreviewRequest, Result, SelectedFile};

/// A file handed over by a drop or the native picker.
#[derive(Clone)]
pub struct WebFile(FileData);

impl From<FileData> for WebFile {
    fn from(file: FileData) -> Self {
        Self(file)
    }
}

impl PickedFile for WebFile {
    fn describe(&self) -> SelectedFile {
        SelectedFile::new(
            self.0.name(),
            self.0.size(),
            self.0.content_type().unwrap_or_default(),
        )
    }
}

impl WebFile {
    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        self.0
            .read_bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|err| read_error(self.0.name(), err))
    }
}

/// Read the file behind a preview request and encode it as a data URL.
pub async fn read_preview(request: &PreviewRequest<WebFile>) -> Result<String> {
    let bytes = request.file.read_bytes().await?;
    Ok(request.encode(&bytes))
}
