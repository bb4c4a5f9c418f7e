use serde::Deserialize;

use crate::{format_size, Result};

/// Configuration for the drop zone and the upload it performs.
///
/// Every key is optional. An empty document yields [`UploadConfig::default`].
///
/// ```toml
/// endpoint = "/upload"
/// field_name = "file"
/// accept = ["png", "jpg"]
/// max_size_hint = 10485760
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadConfig {
    /// Where the multipart form is posted.
    pub endpoint: String,

    /// Name of the multipart field that carries the file.
    pub field_name: String,

    /// Label of the submit button when no upload is running.
    pub submit_label: String,

    /// File extensions offered by the native picker, without the leading dot.
    pub accept: Vec<String>,

    /// Size limit mentioned under the drop prompt. Display only; nothing is enforced client side.
    pub max_size_hint: Option<u64>,

    /// Level handed to the logger at startup.
    pub log_level: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "/upload".to_string(),
            field_name: "file".to_string(),
            submit_label: "Upload".to_string(),
            accept: ["mp4", "avi", "mov", "mkv", "jpg", "jpeg", "png"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_size_hint: None,
            log_level: "info".to_string(),
        }
    }
}

impl UploadConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn endpoint(&mut self, endpoint: impl Into<String>) -> &mut Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn field_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_name = name.into();
        self
    }

    pub fn submit_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.submit_label = label.into();
        self
    }

    /// Replace the extension list handed to the native picker.
    pub fn accept<I, S>(&mut self, extensions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accept = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_size_hint(&mut self, bytes: Option<u64>) -> &mut Self {
        self.max_size_hint = bytes;
        self
    }

    /// The value of the file input's `accept` attribute, e.g. `.png,.jpg`.
    ///
    /// Empty when no extensions are configured, which lets the picker offer everything.
    pub fn accept_attribute(&self) -> String {
        self.accept
            .iter()
            .map(|ext| format!(".{}", ext.trim_start_matches('.').to_lowercase()))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The hint line under the drop prompt, e.g. `Supports JPG, PNG • Max 10 MB`.
    pub fn hint(&self) -> Option<String> {
        let formats = (!self.accept.is_empty()).then(|| {
            let names = self
                .accept
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_uppercase())
                .collect::<Vec<_>>()
                .join(", ");
            format!("Supports {names}")
        });
        let limit = self
            .max_size_hint
            .map(|bytes| format!("Max {}", format_size(bytes)));

        match (formats, limit) {
            (Some(formats), Some(limit)) => Some(format!("{formats} • {limit}")),
            (Some(only), None) | (None, Some(only)) => Some(only),
            (None, None) => None,
        }
    }
}
