pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid dropzone configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to read {name}: {message}")]
    Read { name: String, message: String },

    #[error("Upload rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Upload failed: {0}")]
    Transport(String),
}

impl Error {
    /// The message shown under the drop zone when an upload does not go through.
    pub fn user_message(&self) -> String {
        match self {
            Error::Rejected { body, .. } if !body.trim().is_empty() => body.trim().to_string(),
            Error::Rejected { status, .. } => format!("The server rejected the upload ({status})"),
            other => other.to_string(),
        }
    }
}
