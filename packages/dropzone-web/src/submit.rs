//! Posting the selected file to the upload endpoint.

use dropzone_core::{Error, PickedFile, Receipt, Result, Submission, UploadConfig};
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use tracing::debug;

use crate::files::WebFile;
use crate::platform;

/// Where an upload goes and under which field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub endpoint: String,
    pub field_name: String,
}

impl From<&UploadConfig> for UploadTarget {
    fn from(config: &UploadConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            field_name: config.field_name.clone(),
        }
    }
}

impl UploadTarget {
    /// Resolve the endpoint against the page it is served from. Absolute endpoints are used as they are.
    pub fn url(&self, base: &str) -> Result<Url> {
        let base = Url::parse(base).map_err(|err| Error::Transport(format!("bad page url: {err}")))?;
        base.join(&self.endpoint)
            .map_err(|err| Error::Transport(format!("bad endpoint {}: {err}", self.endpoint)))
    }
}

/// Send the form as `multipart/form-data` and report what the endpoint answered.
pub async fn upload(target: &UploadTarget, submission: Submission<WebFile>) -> Result<Receipt> {
    let url = target.url(&platform::page_url())?;
    let form = match submission.file {
        Some(file) => form_with(target, &file).await?,
        None => Form::new(),
    };

    debug!(%url, "Posting upload");
    let response = reqwest::Client::new()
        .post(url)
        .multipart(form)
        .send()
        .await
        .map_err(transport)?;

    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    if status.is_success() {
        Ok(Receipt {
            status: status.as_u16(),
            body,
        })
    } else {
        Err(Error::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

async fn form_with(target: &UploadTarget, file: &WebFile) -> Result<Form> {
    let meta = file.describe();
    let bytes = file.read_bytes().await?;

    let mut part = Part::bytes(bytes).file_name(meta.name);
    if !meta.mime.is_empty() {
        part = part.mime_str(&meta.mime).map_err(transport)?;
    }

    Ok(Form::new().part(target.field_name.clone(), part))
}

fn transport(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}
