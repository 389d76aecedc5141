//! Asset upload client.
//!
//! The one external collaborator of the editor: a multipart/form-data
//! POST with a single `file` field. The collaborator answers 2xx with a
//! JSON body carrying the stored `filePath`; anything else surfaces as an
//! [`UploadError`] to the caller, is never retried automatically, and
//! leaves the scene untouched - the editor does not assume the asset
//! exists until the upload succeeds.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

const REQUEST_TIMEOUT_SECS: u64 = 60;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Upload error type.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect failure, timeout).
    #[error("upload request failed: {0}")]
    Request(String),

    /// The collaborator answered with a non-success status.
    #[error("upload rejected: HTTP {status}: {body}")]
    Rejected {
        /// The HTTP status code.
        status: u16,
        /// The response body, for diagnostics.
        body: String,
    },

    /// The collaborator answered 2xx but the body was not the expected
    /// JSON shape.
    #[error("malformed upload response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(rename = "filePath")]
    file_path: String,
}

/// Thin async client for the upload endpoint.
pub struct AssetUploader {
    http: reqwest::Client,
    endpoint: String,
}

impl AssetUploader {
    /// Creates an uploader targeting `endpoint` (e.g.
    /// `https://host/planogram/upload`).
    pub fn new(endpoint: impl Into<String>) -> Result<Self, UploadError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| UploadError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Uploads one file and returns the collaborator's stored path.
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, UploadError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| UploadError::Request(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UploadError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: UploadResponse = serde_json::from_str(&text)
            .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
        info!(file = file_name, path = %parsed.file_path, "asset uploaded");
        Ok(parsed.file_path)
    }
}
