//! Upload submission models: form payload, request, existence check and result.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::models::file::FileEntry;

/// Non-file form fields sent by the webview on submit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadForm {
    pub project_id: String,
    pub version: String,
    pub deploy_token: String,
}

/// One submission: form fields plus the files selected at submit time.
///
/// Built fresh for every submission and dropped once the request settles.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub project_id: String,
    pub version: String,
    pub deploy_token: String,
    pub files: Vec<FileEntry>,
}

impl UploadRequest {
    pub fn new(form: UploadForm, files: Vec<FileEntry>) -> Self {
        Self {
            project_id: form.project_id,
            version: form.version,
            deploy_token: form.deploy_token,
            files,
        }
    }

    /// Reject blank form fields. File rules live in `services::validation`.
    pub fn check_fields(&self) -> std::result::Result<(), ValidationError> {
        for (name, value) in [
            ("project_id", &self.project_id),
            ("version", &self.version),
            ("deploy_token", &self.deploy_token),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(name));
            }
        }
        Ok(())
    }
}

/// Wire response of `GET /check-file`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCheckResponse {
    pub exists: bool,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A selected file whose destination already exists on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingFileInfo {
    pub file_name: String,
    pub updated_at: String,
}

/// Wire response of `POST /upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub success: bool,
    pub message: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub details: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Submit button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitState {
    Idle,
    Uploading,
}

/// Styling of a message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn from_success(success: bool) -> Self {
        if success {
            MessageKind::Success
        } else {
            MessageKind::Error
        }
    }
}

/// How one pass through the submit handler ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Refused locally; nothing was sent.
    Rejected(#[serde(serialize_with = "as_display")] ValidationError),
    /// Another upload was still in flight.
    Busy,
    /// The user declined to replace existing files.
    Cancelled,
    /// The server answered, successfully or not.
    Completed(UploadResult),
    /// The request never produced a readable response.
    TransportFailed,
}

fn as_display<S>(err: &ValidationError, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(err)
}
