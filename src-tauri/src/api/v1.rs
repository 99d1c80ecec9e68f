//! ArtifactApiV1: reqwest implementation of `ArtifactApi`.

use super::{ArtifactApi, CheckFileParams, UploadParams, FILES_FIELD};
use crate::error::AppError;
use crate::models::file::FileEntry;
use crate::models::upload::{FileCheckResponse, UploadResult};

const USER_AGENT: &str = "AarUploader/0.1.0";

pub struct ArtifactApiV1 {
    client: reqwest::Client,
    base_url: String,
}

impl ArtifactApiV1 {
    pub fn new(base_url: &str) -> crate::error::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Trim trailing slashes and require an http(s) scheme.
pub(crate) fn normalize_base_url(raw: &str) -> crate::error::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(AppError::Internal(format!(
            "Server URL must start with http:// or https://, got: {:?}",
            raw
        )));
    }
    Ok(trimmed.to_string())
}

async fn file_part(file: &FileEntry) -> crate::error::Result<reqwest::multipart::Part> {
    let data = tokio::fs::read(&file.file_path).await?;
    reqwest::multipart::Part::bytes(data)
        .file_name(file.file_name.clone())
        .mime_str("application/octet-stream")
        .map_err(|e| AppError::Internal(format!("MIME parse error: {}", e)))
}

impl ArtifactApi for ArtifactApiV1 {
    async fn check_file(
        &self,
        params: CheckFileParams<'_>,
    ) -> crate::error::Result<FileCheckResponse> {
        let resp = self
            .client
            .get(self.endpoint("check-file"))
            .query(&[("url", params.destination), ("token", params.deploy_token)])
            .send()
            .await?;
        let body: FileCheckResponse = resp.json().await?;
        Ok(body)
    }

    async fn upload(&self, params: UploadParams<'_>) -> crate::error::Result<UploadResult> {
        let mut form = reqwest::multipart::Form::new()
            .text("project_id", params.project_id.to_string())
            .text("version", params.version.to_string())
            .text("deploy_token", params.deploy_token.to_string());
        for file in params.files {
            form = form.part(FILES_FIELD, file_part(file).await?);
        }

        // Non-2xx answers still carry the JSON verdict; only an unreadable body is a failure.
        let resp = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;
        serde_json::from_str::<UploadResult>(&text).map_err(|e| {
            AppError::Api(format!(
                "Unreadable /upload response: status={}, error={}, body={}",
                status, e, text
            ))
        })
    }
}
