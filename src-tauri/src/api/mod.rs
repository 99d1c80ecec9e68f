//! Upload service abstraction layer.
//!
//! This module defines the `ArtifactApi` trait, the sole interface for HTTP
//! interactions with the upload service (`/check-file` and `/upload`). Upper
//! layers (`services/`, `commands/`) call through this trait and never build
//! HTTP requests themselves, which also lets the controller be exercised with
//! in-memory fakes.

use crate::error::AppError;
use crate::models::file::FileEntry;
use crate::models::upload::{FileCheckResponse, UploadResult};

/// Multipart field carrying the artifact files.
pub const FILES_FIELD: &str = "files";

#[derive(Debug)]
pub struct CheckFileParams<'a> {
    /// Destination path of the artifact, rendered from the configured template.
    pub destination: &'a str,
    pub deploy_token: &'a str,
}

#[derive(Debug)]
pub struct UploadParams<'a> {
    pub project_id: &'a str,
    pub version: &'a str,
    pub deploy_token: &'a str,
    pub files: &'a [FileEntry],
}

/// Abstraction trait for the upload service.
pub trait ArtifactApi: Send + Sync {
    /// Ask whether an artifact already exists at `params.destination`.
    ///
    /// Idempotent and side-effect free on the server.
    fn check_file(
        &self,
        params: CheckFileParams<'_>,
    ) -> impl std::future::Future<Output = std::result::Result<FileCheckResponse, AppError>> + Send;

    /// Send the whole form as one multipart POST.
    ///
    /// `Ok` means the server produced a readable JSON answer, whatever its
    /// `success` flag says. Transport and decode failures are `Err`.
    fn upload(
        &self,
        params: UploadParams<'_>,
    ) -> impl std::future::Future<Output = std::result::Result<UploadResult, AppError>> + Send;
}

pub mod v1;
