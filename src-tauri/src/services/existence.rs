//! Pre-upload existence check.
//!
//! A convenience for the overwrite prompt only: any failure to ask the server
//! counts as "does not exist" and never blocks the upload.

use futures::stream::{self, Stream, StreamExt};

use crate::api::{ArtifactApi, CheckFileParams};
use crate::models::file::FileEntry;
use crate::models::upload::ExistingFileInfo;
use crate::services::destination::DestinationTemplate;

/// Shown when the server does not report a modification time.
pub const UNKNOWN_UPDATED_AT: &str = "unknown";

/// Lazily query `/check-file` for each file, one at a time in selection order.
///
/// Yields an entry for every file the server reports as existing. The stream
/// is single-pass; calling this again issues fresh queries.
pub fn check_existing<'a, A: ArtifactApi>(
    api: &'a A,
    destination: &'a DestinationTemplate,
    files: &'a [FileEntry],
    project_id: &'a str,
    version: &'a str,
    deploy_token: &'a str,
) -> impl Stream<Item = ExistingFileInfo> + Send + 'a {
    stream::iter(files).filter_map(move |file| async move {
        let url = destination.render(project_id, version, &file.file_name);
        let params = CheckFileParams {
            destination: &url,
            deploy_token,
        };
        match api.check_file(params).await {
            Ok(resp) if resp.exists => Some(ExistingFileInfo {
                file_name: resp.file_name.unwrap_or_else(|| file.file_name.clone()),
                updated_at: resp
                    .updated_at
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| UNKNOWN_UPDATED_AT.to_string()),
            }),
            Ok(_) => None,
            Err(e) => {
                log::warn!(
                    "Existence check failed for '{}', assuming it does not exist: {}",
                    file.file_name,
                    e
                );
                None
            }
        }
    })
}
