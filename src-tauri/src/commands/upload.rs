//! Tauri IPC command handlers for the upload form.

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::v1::ArtifactApiV1;
use crate::commands::files;
use crate::commands::view::{DialogPrompt, WindowView};
use crate::models::file::FileEntry;
use crate::models::upload::{SubmitOutcome, UploadForm};
use crate::services::destination::DestinationTemplate;
use crate::services::upload_controller::UploadController;
use crate::storage::settings;

/// Tauri managed state: the one controller behind the form.
pub struct UploadState {
    pub controller: Arc<UploadController<DialogPrompt>>,
}

impl UploadState {
    pub fn new(app: &tauri::AppHandle) -> crate::error::Result<Self> {
        let view = Arc::new(WindowView::new(app)?);
        let prompt = DialogPrompt::new(app.clone());
        Ok(Self {
            controller: Arc::new(UploadController::new(prompt, view)),
        })
    }
}

/// Resolve `paths` and make them the current selection.
pub async fn apply_selection(
    controller: &UploadController<DialogPrompt>,
    paths: Vec<PathBuf>,
) -> crate::error::Result<Vec<FileEntry>> {
    let entries = files::resolve_paths(paths).await?;
    controller.select_files(entries.clone());
    Ok(entries)
}

#[tauri::command]
pub async fn select_files(
    paths: Vec<String>,
    state: tauri::State<'_, UploadState>,
) -> Result<Vec<FileEntry>, String> {
    let paths = paths.into_iter().map(PathBuf::from).collect();
    apply_selection(&state.controller, paths)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn submit_upload(
    form: UploadForm,
    app: tauri::AppHandle,
    state: tauri::State<'_, UploadState>,
) -> Result<SubmitOutcome, String> {
    let settings = settings::get_settings(&app).map_err(|e| e.to_string())?;
    let api = ArtifactApiV1::new(&settings.server_url).map_err(|e| e.to_string())?;
    let destination =
        DestinationTemplate::new(&settings.destination_template).map_err(|e| e.to_string())?;
    Ok(state.controller.handle_submit(&api, &destination, form).await)
}
