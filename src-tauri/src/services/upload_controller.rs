//! Upload controller: owns the form's submission cycle.
//!
//! validate → existence check → overwrite confirmation → `Idle → Uploading`
//! → multipart POST with simulated progress → `Uploading → Idle`.
//! Every path out of an upload restores the button and schedules the
//! progress reset.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::api::{ArtifactApi, UploadParams};
use crate::error::ValidationError;
use crate::models::file::FileEntry;
use crate::models::upload::{
    ExistingFileInfo, MessageKind, SubmitOutcome, SubmitState, UploadForm, UploadRequest,
};
use crate::services::confirm::{self, OverwritePrompt};
use crate::services::destination::DestinationTemplate;
use crate::services::existence;
use crate::services::progress::{SimulatedProgress, PROGRESS_HIDE_DELAY_MS};
use crate::services::selection::describe_selection;
use crate::services::validation::validate_files;
use crate::services::view::{UploadView, BUSY_BUTTON_LABEL, IDLE_BUTTON_LABEL};

/// Shown when the upload request fails before the server gives an answer.
pub const UPLOAD_FAILED_MESSAGE: &str = "An error occurred while uploading the files";

pub struct UploadController<P: OverwritePrompt> {
    prompt: P,
    view: Arc<dyn UploadView>,
    state: Mutex<SubmitState>,
    selection: Mutex<Vec<FileEntry>>,
    pending_reset: Mutex<Option<JoinHandle<()>>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<P: OverwritePrompt> UploadController<P> {
    pub fn new(prompt: P, view: Arc<dyn UploadView>) -> Self {
        Self {
            prompt,
            view,
            state: Mutex::new(SubmitState::Idle),
            selection: Mutex::new(Vec::new()),
            pending_reset: Mutex::new(None),
        }
    }

    pub fn state(&self) -> SubmitState {
        *lock(&self.state)
    }

    pub fn selection(&self) -> Vec<FileEntry> {
        lock(&self.selection).clone()
    }

    /// Replace the selection and redraw the list. No validation happens here.
    pub fn select_files(&self, files: Vec<FileEntry>) {
        let lines = describe_selection(&files);
        log::debug!("Selection changed: {:?}", lines);
        *lock(&self.selection) = files;
        self.view.show_selection(&lines);
    }

    /// Apply the selection rules, showing the first failure to the user.
    pub fn validate(&self, files: &[FileEntry]) -> bool {
        match validate_files(files) {
            Ok(()) => true,
            Err(e) => {
                self.reject(&e);
                false
            }
        }
    }

    /// Files from `request` that already exist at their destination.
    pub async fn check_existing<A: ArtifactApi>(
        &self,
        api: &A,
        destination: &DestinationTemplate,
        request: &UploadRequest,
    ) -> Vec<ExistingFileInfo> {
        existence::check_existing(
            api,
            destination,
            &request.files,
            &request.project_id,
            &request.version,
            &request.deploy_token,
        )
        .collect()
        .await
    }

    pub async fn confirm_overwrite(&self, existing: &[ExistingFileInfo]) -> bool {
        confirm::confirm_overwrite(&self.prompt, existing).await
    }

    /// The form's submit handler.
    pub async fn handle_submit<A: ArtifactApi>(
        &self,
        api: &A,
        destination: &DestinationTemplate,
        form: UploadForm,
    ) -> SubmitOutcome {
        if self.state() == SubmitState::Uploading {
            log::info!("Submit ignored: an upload is already in flight");
            return SubmitOutcome::Busy;
        }

        let request = UploadRequest::new(form, self.selection());
        if let Err(e) = validate_files(&request.files).and_then(|_| request.check_fields()) {
            self.reject(&e);
            return SubmitOutcome::Rejected(e);
        }

        let existing = self.check_existing(api, destination, &request).await;
        if !self.confirm_overwrite(&existing).await {
            log::info!(
                "Upload cancelled: user kept {} existing file(s)",
                existing.len()
            );
            return SubmitOutcome::Cancelled;
        }

        self.submit(api, &request).await
    }

    /// Multipart POST of `request` with the simulated progress bar running.
    pub async fn submit<A: ArtifactApi>(&self, api: &A, request: &UploadRequest) -> SubmitOutcome {
        if !self.begin_upload() {
            return SubmitOutcome::Busy;
        }
        let submission_id = uuid::Uuid::new_v4().simple().to_string();
        log::info!(
            "[{}] Uploading {} file(s) to project {} version {}",
            submission_id,
            request.files.len(),
            request.project_id,
            request.version
        );

        self.view.set_busy(true, BUSY_BUTTON_LABEL);
        let progress = SimulatedProgress::start(self.view.clone());

        let result = api
            .upload(UploadParams {
                project_id: &request.project_id,
                version: &request.version,
                deploy_token: &request.deploy_token,
                files: &request.files,
            })
            .await;
        progress.complete();

        let outcome = match result {
            Ok(result) => {
                let kind = MessageKind::from_success(result.success);
                log::info!(
                    "[{}] Server answered success={}: {}",
                    submission_id,
                    result.success,
                    result.message
                );
                self.view.show_message(&result.message, kind);
                if let Some(details) = &result.details {
                    self.view.show_details(details, kind);
                }
                SubmitOutcome::Completed(result)
            }
            Err(e) => {
                log::error!("[{}] Upload request failed: {}", submission_id, e);
                self.view.show_message(UPLOAD_FAILED_MESSAGE, MessageKind::Error);
                SubmitOutcome::TransportFailed
            }
        };

        self.finish_upload();
        outcome
    }

    fn reject(&self, e: &ValidationError) {
        log::info!("Submission rejected: {}", e);
        self.view.show_message(&e.to_string(), MessageKind::Error);
    }

    /// `Idle → Uploading`. Returns false if an upload is already running.
    fn begin_upload(&self) -> bool {
        {
            let mut state = lock(&self.state);
            if *state == SubmitState::Uploading {
                return false;
            }
            *state = SubmitState::Uploading;
        }
        // A reset left over from the previous upload must not hide this one's bar.
        if let Some(pending) = lock(&self.pending_reset).take() {
            pending.abort();
        }
        true
    }

    /// `Uploading → Idle`, then hide the bar after a short pause.
    fn finish_upload(&self) {
        self.view.set_busy(false, IDLE_BUTTON_LABEL);
        *lock(&self.state) = SubmitState::Idle;

        let view = self.view.clone();
        let reset = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(PROGRESS_HIDE_DELAY_MS)).await;
            view.hide_progress();
        });
        *lock(&self.pending_reset) = Some(reset);
    }
}
