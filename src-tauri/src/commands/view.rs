//! Tauri adapters for the controller's view and overwrite prompt.

use serde::Serialize;
use tauri::{Emitter, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};
use tokio::sync::oneshot;

use crate::error::AppError;
use crate::models::upload::{ExistingFileInfo, MessageKind};
use crate::services::confirm::{
    await_answer, overwrite_message, ModalGate, OverwritePrompt, CANCEL_LABEL, OVERWRITE_TITLE,
    REPLACE_LABEL,
};
use crate::services::view::UploadView;

/// Label of the window hosting the upload form.
pub const MAIN_WINDOW: &str = "main";

pub const SELECTION_EVENT: &str = "upload:selection";
pub const MESSAGE_EVENT: &str = "upload:message";
pub const DETAILS_EVENT: &str = "upload:details";
pub const BUSY_EVENT: &str = "upload:busy";
pub const PROGRESS_EVENT: &str = "upload:progress";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusyPayload {
    pub busy: bool,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPayload {
    pub percent: u8,
    pub visible: bool,
}

/// Renders the controller's state into the main webview through events.
pub struct WindowView {
    window: tauri::WebviewWindow,
}

impl WindowView {
    /// Fails when the form's window does not exist.
    pub fn new(app: &tauri::AppHandle) -> crate::error::Result<Self> {
        let window = app.get_webview_window(MAIN_WINDOW).ok_or_else(|| {
            AppError::Internal(format!("Required window '{}' is missing", MAIN_WINDOW))
        })?;
        Ok(Self { window })
    }

    fn emit<S: Serialize + Clone>(&self, event: &str, payload: S) {
        if let Err(e) = self.window.emit(event, payload) {
            log::warn!("Failed to emit {}: {}", event, e);
        }
    }
}

impl UploadView for WindowView {
    fn show_selection(&self, lines: &[String]) {
        self.emit(SELECTION_EVENT, lines.to_vec());
    }

    fn show_message(&self, text: &str, kind: MessageKind) {
        self.emit(
            MESSAGE_EVENT,
            MessagePayload {
                text: text.to_string(),
                kind,
            },
        );
    }

    fn show_details(&self, text: &str, kind: MessageKind) {
        self.emit(
            DETAILS_EVENT,
            MessagePayload {
                text: text.to_string(),
                kind,
            },
        );
    }

    fn set_busy(&self, busy: bool, label: &str) {
        self.emit(
            BUSY_EVENT,
            BusyPayload {
                busy,
                label: label.to_string(),
            },
        );
    }

    fn set_progress(&self, percent: u8) {
        self.emit(
            PROGRESS_EVENT,
            ProgressPayload {
                percent,
                visible: true,
            },
        );
    }

    fn hide_progress(&self) {
        self.emit(
            PROGRESS_EVENT,
            ProgressPayload {
                percent: 0,
                visible: false,
            },
        );
    }
}

/// Native modal dialog asking whether to replace existing files.
pub struct DialogPrompt {
    app: tauri::AppHandle,
    gate: ModalGate,
}

impl DialogPrompt {
    pub fn new(app: tauri::AppHandle) -> Self {
        Self {
            app,
            gate: ModalGate::default(),
        }
    }
}

impl OverwritePrompt for DialogPrompt {
    async fn ask(&self, existing: &[ExistingFileInfo]) -> bool {
        let Some(_open) = self.gate.try_open() else {
            log::warn!("Overwrite prompt already open; treating as cancel");
            return false;
        };
        let (tx, rx) = oneshot::channel();
        self.app
            .dialog()
            .message(overwrite_message(existing))
            .title(OVERWRITE_TITLE)
            .kind(MessageDialogKind::Warning)
            .buttons(MessageDialogButtons::OkCancelCustom(
                REPLACE_LABEL.to_string(),
                CANCEL_LABEL.to_string(),
            ))
            .show(move |replace| {
                let _ = tx.send(replace);
            });
        await_answer(rx).await
    }
}
