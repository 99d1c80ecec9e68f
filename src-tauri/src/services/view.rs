//! Presentation seam between the controller and whatever renders the form.
//!
//! The desktop shell implements this by emitting events to the webview
//! (`commands::view::WindowView`); tests implement it by recording calls.

use crate::models::upload::MessageKind;

/// Label of the submit button while idle.
pub const IDLE_BUTTON_LABEL: &str = "Upload Files";
/// Label of the submit button while an upload is in flight.
pub const BUSY_BUTTON_LABEL: &str = "Uploading...";

pub trait UploadView: Send + Sync {
    /// Replace the selection list. An empty slice clears it.
    fn show_selection(&self, lines: &[String]);

    fn show_message(&self, text: &str, kind: MessageKind);

    fn show_details(&self, text: &str, kind: MessageKind);

    /// Disable (busy) or re-enable the submit button and set its label.
    fn set_busy(&self, busy: bool, label: &str);

    /// Show the progress bar at `percent`.
    fn set_progress(&self, percent: u8);

    /// Hide the progress bar and reset it to zero.
    fn hide_progress(&self);
}
