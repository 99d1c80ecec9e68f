//! Overwrite confirmation.
//!
//! The prompt itself is modal and owned by the shell; this module decides when
//! to show it and what it says.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::oneshot;

use crate::models::upload::ExistingFileInfo;

pub const OVERWRITE_TITLE: &str = "Warning: Files Already Exist";
pub const REPLACE_LABEL: &str = "Replace";
pub const CANCEL_LABEL: &str = "Cancel";

/// Blocking yes/no prompt listing files that would be replaced.
///
/// `ask` resolves exactly once: `true` for Replace, `false` for Cancel.
pub trait OverwritePrompt: Send + Sync {
    fn ask(&self, existing: &[ExistingFileInfo]) -> impl Future<Output = bool> + Send;
}

/// Ask before replacing files. Nothing is shown when there is nothing to replace.
pub async fn confirm_overwrite<P: OverwritePrompt>(
    prompt: &P,
    existing: &[ExistingFileInfo],
) -> bool {
    if existing.is_empty() {
        return true;
    }
    prompt.ask(existing).await
}

/// Body text of the prompt.
pub fn overwrite_message(existing: &[ExistingFileInfo]) -> String {
    let mut text = String::from("The following files already exist:\n");
    for file in existing {
        text.push_str(&format!(
            "\u{2022} {} (Last modified: {})\n",
            file.file_name, file.updated_at
        ));
    }
    text.push_str("\nDo you want to replace these files?");
    text
}

/// Wait for the prompt's answer. A prompt torn down without answering counts as Cancel.
pub async fn await_answer(rx: oneshot::Receiver<bool>) -> bool {
    rx.await.unwrap_or(false)
}

/// Keeps at most one prompt open at a time.
#[derive(Debug, Default)]
pub struct ModalGate {
    open: AtomicBool,
}

impl ModalGate {
    pub fn try_open(&self) -> Option<ModalGuard<'_>> {
        self.open
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ModalGuard { gate: self })
    }
}

/// Marks the prompt closed when dropped, whatever the outcome.
pub struct ModalGuard<'a> {
    gate: &'a ModalGate,
}

impl Drop for ModalGuard<'_> {
    fn drop(&mut self) {
        self.gate.open.store(false, Ordering::Release);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::OverwritePrompt;
    use crate::models::upload::ExistingFileInfo;

    /// Answers every prompt with a fixed choice and records what was shown.
    pub struct ScriptedPrompt {
        answer: bool,
        pub shown: Mutex<Vec<Vec<ExistingFileInfo>>>,
    }

    impl ScriptedPrompt {
        pub fn replace() -> Self {
            Self {
                answer: true,
                shown: Mutex::new(Vec::new()),
            }
        }

        pub fn cancel() -> Self {
            Self {
                answer: false,
                shown: Mutex::new(Vec::new()),
            }
        }

        pub fn times_shown(&self) -> usize {
            self.shown.lock().unwrap().len()
        }
    }

    impl OverwritePrompt for ScriptedPrompt {
        async fn ask(&self, existing: &[ExistingFileInfo]) -> bool {
            self.shown.lock().unwrap().push(existing.to_vec());
            self.answer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedPrompt;
    use super::*;

    fn existing(name: &str, at: &str) -> ExistingFileInfo {
        ExistingFileInfo {
            file_name: name.into(),
            updated_at: at.into(),
        }
    }

    #[tokio::test]
    async fn test_empty_resolves_true_without_prompt() {
        let prompt = ScriptedPrompt::cancel();
        assert!(confirm_overwrite(&prompt, &[]).await);
        assert_eq!(prompt.times_shown(), 0);
    }

    #[tokio::test]
    async fn test_replace_resolves_true_and_shows_all() {
        let prompt = ScriptedPrompt::replace();
        let files = vec![existing("lib.aar", "t1"), existing("lib.pom", "t2")];
        assert!(confirm_overwrite(&prompt, &files).await);
        assert_eq!(*prompt.shown.lock().unwrap(), vec![files]);
    }

    #[tokio::test]
    async fn test_cancel_resolves_false() {
        let prompt = ScriptedPrompt::cancel();
        assert!(!confirm_overwrite(&prompt, &[existing("lib.pom", "t")]).await);
        assert_eq!(prompt.times_shown(), 1);
    }

    #[test]
    fn test_overwrite_message_lists_every_file() {
        let text = overwrite_message(&[
            existing("lib.aar", "Tue, 01 Oct 2024 10:00:00 GMT"),
            existing("lib.pom", "unknown"),
        ]);
        assert!(text.starts_with("The following files already exist:"));
        assert!(text.contains("lib.aar (Last modified: Tue, 01 Oct 2024 10:00:00 GMT)"));
        assert!(text.contains("lib.pom (Last modified: unknown)"));
        assert!(text.ends_with("Do you want to replace these files?"));
    }

    #[tokio::test]
    async fn test_await_answer_passes_choice_through() {
        let (tx, rx) = oneshot::channel();
        tx.send(true).unwrap();
        assert!(await_answer(rx).await);
    }

    #[tokio::test]
    async fn test_await_answer_dropped_sender_is_cancel() {
        let (tx, rx) = oneshot::channel::<bool>();
        drop(tx);
        assert!(!await_answer(rx).await);
    }

    #[test]
    fn test_modal_gate_single_instance() {
        let gate = ModalGate::default();
        let guard = gate.try_open();
        assert!(guard.is_some());
        assert!(gate.open.load(Ordering::Acquire));
        assert!(gate.try_open().is_none());
        drop(guard);
        assert!(!gate.open.load(Ordering::Acquire));
        assert!(gate.try_open().is_some());
    }
}
