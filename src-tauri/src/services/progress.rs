//! Simulated upload progress.
//!
//! A single multipart POST gives no byte-level feedback, so the bar is driven
//! by a timer: +10 every 500ms, capped at 90, forced to 100 once the response
//! arrives. The ticking task lives exactly as long as its `SimulatedProgress`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::services::view::UploadView;

/// Tick interval in milliseconds.
pub const PROGRESS_TICK_MS: u64 = 500;
/// Percentage points added per tick.
pub const PROGRESS_STEP: u8 = 10;
/// The timer never pushes the bar past this value.
pub const PROGRESS_CEILING: u8 = 90;
pub const PROGRESS_COMPLETE: u8 = 100;
/// How long the finished bar stays visible before it is hidden and reset.
pub const PROGRESS_HIDE_DELAY_MS: u64 = 1000;

/// Next timer value, or `None` once the ceiling is reached.
pub fn next_progress(current: u8) -> Option<u8> {
    if current >= PROGRESS_CEILING {
        None
    } else {
        Some(current.saturating_add(PROGRESS_STEP).min(PROGRESS_CEILING))
    }
}

pub struct SimulatedProgress {
    // Updates and view writes happen under this lock so the bar never moves backwards.
    percent: Arc<Mutex<u8>>,
    view: Arc<dyn UploadView>,
    handle: JoinHandle<()>,
}

impl SimulatedProgress {
    /// Show 0 and begin ticking.
    ///
    /// The bar may still show a previous upload's 100 when this starts.
    pub fn start(view: Arc<dyn UploadView>) -> Self {
        let percent = Arc::new(Mutex::new(0u8));
        view.set_progress(0);
        let handle = {
            let percent = percent.clone();
            let view = view.clone();
            tokio::spawn(async move {
                loop {
                    tokio::time::sleep(Duration::from_millis(PROGRESS_TICK_MS)).await;
                    let mut p = match percent.lock() {
                        Ok(p) => p,
                        Err(_) => break,
                    };
                    match next_progress(*p) {
                        Some(next) => {
                            *p = next;
                            view.set_progress(next);
                        }
                        None => break,
                    }
                }
            })
        };
        Self {
            percent,
            view,
            handle,
        }
    }

    /// Stop the timer and show 100%.
    pub fn complete(self) {
        self.handle.abort();
        let mut p = match self.percent.lock() {
            Ok(p) => p,
            Err(poisoned) => poisoned.into_inner(),
        };
        *p = PROGRESS_COMPLETE;
        self.view.set_progress(PROGRESS_COMPLETE);
    }
}

impl Drop for SimulatedProgress {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
