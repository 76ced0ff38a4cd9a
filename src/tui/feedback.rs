//! "Copied!" feedback flag with a cancellable reset
//!
//! Setting the flag spawns a one-shot task that sleeps for the configured
//! delay and then posts `UiMessage::FeedbackExpired` to the event loop. The
//! flag itself is only touched on the loop, so no locking is needed.
//!
//! Retrigger policy: a new trigger aborts the pending reset and starts a
//! fresh window. The flag clears one full delay after the *last* trigger.
//! Each trigger bumps a generation counter so a message that was already in
//! flight when the task got aborted is ignored.

use super::UiMessage;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// How long the "Copied!" label stays up
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

pub struct CopyFeedback {
    copied: bool,
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<UiMessage>,
}

impl CopyFeedback {
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<UiMessage>) -> Self {
        Self {
            copied: false,
            delay,
            generation: 0,
            pending: None,
            tx,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Label for the trigger control
    pub fn label(&self) -> &'static str {
        if self.copied {
            "Copied!"
        } else {
            "Copy JSON"
        }
    }

    /// Set the flag and (re)schedule its reset
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger(&mut self) {
        self.cancel_pending();
        self.copied = true;
        self.generation = self.generation.wrapping_add(1);

        let generation = self.generation;
        let delay = self.delay;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI is shutting down
            let _ = tx.send(UiMessage::FeedbackExpired { generation });
        }));
        tracing::trace!(generation, ?delay, "copy feedback scheduled");
    }

    /// Apply an expiry message. Returns true if the flag changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.copied {
            tracing::trace!(generation, current = self.generation, "stale feedback reset");
            return false;
        }
        self.copied = false;
        self.pending = None;
        true
    }

    /// Drop any scheduled reset and clear the flag
    pub fn cancel(&mut self) {
        self.cancel_pending();
        self.copied = false;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for CopyFeedback {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
