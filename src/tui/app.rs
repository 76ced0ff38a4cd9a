// TUI application state
//
// Owns the events card, the "Copied!" feedback flag, the clipboard and the
// transient overlays. Every mutation happens on the event loop; the only
// background work is the feedback reset task, which reports back through
// `UiMessage`.

use super::components::events_card::EventsCard;
use super::components::toast::{Toast, ToastKind};
use super::feedback::CopyFeedback;
use super::theme::{Theme, ThemeKind};
use super::UiMessage;
use crate::catalog::Catalog;
use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::export::{export, ExportReport};
use crate::logging::LogBuffer;
use anyhow::Result;
use tokio::sync::mpsc;

/// Main application state for the TUI
pub struct App {
    pub card: EventsCard,
    pub feedback: CopyFeedback,
    clipboard: Box<dyn ClipboardSink>,

    /// Active toast notification (auto-dismisses)
    pub toast: Option<Toast>,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Captured log lines; the status bar shows the newest
    pub log_buffer: LogBuffer,

    /// Should the app quit?
    pub should_quit: bool,
}

impl App {
    /// Create app state from loaded configuration
    pub fn with_config(
        config: &Config,
        catalog: Catalog<'static>,
        clipboard: Box<dyn ClipboardSink>,
        log_buffer: LogBuffer,
        tx: mpsc::UnboundedSender<UiMessage>,
    ) -> Self {
        let theme_kind = config.theme_kind();
        Self {
            card: EventsCard::new(catalog),
            feedback: CopyFeedback::new(config.feedback_delay(), tx),
            clipboard,
            toast: None,
            theme_kind,
            theme: theme_kind.theme(),
            log_buffer,
            should_quit: false,
        }
    }

    /// Export the catalog and flip the button to "Copied!"
    ///
    /// On failure the button is left as it was and a toast reports the error.
    pub fn copy_events(&mut self) -> Result<ExportReport> {
        match export(self.card.catalog(), self.clipboard.as_mut()) {
            Ok(report) => {
                self.feedback.trigger();
                tracing::info!("Copied {} to clipboard", report.describe());
                Ok(report)
            }
            Err(e) => {
                tracing::warn!("Copy failed: {:#}", e);
                self.toast = Some(Toast::new("✗ Copy failed", ToastKind::Error));
                Err(e)
            }
        }
    }

    /// Apply a message posted by a background task
    pub fn handle_message(&mut self, message: UiMessage) {
        match message {
            UiMessage::FeedbackExpired { generation } => {
                if self.feedback.expire(generation) {
                    tracing::debug!("Copy feedback cleared");
                }
            }
        }
    }

    /// Periodic housekeeping, called on every tick
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Switch to the next theme
    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        self.toast = Some(Toast::new(
            format!("Theme: {}", self.theme_kind.name()),
            ToastKind::Info,
        ));
    }

    /// Tear down background work before the runtime goes away
    pub fn shutdown(&mut self) {
        self.feedback.cancel();
    }
}
