//! Clipboard helper for copying text to the system clipboard
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//!
//! On X11 and Wayland the copying process serves the contents itself: text
//! stays pasteable only while an `arboard::Clipboard` is alive (unless a
//! clipboard manager takes it over). So the handle is opened once and kept:
//! - the TUI keeps it for as long as the `App` lives;
//! - headless commands exit right after copying, so on Linux they block in
//!   `SetExtLinux::wait` until another program takes ownership.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Destination for exported text
///
/// The TUI and the headless `copy` command both write through this seam so
/// export logic can be exercised without a display server.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// How long the written contents must outlive the write call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Served while this `SystemClipboard` is alive
    KeepWhileOpen,
    /// Block until another program replaces the contents (Linux only)
    WaitUntilReplaced,
}

/// The OS clipboard
///
/// The underlying handle is opened on first write and then reused.
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
    ownership: Ownership,
}

impl SystemClipboard {
    /// For a long-running process that owns this value (the TUI)
    pub fn for_session() -> Self {
        Self {
            clipboard: None,
            ownership: Ownership::KeepWhileOpen,
        }
    }

    /// For a process that exits right after copying
    pub fn for_exit() -> Self {
        let ownership = if cfg!(target_os = "linux") {
            Ownership::WaitUntilReplaced
        } else {
            Ownership::KeepWhileOpen
        };
        Self {
            clipboard: None,
            ownership,
        }
    }
}

/// Store `text`, honoring the requested ownership
#[cfg(target_os = "linux")]
fn write(clipboard: &mut Clipboard, text: &str, ownership: Ownership) -> Result<()> {
    use arboard::SetExtLinux;

    match ownership {
        Ownership::KeepWhileOpen => clipboard.set_text(text),
        Ownership::WaitUntilReplaced => {
            tracing::info!("Holding clipboard contents until another program replaces them");
            clipboard.set().wait().text(text)
        }
    }
    .context("Failed to set clipboard text")
}

#[cfg(not(target_os = "linux"))]
fn write(clipboard: &mut Clipboard, text: &str, _ownership: Ownership) -> Result<()> {
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")
}

impl ClipboardSink for SystemClipboard {
    /// Common failure cases: no display server (headless Linux), permission denied.
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().context("Failed to access clipboard")?,
        };
        let clipboard = self.clipboard.insert(clipboard);

        let result = write(clipboard, text, self.ownership);
        if result.is_err() {
            // Reopen on the next attempt; the display connection may have gone away
            self.clipboard = None;
        }
        result
    }
}
