//! Clipboard export of an event catalog

use crate::catalog::Catalog;
use crate::clipboard::ClipboardSink;
use anyhow::{Context, Result};

/// What a successful export wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportReport {
    /// Number of event records in the payload
    pub events: usize,
    /// Payload size in bytes
    pub bytes: usize,
}

impl ExportReport {
    /// One-line summary for logs and CLI output
    pub fn describe(&self) -> String {
        format!("{} events ({} bytes)", self.events, self.bytes)
    }
}

/// Serialize the catalog and hand the text to the clipboard
///
/// Errors from the clipboard are returned to the caller, never swallowed.
pub fn export(catalog: &Catalog<'_>, clipboard: &mut dyn ClipboardSink) -> Result<ExportReport> {
    let json = catalog.to_json()?;
    clipboard
        .set_text(&json)
        .context("Clipboard rejected the event export")?;

    Ok(ExportReport {
        events: catalog.len(),
        bytes: json.len(),
    })
}
