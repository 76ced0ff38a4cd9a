// Calendar Events - a conference schedule you can copy as calendar JSON
//
// Shows a fixed catalog of events in a terminal card with a copy button.
// Copying puts the catalog on the system clipboard as a JSON array and the
// button says "Copied!" for a couple of seconds.
//
// Architecture:
// - Catalog: The built-in event records and their JSON form
// - Export: Catalog → clipboard through the ClipboardSink seam
// - Schedule: Plain-text agenda → event records (parse command)
// - TUI (ratatui): The card, copy feedback, toasts, status bar
// - CLI (clap): Headless print/copy/parse/config commands

mod catalog;
mod cli;
mod clipboard;
mod config;
mod export;
mod logging;
mod schedule;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::{LogBuffer, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Config commands must work even when the file is broken
        Some(Commands::Config { show, reset, path }) => cli::handle_config(show, reset, path),
        command => run(command).await,
    }
}

async fn run(command: Option<Commands>) -> Result<()> {
    // Create config template on first run (helps users discover options)
    let template = Config::ensure_config_exists();
    let config = Config::from_env()?;

    // The TUI owns the terminal, so its logs go to a buffer instead of stderr
    let log_buffer = LogBuffer::new();
    let sink = if command.is_none() {
        LogSink::Buffer
    } else {
        LogSink::Stderr
    };
    // Keep the guard alive so file logs flush on exit
    let _log_guard = logging::init(&config.logging, sink, &log_buffer);

    // Config is optional: a read-only home directory is not an error
    match template {
        Ok(Some(path)) => tracing::info!("Created config template at {}", path.display()),
        Ok(None) => {}
        Err(e) => tracing::debug!("Could not create config template: {:#}", e),
    }

    tracing::debug!(
        theme = %config.theme,
        feedback_ms = config.feedback_ms,
        "calendar-events {} starting",
        config::VERSION
    );

    match command {
        None => tui::run_tui(config, log_buffer).await,
        Some(command) => cli::run(command, &config),
    }
}
