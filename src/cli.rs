// CLI module - command-line argument parsing and handlers
//
// With no subcommand the TUI runs. Subcommands are headless:
// - print: Write the catalog JSON to stdout
// - copy: Put the catalog JSON on the clipboard
// - parse: Turn a plain-text agenda into event JSON
// - config --show/--path/--reset: Manage the config file

use crate::catalog::Catalog;
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::{Config, VERSION};
use crate::export::export;
use crate::schedule::{parse_schedule, ScheduleOptions};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Calendar Events - copy a fixed event schedule as JSON
#[derive(Parser)]
#[command(name = "calendar-events")]
#[command(version = VERSION)]
#[command(about = "Show a conference schedule and copy it as calendar JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Print the built-in events as JSON
    Print,

    /// Copy the built-in events to the clipboard
    Copy,

    /// Parse a plain-text schedule into event JSON
    Parse {
        /// Schedule file, or "-" for stdin
        file: PathBuf,

        /// Year for the month/day headers
        #[arg(long)]
        year: Option<i32>,

        /// IANA time zone attached to every event
        #[arg(long)]
        time_zone: Option<String>,

        /// Copy the result instead of printing it
        #[arg(long)]
        copy: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long, conflicts_with_all = ["reset", "path"])]
        show: bool,

        /// Reset config file to defaults
        #[arg(long, conflicts_with = "path")]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Run a headless command
pub fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Print => handle_print(&mut std::io::stdout()),
        Commands::Copy => handle_copy(&mut SystemClipboard::for_exit()),
        Commands::Parse {
            file,
            year,
            time_zone,
            copy,
        } => {
            let options = ScheduleOptions {
                year: year.unwrap_or(config.schedule.year),
                time_zone: time_zone.unwrap_or_else(|| config.schedule.time_zone.clone()),
            };
            let text = read_input(&file)?;
            if copy {
                let mut clipboard = SystemClipboard::for_exit();
                handle_parse(&text, &options, Output::Clipboard(&mut clipboard))
            } else {
                handle_parse(&text, &options, Output::Stdout(&mut std::io::stdout()))
            }
        }
        Commands::Config { show, reset, path } => handle_config(show, reset, path),
    }
}

fn handle_print(out: &mut dyn Write) -> Result<()> {
    let json = Catalog::builtin().to_json()?;
    writeln!(out, "{}", json).context("Failed to write to stdout")
}

fn handle_copy(clipboard: &mut dyn ClipboardSink) -> Result<()> {
    let report = export(&Catalog::builtin(), clipboard)?;
    tracing::info!("Copied {} to clipboard", report.describe());
    eprintln!("✓ Copied {}", report.describe());
    Ok(())
}

enum Output<'a> {
    Stdout(&'a mut dyn Write),
    Clipboard(&'a mut dyn ClipboardSink),
}

fn handle_parse(text: &str, options: &ScheduleOptions, output: Output<'_>) -> Result<()> {
    let events = parse_schedule(text, options)?;
    let catalog = Catalog::from_slice(&events);
    if catalog.is_empty() {
        tracing::warn!("No events found; is there a month header like \"February 17:\"?");
    }

    match output {
        Output::Stdout(out) => {
            writeln!(out, "{}", catalog.to_json()?).context("Failed to write to stdout")
        }
        Output::Clipboard(clipboard) => {
            let report = export(&catalog, clipboard)?;
            eprintln!("✓ Copied {}", report.describe());
            Ok(())
        }
    }
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read schedule from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read schedule {}", file.display()))
    }
}

/// Config subcommand; never loads the config first, so a broken file can be reset
pub fn handle_config(show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else {
        // No flag provided, show help
        println!("Usage: calendar-events config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::write_template(&path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::{BrokenClipboard, MemoryClipboard};

    #[test]
    fn no_subcommand_runs_tui() {
        let cli = Cli::try_parse_from(["calendar-events"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn parse_flags_are_read() {
        let cli = Cli::try_parse_from([
            "calendar-events",
            "parse",
            "agenda.txt",
            "--year",
            "2026",
            "--time-zone",
            "Europe/Paris",
            "--copy",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Parse {
                file: PathBuf::from("agenda.txt"),
                year: Some(2026),
                time_zone: Some("Europe/Paris".to_string()),
                copy: true,
            })
        );
    }

    #[test]
    fn conflicting_config_flags_are_rejected() {
        assert!(Cli::try_parse_from(["calendar-events", "config", "--show", "--reset"]).is_err());
        assert!(Cli::try_parse_from(["calendar-events", "config", "--reset", "--path"]).is_err());
        assert!(Cli::try_parse_from(["calendar-events", "config", "--path"]).is_ok());
    }

    #[test]
    fn print_writes_catalog_with_trailing_newline() {
        let mut out = Vec::new();
        handle_print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{}\n", Catalog::builtin().to_json().unwrap()));
    }

    #[test]
    fn copy_uses_the_clipboard() {
        let mut memory = MemoryClipboard::default();
        handle_copy(&mut memory).unwrap();
        assert_eq!(memory.last(), Catalog::builtin().to_json().ok());

        assert!(handle_copy(&mut BrokenClipboard).is_err());
    }

    #[test]
    fn parse_prints_events() {
        let mut out = Vec::new();
        let text = "February 17:\nStaff Dinner 6:00 PM\n";
        handle_parse(text, &ScheduleOptions::default(), Output::Stdout(&mut out)).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[0]["summary"], "Staff Dinner");
        assert_eq!(json[0]["start"]["dateTime"], "2025-02-17T18:00:00");
    }

    #[test]
    fn parse_can_copy() {
        let mut memory = MemoryClipboard::default();
        let text = "February 17:\nStaff Dinner 6:00 PM\n";
        handle_parse(
            text,
            &ScheduleOptions::default(),
            Output::Clipboard(&mut memory),
        )
        .unwrap();
        assert!(memory.last().unwrap().contains("\"Staff Dinner\""));
    }
}
