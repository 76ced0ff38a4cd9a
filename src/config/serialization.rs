//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render this config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# calendar-events configuration

# Theme: dark, light (press 't' in the TUI to cycle)
theme = "{theme}"

# How long the copy button shows "Copied!" (milliseconds)
feedback_ms = {feedback_ms}

# Defaults for `calendar-events parse`
[schedule]
year = {year}
time_zone = "{time_zone}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = toml_str(&self.theme),
            feedback_ms = self.feedback_ms,
            year = self.schedule.year,
            time_zone = toml_str(&self.schedule.time_zone),
            log_level = toml_str(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_str(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_str(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for the inside of a basic TOML string
///
/// Windows paths bring backslashes; env-supplied names can bring anything.
fn toml_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
