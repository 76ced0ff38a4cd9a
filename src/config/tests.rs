//! Configuration tests
//!
//! The TOML template and the deserialization layer must agree: when a field
//! is added to `Config`, the round-trip tests fail until `to_toml` and
//! `FileConfig` are both updated.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the generated template parses back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

/// Every value written by `to_toml` comes back unchanged.
#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.theme = "light".to_string();
    config.feedback_ms = 750;
    config.schedule.year = 2026;
    config.schedule.time_zone = "Europe/Berlin".to_string();
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_dir = "/tmp/calendar-logs".into();
    config.logging.file_rotation = LogRotation::Hourly;
    config.logging.file_prefix = "agenda".to_string();

    let file = Config::parse_file_config(&config.to_toml()).expect("template parses");
    let loaded = Config::from_sources(file, no_env);

    assert_eq!(loaded.theme, "light");
    assert_eq!(loaded.feedback_ms, 750);
    assert_eq!(loaded.schedule.year, 2026);
    assert_eq!(loaded.schedule.time_zone, "Europe/Berlin");
    assert_eq!(loaded.logging.level, "debug");
    assert!(loaded.logging.file_enabled);
    assert_eq!(
        loaded.logging.file_dir,
        std::path::PathBuf::from("/tmp/calendar-logs")
    );
    assert_eq!(loaded.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(loaded.logging.file_prefix, "agenda");
}

/// Quotes and backslashes in string values must not break the file.
#[test]
fn test_config_roundtrip_escapes_strings() {
    let mut config = Config::default();
    config.theme = r#"my "dark" \ theme"#.to_string();
    config.schedule.time_zone = "Etc\\Odd\nZone".to_string();
    config.logging.file_dir = r"C:\Users\me\logs".into();
    config.logging.file_prefix = "a\"b".to_string();

    let file = Config::parse_file_config(&config.to_toml()).expect("template parses");
    let loaded = Config::from_sources(file, no_env);

    assert_eq!(loaded.theme, config.theme);
    assert_eq!(loaded.schedule.time_zone, config.schedule.time_zone);
    assert_eq!(loaded.logging.file_dir, config.logging.file_dir);
    assert_eq!(loaded.logging.file_prefix, config.logging.file_prefix);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_gives_defaults() {
    let file = Config::parse_file_config("").expect("empty file is valid");
    let config = Config::from_sources(file, no_env);

    assert_eq!(config.theme, "dark");
    assert_eq!(config.feedback_ms, 2000);
    assert_eq!(config.feedback_delay(), Duration::from_millis(2000));
    assert_eq!(config.schedule, ScheduleOptions::default());
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config("theme = \"light\"\nfeedback_ms = 500\n").unwrap();
    let env: HashMap<&str, &str> = [
        ("CALENDAR_EVENTS_THEME", "dark"),
        ("CALENDAR_EVENTS_FEEDBACK_MS", "3000"),
    ]
    .into_iter()
    .collect();

    let config = Config::from_sources(file, |k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.theme, "dark");
    assert_eq!(config.feedback_ms, 3000);
}

#[test]
fn test_unparseable_env_delay_falls_back_to_file() {
    let file = Config::parse_file_config("feedback_ms = 500\n").unwrap();
    let config = Config::from_sources(file, |k| {
        (k == "CALENDAR_EVENTS_FEEDBACK_MS").then(|| "soon".to_string())
    });

    assert_eq!(config.feedback_ms, 500);
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let file = Config::parse_file_config(
        "[schedule]\nyear = 2030\n\n[logging]\nfile_rotation = \"never\"\n",
    )
    .unwrap();
    let config = Config::from_sources(file, no_env);

    assert_eq!(config.schedule.year, 2030);
    assert_eq!(config.schedule.time_zone, "America/New_York");
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
    assert_eq!(config.logging.file_prefix, "calendar-events");
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(Config::parse_file_config("theme = [").is_err());
    assert!(Config::parse_file_config("feedback_ms = \"fast\"").is_err());
}

#[test]
fn test_unknown_rotation_is_an_error() {
    let err = Config::parse_file_config("[logging]\nfile_rotation = \"weekly\"\n");
    assert!(err.is_err());
}

#[test]
fn test_theme_kind_resolves_name() {
    let mut config = Config::default();
    assert_eq!(config.theme_kind(), ThemeKind::Dark);
    config.theme = "light".to_string();
    assert_eq!(config.theme_kind(), ThemeKind::Light);
}

#[test]
fn test_write_template_creates_parent_dirs() {
    let dir = std::env::temp_dir().join(format!("calendar-events-test-{}", std::process::id()));
    let path = dir.join("nested").join("config.toml");

    Config::write_template(&path).expect("template written");
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("feedback_ms = 2000"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_template_created_once() {
    let dir = std::env::temp_dir().join(format!(
        "calendar-events-once-test-{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("config.toml");

    assert!(Config::create_template_if_missing(&path).expect("first run writes"));
    std::fs::write(&path, "theme = \"light\"\n").unwrap();
    assert!(!Config::create_template_if_missing(&path).expect("second run is a no-op"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "theme = \"light\"\n"
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_template_failure_is_reported() {
    let dir = std::env::temp_dir().join(format!(
        "calendar-events-blocked-test-{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    // A file where the parent directory should be
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, "").unwrap();

    assert!(Config::create_template_if_missing(&blocker.join("config.toml")).is_err());

    let _ = std::fs::remove_dir_all(&dir);
}
