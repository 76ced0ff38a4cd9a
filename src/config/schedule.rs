//! `[schedule]` section: defaults for parsing plain-text agendas

use crate::schedule::ScheduleOptions;
use serde::Deserialize;

/// Schedule settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSchedule {
    pub year: Option<i32>,
    pub time_zone: Option<String>,
}

impl ScheduleOptions {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileSchedule>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            year: file.year.unwrap_or(defaults.year),
            time_zone: file.time_zone.unwrap_or(defaults.time_zone),
        }
    }
}
