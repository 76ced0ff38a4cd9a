//! Plain-text schedule parser
//!
//! Turns an agenda like
//!
//! ```text
//! February 17:
//! GS Setup 7:00 AM - 10:00 PM
//! Staff Dinner (6:00 PM)
//! ```
//!
//! into `EventRecord`s with the same JSON shape as the built-in catalog.
//! Month headers set the current day; every later line with a 12-hour time
//! becomes one event. Lines before the first header are ignored.

use crate::catalog::{EventRecord, EventTime, DEFAULT_TIME_ZONE};
use anyhow::{anyhow, Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Year and zone applied to every parsed event
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOptions {
    /// Headers carry no year, so one is supplied
    pub year: i32,
    pub time_zone: String,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            year: 2025,
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }
}

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn date_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^(January|February|March|April|May|June|July|August|September|October|November|December)\s+(\d{1,2})(?::|$)",
        )
        .expect("date header pattern is valid")
    })
}

fn time_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{1,2}):(\d{2})\s*(AM|PM|am|pm)").expect("time pattern is valid")
    })
}

fn month_number(name: &str) -> u32 {
    match name.to_ascii_lowercase().as_str() {
        "january" => 1,
        "february" => 2,
        "march" => 3,
        "april" => 4,
        "may" => 5,
        "june" => 6,
        "july" => 7,
        "august" => 8,
        "september" => 9,
        "october" => 10,
        "november" => 11,
        _ => 12,
    }
}

/// 12-hour clock to `NaiveTime`; `None` when out of range after conversion
fn clock_time(hour: u32, minute: u32, meridian: &str) -> Option<NaiveTime> {
    let hour = match (meridian.eq_ignore_ascii_case("pm"), hour) {
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, 12) => 0,
        (false, h) => h,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Strip one trailing `(` or `-` left behind by "Title (7:00 PM)" or "Title - 7:00 PM"
fn clean_summary(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_suffix('(').or_else(|| trimmed.strip_suffix('-')) {
        Some(rest) => rest.trim(),
        None => trimmed,
    }
}

/// Parse schedule text into events, in input order
///
/// Fails on impossible calendar dates ("February 30") or clock times
/// ("13:00 PM"), naming the 1-based line number.
pub fn parse_schedule(text: &str, options: &ScheduleOptions) -> Result<Vec<EventRecord>> {
    let mut events = Vec::new();
    let mut current_date: Option<NaiveDate> = None;

    for (index, raw_line) in text.trim().lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = date_header().captures(line) {
            let month = month_number(&caps[1]);
            let day: u32 = caps[2].parse().context("day is numeric")?;
            let date = NaiveDate::from_ymd_opt(options.year, month, day).ok_or_else(|| {
                anyhow!("line {}: {} {} is not a valid date", line_no, &caps[1], day)
            })?;
            tracing::trace!(line = line_no, %date, "schedule day header");
            current_date = Some(date);
            continue;
        }

        let Some(date) = current_date else {
            continue;
        };

        let mut times = Vec::with_capacity(2);
        for caps in time_token().captures_iter(line).take(2) {
            let hour: u32 = caps[1].parse().context("hour is numeric")?;
            let minute: u32 = caps[2].parse().context("minute is numeric")?;
            let time = clock_time(hour, minute, &caps[3])
                .ok_or_else(|| anyhow!("line {}: {} is not a valid time", line_no, &caps[0]))?;
            times.push(NaiveDateTime::new(date, time));
        }

        let Some(&start) = times.first() else {
            continue;
        };
        let end = times.get(1).copied().unwrap_or(start + Duration::hours(1));

        let summary_end = time_token()
            .find(line)
            .map(|m| m.start())
            .unwrap_or(line.len());
        let summary = clean_summary(&line[..summary_end]);

        events.push(EventRecord {
            summary: Cow::Owned(summary.to_string()),
            description: None,
            start: EventTime::new(
                start.format(DATE_TIME_FORMAT).to_string(),
                options.time_zone.clone(),
            ),
            end: EventTime::new(
                end.format(DATE_TIME_FORMAT).to_string(),
                options.time_zone.clone(),
            ),
        });
    }

    tracing::debug!(count = events.len(), "parsed schedule");
    Ok(events)
}
