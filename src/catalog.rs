//! Event catalog - the fixed batch of calendar events shipped in the binary
//!
//! Records serialize to the shape calendar batch-creation tools expect:
//!
//! ```text
//! { "summary": "...", "description": "...",
//!   "start": { "dateTime": "2025-02-17T07:00:00", "timeZone": "America/New_York" },
//!   "end":   { "dateTime": "2025-02-17T22:00:00", "timeZone": "America/New_York" } }
//! ```
//!
//! Order in the table is display order. Nothing sorts or validates it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Timezone used by every record in the built-in table
pub const DEFAULT_TIME_ZONE: &str = "America/New_York";

/// Local wall-clock time paired with an IANA zone id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    /// `YYYY-MM-DDTHH:MM:SS`, no UTC offset
    pub date_time: Cow<'static, str>,
    pub time_zone: Cow<'static, str>,
}

impl EventTime {
    pub fn new(date_time: impl Into<Cow<'static, str>>, time_zone: impl Into<Cow<'static, str>>) -> Self {
        Self {
            date_time: date_time.into(),
            time_zone: time_zone.into(),
        }
    }

    const fn eastern(date_time: &'static str) -> Self {
        Self {
            date_time: Cow::Borrowed(date_time),
            time_zone: Cow::Borrowed(DEFAULT_TIME_ZONE),
        }
    }
}

/// One calendar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub summary: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Cow<'static, str>>,
    pub start: EventTime,
    pub end: EventTime,
}

impl EventRecord {
    const fn timed(summary: &'static str, start: &'static str, end: &'static str) -> Self {
        Self {
            summary: Cow::Borrowed(summary),
            description: None,
            start: EventTime::eastern(start),
            end: EventTime::eastern(end),
        }
    }

    const fn described(
        summary: &'static str,
        description: &'static str,
        start: &'static str,
        end: &'static str,
    ) -> Self {
        Self {
            summary: Cow::Borrowed(summary),
            description: Some(Cow::Borrowed(description)),
            start: EventTime::eastern(start),
            end: EventTime::eastern(end),
        }
    }
}

static BUILTIN_EVENTS: [EventRecord; 27] = [
    // February 17
    EventRecord::timed("GS Setup", "2025-02-17T07:00:00", "2025-02-17T22:00:00"),
    EventRecord::timed(
        "Get bottled water and snacks to AV Team",
        "2025-02-17T08:00:00",
        "2025-02-17T09:00:00",
    ),
    EventRecord::timed(
        "Setup power strips and extension cords in Conference Services Desk and Staff Office",
        "2025-02-17T08:00:00",
        "2025-02-17T12:00:00",
    ),
    EventRecord::timed(
        "Envirographics Install",
        "2025-02-17T08:00:00",
        "2025-02-17T17:00:00",
    ),
    EventRecord::timed(
        "KA Connect Setup (hanging sign, carpet, floor signs)",
        "2025-02-17T09:30:00",
        "2025-02-17T10:30:00",
    ),
    EventRecord::timed(
        "Staff Dinner for 36 (Please let me know if you can't attend)",
        "2025-02-17T18:00:00",
        "2025-02-17T20:00:00",
    ),
    // February 18
    EventRecord::timed(
        "Setup power strips and extension cords in Exec Office",
        "2025-02-18T08:00:00",
        "2025-02-18T12:00:00",
    ),
    EventRecord::timed(
        "Staff Lunch and Staff Meeting",
        "2025-02-18T12:00:00",
        "2025-02-18T13:00:00",
    ),
    EventRecord::timed(
        "Staff Picture, Tour of Space, and Conference Check-In",
        "2025-02-18T13:00:00",
        "2025-02-18T13:30:00",
    ),
    EventRecord::timed(
        "Confirm that speaker tables (from Orchestrate) are in Cypress 3 and Royal",
        "2025-02-18T15:00:00",
        "2025-02-18T15:30:00",
    ),
    EventRecord::timed("Prayer Walk", "2025-02-18T15:30:00", "2025-02-18T16:00:00"),
    EventRecord::timed("Staff Dinner", "2025-02-18T17:00:00", "2025-02-18T17:45:00"),
    EventRecord::timed(
        "First-Time Attendee Team Meeting",
        "2025-02-18T17:45:00",
        "2025-02-18T18:30:00",
    ),
    EventRecord::described(
        "App Support",
        "Please be proactive in going through the line to make sure that everyone has the app open before checking in and to see if anyone has any issues",
        "2025-02-18T18:30:00",
        "2025-02-18T20:00:00",
    ),
    // February 19
    EventRecord::timed(
        "KA Staff Meeting and Prayer",
        "2025-02-19T06:45:00",
        "2025-02-19T07:00:00",
    ),
    EventRecord::timed(
        "Provide Audio for Exhibitor Meeting",
        "2025-02-19T09:30:00",
        "2025-02-19T10:30:00",
    ),
    EventRecord::timed(
        "Run AV (sound and mics only) for Women's CG meeting",
        "2025-02-19T14:45:00",
        "2025-02-19T15:30:00",
    ),
    EventRecord::timed(
        "Provide Audio for Women's Meetup",
        "2025-02-19T15:00:00",
        "2025-02-19T15:30:00",
    ),
    EventRecord::timed(
        "Walk Yellow Couch Participants to Taping",
        "2025-02-19T16:30:00",
        "2025-02-19T17:00:00",
    ),
    EventRecord::timed(
        "GS2: Make sure doors are locked",
        "2025-02-19T17:00:00",
        "2025-02-19T17:45:00",
    ),
    EventRecord::timed(
        "Production Crew Dinner (GS Crew)",
        "2025-02-19T17:45:00",
        "2025-02-19T18:45:00",
    ),
    // February 20
    EventRecord::timed(
        "Staff Meeting and Prayer",
        "2025-02-20T06:30:00",
        "2025-02-20T06:40:00",
    ),
    EventRecord::timed(
        "Collect Wow! Packages leftover",
        "2025-02-20T10:00:00",
        "2025-02-20T10:30:00",
    ),
    EventRecord::timed(
        "Escort Kitces to Super Breakout (Royal)",
        "2025-02-20T10:00:00",
        "2025-02-20T10:05:00",
    ),
    EventRecord::timed(
        "Provide audio for Emerging Advisors Meetup",
        "2025-02-20T16:15:00",
        "2025-02-20T16:45:00",
    ),
    EventRecord::timed(
        "GS2: Make sure doors are locked",
        "2025-02-20T17:00:00",
        "2025-02-20T17:45:00",
    ),
    // February 21
    EventRecord::described(
        "Line up along Main Hallway between Mag Lawn and Cypress Atrium to wave goodbye",
        "We may move this location onsite (Only if you are available)",
        "2025-02-21T12:00:00",
        "2025-02-21T12:15:00",
    ),
];

/// Read-only ordered view over a set of event records
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    events: &'a [EventRecord],
}

impl Catalog<'static> {
    /// The table compiled into the binary
    pub fn builtin() -> Self {
        Self {
            events: &BUILTIN_EVENTS,
        }
    }
}

impl<'a> Catalog<'a> {
    /// Wrap an arbitrary slice (e.g. records produced by the schedule parser)
    pub fn from_slice(events: &'a [EventRecord]) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &'a [EventRecord] {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Canonical text form: JSON array, 2-space indent
    ///
    /// Both the clipboard export and the on-screen block use this, so the
    /// two are always byte-identical.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self.events).context("Failed to serialize event catalog")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn builtin_has_27_records_in_authored_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 27);
        assert_eq!(catalog.events()[0].summary, "GS Setup");
        assert_eq!(catalog.events()[13].summary, "App Support");
        assert_eq!(
            catalog.events()[26].summary,
            "Line up along Main Hallway between Mag Lawn and Cypress Atrium to wave goodbye"
        );
    }

    #[test]
    fn exactly_two_records_carry_a_description() {
        let described: Vec<_> = Catalog::builtin()
            .events()
            .iter()
            .filter(|e| e.description.is_some())
            .map(|e| e.summary.as_ref())
            .collect();
        assert_eq!(
            described,
            vec![
                "App Support",
                "Line up along Main Hallway between Mag Lawn and Cypress Atrium to wave goodbye"
            ]
        );
    }

    #[test]
    fn every_record_starts_before_it_ends() {
        for event in Catalog::builtin().events() {
            let start = NaiveDateTime::parse_from_str(&event.start.date_time, "%Y-%m-%dT%H:%M:%S")
                .expect("start parses");
            let end = NaiveDateTime::parse_from_str(&event.end.date_time, "%Y-%m-%dT%H:%M:%S")
                .expect("end parses");
            assert!(start <= end, "{} ends before it starts", event.summary);
        }
    }

    #[test]
    fn json_round_trips_to_the_same_records() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json().unwrap();
        let parsed: Vec<EventRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_slice(), catalog.events());
    }

    #[test]
    fn every_exported_object_uses_new_york_time() {
        let json = Catalog::builtin().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().expect("top level is an array");
        assert_eq!(items.len(), 27);
        for item in items {
            assert_eq!(item["start"]["timeZone"], "America/New_York");
            assert_eq!(item["end"]["timeZone"], "America/New_York");
        }
    }

    #[test]
    fn first_object_matches_expected_text() {
        let json = Catalog::builtin().to_json().unwrap();
        let expected_head = r#"[
  {
    "summary": "GS Setup",
    "start": {
      "dateTime": "2025-02-17T07:00:00",
      "timeZone": "America/New_York"
    },
    "end": {
      "dateTime": "2025-02-17T22:00:00",
      "timeZone": "America/New_York"
    }
  },
  {
    "summary": "Get bottled water and snacks to AV Team","#;
        assert!(json.starts_with(expected_head), "got:\n{}", &json[..400]);
        assert!(json.ends_with("\n  }\n]"));
    }

    #[test]
    fn description_is_serialized_between_summary_and_start() {
        let json = Catalog::from_slice(&BUILTIN_EVENTS[13..14]).to_json().unwrap();
        let summary = json.find("\"summary\"").unwrap();
        let description = json.find("\"description\"").unwrap();
        let start = json.find("\"start\"").unwrap();
        assert!(summary < description && description < start);
    }

    #[test]
    fn empty_catalog_serializes_to_empty_array() {
        let catalog = Catalog::from_slice(&[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.to_json().unwrap(), "[]");
    }
}
