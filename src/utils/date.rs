//! Date and timestamp parsing helpers shared by the loader and the scraper.

use chrono::{NaiveDate, NaiveDateTime};

/// Timestamp layouts accepted in the sign-in sheet. Spreadsheet sign-in
/// forms export "M/D/YYYY H:MM:SS"; manual sheets tend to use ISO.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Layout of event dates on the events page, e.g. "September 5, 2024".
const EVENT_DATE_FORMAT: &str = "%B %d, %Y";

/// Parse a sign-in sheet timestamp. Bare dates count as midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    for fmt in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Parse an event-card date string like "September 5, 2024".
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), EVENT_DATE_FORMAT).ok()
}
