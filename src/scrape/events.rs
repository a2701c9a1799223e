//! Event-card extraction and filtering rules.
//!
//! The events page lists one `div.event-card` per event, holding a title,
//! a long-form date ("September 5, 2024") and an attendance figure. Only
//! workshop-like events are tracked; "Advanced Workshop" sessions are
//! member-only and excluded from club stats.

use crate::errors::{AppError, AppResult};
use crate::models::workshop::WorkshopEvent;
use crate::utils::date;
use crate::utils::text::normalize_ws;
use scraper::{ElementRef, Html, Selector};

struct Selectors {
    card: Selector,
    title: Selector,
    date: Selector,
    attendance: Selector,
}

impl Selectors {
    fn new() -> Self {
        // Static CSS, cannot fail to parse.
        Self {
            card: Selector::parse("div.event-card").unwrap(),
            title: Selector::parse("h3.event-title").unwrap(),
            date: Selector::parse("p.event-date").unwrap(),
            attendance: Selector::parse("span.event-attendance").unwrap(),
        }
    }
}

/// Walk every event card and collect the tracked events.
///
/// All three sub-elements are read before the title filter runs, so a
/// malformed card aborts the scrape even when it would have been filtered
/// out. The date is only parsed for cards that survive the filter.
pub fn extract_events(doc: &Html) -> AppResult<Vec<WorkshopEvent>> {
    let sel = Selectors::new();
    let mut events = Vec::new();

    for card in doc.select(&sel.card) {
        let title = field_text(&card, &sel.title, "event-title")?;
        let date_raw = field_text(&card, &sel.date, "event-date")?;
        let attendance_raw = field_text(&card, &sel.attendance, "event-attendance")?;

        if !is_tracked(&title) {
            continue;
        }

        let date = date::parse_event_date(&date_raw)
            .ok_or_else(|| AppError::InvalidDate(date_raw.clone()))?;

        events.push(WorkshopEvent {
            title,
            date,
            attendance: parse_attendance(&attendance_raw),
        });
    }

    Ok(events)
}

/// Inclusion rule: never "Advanced Workshop"; otherwise the title must
/// mention "Fall Kickoff" or "Workshop".
fn is_tracked(title: &str) -> bool {
    if title.contains("Advanced Workshop") {
        return false;
    }
    title.contains("Fall Kickoff") || title.contains("Workshop")
}

/// Purely numeric attendance strings parse to a count; anything else
/// ("TBD", "45+", "") is recorded as absent.
fn parse_attendance(raw: &str) -> Option<u32> {
    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

fn field_text(
    card: &ElementRef,
    sel: &Selector,
    name: &'static str,
) -> AppResult<String> {
    let el = card
        .select(sel)
        .next()
        .ok_or(AppError::MissingElement(name))?;
    Ok(normalize_ws(&el.text().collect::<String>()))
}
