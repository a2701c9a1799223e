//! Web collector: fetch the club events page and extract workshop cards.

pub mod events;

pub use events::extract_events;

use crate::errors::{AppError, AppResult};
use crate::models::workshop::WorkshopEvent;
use scraper::Html;

/// Fetch the events page and extract the tracked workshop events.
pub fn collect(url: &str) -> AppResult<Vec<WorkshopEvent>> {
    let body = fetch(url)?;
    let doc = Html::parse_document(&body);
    extract_events(&doc)
}

/// HTTP GET; connection failures bubble up, non-2xx is its own error.
fn fetch(url: &str) -> AppResult<String> {
    let resp = reqwest::blocking::get(url)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(AppError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(resp.text()?)
}
