use super::record::{AttendanceRecord, Origin};
use chrono::NaiveDate;

/// One event card scraped from the events page, after filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkshopEvent {
    pub title: String,
    pub date: NaiveDate,
    pub attendance: Option<u32>,
}

impl WorkshopEvent {
    /// Collapse into the per-date series shape shared with the local loader.
    pub fn into_record(self) -> AttendanceRecord {
        AttendanceRecord {
            date: self.date,
            count: self.attendance,
            origin: Origin::Web,
        }
    }
}
