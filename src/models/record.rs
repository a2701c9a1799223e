use chrono::NaiveDate;
use serde::Serialize;

/// Source of an attendance record: the sign-in sheet or the events page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Origin {
    Local,
    Web,
}

impl Origin {
    /// Human-readable label, used for chart traces and table rows.
    pub fn label(&self) -> &'static str {
        match self {
            Origin::Local => "Sign-in sheet",
            Origin::Web => "Events page",
        }
    }
}

/// One per-date attendance data point.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate, // ⇔ calendar date, never absent
    pub count: Option<u32>, // ⇔ None when the scraped value was not numeric
    pub origin: Origin,
}

impl AttendanceRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Count rendered for tables and CSV cells; "-" when absent.
    pub fn count_str(&self) -> String {
        match self.count {
            Some(n) => n.to_string(),
            None => "-".to_string(),
        }
    }
}
