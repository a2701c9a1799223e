//! Merger: combine the local and web attendance series into one timeline.

use crate::models::record::AttendanceRecord;

/// Concatenate both series and sort ascending by date. The sort is stable,
/// so same-date records keep local-before-web order and nothing is deduped
/// or aggregated across origins.
pub fn merge_series(
    local: Vec<AttendanceRecord>,
    web: Vec<AttendanceRecord>,
) -> Vec<AttendanceRecord> {
    let mut merged = local;
    merged.extend(web);
    merged.sort_by_key(|r| r.date);
    merged
}
