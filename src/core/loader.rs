//! Local loader: turn the sign-in sheet CSV into a per-date attendance series.

use crate::errors::{AppError, AppResult};
use crate::models::record::{AttendanceRecord, Origin};
use crate::utils::date;
use std::collections::BTreeMap;
use std::path::Path;

/// Header column holding one sign-in timestamp per row.
const TIMESTAMP_COLUMN: &str = "Timestamp";

/// Read the sheet, bucket rows by calendar date, and emit one record per
/// distinct date with count = rows on that date. Ordered by date.
///
/// Fails on a missing `Timestamp` column or any unparseable value; a row is
/// never silently skipped.
pub fn load_attendance(path: &Path) -> AppResult<Vec<AttendanceRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;

    let ts_idx = rdr
        .headers()?
        .iter()
        .position(|h| h == TIMESTAMP_COLUMN)
        .ok_or_else(|| AppError::MissingColumn(TIMESTAMP_COLUMN.to_string()))?;

    let mut per_day: BTreeMap<chrono::NaiveDate, u32> = BTreeMap::new();

    for row in rdr.records() {
        let row = row?;
        let raw = row.get(ts_idx).unwrap_or_default();
        let ts = date::parse_timestamp(raw)
            .ok_or_else(|| AppError::InvalidTimestamp(raw.to_string()))?;
        *per_day.entry(ts.date()).or_insert(0) += 1;
    }

    Ok(per_day
        .into_iter()
        .map(|(date, count)| AttendanceRecord {
            date,
            count: Some(count),
            origin: Origin::Local,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn write_sheet(name: &str, content: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{}_clubtrack_loader.csv", name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn counts_rows_per_distinct_date() {
        let path = write_sheet(
            "counts",
            "Timestamp,Name\n\
             2024-01-10 18:00:00,a\n\
             2024-01-10 18:05:00,b\n\
             2024-01-10 18:09:00,c\n\
             2024-01-11 18:00:00,d\n\
             2024-01-11 18:20:00,e\n",
        );

        let records = load_attendance(&path).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(records[0].count, Some(3));
        assert_eq!(records[0].origin, Origin::Local);

        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());
        assert_eq!(records[1].count, Some(2));
    }

    #[test]
    fn output_is_ordered_by_date() {
        let path = write_sheet(
            "ordered",
            "Timestamp\n\
             2024-03-02 10:00:00\n\
             2024-01-15 10:00:00\n\
             2024-02-01 10:00:00\n",
        );

        let records = load_attendance(&path).unwrap();
        let dates: Vec<_> = records.iter().map(|r| r.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn timestamp_column_may_sit_anywhere() {
        let path = write_sheet(
            "anywhere",
            "Name,Timestamp\nalice,9/12/2024 17:03:22\nbob,9/12/2024 17:04:01\n",
        );

        let records = load_attendance(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].count, Some(2));
    }

    #[test]
    fn missing_timestamp_column_is_an_error() {
        let path = write_sheet("no_column", "Date,Name\n2024-01-10,a\n");

        match load_attendance(&path) {
            Err(AppError::MissingColumn(col)) => assert_eq!(col, "Timestamp"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_timestamp_is_an_error() {
        let path = write_sheet(
            "bad_ts",
            "Timestamp\n2024-01-10 18:00:00\nnot-a-time\n",
        );

        match load_attendance(&path) {
            Err(AppError::InvalidTimestamp(raw)) => assert_eq!(raw, "not-a-time"),
            other => panic!("expected InvalidTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn empty_sheet_yields_empty_series() {
        let path = write_sheet("empty", "Timestamp\n");
        assert!(load_attendance(&path).unwrap().is_empty());
    }
}
