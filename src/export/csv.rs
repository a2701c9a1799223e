use crate::models::record::AttendanceRecord;
use csv::Writer;
use std::path::Path;

/// Write the merged series as CSV. Absent counts become empty cells.
pub fn write_csv(path: &Path, records: &[AttendanceRecord]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "attendance", "origin"])?;

    for r in records {
        wtr.write_record(&[
            r.date_str(),
            r.count.map(|n| n.to_string()).unwrap_or_default(),
            r.origin.label().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
