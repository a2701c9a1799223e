use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;

/// Write the merged series as pretty-printed JSON.
pub fn write_json(path: &std::path::Path, records: &[AttendanceRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
