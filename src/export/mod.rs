// src/export/mod.rs

mod csv;
mod json;

use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the merged series to `path` in the requested format.
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write(
    format: &ExportFormat,
    path: &Path,
    records: &[AttendanceRecord],
    force: bool,
) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    match format {
        ExportFormat::Csv => csv::write_csv(path, records)?,
        ExportFormat::Json => json::write_json(path, records)?,
    }

    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(())
}
