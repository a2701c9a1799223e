//! Full pipeline: load the sheet, scrape the events page, merge, report.

use crate::chart;
use crate::config::Config;
use crate::core::{loader, merge};
use crate::errors::AppResult;
use crate::models::record::AttendanceRecord;
use crate::models::workshop::WorkshopEvent;
use crate::scrape;
use crate::ui::messages;
use crate::utils::table::Table;
use log::info;
use std::path::Path;

/// Build the merged attendance series. With `local_only` the web fetch is
/// skipped and the series carries sign-in sheet records only.
pub fn collect(cfg: &Config, local_only: bool) -> AppResult<Vec<AttendanceRecord>> {
    info!("loading sign-in sheet: {}", cfg.sheet_csv);
    let local = loader::load_attendance(Path::new(&cfg.sheet_csv))?;
    info!("{} distinct sign-in dates", local.len());

    let web = if local_only {
        Vec::new()
    } else {
        info!("fetching events page: {}", cfg.events_url);
        let events = scrape::collect(&cfg.events_url)?;
        info!("{} tracked events", events.len());
        events.into_iter().map(WorkshopEvent::into_record).collect()
    };

    Ok(merge::merge_series(local, web))
}

/// Print the merged series as an aligned table.
pub fn print_summary(records: &[AttendanceRecord]) {
    let mut table = Table::new(vec!["Date", "Attendance", "Origin"]);
    for r in records {
        table.add_row(vec![r.date_str(), r.count_str(), r.origin.label().to_string()]);
    }
    print!("{}", table.render());
}

/// One full run: collect, print, optionally open the chart.
pub fn run_once(cfg: &Config, show_chart: bool) -> AppResult<()> {
    let records = collect(cfg, false)?;

    print_summary(&records);
    if show_chart {
        chart::show(&records);
    }

    messages::success(format!("Pipeline completed: {} data points", records.len()));
    Ok(())
}
