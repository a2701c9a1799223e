//! Scheduler: run the pipeline once, then daily at a fixed wall-clock time.
//!
//! Plain check-then-sleep polling, one thread, no catch-up for missed runs.

use crate::errors::{AppError, AppResult};
use chrono::{Duration as ChronoDuration, Local, NaiveDateTime, NaiveTime};
use log::{debug, info};
use std::thread;
use std::time::Duration;

/// How often the loop checks whether the scheduled time has arrived.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Parse the configured daily run time ("HH:MM").
pub fn parse_schedule_time(raw: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| AppError::InvalidTime(raw.to_string()))
}

/// Next datetime at which a daily job scheduled for `at` should fire:
/// today if `at` is still ahead of `now`, otherwise tomorrow.
pub fn next_occurrence(now: NaiveDateTime, at: NaiveTime) -> NaiveDateTime {
    let today_run = now.date().and_time(at);
    if now < today_run {
        today_run
    } else {
        today_run + ChronoDuration::days(1)
    }
}

/// Run `job` once immediately, then once per day at `at`. Never returns.
/// The target is always derived from the configured wall-clock time, so a
/// late poll does not drift the schedule.
pub fn run_daily<F: FnMut()>(at: NaiveTime, mut job: F) -> ! {
    job();

    let mut next = next_occurrence(Local::now().naive_local(), at);
    info!("next scheduled run at {}", next);

    loop {
        thread::sleep(POLL_INTERVAL);

        let now = Local::now().naive_local();
        if now >= next {
            job();
            next = next_occurrence(now, at);
            info!("next scheduled run at {}", next);
        } else {
            debug!("tick: {} until next run", next - now);
        }
    }
}
