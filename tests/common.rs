#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ct() -> Command {
    cargo_bin_cmd!("clubtrack")
}

/// Create a unique temp file path and remove any leftover from earlier runs
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_clubtrack.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a sign-in sheet CSV fixture and return its path
pub fn write_sheet(name: &str, content: &str) -> String {
    let p = temp_path(name, "csv");
    fs::write(&p, content).expect("write sheet fixture");
    p
}

/// Three sign-ins on 2024-01-10, two on 2024-01-11
pub const SAMPLE_SHEET: &str = "\
Timestamp,Name
2024-01-10 18:00:00,ada
2024-01-10 18:04:12,grace
2024-01-10 18:09:45,edsger
2024-01-11 18:01:00,alan
2024-01-11 18:02:30,barbara
";
