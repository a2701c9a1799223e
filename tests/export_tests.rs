use predicates::str::contains;
use std::fs;

mod common;
use common::{ct, temp_path, write_sheet, SAMPLE_SHEET};

#[test]
fn export_local_only_csv() {
    let sheet = write_sheet("export_csv", SAMPLE_SHEET);
    let out = temp_path("export_csv_out", "csv");

    ct().args([
        "--sheet",
        &sheet,
        "export",
        "--local-only",
        "--file",
        &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("export file exists");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("date,attendance,origin"));
    assert!(content.contains("2024-01-10,3,Sign-in sheet"));
    assert!(content.contains("2024-01-11,2,Sign-in sheet"));
}

#[test]
fn export_local_only_json() {
    let sheet = write_sheet("export_json", SAMPLE_SHEET);
    let out = temp_path("export_json_out", "json");

    ct().args([
        "--sheet",
        &sheet,
        "export",
        "--format",
        "json",
        "--local-only",
        "--file",
        &out,
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("export file exists");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array of records");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "2024-01-10");
    assert_eq!(rows[0]["count"], 3);
    assert_eq!(rows[0]["origin"], "Local");
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let sheet = write_sheet("export_force", SAMPLE_SHEET);
    let out = temp_path("export_force_out", "csv");

    ct().args(["--sheet", &sheet, "export", "--local-only", "--file", &out])
        .assert()
        .success();

    ct().args(["--sheet", &sheet, "export", "--local-only", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    ct().args([
        "--sheet",
        &sheet,
        "export",
        "--local-only",
        "--file",
        &out,
        "--force",
    ])
    .assert()
    .success();
}

#[test]
fn export_fails_on_broken_sheet() {
    let sheet = write_sheet("export_broken", "Timestamp\nnonsense\n");
    let out = temp_path("export_broken_out", "csv");

    ct().args(["--sheet", &sheet, "export", "--local-only", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));

    assert!(!std::path::Path::new(&out).exists());
}
