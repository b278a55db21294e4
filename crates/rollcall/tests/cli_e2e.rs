#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `rollcall` command isolated from the user's config file and environment.
fn rollcall_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("rollcall"));
    cmd.env_remove("ROLLCALL_DEFAULT_DEPARTMENT")
        .env_remove("ROLLCALL_SEED_SAMPLE_RECORDS")
        .env_remove("ROLLCALL_EXPORT_DIR")
        .env_remove("CLICOLOR_FORCE")
        .current_dir(temp.path())
        .arg("--config")
        .arg(temp.path().join("rollcall.toml"));
    cmd
}

#[test]
fn test_list_shows_sample_dashboard() {
    let temp = TempDir::new().unwrap();
    rollcall_cmd(&temp)
        .args(["list", "--from", "2025-11-11", "--to", "2025-11-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attendance  2025-11-11  All departments"))
        .stdout(predicate::str::contains("Medical Leave        1"))
        .stdout(predicate::str::contains("Office               0"))
        .stdout(predicate::str::contains("Total                3"))
        .stdout(predicate::str::contains("Dr. Muslimin Bin Parman"))
        .stdout(predicate::str::contains("Encik Hafiz Bin Rahman"));
}

#[test]
fn test_list_department_constraint() {
    let temp = TempDir::new().unwrap();
    rollcall_cmd(&temp)
        .args(["list", "--from", "2025-11-01", "--to", "2025-11-30", "--dept", "JMIP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Puan Noraini Bt Ismail"))
        .stdout(predicate::str::contains("Encik Hafiz").not())
        .stdout(predicate::str::contains("Total                1"));
}

#[test]
fn test_later_window_is_empty() {
    let temp = TempDir::new().unwrap();
    rollcall_cmd(&temp)
        .args(["list", "--from", "2025-11-14", "--to", "2025-11-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records in this window."))
        .stdout(predicate::str::contains("Total                0"));
}

#[test]
fn test_no_sample_starts_empty() {
    let temp = TempDir::new().unwrap();
    rollcall_cmd(&temp)
        .args(["--no-sample", "list", "--from", "2025-11-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records in this window."));
}

#[test]
fn test_summary_json() {
    let temp = TempDir::new().unwrap();
    let output = rollcall_cmd(&temp)
        .args(["summary", "--from", "2025-11-11", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let counts = value["counts"].as_array().unwrap();
    assert_eq!(counts.len(), 5);
    assert_eq!(counts[0]["status"], "office");
    assert_eq!(counts[0]["count"], 0);
    assert_eq!(value["total"], 3);
    assert_eq!(value["window"]["range_start"], "2025-11-11");
}

#[test]
fn test_export_writes_csv_with_bom() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("reports");
    rollcall_cmd(&temp)
        .args(["export", "--from", "2025-11-11", "--to", "2025-11-13", "--dir"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 records"));

    let path = out_dir.join("attendance_report_2025-11-11_to_2025-11-13.csv");
    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);

    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Name,Department,Status,Start Date,End Date,Location,Program,Notes"
    );
    assert!(lines[1].starts_with(r#""Dr. Muslimin Bin Parman","JLKTD","External Assignment""#));
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_export_uses_configured_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rollcall.toml"), "export_dir = \"out\"\n").unwrap();
    rollcall_cmd(&temp)
        .args(["export", "--from", "2025-11-12"])
        .assert()
        .success();
    assert!(temp
        .path()
        .join("out")
        .join("attendance_report_2025-11-12_to_2025-11-12.csv")
        .exists());
}

#[test]
fn test_print_to_file_is_plain() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("report.txt");
    rollcall_cmd(&temp)
        .args(["print", "--from", "2025-11-11", "--to", "2025-11-13", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let text = fs::read_to_string(&file).unwrap();
    assert!(text.starts_with("ATTENDANCE REPORT"));
    assert!(text.contains("Period:      2025-11-11 to 2025-11-13"));
    assert!(text.contains("Puan Noraini Bt Ismail"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_print_to_file_json_reports_path() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("report.json");
    let output = rollcall_cmd(&temp)
        .args(["print", "--from", "2025-11-11", "--output", "json", "--file"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["path"], file.display().to_string());

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(report["rows"].as_array().unwrap().len(), 3);
}

#[test]
fn test_inverted_window_fails() {
    let temp = TempDir::new().unwrap();
    rollcall_cmd(&temp)
        .args(["list", "--from", "2025-11-13", "--to", "2025-11-11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid date window"));
}

#[test]
fn test_malformed_date_is_rejected_by_parser() {
    let temp = TempDir::new().unwrap();
    rollcall_cmd(&temp)
        .args(["list", "--from", "13/11/2025"])
        .assert()
        .failure();
}

#[test]
fn test_departments_default_list() {
    let temp = TempDir::new().unwrap();
    rollcall_cmd(&temp)
        .arg("departments")
        .assert()
        .success()
        .stdout(predicate::str::contains("JMIP   Jabatan Memperkasa Institusi Pendidikan"))
        .stdout(predicate::str::contains("JPKIC  Jabatan Pembangunan"));
}

#[test]
fn test_departments_from_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("rollcall.toml"),
        "[[departments]]\ncode = \"HR\"\nname = \"Human Resources\"\n",
    )
    .unwrap();
    rollcall_cmd(&temp)
        .arg("departments")
        .assert()
        .success()
        .stdout(predicate::str::contains("HR  Human Resources"))
        .stdout(predicate::str::contains("JMIP").not());
}

#[test]
fn test_session_add_then_view_recomputes() {
    let temp = TempDir::new().unwrap();
    let script = "\
add Cik Aina --dept JMIP --status annual-leave --from 2025-11-11 --to 2025-11-11
filter 2025-11-11
summary
quit
";
    rollcall_cmd(&temp)
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Record 4 added: Cik Aina"))
        .stdout(predicate::str::contains("Cik Aina"))
        .stdout(predicate::str::contains("Annual Leave         2"))
        .stdout(predicate::str::contains("Total                4"));
}

#[test]
fn test_session_errors_do_not_end_session() {
    let temp = TempDir::new().unwrap();
    let script = "\
add --from 2025-11-11
add \"Encik Zul\" --from 2025-11-12 --to 2025-11-10
filter 2025-11-20 2025-11-10
bogus
list
";
    rollcall_cmd(&temp)
        .args(["session", "--from", "2025-11-10"])
        .write_stdin(script)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: Please fill in name, end date"))
        .stderr(predicate::str::contains("is after end date"))
        .stderr(predicate::str::contains("Error: Invalid date window"))
        .stdout(predicate::str::contains("Encik Hafiz Bin Rahman"));
}

#[test]
fn test_session_unknown_department_warns_but_adds() {
    let temp = TempDir::new().unwrap();
    rollcall_cmd(&temp)
        .args(["--no-sample", "session"])
        .write_stdin("add Ali --dept XYZ --from 2025-11-11 --to 2025-11-11\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Department 'XYZ' is not in the department list"))
        .stdout(predicate::str::contains("Record 1 added"));
}

#[test]
fn test_session_json_add() {
    let temp = TempDir::new().unwrap();
    rollcall_cmd(&temp)
        .args(["session", "--output", "json"])
        .write_stdin("add \"Dr. Lim\" --status mc --from 2025-11-12 --to 2025-11-12\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 4"))
        .stdout(predicate::str::contains("\"status\": \"medical-leave\""))
        .stdout(predicate::str::contains("\"department_code\": \"JLKTD\""));
}

#[test]
fn test_session_records_do_not_persist() {
    let temp = TempDir::new().unwrap();
    rollcall_cmd(&temp)
        .arg("session")
        .write_stdin("add Ali --from 2025-11-11 --to 2025-11-11\n")
        .assert()
        .success();

    rollcall_cmd(&temp)
        .args(["list", "--from", "2025-11-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ali").not());
}
