#![forbid(unsafe_code)]
mod common;

use assert_cmd::Command;
use common::{existing, guard, site};
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;
use vigile::{JsonStorage, ShiftStatus, Site, Snapshot, Storage};

fn write_snapshot(path: &Path, snapshot: &Snapshot) {
    JsonStorage::open(path).unwrap().save(snapshot).unwrap();
}

fn cli(snapshot: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vigile-cli").unwrap();
    cmd.arg("--snapshot").arg(snapshot);
    cmd
}

const CANDIDATE: [&str; 10] = [
    "--guard", "g-1", "--site", "hq", "--date", "2025-10-01", "--start", "08:00", "--end",
    "12:00",
];

#[test]
fn evaluate_accepts_clean_candidate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    write_snapshot(
        &path,
        &Snapshot {
            guards: vec![guard()],
            sites: vec![site()],
            shifts: Vec::new(),
        },
    );

    cli(&path)
        .arg("evaluate")
        .args(CANDIDATE)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("verdict: accept"));
}

#[test]
fn evaluate_rejects_full_site_and_writes_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    let report = dir.path().join("conflicts.csv");
    write_snapshot(
        &path,
        &Snapshot {
            guards: vec![guard()],
            sites: vec![Site::new("hq", 1).with_required_skills(["patrol"])],
            shifts: vec![existing("g-2", "10:00", "14:00", ShiftStatus::Confirmed)],
        },
    );

    cli(&path)
        .arg("evaluate")
        .args(CANDIDATE)
        .arg("--json")
        .arg("--report")
        .arg(&report)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("\"verdict\": \"reject\""));

    let csv = std::fs::read_to_string(&report).unwrap();
    assert!(csv.contains("site_overlap,error,Site hq would have 2 concurrent guards (max 1)"));
}

#[test]
fn schedule_persists_unless_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    write_snapshot(
        &path,
        &Snapshot {
            guards: vec![guard()],
            sites: vec![Site::new("hq", 1).with_required_skills(["patrol"])],
            shifts: Vec::new(),
        },
    );

    cli(&path).arg("schedule").args(CANDIDATE).assert().code(0);
    let stored = JsonStorage::open(&path).unwrap().load().unwrap();
    assert_eq!(stored.shifts.len(), 1);
    assert_eq!(stored.shifts[0].status, ShiftStatus::Scheduled);

    // le même créneau sature maintenant le site
    cli(&path)
        .arg("schedule")
        .args(CANDIDATE)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not scheduled"));
    let stored = JsonStorage::open(&path).unwrap().load().unwrap();
    assert_eq!(stored.shifts.len(), 1);
}

#[test]
fn strict_skills_flag_turns_warning_into_reject() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    write_snapshot(
        &path,
        &Snapshot {
            guards: vec![guard()],
            sites: vec![Site::new("hq", 2).with_required_skills(["patrol", "cctv"])],
            shifts: Vec::new(),
        },
    );

    cli(&path).arg("evaluate").args(CANDIDATE).assert().code(2);
    cli(&path)
        .arg("evaluate")
        .args(CANDIDATE)
        .arg("--strict-skills")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("[error] skill_mismatch"));
}

#[test]
fn malformed_time_is_an_error_not_a_verdict() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    write_snapshot(
        &path,
        &Snapshot {
            guards: vec![guard()],
            sites: vec![site()],
            shifts: Vec::new(),
        },
    );

    cli(&path)
        .args([
            "evaluate", "--guard", "g-1", "--site", "hq", "--date", "2025-10-01", "--start",
            "08:75", "--end", "12:00",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("malformed time of day"));
}

#[test]
fn duration_handles_midnight() {
    let dir = tempdir().unwrap();
    cli(&dir.path().join("unused.json"))
        .args(["duration", "--start", "22:00", "--end", "06:00"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn import_then_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    let csv = dir.path().join("shifts.csv");
    std::fs::write(
        &csv,
        "guard_id,site_id,date,start,end,status\ng-2,hq,2025-10-01,22:00,06:00,confirmed\n",
    )
    .unwrap();

    cli(&path)
        .arg("import-shifts")
        .arg("--csv")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("imported 1 shift(s)"));

    cli(&path)
        .args(["list", "--site", "hq"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| hq | 2025-10-01 22:00-06:00 | g-2 | confirmed"));
}
