#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli(plan: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("permanence-cli").unwrap();
    cmd.arg("--plan").arg(plan);
    cmd
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("permanence-cli")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("add-holiday"));
}

#[test]
fn full_flow_import_generate_show_export() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    let people_csv = dir.path().join("people.csv");
    fs::write(
        &people_csv,
        "name,tags\nalice,\nbob,\ncarol,night-ineligible\ndave,\n",
    )
    .unwrap();

    cli(&plan)
        .args(["import-people", "--csv"])
        .arg(&people_csv)
        .assert()
        .success();

    cli(&plan)
        .args(["add-holiday", "--date", "2026-01-01"])
        .assert()
        .success();

    // idempotent : redéclarer le même férié ne casse rien
    cli(&plan)
        .args(["add-holiday", "--date", "2026-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already declared"));

    // code 0 (complet) ou 2 (créneaux vides) selon la graine
    cli(&plan)
        .args([
            "generate", "--start", "2026-01-01", "--end", "2026-01-07", "--seed", "7",
        ])
        .assert()
        .code(predicate::in_iter(vec![0, 2]));

    cli(&plan)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-01-01"));

    cli(&plan)
        .arg("check")
        .assert()
        .code(predicate::in_iter(vec![0, 2]));

    let out_csv = dir.path().join("schedule.csv");
    cli(&plan)
        .args(["export", "--out-csv"])
        .arg(&out_csv)
        .assert()
        .success();
    let content = fs::read_to_string(&out_csv).unwrap();
    assert!(content.starts_with("date,weekday,class,day_shift,night_shift"));
}

#[test]
fn generate_rejects_inverted_range() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");

    cli(&plan)
        .args(["add-person", "--name", "alice"])
        .assert()
        .success();

    cli(&plan)
        .args([
            "generate", "--start", "2026-01-07", "--end", "2026-01-01", "--seed", "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date range"));
}

#[test]
fn show_without_schedule_fails() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    cli(&plan)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no schedule generated yet"));
}
