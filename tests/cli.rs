#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const HEADER: &str = "Name,Monday,Tuesday,Wednesday,Thursday,Friday,Saturday,Sunday\n";

fn write_csv(dir: &Path, rows: &str) -> String {
    let path = dir.join("prefs.csv");
    fs::write(&path, format!("{HEADER}{rows}")).unwrap();
    path.display().to_string()
}

fn cli() -> Command {
    Command::cargo_bin("roulement-cli").unwrap()
}

#[test]
fn generate_full_team_exits_ok() {
    let dir = tempdir().unwrap();
    let rows: String = (0..14)
        .map(|i| format!("E{i},\"1:Morning,2:Evening\",,,,,,\n"))
        .collect();
    let csv = write_csv(dir.path(), &rows);
    let json = dir.path().join("out.json");

    cli()
        .args(["generate", "--csv", csv.as_str(), "--seed", "7", "--week", "2026-10-14"])
        .arg("--out-json")
        .arg(&json)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Week of 2026-10-12\n\nMonday 2026-10-12:\n",
        ))
        .stdout(predicate::str::contains("ERROR SUMMARY").not());

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(json).unwrap()).unwrap();
    assert_eq!(value["week_start"], "2026-10-12");
}

#[test]
fn understaffed_week_exits_with_warning_code() {
    let dir = tempdir().unwrap();
    let csv = write_csv(dir.path(), "Alice,1:Morning,,,,,,\n");
    let txt = dir.path().join("report.txt");
    let out_csv = dir.path().join("roster.csv");

    cli()
        .args(["generate", "--csv", csv.as_str(), "--seed", "1"])
        .arg("--out-txt")
        .arg(&txt)
        .arg("--out-csv")
        .arg(&out_csv)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("understaffed"));

    let report = fs::read_to_string(&txt).unwrap();
    assert!(report.contains("Unassigned Shifts (even Manager unavailable):"));
    assert!(fs::read_to_string(&out_csv)
        .unwrap()
        .starts_with("day,shift,position,occupant,kind\n"));
}

#[test]
fn header_only_csv_still_renders_roster() {
    let dir = tempdir().unwrap();
    let csv = write_csv(dir.path(), "");

    cli()
        .args(["generate", "--csv", csv.as_str(), "--seed", "3"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("ERROR SUMMARY"))
        .stdout(predicate::str::contains("  Morning: Manager\n"))
        .stdout(predicate::str::contains("Unassigned Shifts (even Manager unavailable):"));
}

#[test]
fn preferences_listing() {
    let dir = tempdir().unwrap();
    let csv = write_csv(dir.path(), "Alice,\"2:Evening,1:Morning,x\",,,,,,1:Funday\n");

    cli()
        .args(["preferences", "--csv", csv.as_str()])
        .assert()
        .success()
        .stdout("Alice\n  Monday: Morning, Evening\n");
}

#[test]
fn missing_column_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "Name,Monday\nAlice,1:Morning\n").unwrap();

    cli()
        .args(["generate", "--csv"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required column: Tuesday"));
}

#[test]
fn invalid_options_fail() {
    let dir = tempdir().unwrap();
    let csv = write_csv(dir.path(), "Alice,,,,,,,\n");

    cli()
        .args(["--staff-per-shift", "0", "generate", "--csv", csv.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("staff_per_shift"));
}
