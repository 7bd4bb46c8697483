//! End-to-end tests for the vhdlstyle binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_check_reports_violations_and_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "bad.vhd", "foo : sig<= a;\n");

    Command::cargo_bin("vhdlstyle")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("concurrent_005"))
        .stdout(predicate::str::contains("concurrent_004"));
}

#[test]
fn test_clean_file_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "clean.vhd", "sig <= a;\n");

    Command::cargo_bin("vhdlstyle")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no style violations"));
}

#[test]
fn test_fix_rewrites_then_check_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "fixme.vhd", "foo : sig<=a when cond else b;\n");

    Command::cargo_bin("vhdlstyle")
        .unwrap()
        .args([&path, "--fix"])
        .assert()
        .success();

    let fixed = fs::read_to_string(&path).unwrap();
    assert_eq!(fixed, "sig <= a when cond else\n       b;\n");

    Command::cargo_bin("vhdlstyle")
        .unwrap()
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_json_report_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "bad.vhd", "foo : sig <= a;\n");

    let output = Command::cargo_bin("vhdlstyle")
        .unwrap()
        .args([&path, "--format", "json"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let reports: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(reports[0]["rule_id"], "concurrent_005");
    assert_eq!(reports[0]["violations"][0]["line_number"], 1);
}

#[test]
fn test_classification_failure_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "broken.vhd", "signal a\n");

    Command::cargo_bin("vhdlstyle")
        .unwrap()
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("classification failed"));
}

#[test]
fn test_disabled_rule_via_config_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "labeled.vhd", "foo : sig <= a;\n");
    let profile = write_fixture(
        &dir,
        "relaxed.toml",
        "[rules.concurrent_005]\nenable = false\nseverity = \"warning\"\n",
    );

    Command::cargo_bin("vhdlstyle")
        .unwrap()
        .args([&path, "--config", &profile])
        .assert()
        .success()
        .stdout(predicate::str::contains("no style violations"));
}
