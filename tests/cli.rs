use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn adr(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("adr").unwrap();
    cmd.current_dir(temp.path())
        .env_remove("ADR_DIR")
        .env_remove("ADR_LOG")
        .arg("--dir")
        .arg(temp.path().join("adr"));
    cmd
}

#[test]
fn test_create_record() {
    let temp = TempDir::new().unwrap();
    adr(&temp)
        .args(["record", "--number", "001", "--status", "Accepted"])
        .args(["--title", "Test Decision"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New ADR created"))
        .stdout(predicate::str::contains("adr-001-test-decision.md"));

    let dir = temp.path().join("adr");
    assert!(dir.join("adr-001-test-decision.md").exists());
    assert!(fs::read_to_string(dir.join("README.md"))
        .unwrap()
        .contains("(adr-001-test-decision.md)"));
}

#[test]
fn test_new_record_without_title_fails() {
    let temp = TempDir::new().unwrap();
    adr(&temp)
        .args(["record", "-n", "001", "-s", "Accepted"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title is required"));
    assert!(!temp.path().join("adr").exists());
}

#[test]
fn test_missing_status_fails() {
    let temp = TempDir::new().unwrap();
    adr(&temp)
        .args(["record", "-n", "001", "-t", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--status is required"));
}

#[test]
fn test_update_existing_record() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("adr");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("adr-002-existing.md"),
        "# ADR 002: Existing\n\n**Status**: Accepted\n\nTest content",
    )
    .unwrap();

    adr(&temp)
        .args(["record", "-n", "002", "-s", "Superseded"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ADR updated"));

    let body = fs::read_to_string(dir.join("adr-002-existing.md")).unwrap();
    assert_eq!(
        body,
        "# ADR 002: Existing\n\n**Status**: Superseded\n**Previous Status**: Accepted\n\nTest content"
    );
}

#[test]
fn test_rename_reports_old_and_new() {
    let temp = TempDir::new().unwrap();
    adr(&temp)
        .args(["record", "-n", "5", "-s", "Proposed", "-t", "Alpha"])
        .assert()
        .success();
    adr(&temp)
        .args(["record", "-n", "5", "-s", "Accepted", "-t", "Beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("renamed"))
        .stdout(predicate::str::contains("adr-005-alpha.md"));

    let dir = temp.path().join("adr");
    assert!(dir.join("adr-005-beta.md").exists());
    assert!(!dir.join("adr-005-alpha.md").exists());
}

#[test]
fn test_next_and_list() {
    let temp = TempDir::new().unwrap();
    adr(&temp)
        .args(["record", "-n", "1", "-s", "Accepted", "-t", "First"])
        .assert()
        .success();
    adr(&temp)
        .args(["record", "-n", "3", "-s", "Proposed", "-t", "Third"])
        .assert()
        .success();

    adr(&temp)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::diff("004\n"));

    adr(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("First"))
        .stdout(predicate::str::contains("Third"))
        .stdout(predicate::str::contains("Proposed"));
}

#[test]
fn test_record_without_number_takes_next() {
    let temp = TempDir::new().unwrap();
    adr(&temp)
        .args(["record", "-s", "Proposed", "-t", "Auto Numbered"])
        .assert()
        .success();
    assert!(temp
        .path()
        .join("adr")
        .join("adr-001-auto-numbered.md")
        .exists());
}

#[test]
fn test_init_and_reindex() {
    let temp = TempDir::new().unwrap();
    adr(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    let dir = temp.path().join("adr");
    assert!(dir.join("template.md").exists());

    fs::write(dir.join("README.md"), "stale").unwrap();
    fs::write(dir.join("adr-001-manual.md"), "# ADR 001: Manual\n").unwrap();
    adr(&temp)
        .arg("reindex")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 records"));
    assert!(fs::read_to_string(dir.join("README.md"))
        .unwrap()
        .contains("- [001 Manual](adr-001-manual.md)"));
}

#[test]
fn test_invalid_number_rejected() {
    let temp = TempDir::new().unwrap();
    adr(&temp)
        .args(["record", "-n", "abc", "-s", "Accepted", "-t", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid record number"));
}

#[test]
fn test_config_file_sets_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("adr.json"), r#"{"dir": "decisions"}"#).unwrap();

    Command::cargo_bin("adr")
        .unwrap()
        .current_dir(temp.path())
        .env_remove("ADR_DIR")
        .args(["record", "-n", "1", "-s", "Accepted", "-t", "Configured"])
        .assert()
        .success();
    assert!(temp
        .path()
        .join("decisions")
        .join("adr-001-configured.md")
        .exists());
}
