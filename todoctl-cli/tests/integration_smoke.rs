//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--db-path"))
        .stdout(predicate::str::contains("--bind"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("todoctl"));
}

#[test]
fn test_serve_fails_on_unwritable_db_path() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("no-such-dir").join("todos.db");

    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("serve")
        .arg("--bind")
        .arg("127.0.0.1:0")
        .arg("--db-path")
        .arg(&db_path)
        .timeout(std::time::Duration::from_secs(30));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to open database"));
}
