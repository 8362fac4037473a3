//! Integration tests for the runup CLI skeleton
//!
//! These tests verify the CLI structure and argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn runup() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("runup"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    runup().assert().code(2).stderr(predicate::str::contains(
        "Bootstrap a backend project from fresh clone to serving traffic",
    ));
}

#[test]
fn test_cli_help_flag_shows_help() {
    runup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    runup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("runup"));
}

#[test]
fn test_version_command_shows_version() {
    runup()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("runup 0.3.0"));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    runup()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version":"0.3.0""#));
}

// --- Command hierarchy tests ---

#[test]
fn test_help_shows_up_command() {
    runup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("up"));
}

#[test]
fn test_help_shows_provision_command() {
    runup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("provision"));
}

#[test]
fn test_help_shows_migrate_command() {
    runup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_help_shows_serve_command() {
    runup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_up_help_documents_reinstall_flag() {
    runup()
        .args(["up", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--reinstall"));
}

// --- Global flags tests ---

#[test]
fn test_global_quiet_flag_accepted() {
    runup().args(["--quiet", "version"]).assert().success();
}

#[test]
fn test_global_no_color_flag_accepted() {
    runup().args(["--no-color", "version"]).assert().success();
}

#[test]
fn test_no_color_env_var_accepted() {
    // NO_COLOR env var should be accepted with any truthy value
    runup()
        .env("NO_COLOR", "true")
        .arg("version")
        .assert()
        .success();
}

#[test]
fn test_no_color_env_var_accepts_conventional_one() {
    // NO_COLOR=1 is the conventional spelling and must not be rejected
    // by argument parsing.
    runup()
        .env("NO_COLOR", "1")
        .arg("version")
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid value").not());
}

// --- Error handling tests ---

#[test]
fn test_unknown_command_exits_with_error() {
    runup()
        .arg("nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_up_rejects_unknown_flag() {
    runup()
        .args(["up", "--rollback"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
