//! Integration tests for basic CLI behavior.
//!
//! Tests that the binary exists, accepts standard flags, and each subcommand
//! responds to `--help` with appropriate text.

#![allow(deprecated)] // cargo_bin deprecation — replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command for the `profile-lens` binary.
fn lens() -> Command {
    Command::cargo_bin("profile-lens").expect("binary 'profile-lens' should be built")
}

// ─── Top-level flags ─────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    lens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: profile-lens"))
        .stdout(predicate::str::contains("lines"))
        .stdout(predicate::str::contains("sections"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn short_help_flag_shows_usage() {
    lens()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: profile-lens"));
}

#[test]
fn version_flag_shows_semver() {
    lens()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^profile-lens \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn no_args_shows_error_and_usage() {
    lens()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: profile-lens"));
}

#[test]
fn invalid_subcommand_fails() {
    lens()
        .arg("this-is-not-a-real-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ─── Subcommand help ─────────────────────────────────────────────────────────

#[test]
fn lines_help() {
    lens()
        .args(["lines", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reading order"))
        .stdout(predicate::str::contains("<INPUT>"))
        .stdout(predicate::str::contains(".txt file of reconstructed lines"))
        .stdout(predicate::str::contains("--y-tolerance"))
        .stdout(predicate::str::contains("--column-gap"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn sections_help() {
    lens()
        .args(["sections", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Detect name, headline, summary and top skills"))
        .stdout(predicate::str::contains("<INPUT>"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn analyze_help() {
    lens()
        .args(["analyze", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("<INPUT>"))
        .stdout(predicate::str::contains("--backend"))
        .stdout(predicate::str::contains("--model"));
}

// ─── Subcommand argument validation ──────────────────────────────────────────

#[test]
fn lines_missing_input_fails() {
    lens()
        .arg("lines")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<INPUT>"));
}

#[test]
fn sections_missing_input_fails() {
    lens()
        .arg("sections")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<INPUT>"));
}

#[test]
fn invalid_format_fails() {
    lens()
        .args(["lines", "profile.json", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}

#[test]
fn invalid_backend_fails() {
    lens()
        .args(["analyze", "profile.json", "--backend", "gpt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'gpt'"));
}

#[test]
fn missing_config_file_fails() {
    lens()
        .args(["--config", "/nonexistent/profile-lens.toml", "lines", "profile.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
