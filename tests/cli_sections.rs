//! End-to-end tests for `lines`, `sections` and `analyze` against fixtures.
//!
//! Every command runs with the empty fixture config and a scrubbed
//! environment so a local `~/.config/profile-lens/config.toml` cannot leak in.

#![allow(deprecated)] // cargo_bin deprecation — replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

const WORDS: &str = "tests/fixtures/profile_words.json";
const LINES: &str = "tests/fixtures/profile_lines.txt";
const SINGLE_COLUMN: &str = "tests/fixtures/single_column.json";
const MISSING_X0: &str = "tests/fixtures/missing_x0.json";

fn lens() -> Command {
    let mut cmd = Command::cargo_bin("profile-lens").expect("binary 'profile-lens' should be built");
    cmd.args(["--config", "tests/fixtures/config.toml"])
        .env_remove("OPENROUTER_API_KEY")
        .env_remove("PROFILE_LENS_MODEL")
        .env_remove("PROFILE_LENS_BACKEND")
        .env_remove("RUST_LOG");
    cmd
}

const EXPECTED_LINES: &str = "\
Contact
jane@example.com
Top Skills
Rust
Distributed Systems
Certifications
AWS Architect
<<COLUMN_BREAK>>
Jane Doe
Software Engineer building tools
Berlin, Germany
Summary
I build things.
Experience
";

// ─── lines ───────────────────────────────────────────────────────────────────

#[test]
fn lines_reconstructs_two_columns_in_reading_order() {
    lens()
        .args(["lines", WORDS])
        .assert()
        .success()
        .stdout(EXPECTED_LINES)
        .stderr(predicate::str::contains("Column break not detected").not());
}

#[test]
fn lines_json_tags_the_column_break() {
    let output = lens()
        .args(["lines", WORDS, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[7], "<<COLUMN_BREAK>>");
    assert_eq!(lines[8], "Jane Doe");
}

#[test]
fn huge_column_gap_merges_columns() {
    lens()
        .args(["lines", WORDS, "--column-gap", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<<COLUMN_BREAK>>").not())
        .stdout(predicate::str::contains("Contact Jane Doe"))
        .stderr(predicate::str::contains("Column break not detected"));
}

#[test]
fn single_column_warns_on_stderr() {
    lens()
        .args(["lines", SINGLE_COLUMN])
        .assert()
        .success()
        .stdout("Jane Doe\n")
        .stderr(predicate::str::contains("Column break not detected"));
}

#[test]
fn zero_y_tolerance_is_rejected() {
    lens()
        .args(["lines", WORDS, "--y-tolerance", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("y_tolerance must be"));
}

#[test]
fn missing_coordinate_is_rejected() {
    lens()
        .args(["lines", MISSING_X0])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid word geometry"));
}

#[test]
fn unsupported_extension_is_rejected() {
    lens()
        .args(["lines", "Cargo.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported input"));
}

#[test]
fn lines_file_is_echoed_in_order() {
    lens()
        .args(["lines", LINES])
        .assert()
        .success()
        .stdout(EXPECTED_LINES)
        .stderr(predicate::str::contains("Column break not detected").not());
}

#[test]
fn lines_file_marker_becomes_a_column_break_in_json() {
    let output = lens()
        .args(["lines", LINES, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[7], "<<COLUMN_BREAK>>");
}

#[cfg(not(feature = "pdf"))]
#[test]
fn pdf_input_needs_the_pdf_feature() {
    lens()
        .args(["lines", "tests/fixtures/profile.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("built without PDF support"));
}

#[test]
fn missing_input_file_is_rejected() {
    lens()
        .args(["lines", "tests/fixtures/nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// ─── sections ────────────────────────────────────────────────────────────────

#[test]
fn sections_text_report() {
    lens()
        .args(["sections", WORDS])
        .assert()
        .success()
        .stdout(
            "NAME:\nJane Doe\n\n\
             HEADLINE:\nSoftware Engineer building tools\n\n\
             ABOUT:\nI build things.\n\n\
             TOP SKILLS:\nRust\nDistributed Systems\n",
        );
}

#[test]
fn sections_from_reconstructed_lines_match_geometry() {
    let from_words = lens().args(["sections", WORDS]).output().unwrap();
    let from_lines = lens().args(["sections", LINES]).output().unwrap();
    assert!(from_words.status.success());
    assert!(from_lines.status.success());
    assert_eq!(from_words.stdout, from_lines.stdout);
}

#[test]
fn sections_json_shape() {
    let output = lens()
        .args(["sections", LINES, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["name"], "Jane Doe");
    assert_eq!(record["headline"], serde_json::json!(["Software Engineer building tools"]));
    assert_eq!(record["about"], serde_json::json!(["I build things."]));
    assert_eq!(record["top_skills"], serde_json::json!(["Rust", "Distributed Systems"]));
}

#[test]
fn sections_without_column_break_reads_everything_as_right_column() {
    lens()
        .args(["sections", SINGLE_COLUMN])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("NAME:\nJane Doe\n"))
        .stdout(predicate::str::ends_with("TOP SKILLS:\n"));
}

// ─── analyze ─────────────────────────────────────────────────────────────────

#[test]
fn analyze_without_api_key_fails_before_any_request() {
    lens()
        .args(["analyze", WORDS, "--backend", "openrouter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing API key"))
        .stdout(predicate::str::is_empty());
}
