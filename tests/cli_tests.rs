//! Integration tests for the stackgen CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stackgen"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("stackgen"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stackgen"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("regenerate the extension's tech-stack data file"));
}

#[test]
fn test_cli_rejects_stray_arguments() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stackgen"));
    cmd.arg("lib/other.yaml");
    cmd.assert().failure().stderr(predicate::str::contains("unexpected argument"));
}

/// Running the tool against the checked-in stack description must
/// reproduce the checked-in generated file byte for byte. This is the
/// only test that invokes a real conversion: every run writes to the
/// repository's own `lib/tech_stack_data.js`, so the byte-identity and
/// rerun checks share one test to keep those writes sequential.
#[test]
fn test_run_regenerates_shipped_data_file() {
    let data_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("lib/tech_stack_data.js");
    let shipped = fs::read(&data_path).expect("shipped data file");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stackgen"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote:"))
        .stdout(predicate::str::contains("tech_stack_data.js"));

    let regenerated = fs::read(&data_path).expect("regenerated data file");
    assert_eq!(shipped, regenerated, "generated file is out of sync with lib/tech_stack.yaml");

    let mut rerun = Command::new(assert_cmd::cargo::cargo_bin!("stackgen"));
    rerun.assert().success();

    let rerun_output = fs::read(&data_path).expect("regenerated data file");
    assert_eq!(regenerated, rerun_output);
}
