//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("atmention")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Atmention finds mentions in HTML"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("atmention")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("atmention")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("atmention")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_transform_help() {
    cargo_bin_cmd!("atmention")
        .args(["transform", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rewrite the mentions"));
}

#[test]
fn test_missing_explicit_config_fails() {
    cargo_bin_cmd!("atmention")
        .args(["transform", "--config", "/nonexistent/atmention.toml"])
        .write_stdin("<p>x</p>")
        .assert()
        .failure();
}
