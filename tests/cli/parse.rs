//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("atmention")
        .arg("parse")
        .write_stdin("<p>@[Ann](u-1)</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("Element"))
        .stdout(predicate::str::contains("@[Ann](u-1)"));
}

#[test]
fn test_parse_does_not_transform() {
    cargo_bin_cmd!("atmention")
        .arg("parse")
        .write_stdin("<p>@[Ann](u-1)</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-id").not());
}

#[test]
fn test_parse_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("comment.html");
    fs::write(&test_file, "<p>hi <a href=\"x\">y</a></p>").unwrap();

    let output = cargo_bin_cmd!("atmention")
        .args(["parse", "--json", test_file.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["type"], "root");
    let p = &json["children"][0];
    assert_eq!(p["tagName"], "p");
    assert_eq!(p["children"][0]["value"], "hi ");
    assert_eq!(p["children"][1]["properties"]["href"], "x");
}
