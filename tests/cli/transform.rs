//! Transform subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const INPUT: &str = "<p>用户@[张三](user-123)和@<a href=\"user-456\">李四</a>在讨论。</p>\n";
const OUTPUT: &str = "<p>用户<span data-type=\"mention\" data-id=\"user-123\">@张三</span>和<span data-type=\"mention\" data-id=\"user-456\">@李四</span>在讨论。</p>\n";

#[test]
fn test_transform_stdin_to_stdout() {
    cargo_bin_cmd!("atmention")
        .arg("transform")
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout(OUTPUT);
}

#[test]
fn test_transform_file_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("comment.html");
    fs::write(&test_file, INPUT).unwrap();

    cargo_bin_cmd!("atmention")
        .args(["transform", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(OUTPUT);

    // Without --write the file is left alone
    assert_eq!(fs::read_to_string(&test_file).unwrap(), INPUT);
}

#[test]
fn test_transform_write_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("comment.html");
    fs::write(&test_file, INPUT).unwrap();

    cargo_bin_cmd!("atmention")
        .args(["transform", "--write", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transformed"));

    assert_eq!(fs::read_to_string(&test_file).unwrap(), OUTPUT);
}

#[test]
fn test_transform_write_requires_file() {
    cargo_bin_cmd!("atmention")
        .args(["transform", "--write"])
        .write_stdin(INPUT)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--write requires an input file"));
}

#[test]
fn test_transform_check_clean() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("comment.html");
    fs::write(&test_file, OUTPUT).unwrap();

    cargo_bin_cmd!("atmention")
        .args(["transform", "--check", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("no mentions left"));
}

#[test]
fn test_transform_check_ignores_markup_normalization() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("plain.html");
    fs::write(&test_file, "<P>a &amp; b &#64;<br/></P>\n").unwrap();

    cargo_bin_cmd!("atmention")
        .args(["transform", "--check", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("no mentions left"));
}

#[test]
fn test_transform_check_diff_shows_only_mentions() {
    cargo_bin_cmd!("atmention")
        .args(["transform", "--check"])
        .write_stdin("<p>x<br/>@[Ann](u1)</p>\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("-<p>x<br>@[Ann](u1)</p>"))
        .stdout(predicate::str::contains("<br/>").not());
}

#[test]
fn test_transform_check_pending() {
    cargo_bin_cmd!("atmention")
        .args(["transform", "--check"])
        .write_stdin(INPUT)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Diff in <stdin>"))
        .stdout(predicate::str::contains("data-id=\"user-123\""));
}

#[test]
fn test_transform_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("comment.html");
    let config_file = temp_dir.path().join(".atmention.toml");
    fs::write(&test_file, INPUT).unwrap();
    fs::write(&config_file, "link_mentions = false\n").unwrap();

    cargo_bin_cmd!("atmention")
        .args(["transform", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-id=\"user-123\""))
        .stdout(predicate::str::contains("和@<a href=\"user-456\">李四</a>"));
}

#[test]
fn test_transform_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&config_file, "bracket_mentions = false\n").unwrap();

    cargo_bin_cmd!("atmention")
        .args(["transform", "--config", config_file.to_str().unwrap()])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("用户@[张三](user-123)和"))
        .stdout(predicate::str::contains("data-id=\"user-456\""));
}
