//! Mentions subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn test_mentions_lists_ids_and_labels() {
    cargo_bin_cmd!("atmention")
        .arg("mentions")
        .write_stdin(concat!(
            "<p>@[Ann](u-1) and @<a href=\"u-2\">Bob</a></p>",
            "<p><span data-type=\"mention\" data-id=\"u-3\">@Cleo</span></p>",
        ))
        .assert()
        .success()
        .stdout("u-1\tAnn\nu-2\tBob\nu-3\tCleo\n");
}

#[test]
fn test_mentions_empty_document() {
    cargo_bin_cmd!("atmention")
        .arg("mentions")
        .write_stdin("<p>nothing here</p>")
        .assert()
        .success()
        .stdout("");
}
