//! Tests for the `ustawa` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_toc_of_constitution() {
    let mut cmd = cargo_bin_cmd!("ustawa");
    cmd.arg(fixture_path("konstytucja.txt")).arg("toc");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("RZECZPOSPOLITA"))
        .stdout(predicate::str::contains("ŹRÓDŁA PRAWA"));
}

#[test]
fn test_show_article_of_consumer_rights() {
    let mut cmd = cargo_bin_cmd!("ustawa");
    cmd.arg("--kind")
        .arg("consumer-rights")
        .arg(fixture_path("prawa_konsumenta.txt"))
        .args(["show", "--article", "9", "--paragraph", "2"]);

    cmd.assert().success().stdout(
        predicate::str::starts_with("2. Obowiązek informacyjny")
            .and(predicate::str::contains("niezwłocznie.")),
    );
}

#[test]
fn test_show_wraps_lines() {
    let mut cmd = cargo_bin_cmd!("ustawa");
    cmd.arg(fixture_path("konstytucja.txt"))
        .args(["show", "--article", "1", "--width", "30"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    assert!(text.lines().all(|line| line.chars().count() <= 30), "{text}");
}

#[test]
fn test_show_rejects_zero_width() {
    let mut cmd = cargo_bin_cmd!("ustawa");
    cmd.arg(fixture_path("konstytucja.txt"))
        .args(["show", "--article", "1", "--width", "0"]);

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("--width"));
}

#[test]
fn test_range_of_articles() {
    let mut cmd = cargo_bin_cmd!("ustawa");
    cmd.arg(fixture_path("konstytucja.txt"))
        .args(["range", "article", "30", "31", "--chapter", "2"]);

    cmd.assert().success().stdout(
        predicate::str::contains("Art. 30.")
            .and(predicate::str::contains("Art. 31."))
            .and(predicate::str::contains("Art. 87.").not()),
    );
}

#[test]
fn test_missing_fragment_exits_with_two() {
    let mut cmd = cargo_bin_cmd!("ustawa");
    cmd.arg(fixture_path("konstytucja.txt"))
        .args(["show", "--chapter", "12"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("No such fragment"))
        .stderr(predicate::str::contains("Rozdział XII"));
}

#[test]
fn test_invalid_locator_exits_with_one() {
    let mut cmd = cargo_bin_cmd!("ustawa");
    cmd.arg(fixture_path("konstytucja.txt"))
        .args(["show", "--paragraph", "1"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid argument: a paragraph needs an article"));
}

#[test]
fn test_custom_profile_find_and_outline() {
    let mut cmd = cargo_bin_cmd!("ustawa");
    cmd.args(["--kind", "custom", "--profile"])
        .arg(fixture_path("regulamin.yaml"))
        .arg(fixture_path("regulamin.txt"))
        .args(["find", "§ 3."]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Regulamin wchodzi w życie"));

    let mut cmd = cargo_bin_cmd!("ustawa");
    cmd.args(["--kind", "custom", "--profile"])
        .arg(fixture_path("regulamin.yaml"))
        .arg(fixture_path("regulamin.txt"))
        .arg("outline");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("identifier: paragraf").not())
        .stdout(predicate::str::contains("§ 2."));
}

#[test]
fn test_custom_kind_requires_profile() {
    let mut cmd = cargo_bin_cmd!("ustawa");
    cmd.args(["--kind", "custom"])
        .arg(fixture_path("regulamin.txt"))
        .arg("toc");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("--profile"));
}

#[test]
fn test_document_from_temp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ustawa.txt");
    fs::write(
        &path,
        "DZIAŁ I\r\nPrzepisy ogólne\r\nArt. 1. Ustawa okre-\r\nśla zakres.\r\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("ustawa");
    cmd.args(["--kind", "consumer-rights"])
        .arg(&path)
        .args(["show", "--section", "1"]);

    cmd.assert()
        .success()
        .stdout("DZIAŁ I\nPrzepisy ogólne\nArt. 1. Ustawa określa\nzakres.\n");
}

#[test]
fn test_unreadable_file() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("ustawa");
    cmd.arg(dir.path().join("missing.txt")).arg("toc");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Couldn't read"));
}
