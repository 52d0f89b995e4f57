//! CLI argument parsing and validation tests — no network I/O.
//!
//! These tests verify that invalid arguments are rejected before any cassette
//! or live adapter is consulted.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("cat-card")
}

#[test]
fn help_is_long_only() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--greeting").and(predicate::str::contains("--who")));
}

#[test]
fn zero_width_exits_with_error() {
    cmd().args(["-w", "0"]).assert().failure().stderr(predicate::str::contains("--width"));
}

#[test]
fn non_numeric_height_exits_with_error() {
    // -h is the height alias, not help
    cmd().args(["-h", "tall"]).assert().failure().stderr(predicate::str::contains("--height"));
}

#[test]
fn invalid_color_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .current_dir(dir.path())
        .args(["-c", "#12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported color"));
    assert!(!dir.path().join("cat-card.jpg").exists());
}

#[test]
fn empty_caption_exits_with_error() {
    cmd()
        .args(["-g", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Caption must not be empty"));
}

#[test]
fn dot_caption_exits_with_error() {
    cmd()
        .args(["-g", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Caption '.' is not allowed"));
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[service\nbase_url = ").unwrap();

    cmd()
        .env_remove("CATCARD_REPLAY")
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn invalid_base_url_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .current_dir(dir.path())
        .env_remove("CATCARD_REPLAY")
        .env_remove("CATCARD_REC")
        .env("CATCARD_CONFIG", dir.path().join("missing.toml"))
        .env("CATCARD_BASE_URL", "not a url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base URL"));
}
