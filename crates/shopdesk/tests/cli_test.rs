//! Integration tests for the `shopdesk` CLI binary.
//!
//! Validate argument parsing, help output, and error handling — all
//! without a live back office.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `shopdesk` binary with env isolation.
///
/// Clears all `SHOPDESK_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn shopdesk_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("shopdesk");
    cmd.env("HOME", "/tmp/shopdesk-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/shopdesk-cli-test-nonexistent")
        .env_remove("SHOPDESK_PROFILE")
        .env_remove("SHOPDESK_API")
        .env_remove("SHOPDESK_OUTPUT")
        .env_remove("SHOPDESK_INSECURE")
        .env_remove("SHOPDESK_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = shopdesk_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    shopdesk_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("back office")
            .and(predicate::str::contains("brands"))
            .and(predicate::str::contains("products"))
            .and(predicate::str::contains("orders")),
    );
}

#[test]
fn test_version_flag() {
    shopdesk_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shopdesk"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = shopdesk_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_brands_list_no_config() {
    shopdesk_cmd()
        .args(["brands", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("API root"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_invalid_output_format() {
    let output = shopdesk_cmd()
        .args(["--output", "invalid", "brands", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values") || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_invalid_json_document_is_usage_error() {
    let output = shopdesk_cmd()
        .args([
            "--api",
            "http://127.0.0.1:1", // never reached: the payload fails first
            "brands",
            "update",
            "1",
            "not json",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("JSON"),
        "Expected a JSON payload error:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse — the failure should be about missing
    // config, not argument parsing.
    shopdesk_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--insecure",
            "--timeout",
            "60",
            "brands",
            "list",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("API root"))
                .or(predicate::str::contains("profile")),
        );
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_brands_subcommands_exist() {
    shopdesk_cmd().args(["brands", "--help"]).assert().success().stdout(
        predicate::str::contains("list")
            .and(predicate::str::contains("get"))
            .and(predicate::str::contains("add"))
            .and(predicate::str::contains("update")),
    );
}

#[test]
fn test_regions_subcommands_exist() {
    shopdesk_cmd()
        .args(["regions", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("categories"))
                .and(predicate::str::contains("update")),
        );
}

#[test]
fn test_orders_subcommands_exist() {
    shopdesk_cmd()
        .args(["orders", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("statuses")),
        );
}
