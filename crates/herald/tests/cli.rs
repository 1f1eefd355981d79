// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests that run the `herald` binary.
//!
//! Each test runs in its own temp directory with HOME pointed at it, so no
//! user or local config file leaks in.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

const SEED: &str = r#"[
  {"id":"1","displayName":"Production Alerts","type":"PagerDuty","enabled":true,"status":"OK","labels":[{"key":"team","value":"sre"}]},
  {"id":"2","displayName":"Dev Team On-Call","type":"Slack","enabled":true,"status":"OK"},
  {"id":"3","displayName":"Data Science Slack","type":"Slack","enabled":true,"status":"Error","labels":[{"key":"team","value":"data"}]}
]"#;

fn herald(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_herald"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("HERALD_CONSOLE_PAGE_SIZE")
        .env_remove("HERALD_CONSOLE_LOG_LEVEL")
        .output()
        .expect("binary runs")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn seeded_dir() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("channels.json");
    std::fs::write(&path, SEED).unwrap();
    (dir, path)
}

#[test]
fn stats_over_sample_collection() {
    let dir = tempfile::tempdir().unwrap();
    let json = stdout_json(&herald(dir.path(), &["stats", "--json"]));
    assert_eq!(json["total"], 7);
    assert_eq!(json["ok"], 4);
    assert_eq!(json["error"], 1);
    assert_eq!(json["muted"], 1);
}

#[test]
fn list_filters_by_type_from_seed_file() {
    let (dir, path) = seeded_dir();
    let json = stdout_json(&herald(
        dir.path(),
        &["--channels", path.to_str().unwrap(), "list", "--type", "slack", "--json"],
    ));
    let names: Vec<&str> = json["allMatching"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["displayName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Data Science Slack", "Dev Team On-Call"]);
    assert_eq!(json["page"], 1);
    assert_eq!(json["totalPages"], 1);
}

#[test]
fn list_page_beyond_range_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("herald.toml"), "[console]\npage_size = 3\n").unwrap();
    let json = stdout_json(&herald(dir.path(), &["list", "--page", "99", "--json"]));
    assert_eq!(json["page"], 3);
    assert_eq!(json["totalPages"], 3);
    assert_eq!(json["pageItems"].as_array().unwrap().len(), 1);
}

#[test]
fn disable_intent_is_written_back() {
    let (dir, path) = seeded_dir();
    let output = herald(
        dir.path(),
        &[
            "--channels",
            path.to_str().unwrap(),
            "intent",
            r#"{"action":"DISABLE","target":{"type":"Slack","status":"Error"},"confirmationMessage":"Disabled it."}"#,
        ],
    );
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Disabled it."));

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved[2]["enabled"], false);
    assert_eq!(saved[1]["enabled"], true);
}

#[test]
fn delete_intent_requires_yes() {
    let (dir, path) = seeded_dir();
    let payload = r#"{"action":"DELETE","target":{"label":{"key":"team","value":"sre"}},"confirmationMessage":"Deleting."}"#;

    let output = herald(dir.path(), &["--channels", path.to_str().unwrap(), "intent", payload]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--yes"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), SEED);

    let output = herald(
        dir.path(),
        &["--channels", path.to_str().unwrap(), "intent", payload, "--yes"],
    );
    assert!(output.status.success());
    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved.as_array().unwrap().len(), 2);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Channel deleted successfully."));
}

#[test]
fn malformed_intent_prints_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let output = herald(dir.path(), &["intent", "{}"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("I'm sorry, I ran into a technical issue."));
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("herald.toml"), "[console]\npage_sise = 3\n").unwrap();
    let output = herald(dir.path(), &["stats"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unreadable_channel_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = herald(dir.path(), &["--channels", "missing.json", "stats"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.json"));
}
