//! End-to-end tests for `mendeleev` subcommands.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

mod fixtures;
use fixtures::{data_dir, sample_data_dir, SAMPLE_ELEMENTS};

/// Path to the mendeleev binary
fn mendeleev_bin() -> &'static str {
    env!("CARGO_BIN_EXE_mendeleev")
}

/// Runs the binary with an isolated, empty config directory.
fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    run_with_config(args, config_dir.path())
}

fn run_with_config(args: &[&str], config_dir: &Path) -> Output {
    Command::new(mendeleev_bin())
        .env("MENDELEEV_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn json(output: &Output) -> Value {
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

// ============================================================================
// Table
// ============================================================================

#[test]
fn test_table_text_layout() {
    let output = run(&["table"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next().unwrap();
    assert!(first.trim_start().starts_with('H'));
    assert!(first.trim_end().ends_with("He"));
    assert!(stdout.contains("Lanthanides"));
    assert!(stdout.contains("Actinides"));
}

#[test]
fn test_table_json_placements() {
    let cells = json(&run(&["table", "--json"]));
    let cells = cells.as_array().unwrap();
    assert_eq!(cells.len(), 118);

    assert_eq!(cells[0]["symbol"], "H");
    assert_eq!(cells[0]["placement"]["surface"], "grid");
    assert_eq!(cells[0]["placement"]["row"], 1);
    assert_eq!(cells[0]["placement"]["column"], 1);

    let la = cells.iter().find(|c| c["symbol"] == "La").unwrap();
    assert_eq!(la["placement"]["surface"], "series");
    assert_eq!(la["placement"]["series"], "lanthanide");
    assert_eq!(la["placement"]["index"], 0);
}

#[test]
fn test_table_from_data_dir() {
    let dir = sample_data_dir();
    let cells = json(&run(&[
        "--data-dir",
        dir.path().to_str().unwrap(),
        "table",
        "--json",
    ]));
    assert_eq!(cells.as_array().unwrap().len(), 8);
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_prefix_json() {
    let result = json(&run(&["search", "hydro", "--json"]));
    assert_eq!(result["count"], 1);
    assert_eq!(result["symbols"], serde_json::json!(["H"]));
}

#[test]
fn test_search_infix_matches_nothing() {
    let result = json(&run(&["search", "ydro", "--json"]));
    assert_eq!(result["count"], 0);
}

#[test]
fn test_search_persian_digits() {
    let dir = sample_data_dir();
    let result = json(&run(&[
        "search",
        "۷",
        "--json",
        "--data-dir",
        dir.path().to_str().unwrap(),
    ]));
    assert_eq!(result["symbols"], serde_json::json!(["Li", "N"]));
}

#[test]
fn test_search_missing_aliases_is_io_error() {
    let dir = data_dir(Some(SAMPLE_ELEMENTS), None);
    let output = run(&["--data-dir", dir.path().to_str().unwrap(), "search", "h"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("aliases.json"), "stderr: {stderr}");
}

#[test]
fn test_search_table_marks_unmatched() {
    let output = run(&["search", "iron", "--table"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fe"));
    assert!(!stdout.contains("He"));
}

// ============================================================================
// Find / Show / Compare / Stats
// ============================================================================

#[test]
fn test_find_ranks_exact_symbol_first() {
    let results = json(&run(&["find", "fe", "--json"]));
    let results = results.as_array().unwrap();
    assert_eq!(results[0]["symbol"], "Fe");
    assert!(results[0]["relevance_score"].as_u64().unwrap() >= 100);
}

#[test]
fn test_find_short_query_is_empty() {
    let results = json(&run(&["find", "h", "--json"]));
    assert!(results.as_array().unwrap().is_empty());
}

#[test]
fn test_find_limit_out_of_range() {
    let output = run(&["find", "iron", "--limit", "0"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_show_by_number_symbol_and_name() {
    for id in ["26", "fe", "Iron"] {
        let element = json(&run(&["show", id, "--json"]));
        assert_eq!(element["symbol"], "Fe", "lookup by {id}");
    }
}

#[test]
fn test_show_unknown_element() {
    let output = run(&["show", "Xx"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Element Xx not found"));
}

#[test]
fn test_show_persian_name() {
    let output = run(&["--lang", "fa", "show", "H"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("هیدروژن"));
}

#[test]
fn test_compare_json() {
    let result = json(&run(&["compare", "Li", "Na", "--json"]));
    let similar: Vec<&str> = result["similarities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["property"].as_str().unwrap())
        .collect();
    assert!(similar.contains(&"group"));
    assert!(similar.contains(&"category"));
    assert!(!result["differences"].as_array().unwrap().is_empty());
}

#[test]
fn test_stats_json() {
    let stats = json(&run(&["stats", "--json"]));
    assert_eq!(stats["total_elements"], 118);
    assert_eq!(stats["categories"]["noble-gas"], 7);
    assert_eq!(stats["periods"]["2"], 8);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_show_default() {
    let output = run(&["config", "show"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Mendeleev Configuration"));
}

#[test]
fn test_config_set_then_show() {
    let config_dir = TempDir::new().unwrap();

    let output = run_with_config(&["config", "set", "ui.language", "fa"], config_dir.path());
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config_dir.path().join("config.toml").exists());

    let config = json(&run_with_config(&["config", "show", "--json"], config_dir.path()));
    assert_eq!(config["ui"]["language"], "fa");

    // The configured language now applies to subcommands.
    let output = run_with_config(&["show", "H"], config_dir.path());
    assert!(String::from_utf8_lossy(&output.stdout).contains("هیدروژن"));
}

#[test]
fn test_config_set_invalid_value() {
    let output = run(&["config", "set", "server.port", "0"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_unknown_key() {
    let output = run(&["config", "set", "ui.colour", "red"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ui.language"));
}
