//! Integration tests for the tagmatch CLI

mod common;

use common::{tagmatch, write_catalog, SAMPLE_CATALOG};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    tagmatch(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: tagmatch"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    tagmatch(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("tagmatch"));
}

#[test]
fn test_recommend_human() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    let output = tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["recommend", "Red Shoes", "-n", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Blue Shoes"));
    assert!(lines[1].contains("Red Hat"));
    assert!(!stdout.contains("Red Shoes"));
}

#[test]
fn test_recommend_catalog_from_env() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    tagmatch(dir.path())
        .env("TAGMATCH_CATALOG", &catalog)
        .args(["recommend", "Blue Shoes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Red Shoes"));
}

#[test]
fn test_recommend_unknown_item_is_not_an_error() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["recommend", "Green Scarf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recommendations available."));
}

#[test]
fn test_recommend_non_positive_count() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    for count in ["0", "-2"] {
        tagmatch(dir.path())
            .arg("--catalog")
            .arg(&catalog)
            .args(["recommend", "Red Shoes", "--count", count])
            .assert()
            .success()
            .stdout(predicate::str::contains("No recommendations available."));
    }
}

#[test]
fn test_recommend_json() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    let output = tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--format", "json", "recommend", "Red Shoes", "-n", "5"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["item"], "Red Shoes");
    assert_eq!(json["count"], 2);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results[0]["name"], "Blue Shoes");
    assert_eq!(results[0]["brand"], "Bolt");
    assert_eq!(results[0]["rating"], 3.5);
    assert_eq!(results[1]["name"], "Red Hat");
    assert!(results[1]["rating"].is_null());
    assert!(results[0]["score"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_recommend_json_empty_has_message() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    let output = tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--format", "json", "recommend", "Nothing"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 0);
    assert_eq!(json["message"], "No recommendations available.");
}

#[test]
fn test_recommend_records() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--format", "records", "recommend", "Red Shoes", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H tagmatch=1 records=1 mode=recommend item=\"Red Shoes\" results=1",
        ))
        .stdout(predicate::str::contains("I 1 score="))
        .stdout(predicate::str::contains("\"Blue Shoes\" brand=\"Bolt\""));
}

#[test]
fn test_recommend_respects_config_default_count() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);
    fs::write(
        dir.path().join("config.toml"),
        "[recommend]\ndefault_count = 1\n",
    )
    .unwrap();

    let output = tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["recommend", "Red Shoes"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 1);
}

#[test]
fn test_recommend_truncates_long_names() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(
        dir.path(),
        "Name,Tags\nShort,red shoes\nAn Extremely Long Product Name,red shoes\n",
    );
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[display]\nname_width = 10\n").unwrap();

    tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("--config")
        .arg(&config)
        .args(["recommend", "Short"])
        .assert()
        .success()
        .stdout(predicate::str::contains("An Extreme..."));
}

#[test]
fn test_missing_catalog_flag_is_usage_error() {
    let dir = tempdir().unwrap();
    tagmatch(dir.path())
        .args(["recommend", "Red Shoes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no catalog given"));
}

#[test]
fn test_missing_catalog_file_is_data_error() {
    let dir = tempdir().unwrap();
    tagmatch(dir.path())
        .arg("--catalog")
        .arg(dir.path().join("absent.csv"))
        .args(["recommend", "Red Shoes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("catalog not found"));
}

#[test]
fn test_missing_column_json_error() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), "Name,Brand\nRed Shoes,Acme\n");

    let output = tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--format", "json", "recommend", "Red Shoes"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "missing_column");
}

#[test]
fn test_unknown_format_json_envelope() {
    let dir = tempdir().unwrap();
    tagmatch(dir.path())
        .args(["--format", "json", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"error\""));
}

#[test]
fn test_score_command() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["score", "Red Shoes", "Red Shoes"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1.0000\n"));

    tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["score", "Blue Shoes", "Red Hat"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0.0000\n"));
}

#[test]
fn test_score_unknown_item_is_data_error() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["score", "Red Shoes", "Nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("item not found: Nope"));
}

#[test]
fn test_list_command() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["list", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Red Shoes\nBlue Shoes\n"));
}

#[test]
fn test_list_json() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    let output = tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--format", "json", "list"])
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["items"].as_array().unwrap().len(), 3);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    tagmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--verbose", "recommend", "Red Shoes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("recommend"));
}
