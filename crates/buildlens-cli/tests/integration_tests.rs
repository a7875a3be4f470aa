//! End-to-end tests for the `buildlens` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"
root = ":"

[[projects]]
path = ":"
name = "demo"
subprojects = [":app"]

[[projects.tasks]]
name = "clean"
group = "build"

[[projects]]
path = ":app"
name = "app"
plugins = ["java"]

[[projects.tasks]]
name = "compileJava"
group = "build"
description = "Compiles main Java source."

[[projects.tasks]]
name = "test"
group = "verification"

[[projects.configurations]]
name = "runtimeClasspath"

[[projects.configurations.components]]
coordinate = "demo:app:"
dependencies = ["com.a:a:1", "com.b:b:1"]

[[projects.configurations.components]]
coordinate = "com.a:a:1"
dependencies = ["com.b:b:1"]

[[projects.configurations.components]]
coordinate = "com.b:b:1"
"#;

/// Write the fixture into a fresh temp dir; keep the guard alive.
fn snapshot() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.toml");
    fs::write(&path, SNAPSHOT).unwrap();
    (dir, path)
}

fn buildlens() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("buildlens");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_flag() {
    buildlens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("BuildLens"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag() {
    buildlens()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_model_json_uses_client_field_names() {
    let (_dir, path) = snapshot();
    let output = buildlens()
        .args(["model", "--format", "json"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["isRoot"], true);
    assert_eq!(json["name"], "demo");
    assert_eq!(json["children"][0]["projectPath"], ":app");
    assert_eq!(json["children"][0]["dependencyRoot"]["type"], "PROJECT");

    let root_tasks: Vec<&str> = json["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(root_tasks, vec!["clean", "compileJava", "test"]);
    assert_eq!(json["tasks"][1]["project"], "demo");
}

#[test]
fn test_model_json_with_diagnostics_wraps_root() {
    let (_dir, path) = snapshot();
    buildlens()
        .args(["model", "--format", "json", "--diagnostics"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"diagnostics\""))
        .stdout(predicate::str::contains("\"truncatedRevisits\": 1"));
}

#[test]
fn test_model_tree_is_the_default() {
    let (_dir, path) = snapshot();
    buildlens()
        .arg("model")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("demo (:) [3 tasks]"))
        .stdout(predicate::str::contains("└── app (:app) [2 tasks]"));
}

#[test]
fn test_model_format_from_environment() {
    let (_dir, path) = snapshot();
    buildlens()
        .env("BUILDLENS__OUTPUT__FORMAT", "json")
        .arg("model")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_tasks_list_and_group_filter() {
    let (_dir, path) = snapshot();
    buildlens()
        .args(["tasks", "--format", "list", "--group", "build"])
        .arg(&path)
        .assert()
        .success()
        .stdout("clean\ncompileJava\n");
}

#[test]
fn test_tasks_csv_has_header() {
    let (_dir, path) = snapshot();
    buildlens()
        .args(["tasks", "--format", "csv"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,group,path,project,description\n"))
        .stdout(predicate::str::contains("test,verification,:app:test,demo,"));
}

#[test]
fn test_deps_marks_truncated_revisits() {
    let (_dir, path) = snapshot();
    buildlens()
        .args(["deps", "--project", ":app"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("runtimeClasspath"))
        .stdout(predicate::str::contains("│   └── com.b:b:1\n"))
        .stdout(predicate::str::contains("└── com.b:b:1 (*)"));
}

#[test]
fn test_config_path_prints_location() {
    buildlens()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("toml"));
}

#[test]
fn test_config_get_reads_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[model]\npretty_json = false\n").unwrap();

    buildlens()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "model.pretty_json"])
        .assert()
        .success()
        .stdout("model.pretty_json = false\n");
}

#[test]
fn test_completions_bash() {
    buildlens()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buildlens"));
}
