//! Integration tests for the `propreg` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

fn propreg(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("propreg").expect("binary built");
    cmd.arg("--cwd")
        .arg(project)
        .env("PROPREG_CONFIG", project.join("no-global-config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn write_registry(project: &Path, rel: &str, body: Value) {
    let path = project.join("Config").join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body.to_string()).unwrap();
}

fn read_default(project: &Path) -> Value {
    let text = fs::read_to_string(project.join("Config/Default.PropRegistry.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn set_creates_default_document() {
    let temp = TempDir::new().unwrap();

    propreg(temp.path())
        .args(["set", "bench", "--path", "/Game/Bench", "--size", "Small"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'bench'"));

    assert_eq!(
        read_default(temp.path()),
        json!({ "definitions": [ { "name": "bench", "path": "/Game/Bench", "size": "Small" } ] })
    );
}

#[test]
fn set_twice_reports_update() {
    let temp = TempDir::new().unwrap();
    let args = ["set", "bench", "--path", "/Game/Bench", "--size", "Small"];

    propreg(temp.path()).args(args).assert().success();
    propreg(temp.path())
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 'bench'"));

    assert_eq!(read_default(temp.path())["definitions"].as_array().unwrap().len(), 1);
}

#[test]
fn set_rejects_unknown_size() {
    let temp = TempDir::new().unwrap();

    propreg(temp.path())
        .args(["set", "bench", "--path", "/Game/Bench", "--size", "Colossal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown prop size"));

    assert!(!temp.path().join("Config/Default.PropRegistry.json").exists());
}

#[test]
fn list_json_shows_override() {
    let temp = TempDir::new().unwrap();
    write_registry(
        temp.path(),
        "Default.PropRegistry.json",
        json!({ "definitions": [ { "name": "bench", "path": "/b", "size": "Small" } ] }),
    );
    write_registry(
        temp.path(),
        "user.PropRegistry.json",
        json!({ "definitions": [ { "name": "bench", "path": "/b", "size": "Big" } ] }),
    );

    let output = propreg(temp.path())
        .args(["list", "--json", "--no-resolve"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let outcome: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["props"].as_array().unwrap().len(), 1);
    assert_eq!(outcome["props"][0]["size"], "Big");
    assert_eq!(outcome["files"].as_array().unwrap().len(), 2);
}

#[test]
fn order_lists_default_first() {
    let temp = TempDir::new().unwrap();
    for name in ["b", "Default", "a"] {
        write_registry(
            temp.path(),
            &format!("{}.PropRegistry.json", name),
            json!({ "definitions": [] }),
        );
    }

    let output = propreg(temp.path()).args(["order", "--json"]).output().unwrap();
    assert!(output.status.success());

    let files: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = files
        .iter()
        .map(|f| Path::new(f).file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Default.PropRegistry.json",
            "a.PropRegistry.json",
            "b.PropRegistry.json"
        ]
    );
}

#[test]
fn import_merges_file_into_default() {
    let temp = TempDir::new().unwrap();
    write_registry(
        temp.path(),
        "Default.PropRegistry.json",
        json!({ "version": 3, "definitions": [ { "name": "a", "path": "/a", "size": "Tiny" } ] }),
    );
    let incoming = temp.path().join("incoming.json");
    fs::write(
        &incoming,
        json!({ "definitions": [
            { "name": "a", "path": "/a2", "size": "Huge" },
            { "name": "b", "path": "/b", "size": "Small" }
        ] })
        .to_string(),
    )
    .unwrap();

    propreg(temp.path())
        .arg("import")
        .arg(&incoming)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 added, 1 updated"));

    let doc = read_default(temp.path());
    assert_eq!(doc["version"], 3);
    assert_eq!(doc["definitions"][0]["size"], "Huge");
    assert_eq!(doc["definitions"][1]["name"], "b");
}

#[test]
fn definitions_prints_ids() {
    let temp = TempDir::new().unwrap();
    write_registry(
        temp.path(),
        "Default.PropRegistry.json",
        json!({ "definitions": [ { "name": "Bench", "path": "/b", "size": "Small" } ] }),
    );

    propreg(temp.path())
        .arg("definitions")
        .assert()
        .success()
        .stdout(predicate::str::contains("static.prop.bench"));
}

#[test]
fn registry_root_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".propreg");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "registry_root = \"Elsewhere\"\n").unwrap();

    propreg(temp.path())
        .args(["--registry-root", "Flagged", "set", "a", "--path", "/a", "--size", "Tiny"])
        .assert()
        .success();

    assert!(temp.path().join("Flagged/Default.PropRegistry.json").exists());
    assert!(!temp.path().join("Elsewhere").exists());
}

#[test]
fn config_reports_project_file() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".propreg");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "content_root = \"Assets\"\n").unwrap();

    let output = propreg(temp.path()).args(["config", "--json"]).output().unwrap();
    assert!(output.status.success());

    let shown: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        shown["content_root"],
        json!(temp.path().join("Assets").to_string_lossy())
    );
    assert!(shown["project_config"].is_string());
    assert!(shown["global_config"].is_null());
}

#[test]
fn invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".propreg");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[log]\nlevel = \"loud\"\n").unwrap();

    propreg(temp.path())
        .arg("order")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid log level"));
}
