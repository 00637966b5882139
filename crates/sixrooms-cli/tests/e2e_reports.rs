//! E2E tests for the report commands: `sr analyze`, `sr outline`,
//! `sr check` and `sr layouts` in each output mode.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::path::Path;
use tempfile::TempDir;

fn sr_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sr"));
    cmd.current_dir(dir);
    cmd.env("SIXROOMS_LOG", "error");
    cmd.env("XDG_CONFIG_HOME", dir.join("xdg"));
    cmd.env_remove("SIXROOMS_FORMAT");
    cmd
}

/// Square a-b-c-d with pendant e off c; entrance at e.
fn square_with_pendant() -> Value {
    let room = |id: &str, label: &str, entrance: bool| {
        json!({"id": id, "label": label, "kind": "empty", "content": "", "entrance": entrance})
    };
    json!({
        "rooms": [
            room("a", "Atrium", false),
            room("b", "Barracks", false),
            room("c", "Cistern", false),
            room("d", "Den", false),
            room("e", "Entry", true),
        ],
        "connections": [
            {"source": "a", "target": "b", "kind": "open"},
            {"source": "b", "target": "c", "kind": "closed"},
            {"source": "c", "target": "d", "kind": "open"},
            {"source": "d", "target": "a", "kind": "secret", "clue_room": "e"},
            {"source": "e", "target": "c", "kind": "trapped", "description": "Spiked pit"},
        ]
    })
}

fn write_graph(dir: &Path, graph: &Value) -> String {
    let path = dir.join("graph.json");
    std::fs::write(&path, graph.to_string()).expect("write graph");
    path.to_string_lossy().into_owned()
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("sr should not crash");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid JSON")
}

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

#[test]
fn analyze_json_reports_single_bridge_and_depths() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_graph(dir.path(), &square_with_pendant());

    let report = json_output(sr_cmd(dir.path()).args(["analyze", "--graph", &path, "--json"]));
    let bridges = report["bridges"].as_array().expect("bridges");
    assert_eq!(bridges.len(), 1);
    assert_eq!(bridges[0]["a"], "c");
    assert_eq!(bridges[0]["b"], "e");

    let depth_of = |id: &str| {
        report["depths"]
            .as_array()
            .unwrap()
            .iter()
            .find(|row| row["room"] == id)
            .map(|row| row["depth"].clone())
    };
    assert_eq!(depth_of("e"), Some(json!(0)));
    assert_eq!(depth_of("c"), Some(json!(1)));
    assert_eq!(depth_of("a"), Some(json!(3)));
}

#[test]
fn analyze_text_is_tab_separated() {
    let dir = TempDir::new().expect("temp dir");
    sr_cmd(dir.path())
        .args(["analyze", "--format", "text"])
        .write_stdin(square_with_pendant().to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("bridge\tc\te\n"))
        .stdout(predicate::str::contains("depth\te\t0\n"));
}

#[test]
fn analyze_pretty_uses_labels() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_graph(dir.path(), &square_with_pendant());
    sr_cmd(dir.path())
        .args(["analyze", "--graph", &path, "--format", "pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cistern <-> Entry"));
}

// ---------------------------------------------------------------------------
// outline
// ---------------------------------------------------------------------------

#[test]
fn outline_puts_entrances_first_and_resolves_clues() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_graph(dir.path(), &square_with_pendant());

    let rooms = json_output(sr_cmd(dir.path()).args(["outline", "--graph", &path, "--json"]));
    let order: Vec<&str> = rooms
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["e", "a", "b", "c", "d"]);

    let atrium = &rooms[1];
    let passages = atrium["passages"].as_array().unwrap();
    assert_eq!(passages[0]["to_label"], "Barracks");
    assert_eq!(passages[1]["to_label"], "Den");
    assert_eq!(passages[1]["clue"]["label"], "Entry");
}

#[test]
fn outline_pretty_shows_passages() {
    let dir = TempDir::new().expect("temp dir");
    sr_cmd(dir.path())
        .args(["outline", "--format", "pretty"])
        .write_stdin(square_with_pendant().to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry [entrance]"))
        .stdout(predicate::str::contains("Cistern (trapped) - Spiked pit"))
        .stdout(predicate::str::contains("Den (secret); clue in Entry"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_on_generated_graph() {
    let dir = TempDir::new().expect("temp dir");
    let output = sr_cmd(dir.path())
        .args(["generate", "--seed", "3"])
        .output()
        .expect("generate should not crash");
    assert!(output.status.success());

    sr_cmd(dir.path())
        .args(["check", "--format", "text"])
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ok\t6\t6"));
}

#[test]
fn check_fails_on_broken_graph() {
    let dir = TempDir::new().expect("temp dir");
    let mut graph = square_with_pendant();
    graph["connections"]
        .as_array_mut()
        .unwrap()
        .push(json!({"source": "b", "target": "a", "kind": "open"}));
    graph["connections"]
        .as_array_mut()
        .unwrap()
        .push(json!({"source": "a", "target": "ghost", "kind": "open"}));
    let path = write_graph(dir.path(), &graph);

    let output = sr_cmd(dir.path())
        .args(["check", "--graph", &path, "--json"])
        .output()
        .expect("check should not crash");
    assert!(!output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(report["valid"], false);
    let kinds: Vec<&str> = report["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["issue"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"parallel_connection"));
    assert!(kinds.contains(&"dangling_endpoint"));
}

// ---------------------------------------------------------------------------
// layouts
// ---------------------------------------------------------------------------

#[test]
fn layouts_text_has_header_and_eight_rows() {
    let dir = TempDir::new().expect("temp dir");
    let output = sr_cmd(dir.path())
        .args(["layouts", "--format", "text"])
        .output()
        .expect("layouts should not crash");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "index\tcycle\tname\tedges");
    assert_eq!(lines.len(), 9);
}

#[test]
fn layouts_output_follows_project_config() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("sixrooms.toml"), "output = \"json\"\n").expect("write config");
    let rows = json_output(sr_cmd(dir.path()).args(["layouts"]));
    assert_eq!(rows.as_array().map(Vec::len), Some(8));
}

#[test]
fn env_format_beats_project_config() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("sixrooms.toml"), "output = \"json\"\n").expect("write config");
    sr_cmd(dir.path())
        .env("SIXROOMS_FORMAT", "text")
        .args(["layouts"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("index\t"));
}
