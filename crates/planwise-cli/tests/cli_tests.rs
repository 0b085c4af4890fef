use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PROJECT: &str = r#"{
    "id": 3,
    "name": "Office move",
    "phases": [
        { "id": "p1", "name": "Preparation", "position": 1, "startsOn": "2024-03-01" },
        { "id": "p2", "name": "Moving day", "position": 2, "startsOn": "2024-04-15", "endsOn": "2024-04-15" }
    ],
    "tasks": [
        { "id": "s1", "projectPhaseId": "p1", "name": "Inventory", "objective": "__planner_meta__:{\"kind\":\"subphase\"}" },
        { "id": "t1", "projectPhaseId": "p1", "name": "Count chairs", "status": "concluida", "objective": "__planner_meta__:{\"kind\":\"task\",\"parentType\":\"subphase\",\"parentId\":\"s1\"}" },
        { "id": "t2", "projectPhaseId": "p1", "name": "Count desks", "status": "pendente", "objective": "__planner_meta__:{\"kind\":\"task\",\"parentType\":\"subphase\",\"parentId\":\"s1\"}" },
        { "id": "t3", "projectPhaseId": "p2", "name": "Book trucks", "status": "cancelada" },
        { "id": "t4", "projectPhaseId": "p2", "name": "Load boxes", "status": "concluida" },
        { "id": "t5", "projectPhaseId": "p9", "name": "Return keys", "status": "em_andamento" }
    ]
}"#;

/// Helper function to create a temporary directory holding the fixture
fn create_cli_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("project.json");
    fs::write(&path, PROJECT).expect("Failed to write project fixture");
    (temp_dir, path)
}

/// Helper function to create a Command with --no-color and an isolated
/// XDG config directory
fn planwise_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("planwise").expect("Failed to find planwise binary");
    cmd.env("XDG_CONFIG_HOME", temp_dir.path().join("xdg"));
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_progress() {
    let (temp_dir, path) = create_cli_test_environment();

    // Inventory 1/2, Moving day 1/1, unlinked 0/1
    planwise_cmd(&temp_dir)
        .arg("progress")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Office move"))
        .stdout(predicate::str::contains("50% (2/4 tasks completed)"))
        .stdout(predicate::str::contains("- **Preparation**: 50%"))
        .stdout(predicate::str::contains("- **Moving day**: 100%"));
}

#[test]
fn test_cli_rows() {
    let (temp_dir, path) = create_cli_test_environment();

    let expected = "\
- **Preparation** (from 01/03/2024): 50%
  - Inventory: 50%
    - Count chairs: 100%
    - Count desks: 0%
- **Moving day** (15/04/2024 - 15/04/2024): 100%
  - Book trucks: Cancelled
  - Load boxes: 100%
- **No phase**: 0%
  - Return keys: 0%
";

    planwise_cmd(&temp_dir)
        .arg("rows")
        .arg(&path)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_cli_rows_from_stdin() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    planwise_cmd(&temp_dir)
        .args(["rows", "-"])
        .write_stdin(PROJECT)
        .assert()
        .success()
        .stdout(predicate::str::contains("  - Inventory: 50%"));
}

#[test]
fn test_cli_rows_with_config_labels() {
    let (temp_dir, path) = create_cli_test_environment();
    let config_path = temp_dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "noPhaseLabel": "Sem fase", "cancelledLabel": "Cancelada", "dateFormat": "%Y-%m-%d" }"#,
    )
    .expect("Failed to write config");

    planwise_cmd(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("rows")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Sem fase**: 0%"))
        .stdout(predicate::str::contains("  - Book trucks: Cancelada"))
        .stdout(predicate::str::contains("(from 2024-03-01)"));
}

#[test]
fn test_cli_export_markdown_to_file() {
    let (temp_dir, path) = create_cli_test_environment();
    let output = temp_dir.path().join("report.md");

    planwise_cmd(&temp_dir)
        .arg("export")
        .arg(&path)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 9 planning rows"))
        .stdout(predicate::str::contains("(markdown)"));

    let report = fs::read_to_string(&output).expect("Failed to read report");
    assert!(report.starts_with("# Office move\n"));
    assert!(report.contains("    - Count chairs: 100%"));
}

#[test]
fn test_cli_export_json_to_stdout() {
    let (temp_dir, path) = create_cli_test_environment();

    let assert = planwise_cmd(&temp_dir)
        .arg("export")
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("Invalid UTF-8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON report");
    assert_eq!(value["summary"]["projectPercent"], 50);
    assert_eq!(value["summary"]["taskPercentByID"]["s1"], 50);
    assert_eq!(value["rows"][1]["kind"], "subphase");
}

#[test]
fn test_cli_check_reports_findings() {
    let (temp_dir, path) = create_cli_test_environment();

    planwise_cmd(&temp_dir)
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Tasks without a phase"))
        .stdout(predicate::str::contains("- t5"));
}

#[test]
fn test_cli_meta_encodes_objective() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    planwise_cmd(&temp_dir)
        .args(["meta", "subphase"])
        .assert()
        .success()
        .stdout("__planner_meta__:{\"kind\":\"subphase\"}\n");

    planwise_cmd(&temp_dir)
        .args(["meta", "task", "--parent-type", "task", "--parent-id", "t1"])
        .assert()
        .success()
        .stdout("__planner_meta__:{\"kind\":\"task\",\"parentType\":\"task\",\"parentId\":\"t1\"}\n");
}

#[test]
fn test_cli_schema_describes_project() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    planwise_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"phases\""))
        .stdout(predicate::str::contains("\"projectPhaseId\""));
}

#[test]
fn test_cli_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    planwise_cmd(&temp_dir)
        .arg("progress")
        .arg(temp_dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load project"));
}

#[test]
fn test_cli_invalid_json_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "[1, 2").expect("Failed to write file");

    planwise_cmd(&temp_dir)
        .arg("rows")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_cli_invalid_config_fails() {
    let (temp_dir, path) = create_cli_test_environment();
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, r#"{ "dateFormat": "" }"#).expect("Failed to write config");

    planwise_cmd(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("rows")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
