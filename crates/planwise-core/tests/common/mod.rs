use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;

/// Objective tag for a sub-phase.
pub fn subphase_meta() -> String {
    r#"__planner_meta__:{"kind":"subphase"}"#.to_string()
}

/// Objective tag for a task nested under `parent_type` / `parent_id`.
pub fn nested_meta(parent_type: &str, parent_id: &str) -> String {
    format!(
        r#"__planner_meta__:{{"kind":"task","parentType":"{parent_type}","parentId":"{parent_id}"}}"#
    )
}

/// A project-detail document exercising every placement rule.
///
/// - `Discovery` (p1, Jan): `Interviews` done, `Survey` cancelled
/// - `Build` (p2, Feb): sub-phase `Frontend` holding `Layout` (done) and
///   `Styles`, which itself holds `Dark mode` (done)
/// - `Launch` (p3, undated): `Press kit` planned
/// - `Loose end` filed under an unknown phase
pub fn sample_project() -> Value {
    json!({
        "id": 7,
        "name": "Website relaunch",
        "phases": [
            { "id": "p3", "name": "Launch", "position": 0, "startsOn": null },
            { "id": "p2", "name": "Build", "position": 2, "startsOn": "2024-02-01" },
            { "id": "p1", "name": "Discovery", "position": 1, "startsOn": "2024-01-01", "endsOn": "2024-01-31" }
        ],
        "tasks": [
            { "id": "s1", "projectPhaseId": "p2", "name": "Frontend", "status": "em_andamento", "objective": subphase_meta() },
            { "id": "t1", "projectPhaseId": "p2", "name": "Layout", "status": "concluida", "objective": nested_meta("subphase", "s1") },
            { "id": "t2", "projectPhaseId": "p2", "name": "Styles", "status": "iniciada", "objective": nested_meta("subphase", "s1") },
            { "id": "t3", "projectPhaseId": "p2", "name": "Dark mode", "status": "concluida", "objective": nested_meta("task", "t2") },
            { "id": "t4", "projectPhaseId": "p1", "name": "Interviews", "status": "concluida" },
            { "id": "t5", "projectPhaseId": "p1", "name": "Survey", "status": "cancelada" },
            { "id": "t6", "projectPhaseId": 99, "name": "Loose end", "status": "pendente" },
            { "id": "t7", "projectPhaseId": "p3", "name": "Press kit", "status": "planejada", "objective": "Print and online" }
        ]
    })
}

/// Writes `document` to a JSON file inside a fresh temporary directory.
pub fn write_project(document: &Value) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("project.json");
    std::fs::write(&path, document.to_string()).expect("Failed to write project file");
    (temp_dir, path)
}
