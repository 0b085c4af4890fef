//! Task model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::fields::{default_true, id_string, null_as_default, null_as_true};
use super::{PlannerTaskMeta, TaskStatus};

/// A task of a project plan.
///
/// Sub-phases are stored as tasks too; their role is recorded in the planner
/// meta tag inside [`Task::objective`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Task {
    /// Unique identifier of the task
    #[serde(deserialize_with = "id_string")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub id: String,

    /// ID of the phase the task was filed under (may not match any phase)
    #[serde(default, deserialize_with = "id_string")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub project_phase_id: String,

    /// Display name of the task
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Planned start date (ISO 8601 date or timestamp)
    #[serde(default)]
    pub starts_on: Option<String>,

    /// Planned end date (ISO 8601 date or timestamp)
    #[serde(default)]
    pub ends_on: Option<String>,

    /// Manual ordering position among siblings
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<i64>"))]
    pub position: i64,

    /// Normalized status
    #[serde(default)]
    pub status: TaskStatus,

    /// Whether the task is active
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<bool>"))]
    pub active: bool,

    /// Free text, or a planner meta tag (see [`PlannerTaskMeta`])
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub objective: String,
}

impl Task {
    /// Creates a planned task under the given phase id.
    pub fn new(
        id: impl Into<String>,
        project_phase_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            project_phase_id: project_phase_id.into(),
            name: name.into(),
            active: true,
            ..Default::default()
        }
    }

    /// Decoded planner meta, if the objective carries one.
    pub fn meta(&self) -> Option<PlannerTaskMeta> {
        PlannerTaskMeta::decode(&self.objective)
    }

    /// The objective as free text, or `None` when it holds a meta tag.
    pub fn objective_text(&self) -> Option<&str> {
        if PlannerTaskMeta::is_tagged(&self.objective) || self.objective.is_empty() {
            None
        } else {
            Some(&self.objective)
        }
    }
}
