//! Display rows derived from a project plan.

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// Id of the synthetic phase that groups tasks without a known phase.
pub const NO_PHASE_ID: &str = "";

/// What a planning row represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Phase,
    Subphase,
    Task,
}

/// One line of the indented planning listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanningRow {
    /// Phase or task id (`""` for the "no phase" placeholder)
    pub id: String,

    pub kind: RowKind,

    /// Indentation level: 0 phase, 1 sub-phase or direct task, 2 nested task
    pub level: u8,

    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<String>,

    /// Status of task and sub-phase rows; `None` for phase rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    /// Precomputed percent complete
    pub progress_percent: u8,
}

impl PlanningRow {
    /// Whether the row shows a cancelled badge instead of its percent.
    pub fn is_cancelled(&self) -> bool {
        self.status.is_some_and(|s| s.is_cancelled())
    }

    /// Whether this is the synthetic "no phase" placeholder row.
    pub fn is_placeholder(&self) -> bool {
        self.kind == RowKind::Phase && self.id == NO_PHASE_ID
    }
}
