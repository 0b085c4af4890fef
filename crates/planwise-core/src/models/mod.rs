//! Data models for project plans.
//!
//! This module contains the input models as the backend returns them
//! ([`ProjectDetail`], [`Phase`], [`Task`]), the typed planner meta decoded
//! from a task's objective ([`PlannerTaskMeta`]), and the derived outputs of
//! the planning computations ([`PlanningProgressSummary`], [`PlanningRow`]).
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Input shape
//!
//! Field names follow the backend's camelCase JSON. Decoding is lenient:
//! ids may be strings or numbers, `null` behaves like an omitted field, and
//! statuses are normalized through [`TaskStatus::normalize`].
//!
//! ```rust
//! use planwise_core::models::{ProjectDetail, TaskStatus};
//!
//! let project = ProjectDetail::from_json_str(r#"{
//!     "name": "Website",
//!     "phases": [{ "id": 1, "name": "Discovery", "position": 0 }],
//!     "tasks": [{
//!         "id": "t1",
//!         "projectPhaseId": "1",
//!         "name": "Interviews",
//!         "status": "em_andamento",
//!         "objective": null
//!     }]
//! }"#).unwrap();
//!
//! assert_eq!(project.phases[0].id, "1");
//! assert_eq!(project.tasks[0].status, TaskStatus::Iniciada);
//! ```

mod fields;
pub mod meta;
pub mod phase;
pub mod project;
pub mod row;
pub mod status;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

pub use meta::{ParentType, PlannerTaskMeta, PLANNER_META_PREFIX};
pub use phase::Phase;
pub use project::{load_project, ProjectDetail};
pub use row::{PlanningRow, RowKind, NO_PHASE_ID};
pub use status::TaskStatus;
pub use summary::{percent_of, PlanningProgressSummary, ProgressCounts};
pub use task::Task;
