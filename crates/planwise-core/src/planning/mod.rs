//! Planning tree construction and progress roll-up.
//!
//! A project arrives as two flat lists, phases and tasks. Tasks carry a
//! planner meta tag in their objective that says whether they are a
//! sub-phase, a task directly under a phase, or a task nested under another
//! task. This module rebuilds the tree from those lists and derives two
//! outputs from it:
//!
//! - [`calculate_planning_progress`]: percent complete per task, per phase
//!   and for the whole project
//! - [`build_planning_rows`]: the ordered, indented rows of the planning
//!   listing
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  ProjectDetail  │    │  PlanningIndex  │    │ Progress + Rows │
//! │ (phases, tasks) │───▶│ (meta, parents, │───▶│  (post-order /  │
//! │                 │    │   child slots)  │    │    pre-order)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Counting rules
//!
//! - A task with children counts as the sum of its children; its own status
//!   is ignored.
//! - A task without children counts as one task, completed only when its
//!   status is `concluida`. A cancelled leaf counts as nothing.
//! - A phase sums its top-level tasks only; nested tasks are already folded
//!   into their parents.
//! - The project sums every phase plus every unlinked task.
//! - A parent cycle contributes nothing along the edge that closes it.
//!
//! Both operations are pure and never fail. Malformed dates sort last,
//! malformed meta places a task directly under its phase, and an empty count
//! is 0 percent.
//!
//! # Examples
//!
//! ```rust
//! use planwise_core::models::{ParentType, Phase, PlannerTaskMeta, ProjectDetail, Task, TaskStatus};
//! use planwise_core::planning::{build_planning_rows, calculate_planning_progress};
//!
//! let subphase = Task {
//!     objective: PlannerTaskMeta::Subphase.encode().unwrap(),
//!     ..Task::new("s1", "p1", "Design")
//! };
//! let done = Task {
//!     status: TaskStatus::Concluida,
//!     objective: PlannerTaskMeta::nested(ParentType::Subphase, "s1").encode().unwrap(),
//!     ..Task::new("t1", "p1", "Wireframes")
//! };
//! let open = Task {
//!     objective: PlannerTaskMeta::nested(ParentType::Subphase, "s1").encode().unwrap(),
//!     ..Task::new("t2", "p1", "Mockups")
//! };
//! let project = ProjectDetail::new(vec![Phase::new("p1", "Build")], vec![subphase, done, open]);
//!
//! let progress = calculate_planning_progress(&project);
//! assert_eq!(progress.task_percent("s1"), 50);
//! assert_eq!(progress.phase_percent("p1"), 50);
//! assert_eq!(progress.project_percent, 50);
//!
//! let rows = build_planning_rows(&project, &progress);
//! let levels: Vec<u8> = rows.iter().map(|row| row.level).collect();
//! assert_eq!(levels, vec![0, 1, 2, 2]);
//! ```

pub mod diagnostics;
pub mod index;
pub mod order;
pub mod progress;
pub mod rows;


pub use diagnostics::{DanglingParent, PlanningDiagnostics};
pub use index::{Placement, PlanningIndex, TaskNode};
pub use order::{parse_schedule_date, schedule_order, ScheduleKey, Scheduled, StartKey};
pub use progress::PlanningCounts;
pub use rows::NO_PHASE_TITLE;

use crate::models::{PlanningProgressSummary, PlanningRow, ProjectDetail};

/// Computes percent complete at project, phase and task granularity.
///
/// Every phase id appears in `phase_percent_by_id` and every task id in
/// `task_percent_by_id`. Calling it twice on the same project yields the same
/// summary.
pub fn calculate_planning_progress(project: &ProjectDetail) -> PlanningProgressSummary {
    let index = PlanningIndex::new(project);
    PlanningCounts::compute(&index).summarize(&index)
}

/// Builds the ordered, indented rows of the planning listing.
///
/// Percentages are looked up in `progress`, which is normally the result of
/// [`calculate_planning_progress`] for the same project; ids missing from it
/// show 0.
pub fn build_planning_rows(
    project: &ProjectDetail,
    progress: &PlanningProgressSummary,
) -> Vec<PlanningRow> {
    let index = PlanningIndex::new(project);
    rows::RowBuilder::new(&index, progress).build()
}

/// Reports malformed meta, dangling parents, unlinked tasks and cycles.
pub fn diagnose(project: &ProjectDetail) -> PlanningDiagnostics {
    let index = PlanningIndex::new(project);
    PlanningDiagnostics::collect(&index)
}
