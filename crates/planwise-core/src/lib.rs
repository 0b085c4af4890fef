//! Core library for the Planwise project planning tool.
//!
//! This crate turns a project's flat phase and task lists into the planning
//! view: percent complete per task, phase and project, and the ordered,
//! indented rows of the planning listing.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): serde types for the project-detail payload, the
//!   planner meta tag and the computed summary and rows
//! - **Planning** ([`planning`]): the index, progress roll-up, row builder
//!   and diagnostics; pure and infallible
//! - **Display** ([`display`]): markdown rendering and export reports
//! - **Configuration** ([`config`]): labels and formats for rendered output
//!
//! # Quick Start
//!
//! ```rust
//! use planwise_core::{build_planning_rows, calculate_planning_progress, ProjectDetail};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let project = ProjectDetail::from_json_str(
//!     r#"{
//!         "id": 7,
//!         "name": "Website",
//!         "phases": [{ "id": 1, "name": "Build", "position": 1 }],
//!         "tasks": [
//!             { "id": 10, "projectPhaseId": 1, "name": "Layout", "status": "concluida" },
//!             { "id": 11, "projectPhaseId": 1, "name": "Copy", "status": "em_andamento" }
//!         ]
//!     }"#,
//! )?;
//!
//! let progress = calculate_planning_progress(&project);
//! assert_eq!(progress.project_percent, 50);
//!
//! let rows = build_planning_rows(&project, &progress);
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[0].title, "Build");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod planning;

// Re-export commonly used types
pub use config::{ConfigBuilder, ExportFormat, PlanwiseConfig};
pub use display::{DisplayStyle, PlanningReport, PlanningRows, ProgressOverview};
pub use error::{PlanwiseError, Result};
pub use models::{
    load_project, ParentType, Phase, PlannerTaskMeta, PlanningProgressSummary, PlanningRow,
    ProgressCounts, ProjectDetail, RowKind, Task, TaskStatus,
};
pub use planning::{build_planning_rows, calculate_planning_progress, diagnose, PlanningDiagnostics};
