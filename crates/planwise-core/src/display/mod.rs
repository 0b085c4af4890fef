//! Display formatting for planning output.
//!
//! Domain models implement `Display` directly; collections, reports and
//! command results get wrapper types. Everything renders as markdown so the
//! CLI can hand it to a terminal renderer or write it to a file unchanged.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Summary + Rows  │    │ Wrappers with a │    │    Markdown     │
//! │                 │───▶│  DisplayStyle   │───▶│  (terminal or   │
//! │                 │    │                 │    │  exported file) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`PlanningRows`], the indented row listing
//! - [`report`]: [`PlanningReport`] and [`ProgressOverview`]
//! - [`results`]: command outcomes ([`ExportResult`], [`EncodedMeta`])
//! - [`style`]: labels and date format applied while rendering
//! - [`datetime`]: schedule date formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use planwise_core::{
//!     display::{DisplayStyle, PlanningReport},
//!     models::{ProjectDetail, Task},
//! };
//!
//! let project = ProjectDetail::new(vec![], vec![Task::new("t1", "", "Loose end")]);
//! let style = DisplayStyle {
//!     no_phase_label: "Sem fase".to_string(),
//!     ..DisplayStyle::default()
//! };
//!
//! let output = PlanningReport::new(&project).with_style(style).to_string();
//! assert!(output.contains("- **Sem fase**: 0%"));
//! assert!(output.contains("  - Loose end: 0%"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod report;
pub mod results;
pub mod style;

pub use collections::PlanningRows;
pub use datetime::{DateRange, ScheduleDate};
pub use models::StyledRow;
pub use report::{PhaseProgress, PlanningReport, ProgressOverview};
pub use results::{EncodedMeta, ExportResult};
pub use style::DisplayStyle;
