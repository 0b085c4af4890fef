//! Planning reports for terminal output and export.
//!
//! A [`PlanningReport`] bundles everything the planning listing shows: the
//! project name, its progress summary and the ordered rows. It renders as
//! markdown through `Display` and serializes to JSON for machine consumers.
//! [`ProgressOverview`] is the shorter per-phase view.

use std::fmt;

use serde::Serialize;

use super::{collections::PlanningRows, style::DisplayStyle};
use crate::config::ExportFormat;
use crate::error::Result;
use crate::models::{PlanningProgressSummary, PlanningRow, ProgressCounts, ProjectDetail};
use crate::planning::{build_planning_rows, calculate_planning_progress, PlanningIndex};

/// Title used when the project has no name.
const UNTITLED_PROJECT: &str = "Untitled project";

/// Progress summary and planning rows of one project.
///
/// # Examples
///
/// ```rust
/// use planwise_core::{
///     display::PlanningReport,
///     models::{Phase, ProjectDetail, Task, TaskStatus},
/// };
///
/// let mut project = ProjectDetail::new(
///     vec![Phase::new("p1", "Launch")],
///     vec![Task {
///         status: TaskStatus::Concluida,
///         ..Task::new("t1", "p1", "Press kit")
///     }],
/// );
/// project.name = "Website".to_string();
///
/// let report = PlanningReport::new(&project);
/// let markdown = report.to_string();
/// assert!(markdown.starts_with("# Website"));
/// assert!(markdown.contains("100% (1/1 tasks completed)"));
///
/// let json = report.to_json().unwrap();
/// assert!(json.contains("\"projectPercent\": 100"));
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningReport {
    pub project_id: String,
    pub project_name: String,
    pub summary: PlanningProgressSummary,
    pub rows: Vec<PlanningRow>,
    #[serde(skip)]
    style: DisplayStyle,
}

impl PlanningReport {
    /// Computes progress and rows for a project.
    pub fn new(project: &ProjectDetail) -> Self {
        let summary = calculate_planning_progress(project);
        let rows = build_planning_rows(project, &summary);
        Self {
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            summary,
            rows,
            style: DisplayStyle::default(),
        }
    }

    /// Replaces the style used for markdown rendering.
    pub fn with_style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Pretty-printed JSON document of the report.
    ///
    /// # Errors
    ///
    /// Returns `PlanwiseError::Serialization` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the report in the given export format.
    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Markdown => Ok(self.to_string()),
            ExportFormat::Json => self.to_json(),
        }
    }

    fn title(&self) -> &str {
        if self.project_name.trim().is_empty() {
            UNTITLED_PROJECT
        } else {
            &self.project_name
        }
    }
}

impl fmt::Display for PlanningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title())?;
        writeln!(f)?;
        writeln!(f, "**Progress**: {}", self.summary.project_counts)?;
        writeln!(f)?;
        writeln!(f, "## Planning")?;
        writeln!(f)?;
        let rows = PlanningRows::new(self.rows.clone()).with_style(self.style.clone());
        write!(f, "{rows}")
    }
}

/// One phase line of a [`ProgressOverview`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseProgress {
    pub id: String,
    pub name: String,
    pub percent: u8,
}

/// Project percent followed by the percent of every phase in input order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressOverview {
    pub project_name: String,
    pub project_counts: ProgressCounts,
    pub phases: Vec<PhaseProgress>,
}

impl ProgressOverview {
    pub fn new(project: &ProjectDetail) -> Self {
        let summary = calculate_planning_progress(project);
        Self::from_summary(project, &summary)
    }

    /// Builds the overview from an already computed summary.
    pub fn from_summary(project: &ProjectDetail, summary: &PlanningProgressSummary) -> Self {
        let index = PlanningIndex::new(project);
        let phases = project
            .phases
            .iter()
            .enumerate()
            .filter(|(slot, phase)| index.phase_slot(&phase.id) == Some(*slot))
            .map(|(_, phase)| PhaseProgress {
                id: phase.id.clone(),
                name: phase.name.clone(),
                percent: summary.phase_percent(&phase.id),
            })
            .collect();

        Self {
            project_name: project.name.clone(),
            project_counts: summary.project_counts,
            phases,
        }
    }
}

impl fmt::Display for ProgressOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.project_name.trim().is_empty() {
            UNTITLED_PROJECT
        } else {
            &self.project_name
        };
        writeln!(f, "# {title}")?;
        writeln!(f)?;
        writeln!(f, "**Progress**: {}", self.project_counts)?;

        if self.phases.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "## Phases")?;
        writeln!(f)?;
        for phase in &self.phases {
            writeln!(f, "- **{}**: {}%", phase.name, phase.percent)?;
        }
        Ok(())
    }
}
