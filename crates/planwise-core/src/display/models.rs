//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the planning
//! models, separated from the model definitions. Rows render as markdown
//! list items indented by level; summaries and diagnostics render as short
//! markdown sections.

use std::fmt;

use super::datetime::DateRange;
use super::style::DisplayStyle;
use crate::config::ExportFormat;
use crate::models::{ParentType, PlanningProgressSummary, PlanningRow, ProgressCounts, RowKind, TaskStatus};
use crate::planning::PlanningDiagnostics;

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ParentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            RowKind::Phase => "phase",
            RowKind::Subphase => "subphase",
            RowKind::Task => "task",
        };
        write!(f, "{kind}")
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = match self {
            ExportFormat::Markdown => "markdown",
            ExportFormat::Json => "json",
        };
        write!(f, "{format}")
    }
}

impl fmt::Display for ProgressCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% ({}/{} tasks completed)",
            self.percent(),
            self.completed_tasks,
            self.total_tasks
        )
    }
}

/// A row rendered with an explicit [`DisplayStyle`].
pub struct StyledRow<'a> {
    pub row: &'a PlanningRow,
    pub style: &'a DisplayStyle,
}

impl fmt::Display for StyledRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.row;
        let indent = "  ".repeat(usize::from(row.level));
        let title = self.style.title(row);

        if row.kind == RowKind::Phase {
            write!(f, "{indent}- **{title}**")?;
        } else {
            write!(f, "{indent}- {title}")?;
        }

        let range = DateRange {
            starts_on: row.starts_on.as_deref(),
            ends_on: row.ends_on.as_deref(),
            format: &self.style.date_format,
        };
        if !range.is_empty() {
            write!(f, " ({range})")?;
        }

        writeln!(f, ": {}", self.style.badge(row))
    }
}

impl fmt::Display for PlanningRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            StyledRow {
                row: self,
                style: &DisplayStyle::default(),
            }
        )
    }
}

impl fmt::Display for PlanningProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Project**: {}", self.project_counts)?;
        writeln!(f, "- **Open tasks**: {}", self.project_counts.pending_tasks())?;
        writeln!(f, "- **Phases**: {}", self.phase_percent_by_id.len())?;
        writeln!(f, "- **Tasks**: {}", self.task_percent_by_id.len())
    }
}

impl fmt::Display for PlanningDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "No planning issues found.");
        }

        fn section(f: &mut fmt::Formatter<'_>, title: &str, ids: &[String]) -> fmt::Result {
            if ids.is_empty() {
                return Ok(());
            }
            writeln!(f, "## {title}")?;
            writeln!(f)?;
            for id in ids {
                writeln!(f, "- {id}")?;
            }
            writeln!(f)
        }

        section(f, "Malformed planner meta", &self.malformed_meta)?;

        if !self.dangling_parents.is_empty() {
            writeln!(f, "## Missing parents")?;
            writeln!(f)?;
            for dangling in &self.dangling_parents {
                writeln!(f, "- {} -> {}", dangling.task_id, dangling.parent_id)?;
            }
            writeln!(f)?;
        }

        section(f, "Tasks without a phase", &self.unlinked)?;
        section(f, "Parent cycles", &self.cyclic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(kind: RowKind, level: u8, status: Option<TaskStatus>, percent: u8) -> PlanningRow {
        PlanningRow {
            id: "r1".to_string(),
            kind,
            level,
            title: "Wireframes".to_string(),
            description: None,
            starts_on: Some("2024-01-02".to_string()),
            ends_on: Some("2024-01-09".to_string()),
            status,
            progress_percent: percent,
        }
    }

    #[test]
    fn test_task_row_display() {
        let output = row(RowKind::Task, 2, Some(TaskStatus::Iniciada), 40).to_string();
        assert_eq!(output, "    - Wireframes (02/01/2024 - 09/01/2024): 40%\n");
    }

    #[test]
    fn test_phase_row_is_bold() {
        let output = row(RowKind::Phase, 0, None, 75).to_string();
        assert!(output.starts_with("- **Wireframes**"));
        assert!(output.ends_with(": 75%\n"));
    }

    #[test]
    fn test_cancelled_row_shows_badge() {
        let cancelled = row(RowKind::Subphase, 1, Some(TaskStatus::Cancelada), 0);
        let style = DisplayStyle {
            cancelled_label: "Cancelada".to_string(),
            ..DisplayStyle::default()
        };
        let output = StyledRow {
            row: &cancelled,
            style: &style,
        }
        .to_string();

        assert!(output.ends_with(": Cancelada\n"));
        assert!(!output.contains('%'));
    }

    #[test]
    fn test_progress_summary_display() {
        let summary = PlanningProgressSummary {
            project_percent: 50,
            project_counts: ProgressCounts::new(2, 1),
            phase_percent_by_id: [("p1".to_string(), 50)].into_iter().collect(),
            task_percent_by_id: [("t1".to_string(), 100), ("t2".to_string(), 0)]
                .into_iter()
                .collect(),
        };

        assert_eq!(
            summary.to_string(),
            "- **Project**: 50% (1/2 tasks completed)\n\
             - **Open tasks**: 1\n\
             - **Phases**: 1\n\
             - **Tasks**: 2\n"
        );
    }

    #[test]
    fn test_progress_counts_display() {
        assert_eq!(
            ProgressCounts::new(3, 2).to_string(),
            "67% (2/3 tasks completed)"
        );
    }

    #[test]
    fn test_clean_diagnostics_display() {
        assert_eq!(
            PlanningDiagnostics::default().to_string(),
            "No planning issues found.\n"
        );
    }
}
