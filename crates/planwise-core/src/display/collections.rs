//! Collection wrapper types for displaying planning rows.
//!
//! This module provides wrapper types that format collections of rows with
//! consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use super::{models::StyledRow, style::DisplayStyle};
use crate::models::PlanningRow;

/// Newtype wrapper for displaying an ordered list of planning rows.
///
/// Rows are rendered as a nested markdown list in the order they were built.
/// The wrapper carries a [`DisplayStyle`] so the placeholder title,
/// cancelled badge and date format can be configured.
///
/// # Examples
///
/// ```rust
/// use planwise_core::{
///     display::PlanningRows,
///     models::{Phase, ProjectDetail, Task},
///     planning::{build_planning_rows, calculate_planning_progress},
/// };
///
/// let project = ProjectDetail::new(
///     vec![Phase::new("p1", "Discovery")],
///     vec![Task::new("t1", "p1", "Interviews")],
/// );
/// let summary = calculate_planning_progress(&project);
/// let rows = PlanningRows::new(build_planning_rows(&project, &summary));
///
/// let output = rows.to_string();
/// assert!(output.contains("- **Discovery**: 0%"));
/// assert!(output.contains("  - Interviews: 0%"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlanningRows {
    rows: Vec<PlanningRow>,
    style: DisplayStyle,
}

impl PlanningRows {
    pub fn new(rows: Vec<PlanningRow>) -> Self {
        Self {
            rows,
            style: DisplayStyle::default(),
        }
    }

    /// Replaces the style used for rendering.
    pub fn with_style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the number of rows in the collection.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Get a reference to the row at the given index.
    pub fn get(&self, index: usize) -> Option<&PlanningRow> {
        self.rows.get(index)
    }

    /// Get an iterator over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanningRow> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[PlanningRow] {
        &self.rows
    }
}

impl Index<usize> for PlanningRows {
    type Output = PlanningRow;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl IntoIterator for PlanningRows {
    type Item = PlanningRow;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanningRows {
    type Item = &'a PlanningRow;
    type IntoIter = std::slice::Iter<'a, PlanningRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for PlanningRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No planning rows.");
        }

        for row in &self.rows {
            write!(
                f,
                "{}",
                StyledRow {
                    row,
                    style: &self.style,
                }
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RowKind, NO_PHASE_ID};

    #[test]
    fn test_empty_rows() {
        let rows = PlanningRows::new(Vec::new());
        assert!(rows.is_empty());
        assert_eq!(rows.to_string(), "No planning rows.\n");
    }

    #[test]
    fn test_placeholder_uses_configured_label() {
        let placeholder = PlanningRow {
            id: NO_PHASE_ID.to_string(),
            kind: RowKind::Phase,
            level: 0,
            title: "No phase".to_string(),
            description: None,
            starts_on: None,
            ends_on: None,
            status: None,
            progress_percent: 0,
        };
        let style = DisplayStyle {
            no_phase_label: "Sem fase".to_string(),
            ..DisplayStyle::default()
        };
        let rows = PlanningRows::new(vec![placeholder]).with_style(style);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows.to_string(), "- **Sem fase**: 0%\n");
    }
}
