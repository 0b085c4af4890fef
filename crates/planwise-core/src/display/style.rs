//! Labels and formats applied when rendering rows.

use super::datetime::DEFAULT_DATE_FORMAT;
use crate::config::PlanwiseConfig;
use crate::models::PlanningRow;
use crate::planning::NO_PHASE_TITLE;

/// Rendering choices that do not affect the computed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStyle {
    pub no_phase_label: String,
    pub cancelled_label: String,
    pub date_format: String,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            no_phase_label: NO_PHASE_TITLE.to_string(),
            cancelled_label: "Cancelled".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl From<&PlanwiseConfig> for DisplayStyle {
    fn from(config: &PlanwiseConfig) -> Self {
        Self {
            no_phase_label: config.no_phase_label.clone(),
            cancelled_label: config.cancelled_label.clone(),
            date_format: config.date_format.clone(),
        }
    }
}

impl DisplayStyle {
    /// Percent, or the cancelled label for cancelled tasks and sub-phases.
    pub fn badge(&self, row: &PlanningRow) -> String {
        if row.is_cancelled() {
            self.cancelled_label.clone()
        } else {
            format!("{}%", row.progress_percent)
        }
    }

    /// Row title, with the configured label on the placeholder row.
    pub fn title<'r>(&'r self, row: &'r PlanningRow) -> &'r str {
        if row.is_placeholder() {
            &self.no_phase_label
        } else {
            &row.title
        }
    }
}
