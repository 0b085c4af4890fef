//! Progress counts and the per-project progress summary.

use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Number of countable tasks and how many of them are completed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProgressCounts {
    /// Total number of countable leaf tasks
    pub total_tasks: u32,
    /// Number of completed leaf tasks
    pub completed_tasks: u32,
}

impl ProgressCounts {
    /// Counts that contribute nothing (cancelled leaves, cyclic edges).
    pub const ZERO: ProgressCounts = ProgressCounts {
        total_tasks: 0,
        completed_tasks: 0,
    };

    pub fn new(total_tasks: u32, completed_tasks: u32) -> Self {
        Self {
            total_tasks,
            completed_tasks,
        }
    }

    /// Percent complete, rounded half-up and clamped to `0..=100`.
    ///
    /// An empty count is 0 percent, not 100.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planwise_core::models::ProgressCounts;
    ///
    /// assert_eq!(ProgressCounts::new(0, 0).percent(), 0);
    /// assert_eq!(ProgressCounts::new(8, 1).percent(), 13);
    /// assert_eq!(ProgressCounts::new(3, 2).percent(), 67);
    /// ```
    pub fn percent(&self) -> u8 {
        percent_of(self.completed_tasks, self.total_tasks)
    }

    /// Number of countable tasks not yet completed.
    pub fn pending_tasks(&self) -> u32 {
        self.total_tasks.saturating_sub(self.completed_tasks)
    }
}

/// `round(100 * completed / total)` clamped to `0..=100`; 0 for an empty or
/// undefined ratio.
pub fn percent_of(completed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = 100.0 * f64::from(completed) / f64::from(total);
    if !ratio.is_finite() {
        return 0;
    }
    ratio.round().clamp(0.0, 100.0) as u8
}

impl Add for ProgressCounts {
    type Output = ProgressCounts;

    fn add(self, rhs: ProgressCounts) -> ProgressCounts {
        ProgressCounts {
            total_tasks: self.total_tasks.saturating_add(rhs.total_tasks),
            completed_tasks: self.completed_tasks.saturating_add(rhs.completed_tasks),
        }
    }
}

impl AddAssign for ProgressCounts {
    fn add_assign(&mut self, rhs: ProgressCounts) {
        *self = *self + rhs;
    }
}

impl Sum for ProgressCounts {
    fn sum<I: Iterator<Item = ProgressCounts>>(iter: I) -> Self {
        iter.fold(ProgressCounts::ZERO, Add::add)
    }
}

/// Percent-complete summary at project, phase and task granularity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlanningProgressSummary {
    /// Percent complete of the whole project
    pub project_percent: u8,

    /// Raw counts behind `project_percent`
    pub project_counts: ProgressCounts,

    /// Percent complete per phase id (every known phase is present)
    #[serde(rename = "phasePercentByID")]
    pub phase_percent_by_id: BTreeMap<String, u8>,

    /// Percent complete per task id (every task is present)
    #[serde(rename = "taskPercentByID")]
    pub task_percent_by_id: BTreeMap<String, u8>,
}

impl PlanningProgressSummary {
    /// Percent of a phase, 0 if the id is unknown.
    pub fn phase_percent(&self, phase_id: &str) -> u8 {
        self.phase_percent_by_id.get(phase_id).copied().unwrap_or(0)
    }

    /// Percent of a task or sub-phase, 0 if the id is unknown.
    pub fn task_percent(&self, task_id: &str) -> u8 {
        self.task_percent_by_id.get(task_id).copied().unwrap_or(0)
    }
}
