//! Post-order progress roll-up over the planning index.

use std::collections::BTreeMap;

use log::warn;

use super::index::{Placement, PlanningIndex, TaskNode};
use crate::models::{PlanningProgressSummary, ProgressCounts};

/// Counts computed for every task and phase of an index.
#[derive(Debug, Clone)]
pub struct PlanningCounts {
    /// Counts per task slot
    pub tasks: Vec<ProgressCounts>,
    /// Counts per phase slot (only the slot owning an id accumulates tasks)
    pub phases: Vec<ProgressCounts>,
    /// Counts of the unlinked tasks together
    pub unlinked: ProgressCounts,
    /// Phase counts plus unlinked counts
    pub project: ProgressCounts,
}

impl PlanningCounts {
    /// Rolls up the counts of every task, phase and the project.
    pub fn compute(index: &PlanningIndex<'_>) -> Self {
        let mut walker = CountWalker::new(index);
        let tasks: Vec<ProgressCounts> = (0..index.tasks().len())
            .map(|slot| walker.counts(slot))
            .collect();

        let mut phases = vec![ProgressCounts::ZERO; index.phases().len()];
        let mut unlinked = ProgressCounts::ZERO;
        for (slot, node) in index.tasks().iter().enumerate() {
            match node.placement {
                Placement::Phase { phase } => phases[phase] += tasks[slot],
                Placement::Unlinked => unlinked += tasks[slot],
                // already folded into the parent's counts
                Placement::Nested { .. } => {}
            }
        }

        let project = phases.iter().copied().sum::<ProgressCounts>() + unlinked;

        Self {
            tasks,
            phases,
            unlinked,
            project,
        }
    }

    /// Converts the counts into the percent summary keyed by id.
    pub fn summarize(&self, index: &PlanningIndex<'_>) -> PlanningProgressSummary {
        let mut task_percent_by_id = BTreeMap::new();
        for (node, counts) in index.tasks().iter().zip(&self.tasks) {
            task_percent_by_id
                .entry(node.task.id.clone())
                .or_insert_with(|| counts.percent());
        }

        let mut phase_percent_by_id = BTreeMap::new();
        for phase in index.phases() {
            if let Some(slot) = index.phase_slot(&phase.id) {
                phase_percent_by_id
                    .entry(phase.id.clone())
                    .or_insert_with(|| self.phases[slot].percent());
            }
        }

        PlanningProgressSummary {
            project_percent: self.project.percent(),
            project_counts: self.project,
            phase_percent_by_id,
            task_percent_by_id,
        }
    }
}

/// Memoized post-order walk with an in-progress guard against parent cycles.
///
/// The walk keeps its own frame stack instead of recursing, so long parent
/// chains cannot exhaust the call stack.
struct CountWalker<'i, 'a> {
    index: &'i PlanningIndex<'a>,
    memo: Vec<Option<ProgressCounts>>,
    visiting: Vec<bool>,
}

struct Frame {
    slot: usize,
    next_child: usize,
    sum: ProgressCounts,
}

impl<'i, 'a> CountWalker<'i, 'a> {
    fn new(index: &'i PlanningIndex<'a>) -> Self {
        let len = index.tasks().len();
        Self {
            index,
            memo: vec![None; len],
            visiting: vec![false; len],
        }
    }

    fn counts(&mut self, root: usize) -> ProgressCounts {
        if let Some(counts) = self.memo[root] {
            return counts;
        }

        let index = self.index;
        self.visiting[root] = true;
        let mut stack = vec![Frame {
            slot: root,
            next_child: 0,
            sum: ProgressCounts::ZERO,
        }];

        loop {
            let Some(frame) = stack.last_mut() else {
                return ProgressCounts::ZERO;
            };
            let children = index.children(frame.slot);

            if let Some(&child) = children.get(frame.next_child) {
                frame.next_child += 1;
                if let Some(counts) = self.memo[child] {
                    frame.sum += counts;
                } else if self.visiting[child] {
                    warn!(
                        "Task '{}' is part of a parent cycle; counting the edge from '{}' as empty",
                        index.node(child).task.id,
                        index.node(frame.slot).task.id
                    );
                } else {
                    self.visiting[child] = true;
                    stack.push(Frame {
                        slot: child,
                        next_child: 0,
                        sum: ProgressCounts::ZERO,
                    });
                }
                continue;
            }

            let Some(done) = stack.pop() else {
                return ProgressCounts::ZERO;
            };
            let node = index.node(done.slot);
            let counts = if node.children.is_empty() {
                leaf_counts(node)
            } else {
                done.sum
            };
            self.visiting[done.slot] = false;
            self.memo[done.slot] = Some(counts);

            match stack.last_mut() {
                Some(parent) => parent.sum += counts,
                None => return counts,
            }
        }
    }
}

/// Counts of a task without children, from its own status.
fn leaf_counts(node: &TaskNode<'_>) -> ProgressCounts {
    let status = node.task.status;
    if status.is_cancelled() {
        ProgressCounts::ZERO
    } else {
        ProgressCounts::new(1, u32::from(status.is_completed()))
    }
}
