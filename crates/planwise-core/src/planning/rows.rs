//! Flattening of the planning tree into ordered display rows.

use super::index::{PlanningIndex, TaskNode};
use super::order::sort_slots;
use crate::models::{PlanningProgressSummary, PlanningRow, RowKind, NO_PHASE_ID};

/// Default title of the placeholder row grouping unlinked tasks.
pub const NO_PHASE_TITLE: &str = "No phase";

const PHASE_LEVEL: u8 = 0;
const CHILD_LEVEL: u8 = 1;
const NESTED_LEVEL: u8 = 2;

/// Emits rows in pre-order: each phase, its sub-phases with their nested
/// tasks, its direct tasks, and finally the unlinked tasks.
pub(crate) struct RowBuilder<'i, 'a> {
    index: &'i PlanningIndex<'a>,
    progress: &'i PlanningProgressSummary,
    emitted: Vec<bool>,
    rows: Vec<PlanningRow>,
}

impl<'i, 'a> RowBuilder<'i, 'a> {
    pub(crate) fn new(index: &'i PlanningIndex<'a>, progress: &'i PlanningProgressSummary) -> Self {
        Self {
            index,
            progress,
            emitted: vec![false; index.tasks().len()],
            rows: Vec::with_capacity(index.phases().len() + index.tasks().len() + 1),
        }
    }

    pub(crate) fn build(mut self) -> Vec<PlanningRow> {
        let index = self.index;

        let mut phase_slots: Vec<usize> = (0..index.phases().len()).collect();
        sort_slots(&mut phase_slots, |slot| index.phase(slot));

        for phase_slot in phase_slots {
            let phase = index.phase(phase_slot);
            self.rows.push(PlanningRow {
                id: phase.id.clone(),
                kind: RowKind::Phase,
                level: PHASE_LEVEL,
                title: phase.name.clone(),
                description: phase.description.clone(),
                starts_on: phase.starts_on.clone(),
                ends_on: phase.ends_on.clone(),
                status: None,
                progress_percent: self.progress.phase_percent(&phase.id),
            });

            // Duplicated phase ids own no tasks; only the first slot does.
            if index.phase_slot(&phase.id) != Some(phase_slot) {
                continue;
            }

            let (subphases, direct): (Vec<usize>, Vec<usize>) = index
                .phase_tasks(phase_slot)
                .partition(|&slot| index.node(slot).is_subphase());

            self.emit_level(subphases, CHILD_LEVEL);
            self.emit_level(direct, CHILD_LEVEL);
        }

        let unlinked: Vec<usize> = index.unlinked().collect();
        if !unlinked.is_empty() {
            self.rows.push(PlanningRow {
                id: NO_PHASE_ID.to_string(),
                kind: RowKind::Phase,
                level: PHASE_LEVEL,
                title: NO_PHASE_TITLE.to_string(),
                description: None,
                starts_on: None,
                ends_on: None,
                status: None,
                progress_percent: self.progress.phase_percent(NO_PHASE_ID),
            });
            self.emit_level(unlinked, CHILD_LEVEL);
        }

        self.rows
    }

    /// Sorts sibling slots and emits each one followed by its descendants.
    /// Everything below level 1 is flattened at level 2.
    ///
    /// The walk keeps its own stack, so long parent chains cannot exhaust
    /// the call stack.
    fn emit_level(&mut self, slots: Vec<usize>, level: u8) {
        let index = self.index;
        let mut stack: Vec<(usize, u8)> = Vec::new();
        push_sorted(&mut stack, index, slots, level);

        while let Some((slot, level)) = stack.pop() {
            if self.emitted[slot] {
                continue;
            }
            self.emitted[slot] = true;
            self.push_task(index.node(slot), level);

            let children = index.children(slot);
            if !children.is_empty() {
                push_sorted(&mut stack, index, children.to_vec(), NESTED_LEVEL);
            }
        }
    }

    fn push_task(&mut self, node: &TaskNode<'_>, level: u8) {
        let task = node.task;
        self.rows.push(PlanningRow {
            id: task.id.clone(),
            kind: if node.is_subphase() {
                RowKind::Subphase
            } else {
                RowKind::Task
            },
            level,
            title: task.name.clone(),
            description: task.description.clone(),
            starts_on: task.starts_on.clone(),
            ends_on: task.ends_on.clone(),
            status: Some(task.status),
            progress_percent: self.progress.task_percent(&task.id),
        });
    }
}

/// Pushes siblings in reverse schedule order so they pop in schedule order.
fn push_sorted(stack: &mut Vec<(usize, u8)>, index: &PlanningIndex<'_>, mut slots: Vec<usize>, level: u8) {
    sort_slots(&mut slots, |slot| index.node(slot).task);
    stack.extend(slots.into_iter().rev().map(|slot| (slot, level)));
}
