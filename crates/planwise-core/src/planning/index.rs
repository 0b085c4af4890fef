//! Arena of a project's phases and tasks with resolved tree placement.

use std::collections::HashMap;

use log::debug;

use crate::models::{Phase, PlannerTaskMeta, ProjectDetail, Task};

/// Where a task sits in the planning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Nested under another task, identified by its arena slot.
    Nested { parent: usize },
    /// Top-level task of a phase, identified by its arena slot.
    Phase { phase: usize },
    /// No resolvable parent and no known phase.
    Unlinked,
}

/// A task with its decoded meta, placement and child slots.
#[derive(Debug)]
pub struct TaskNode<'a> {
    pub task: &'a Task,
    pub meta: Option<PlannerTaskMeta>,
    pub placement: Placement,
    /// Slots of the tasks nested directly under this one, in input order
    pub children: Vec<usize>,
}

impl TaskNode<'_> {
    pub fn is_subphase(&self) -> bool {
        self.meta.as_ref().is_some_and(PlannerTaskMeta::is_subphase)
    }
}

/// Index over a [`ProjectDetail`] shared by the planning computations.
///
/// Phases and tasks are stored once, in input order, and addressed by slot.
/// When an id is duplicated the first occurrence owns it: lookups by id and
/// parent resolution always land on that slot.
#[derive(Debug)]
pub struct PlanningIndex<'a> {
    phases: Vec<&'a Phase>,
    phase_slots: HashMap<&'a str, usize>,
    tasks: Vec<TaskNode<'a>>,
    task_slots: HashMap<&'a str, usize>,
}

impl<'a> PlanningIndex<'a> {
    /// Decodes every task's meta and links tasks to their parents.
    pub fn new(project: &'a ProjectDetail) -> Self {
        let phases: Vec<&Phase> = project.phases.iter().collect();
        let mut phase_slots = HashMap::with_capacity(phases.len());
        for (slot, phase) in project.phases.iter().enumerate() {
            phase_slots.entry(phase.id.as_str()).or_insert(slot);
        }

        let mut task_slots = HashMap::with_capacity(project.tasks.len());
        for (slot, task) in project.tasks.iter().enumerate() {
            task_slots.entry(task.id.as_str()).or_insert(slot);
        }

        let mut tasks: Vec<TaskNode> = project
            .tasks
            .iter()
            .map(|task| {
                let meta = task.meta();
                let placement = resolve_placement(task, meta.as_ref(), &phase_slots, &task_slots);
                TaskNode {
                    task,
                    meta,
                    placement,
                    children: Vec::new(),
                }
            })
            .collect();

        for slot in 0..tasks.len() {
            if let Placement::Nested { parent } = tasks[slot].placement {
                tasks[parent].children.push(slot);
            }
        }

        debug!(
            "Indexed {} phases and {} tasks ({} unlinked)",
            phases.len(),
            tasks.len(),
            tasks
                .iter()
                .filter(|node| node.placement == Placement::Unlinked)
                .count()
        );

        Self {
            phases,
            phase_slots,
            tasks,
            task_slots,
        }
    }

    pub fn phases(&self) -> &[&'a Phase] {
        &self.phases
    }

    pub fn tasks(&self) -> &[TaskNode<'a>] {
        &self.tasks
    }

    pub fn phase(&self, slot: usize) -> &'a Phase {
        self.phases[slot]
    }

    pub fn node(&self, slot: usize) -> &TaskNode<'a> {
        &self.tasks[slot]
    }

    /// Slot owning a phase id.
    pub fn phase_slot(&self, id: &str) -> Option<usize> {
        self.phase_slots.get(id).copied()
    }

    /// Slot owning a task id.
    pub fn task_slot(&self, id: &str) -> Option<usize> {
        self.task_slots.get(id).copied()
    }

    /// Placement of the task owning `id`.
    pub fn placement(&self, id: &str) -> Option<Placement> {
        self.task_slot(id).map(|slot| self.tasks[slot].placement)
    }

    /// Decoded meta of the task owning `id`.
    pub fn meta(&self, id: &str) -> Option<&PlannerTaskMeta> {
        self.task_slot(id)
            .and_then(|slot| self.tasks[slot].meta.as_ref())
    }

    /// Slots of the tasks nested directly under `slot`.
    pub fn children(&self, slot: usize) -> &[usize] {
        &self.tasks[slot].children
    }

    /// Slots of the tasks nested directly under the task owning `id`.
    pub fn children_of(&self, id: &str) -> &[usize] {
        match self.task_slot(id) {
            Some(slot) => &self.tasks[slot].children,
            None => &[],
        }
    }

    /// Slots of the top-level tasks of a phase, in input order.
    pub fn phase_tasks(&self, phase: usize) -> impl Iterator<Item = usize> + '_ {
        self.slots_where(move |placement| placement == Placement::Phase { phase })
    }

    /// Slots of the unlinked tasks, in input order.
    pub fn unlinked(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots_where(|placement| placement == Placement::Unlinked)
    }

    fn slots_where<F>(&self, predicate: F) -> impl Iterator<Item = usize> + '_
    where
        F: Fn(Placement) -> bool + 'static,
    {
        self.tasks
            .iter()
            .enumerate()
            .filter(move |(_, node)| predicate(node.placement))
            .map(|(slot, _)| slot)
    }
}

/// Meta first, then `projectPhaseId`, then unlinked.
fn resolve_placement(
    task: &Task,
    meta: Option<&PlannerTaskMeta>,
    phase_slots: &HashMap<&str, usize>,
    task_slots: &HashMap<&str, usize>,
) -> Placement {
    let nested_parent = meta
        .and_then(PlannerTaskMeta::parent_task_ref)
        .filter(|(_, parent_id)| *parent_id != task.id)
        .and_then(|(_, parent_id)| task_slots.get(parent_id).copied());

    if let Some(parent) = nested_parent {
        return Placement::Nested { parent };
    }

    match phase_slots.get(task.project_phase_id.as_str()) {
        Some(&phase) => Placement::Phase { phase },
        None => Placement::Unlinked,
    }
}
