//! Structural findings about a project plan.
//!
//! None of these change the computed progress; they explain it. A task in a
//! parent cycle, for instance, silently counts as empty during the roll-up.

use serde::{Deserialize, Serialize};

use super::index::{Placement, PlanningIndex};
use crate::models::PlannerTaskMeta;

/// A nested reference that does not resolve to another task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DanglingParent {
    pub task_id: String,
    pub parent_id: String,
}

/// Findings collected by [`diagnose`](super::diagnose).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanningDiagnostics {
    /// Tasks whose objective carries the meta prefix but does not decode
    pub malformed_meta: Vec<String>,
    /// Nested references to a missing task or to the task itself
    pub dangling_parents: Vec<DanglingParent>,
    /// Tasks with no resolvable parent and no known phase
    pub unlinked: Vec<String>,
    /// Tasks whose parent chain loops back onto itself
    pub cyclic: Vec<String>,
}

impl PlanningDiagnostics {
    /// Collects every finding from an index.
    pub fn collect(index: &PlanningIndex<'_>) -> Self {
        let mut diagnostics = Self::default();

        for node in index.tasks() {
            let task = node.task;
            match &node.meta {
                None if PlannerTaskMeta::is_tagged(&task.objective) => {
                    diagnostics.malformed_meta.push(task.id.clone());
                }
                Some(meta) => {
                    if let Some((_, parent_id)) = meta.parent_task_ref() {
                        let resolves = parent_id != task.id && index.task_slot(parent_id).is_some();
                        if !resolves {
                            diagnostics.dangling_parents.push(DanglingParent {
                                task_id: task.id.clone(),
                                parent_id: parent_id.to_string(),
                            });
                        }
                    }
                }
                None => {}
            }

            if node.placement == Placement::Unlinked {
                diagnostics.unlinked.push(task.id.clone());
            }
        }

        diagnostics.cyclic = cyclic_slots(index)
            .into_iter()
            .map(|slot| index.node(slot).task.id.clone())
            .collect();

        diagnostics
    }

    /// Whether nothing was found.
    pub fn is_clean(&self) -> bool {
        self.malformed_meta.is_empty()
            && self.dangling_parents.is_empty()
            && self.unlinked.is_empty()
            && self.cyclic.is_empty()
    }
}

/// Slots lying on a parent cycle, in input order.
///
/// Every task has at most one parent, so following parents from any slot
/// either leaves the nested region or re-enters the path being walked.
fn cyclic_slots(index: &PlanningIndex<'_>) -> Vec<usize> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unseen,
        OnPath,
        Done,
    }

    let len = index.tasks().len();
    let mut marks = vec![Mark::Unseen; len];
    let mut on_cycle = vec![false; len];

    for start in 0..len {
        let mut path = Vec::new();
        let mut current = Some(start);

        while let Some(slot) = current {
            match marks[slot] {
                Mark::Done => break,
                Mark::OnPath => {
                    if let Some(pos) = path.iter().position(|&s| s == slot) {
                        for &member in &path[pos..] {
                            on_cycle[member] = true;
                        }
                    }
                    break;
                }
                Mark::Unseen => {
                    marks[slot] = Mark::OnPath;
                    path.push(slot);
                    current = match index.node(slot).placement {
                        Placement::Nested { parent } => Some(parent),
                        _ => None,
                    };
                }
            }
        }

        for slot in path {
            marks[slot] = Mark::Done;
        }
    }

    (0..len).filter(|&slot| on_cycle[slot]).collect()
}
