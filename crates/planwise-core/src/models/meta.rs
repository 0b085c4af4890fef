//! Planner meta tags carried inside a task's `objective` field.
//!
//! The backend has no dedicated columns for a task's tree position, so the
//! planner stores it as a prefixed JSON document in `objective`:
//!
//! ```text
//! __planner_meta__:{"kind":"subphase"}
//! __planner_meta__:{"kind":"task","parentType":"subphase","parentId":"42"}
//! ```
//!
//! Decoding happens once, when the planning index is built, so the rest of the
//! crate only ever sees the typed [`PlannerTaskMeta`].

use serde::{Deserialize, Serialize};

use super::fields::option_id_string;
use crate::error::Result;

/// Reserved prefix marking an `objective` that carries planner meta.
pub const PLANNER_META_PREFIX: &str = "__planner_meta__:";

/// Kind of node a nested task points at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParentType {
    /// Directly under the task's phase
    #[default]
    Phase,
    /// Under a sub-phase (a task tagged as `subphase`)
    Subphase,
    /// Under another task
    Task,
}

impl ParentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParentType::Phase => "phase",
            ParentType::Subphase => "subphase",
            ParentType::Task => "task",
        }
    }
}

/// Tree position of a task, decoded from its `objective`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlannerTaskMeta {
    /// The task is a sub-phase node (level 1 under its phase).
    Subphase,

    /// The task is a regular task placed under a phase, sub-phase or task.
    Task {
        #[serde(rename = "parentType", default)]
        parent_type: ParentType,

        #[serde(
            rename = "parentId",
            default,
            deserialize_with = "option_id_string",
            skip_serializing_if = "Option::is_none"
        )]
        parent_id: Option<String>,
    },
}

impl PlannerTaskMeta {
    /// Meta for a task nested under the given parent.
    pub fn nested(parent_type: ParentType, parent_id: impl Into<String>) -> Self {
        PlannerTaskMeta::Task {
            parent_type,
            parent_id: Some(parent_id.into()),
        }
    }

    /// Decode the meta tag from an `objective` value.
    ///
    /// Returns `None` when the prefix is absent or the payload is not a valid
    /// meta document; such tasks are placed directly under their phase.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planwise_core::models::{ParentType, PlannerTaskMeta};
    ///
    /// let meta = PlannerTaskMeta::decode(
    ///     r#"__planner_meta__:{"kind":"task","parentType":"subphase","parentId":"s1"}"#,
    /// );
    /// assert_eq!(meta, Some(PlannerTaskMeta::nested(ParentType::Subphase, "s1")));
    ///
    /// assert_eq!(PlannerTaskMeta::decode("Ship the landing page"), None);
    /// assert_eq!(PlannerTaskMeta::decode("__planner_meta__:{oops"), None);
    /// ```
    pub fn decode(objective: &str) -> Option<Self> {
        let payload = objective.strip_prefix(PLANNER_META_PREFIX)?;
        serde_json::from_str(payload).ok()
    }

    /// Whether `objective` carries the reserved prefix, decodable or not.
    pub fn is_tagged(objective: &str) -> bool {
        objective.starts_with(PLANNER_META_PREFIX)
    }

    /// Encode the meta tag as an `objective` value.
    pub fn encode(&self) -> Result<String> {
        Ok(format!("{PLANNER_META_PREFIX}{}", serde_json::to_string(self)?))
    }

    pub fn is_subphase(&self) -> bool {
        matches!(self, PlannerTaskMeta::Subphase)
    }

    /// The referenced parent task, if this meta points at one.
    ///
    /// Only `task` metas whose parent type is not `phase` and whose
    /// `parentId` is non-empty reference another task.
    pub fn parent_task_ref(&self) -> Option<(ParentType, &str)> {
        match self {
            PlannerTaskMeta::Task {
                parent_type,
                parent_id: Some(parent_id),
            } if *parent_type != ParentType::Phase && !parent_id.is_empty() => {
                Some((*parent_type, parent_id.as_str()))
            }
            _ => None,
        }
    }
}
