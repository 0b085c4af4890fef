//! Task status enumeration and its normalization.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task and sub-phase statuses.
///
/// The backend stores statuses as free-form strings. Decoding goes through
/// [`TaskStatus::normalize`], which maps legacy values and never fails, so a
/// project document with an unexpected status still loads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "Option<String>", into = "String")]
pub enum TaskStatus {
    /// Planned, not started yet
    #[default]
    Planejada,

    /// Work has started
    Iniciada,

    /// Finished; the only status that counts as completed
    Concluida,

    /// Cancelled; excluded from progress totals
    Cancelada,
}

impl TaskStatus {
    /// Map a raw backend status onto the fixed status domain.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. The
    /// legacy values `pendente` and `em_andamento` map to
    /// [`TaskStatus::Planejada`] and [`TaskStatus::Iniciada`]; anything
    /// unrecognized is treated as planned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planwise_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::normalize("em_andamento"), TaskStatus::Iniciada);
    /// assert_eq!(TaskStatus::normalize(" CONCLUIDA "), TaskStatus::Concluida);
    /// assert_eq!(TaskStatus::normalize("whatever"), TaskStatus::Planejada);
    /// ```
    pub fn normalize(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    /// Convert to the canonical backend string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Planejada => "planejada",
            TaskStatus::Iniciada => "iniciada",
            TaskStatus::Concluida => "concluida",
            TaskStatus::Cancelada => "cancelada",
        }
    }

    /// Whether the task counts as completed.
    pub fn is_completed(&self) -> bool {
        *self == TaskStatus::Concluida
    }

    /// Whether the task is excluded from totals when it has no children.
    pub fn is_cancelled(&self) -> bool {
        *self == TaskStatus::Cancelada
    }

    /// Human-readable label used in rendered listings.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Planejada => "Planned",
            TaskStatus::Iniciada => "Started",
            TaskStatus::Concluida => "Completed",
            TaskStatus::Cancelada => "Cancelled",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planejada" | "pendente" => Ok(TaskStatus::Planejada),
            "iniciada" | "em_andamento" => Ok(TaskStatus::Iniciada),
            "concluida" => Ok(TaskStatus::Concluida),
            "cancelada" => Ok(TaskStatus::Cancelada),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        TaskStatus::normalize(&raw)
    }
}

impl From<Option<String>> for TaskStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map(TaskStatus::from).unwrap_or_default()
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

#[cfg(feature = "schema")]
impl schemars::JsonSchema for TaskStatus {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "TaskStatus".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "description": "planejada, iniciada, concluida or cancelada (legacy: pendente, em_andamento)"
        })
    }
}
