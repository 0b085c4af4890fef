//! Phase model definition.

use serde::{Deserialize, Serialize};

use super::fields::{default_true, id_string, null_as_default, null_as_true};

/// Top-level grouping node of a project plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Phase {
    /// Unique identifier of the phase
    #[serde(deserialize_with = "id_string")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub id: String,

    /// Display name of the phase
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Planned start date (ISO 8601 date or timestamp)
    #[serde(default)]
    pub starts_on: Option<String>,

    /// Planned end date (ISO 8601 date or timestamp)
    #[serde(default)]
    pub ends_on: Option<String>,

    /// Manual ordering position among siblings
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<i64>"))]
    pub position: i64,

    /// Whether the phase is active
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<bool>"))]
    pub active: bool,
}

impl Phase {
    /// Creates a phase with the given id and name and default fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: true,
            ..Default::default()
        }
    }
}
