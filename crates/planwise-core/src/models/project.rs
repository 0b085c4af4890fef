//! Project detail as returned by the backend, and the functions that load it.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::fields::{id_string, null_as_default};
use super::{Phase, Task};
use crate::error::{PlanwiseError, Result};

/// A project with its flat phase and task lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ProjectDetail {
    /// Project identifier
    #[serde(default, deserialize_with = "id_string")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub id: String,

    /// Project name
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub name: String,

    /// Phases in backend order
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<Vec<Phase>>"))]
    pub phases: Vec<Phase>,

    /// Tasks (including sub-phases) in backend order
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<Vec<Task>>"))]
    pub tasks: Vec<Task>,
}

impl ProjectDetail {
    /// Creates a project from phase and task lists.
    pub fn new(phases: Vec<Phase>, tasks: Vec<Task>) -> Self {
        Self {
            phases,
            tasks,
            ..Default::default()
        }
    }

    /// Parses a project-detail JSON document.
    ///
    /// # Errors
    ///
    /// Returns `PlanwiseError::Serialization` if the document is not valid
    /// JSON or lacks a required field such as a phase or task `id`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let project: ProjectDetail = serde_json::from_str(json)?;
        debug!(
            "Parsed project '{}' with {} phases and {} tasks",
            project.name,
            project.phases.len(),
            project.tasks.len()
        );
        Ok(project)
    }

    /// Parses a project-detail JSON document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let project: ProjectDetail = serde_json::from_reader(reader)?;
        Ok(project)
    }
}

/// Loads a project-detail JSON file.
///
/// # Errors
///
/// Returns `PlanwiseError::FileSystem` if the file cannot be opened and
/// `PlanwiseError::Serialization` if its contents do not parse.
pub fn load_project<P: AsRef<Path>>(path: P) -> Result<ProjectDetail> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PlanwiseError::file_system(path, e))?;
    let project = ProjectDetail::from_reader(BufReader::new(file))?;
    debug!("Loaded project from {}", path.display());
    Ok(project)
}
