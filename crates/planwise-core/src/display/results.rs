//! Result wrapper types for displaying command outcomes.
//!
//! This module provides wrapper types that format the results of export and
//! meta-encoding commands with consistent messaging.

use std::fmt;
use std::path::PathBuf;

use crate::config::ExportFormat;
use crate::error::Result;
use crate::models::PlannerTaskMeta;

/// Wrapper type for displaying the result of an export written to a file.
///
/// # Examples
///
/// ```rust
/// use planwise_core::{config::ExportFormat, display::ExportResult};
///
/// let result = ExportResult::new("plan.md", ExportFormat::Markdown, 12);
/// assert_eq!(
///     result.to_string(),
///     "Exported 12 planning rows to plan.md (markdown)\n"
/// );
/// ```
pub struct ExportResult {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub rows: usize,
}

impl ExportResult {
    /// Create a new ExportResult wrapper.
    pub fn new(path: impl Into<PathBuf>, format: ExportFormat, rows: usize) -> Self {
        Self {
            path: path.into(),
            format,
            rows,
        }
    }
}

impl fmt::Display for ExportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.rows == 1 { "row" } else { "rows" };
        writeln!(
            f,
            "Exported {} planning {noun} to {} ({})",
            self.rows,
            self.path.display(),
            self.format
        )
    }
}

/// Wrapper type for displaying an encoded planner meta tag.
///
/// Renders only the objective string so it can be piped into other tools.
pub struct EncodedMeta {
    pub meta: PlannerTaskMeta,
    pub objective: String,
}

impl EncodedMeta {
    /// Encodes `meta` into its objective string.
    pub fn encode(meta: PlannerTaskMeta) -> Result<Self> {
        let objective = meta.encode()?;
        Ok(Self { meta, objective })
    }
}

impl fmt::Display for EncodedMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.objective)
    }
}
