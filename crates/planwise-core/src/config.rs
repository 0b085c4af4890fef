//! Configuration for rendering and exporting planning output.
//!
//! Configuration is a small JSON document. When no explicit path is given,
//! [`ConfigBuilder`] looks for `$XDG_CONFIG_HOME/planwise/config.json` and
//! falls back to defaults when it does not exist.
//!
//! ```json
//! {
//!   "noPhaseLabel": "Sem fase",
//!   "cancelledLabel": "Cancelada",
//!   "dateFormat": "%d/%m/%Y",
//!   "exportFormat": "markdown"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PlanwiseError, Result, ResultExt};
use crate::planning::NO_PHASE_TITLE;

/// Output format of an export.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Json,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Invalid export format: {s}")),
        }
    }
}

/// Labels and formats used when rendering planning output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanwiseConfig {
    /// Title of the placeholder row grouping tasks without a known phase
    pub no_phase_label: String,

    /// Badge shown instead of a percent for cancelled tasks
    pub cancelled_label: String,

    /// `strftime` pattern for schedule dates
    pub date_format: String,

    /// Format used by `export` when none is given
    pub export_format: ExportFormat,
}

impl Default for PlanwiseConfig {
    fn default() -> Self {
        Self {
            no_phase_label: NO_PHASE_TITLE.to_string(),
            cancelled_label: "Cancelled".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            export_format: ExportFormat::Markdown,
        }
    }
}

impl PlanwiseConfig {
    /// Parses a configuration document. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PlanwiseConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(PlanwiseError::invalid_input("dateFormat").with_reason("must not be empty"));
        }
        let sample = jiff::civil::date(2024, 1, 31);
        jiff::fmt::strtime::format(self.date_format.as_str(), sample).map_err(|e| {
            PlanwiseError::invalid_input("dateFormat").with_reason(e.to_string())
        })?;
        Ok(())
    }
}

/// Builder for loading a [`PlanwiseConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Sets an explicit configuration file.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/planwise/config.json` or
    /// `~/.config/planwise/config.json`, when present.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PlanwiseError::FileSystem` if the file cannot be read and
    /// `PlanwiseError::Configuration` if it does not parse or holds an
    /// unusable date format.
    pub fn build(self) -> Result<PlanwiseConfig> {
        let path = match self.config_path {
            Some(path) => path,
            None => match Self::default_config_path() {
                Some(path) => path,
                None => {
                    debug!("No configuration file found, using defaults");
                    return Ok(PlanwiseConfig::default());
                }
            },
        };

        let json = fs::read_to_string(&path).map_err(|e| PlanwiseError::file_system(&path, e))?;
        let config = PlanwiseConfig::from_json_str(&json)
            .with_context(format!("Invalid configuration file {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Returns the XDG configuration file, if one exists.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("planwise").find_config_file("config.json")
    }
}
