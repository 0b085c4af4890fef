//! Command handlers
//!
//! Each handler loads the project document, runs the core computation and
//! hands the resulting markdown to the [`TerminalRenderer`]. Nothing here
//! computes progress itself; the CLI only moves data between files, the
//! core library and the terminal.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use planwise_core::{
    diagnose,
    display::{EncodedMeta, ExportResult},
    load_project, DisplayStyle, ExportFormat, PlannerTaskMeta, PlanningReport, PlanningRows,
    PlanwiseConfig, ProgressOverview, ProjectDetail,
};

use crate::args::{ExportArgs, MetaCommands, MetaTaskArgs, ProjectArgs};
use crate::renderer::TerminalRenderer;

/// Path argument that selects standard input
const STDIN_PATH: &str = "-";

pub struct Cli {
    config: PlanwiseConfig,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: PlanwiseConfig, renderer: TerminalRenderer) -> Self {
        Self { config, renderer }
    }

    fn style(&self) -> DisplayStyle {
        DisplayStyle::from(&self.config)
    }

    pub fn progress(&self, args: &ProjectArgs) -> Result<()> {
        let project = read_project(&args.file)?;
        let overview = ProgressOverview::new(&project);
        self.renderer.render(&overview.to_string())
    }

    pub fn rows(&self, args: &ProjectArgs) -> Result<()> {
        let project = read_project(&args.file)?;
        let report = PlanningReport::new(&project);
        let rows = PlanningRows::new(report.rows).with_style(self.style());
        self.renderer.render(&rows.to_string())
    }

    pub fn export(&self, args: &ExportArgs) -> Result<()> {
        let project = read_project(&args.file)?;
        let format = args
            .format
            .map_or(self.config.export_format, ExportFormat::from);

        let report = PlanningReport::new(&project).with_style(self.style());
        let document = report
            .render(format)
            .context("Failed to render planning report")?;

        match &args.output {
            Some(path) => {
                fs::write(path, &document)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Exported {} report to {}", format, path.display());
                let result = ExportResult::new(path, format, report.rows.len());
                self.renderer.render(&result.to_string())
            }
            None => self.renderer.print_raw(&document),
        }
    }

    pub fn check(&self, args: &ProjectArgs) -> Result<()> {
        let project = read_project(&args.file)?;
        let diagnostics = diagnose(&project);
        if !diagnostics.is_clean() {
            info!(
                "Found {} malformed meta tags, {} missing parents, {} unlinked tasks, {} cyclic tasks",
                diagnostics.malformed_meta.len(),
                diagnostics.dangling_parents.len(),
                diagnostics.unlinked.len(),
                diagnostics.cyclic.len()
            );
        }
        self.renderer.render(&diagnostics.to_string())
    }

    pub fn handle_meta_command(&self, command: MetaCommands) -> Result<()> {
        let meta = match command {
            MetaCommands::Subphase => PlannerTaskMeta::Subphase,
            MetaCommands::Task(MetaTaskArgs {
                parent_type,
                parent_id,
            }) => PlannerTaskMeta::Task {
                parent_type: parent_type.into(),
                parent_id,
            },
        };

        let encoded = EncodedMeta::encode(meta).context("Failed to encode planner meta")?;
        self.renderer.print_raw(&encoded.to_string())
    }

    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(ProjectDetail);
        let json =
            serde_json::to_string_pretty(&schema).context("Failed to serialize JSON schema")?;
        self.renderer.print_raw(&json)
    }
}

/// Loads a project from a file, or from standard input for `-`.
fn read_project(path: &Path) -> Result<ProjectDetail> {
    if path == Path::new(STDIN_PATH) {
        debug!("Reading project from standard input");
        return ProjectDetail::from_reader(io::stdin().lock())
            .context("Failed to parse project from standard input");
    }

    load_project(path).with_context(|| format!("Failed to load project from {}", path.display()))
}
