use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use planwise_core::{ExportFormat, ParentType};

/// Planning progress viewer for project phases and tasks
///
/// Planwise reads a project-detail JSON document (phases and tasks as the
/// backend returns them), rebuilds the planning tree from the planner meta
/// tags in each task's objective, and prints percent complete per phase and
/// the ordered planning rows.
#[derive(Parser)]
#[command(version, about, name = "planwise")]
pub struct Args {
    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/planwise/config.json when it exists
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Planwise CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show the project percent and the percent of every phase
    #[command(alias = "p")]
    Progress(ProjectArgs),
    /// Show the ordered planning rows
    #[command(alias = "r")]
    Rows(ProjectArgs),
    /// Write the planning report as markdown or JSON
    #[command(alias = "e")]
    Export(ExportArgs),
    /// Report malformed meta, missing parents, unlinked tasks and cycles
    Check(ProjectArgs),
    /// Print an encoded planner meta objective
    Meta {
        #[command(subcommand)]
        command: MetaCommands,
    },
    /// Print the JSON schema of the project-detail input
    Schema,
}

#[derive(ClapArgs)]
pub struct ProjectArgs {
    /// Project-detail JSON file, or `-` to read standard input
    pub file: PathBuf,
}

#[derive(ClapArgs)]
pub struct ExportArgs {
    /// Project-detail JSON file, or `-` to read standard input
    pub file: PathBuf,

    /// File to write; the report goes to standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format; defaults to the configured export format
    #[arg(short, long)]
    pub format: Option<ExportFormatArg>,
}

#[derive(Subcommand)]
pub enum MetaCommands {
    /// Tag a task as a sub-phase
    Subphase,
    /// Tag a task as nested under a phase, sub-phase or task
    Task(MetaTaskArgs),
}

#[derive(ClapArgs)]
pub struct MetaTaskArgs {
    /// Kind of the parent node
    #[arg(long, value_enum)]
    pub parent_type: ParentTypeArg,

    /// Id of the parent sub-phase or task
    #[arg(long)]
    pub parent_id: Option<String>,
}

/// Command-line representation of export formats
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    /// Indented markdown list
    #[value(alias = "md")]
    Markdown,
    /// Pretty-printed JSON report
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(val: ExportFormatArg) -> Self {
        match val {
            ExportFormatArg::Markdown => ExportFormat::Markdown,
            ExportFormatArg::Json => ExportFormat::Json,
        }
    }
}

/// Command-line representation of planner meta parent types
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ParentTypeArg {
    /// Directly under the task's phase
    Phase,
    /// Under a sub-phase
    Subphase,
    /// Under another task
    Task,
}

impl From<ParentTypeArg> for ParentType {
    fn from(val: ParentTypeArg) -> Self {
        match val {
            ParentTypeArg::Phase => ParentType::Phase,
            ParentTypeArg::Subphase => ParentType::Subphase,
            ParentTypeArg::Task => ParentType::Task,
        }
    }
}
