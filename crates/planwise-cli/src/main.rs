//! Planwise CLI Application
//!
//! Command-line viewer for the planning progress of a project document.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use planwise_core::ConfigBuilder;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        command,
    } = Args::parse();

    let config = ConfigBuilder::new()
        .with_config_path(config)
        .build()
        .context("Failed to load configuration")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(config, renderer);

    info!("Planwise started");

    match command {
        Progress(args) => cli.progress(&args),
        Rows(args) => cli.rows(&args),
        Export(args) => cli.export(&args),
        Check(args) => cli.check(&args),
        Meta { command } => cli.handle_meta_command(command),
        Schema => cli.schema(),
    }
}
