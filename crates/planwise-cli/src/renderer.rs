//! Terminal rendering for planning markdown
//!
//! Rich output goes through a termimad skin; `--no-color` prints the
//! markdown unchanged so it can be piped or diffed.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

/// Renders the markdown produced by the core display types
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Phase titles are bold; headers carry the project name
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to standard output
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.rich_enabled {
            for line in markdown.lines() {
                let written = if line.starts_with('#') {
                    writeln!(out, "\x1b[36m{line}\x1b[0m")
                } else {
                    writeln!(out, "{}", self.skin.inline(line))
                };
                written.context("Failed to write to standard output")?;
            }
        } else {
            out.write_all(markdown.as_bytes())
                .context("Failed to write to standard output")?;
        }

        out.flush().context("Failed to flush standard output")
    }

    /// Print text without markdown styling, e.g. JSON or encoded meta
    pub fn print_raw(&self, text: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(text.as_bytes())
            .context("Failed to write to standard output")?;
        if !text.ends_with('\n') {
            writeln!(out).context("Failed to write to standard output")?;
        }
        out.flush().context("Failed to flush standard output")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
