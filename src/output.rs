//! Output formatting for human and JSON modes
//!
//! A [`ValidationReport`] wraps one run summary and renders it either as the
//! human-readable report or as JSON.

use std::fmt::Write as _;
use std::io::{self, IsTerminal};
use std::path::Path;

use colored::{Color, Colorize};
use serde::Serialize;

use crate::models::{CheckResult, RunSummary};
use crate::paths;

/// Width of the report's horizontal rules
const RULE_WIDTH: usize = 60;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A rendered validation run
#[derive(Debug, Serialize)]
pub struct ValidationReport<'a> {
    /// Project name (the root directory name)
    pub project: String,
    /// Project root
    pub root: &'a Path,
    /// When the run finished (RFC 3339)
    pub checked_at: String,
    /// The run summary
    pub summary: &'a RunSummary,
}

impl<'a> ValidationReport<'a> {
    /// Wrap a summary for the project at `root`
    #[must_use]
    pub fn new(root: &'a Path, summary: &'a RunSummary) -> Self {
        Self {
            project: paths::project_name(root).unwrap_or_else(|| root.display().to_string()),
            root,
            checked_at: chrono::Utc::now().to_rfc3339(),
            summary,
        }
    }

    /// Render the report based on output mode
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized to JSON.
    pub fn render(&self, mode: OutputMode) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => {
                print!("{}", self.to_human(io::stdout().is_terminal()));
                Ok(())
            },
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable report text
    ///
    /// With `colorize`, markers are coloured (still subject to `NO_COLOR`).
    #[must_use]
    pub fn to_human(&self, colorize: bool) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let summary = self.summary;
        let mut out = String::new();

        let _ = writeln!(out, "\n=== Validation Report for {} ===", self.project);
        let _ = writeln!(out, "{rule}");
        for result in &summary.results {
            let _ = writeln!(out, "  {}", result_line(result, colorize));
        }
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "  Result: {}/{} checks passed",
            summary.passed_count(),
            summary.total
        );

        if summary.passed {
            let marker = paint("[OK]", colorize, Color::Green);
            let _ = writeln!(out, "  {marker} All validation checks passed!");
        } else {
            let marker = paint("[WARNING]", colorize, Color::Yellow);
            let _ = writeln!(out, "  {marker} {} checks failed", summary.failed);
        }

        out
    }

    fn render_json(&self) -> serde_json::Result<()> {
        println!("{}", self.to_json()?);
        Ok(())
    }

    /// Pretty-printed JSON report
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn paint(text: &str, colorize: bool, color: Color) -> String {
    if colorize { text.color(color).to_string() } else { text.to_string() }
}

fn result_line(result: &CheckResult, colorize: bool) -> String {
    if !colorize {
        return result.to_string();
    }
    let marker = if result.passed {
        result.marker().green()
    } else {
        result.marker().red()
    };
    let mut line = format!("{marker} {}", result.name);
    if !result.message.is_empty() {
        let _ = write!(line, " - {}", result.message);
    }
    line
}
