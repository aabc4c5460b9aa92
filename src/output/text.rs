//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One line per project with its update counts
//! - Failure details for listing, module and tidy errors
//! - Per-module lines in verbose mode
//! - Failed roots and a closing summary line

use crate::domain::{ModuleStatus, ProjectOutcome, RunSummary, TidyPhase};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn paint_ok(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_err(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Short description of a project's result
    fn project_status(&self, project: &ProjectOutcome, dry_run: bool) -> String {
        if let Some(error) = &project.list_error {
            return format!("listing failed: {}", error);
        }
        if dry_run {
            return plural(project.planned_count(), "module to update", "modules to update");
        }

        let mut status = format!("{} updated", project.updated_count());
        if let Some(failed) = project.failed_module() {
            if let ModuleStatus::Failed(error) = &failed.status {
                status.push_str(&format!(", failed at {} ({})", failed.module, error));
            }
            let skipped = project.not_attempted_count();
            if skipped > 0 {
                status.push_str(&format!(", {} not attempted", skipped));
            }
        }
        status
    }

    fn format_project(
        &self,
        project: &ProjectOutcome,
        dry_run: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let marker = if project.is_success() {
            self.paint_ok("✓")
        } else {
            self.paint_err("✗")
        };

        writeln!(
            writer,
            "{} {} {}",
            marker,
            self.paint_bold(&project.dir.display().to_string()),
            self.paint_dim(&format!("— {}", self.project_status(project, dry_run)))
        )?;

        for failure in &project.tidy_failures {
            let phase = match failure.phase {
                TidyPhase::Before => "before",
                TidyPhase::After => "after",
            };
            writeln!(
                writer,
                "    {} tidy ({}) failed: {}",
                self.paint_err("!"),
                phase,
                failure.error
            )?;
        }

        if self.verbosity == Verbosity::Verbose {
            for module in &project.modules {
                let label = match &module.status {
                    ModuleStatus::Updated => self.paint_ok("updated"),
                    ModuleStatus::Planned => self.paint_ok("planned"),
                    ModuleStatus::Failed(_) => self.paint_err("failed"),
                    ModuleStatus::NotAttempted => self.paint_dim("not attempted"),
                };
                writeln!(writer, "    {} {}", module.module, label)?;
            }
        }

        Ok(())
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        if summary.projects.is_empty() && !summary.has_root_failures() {
            writeln!(writer, "No Go projects found")?;
            return Ok(());
        }

        for project in &summary.projects {
            self.format_project(project, summary.dry_run, writer)?;
        }

        for failure in &summary.root_failures {
            writeln!(
                writer,
                "{} {} {}",
                self.paint_err("✗"),
                self.paint_bold(&failure.root.display().to_string()),
                self.paint_dim(&format!("— {}", failure.error))
            )?;
        }

        writeln!(writer)?;
        let projects = plural(summary.projects.len(), "project", "projects");
        let failed = summary.failed_projects().count();
        let line = if summary.dry_run {
            format!(
                "(dry-run) {}, {}",
                projects,
                plural(summary.total_planned(), "module to update", "modules to update")
            )
        } else {
            format!(
                "{}, {} updated, {} failed",
                projects,
                plural(summary.total_updated(), "module", "modules"),
                failed
            )
        };
        writeln!(writer, "{}", self.paint_bold(&line))?;

        if summary.has_root_failures() {
            writeln!(
                writer,
                "{}",
                self.paint_err(&plural(
                    summary.root_failures.len(),
                    "path could not be walked",
                    "paths could not be walked"
                ))
            )?;
        }

        Ok(())
    }
}
