//! JSON output formatter for machine processing

use crate::domain::{ModuleOutcome, ProjectOutcome, RootFailure, RunSummary, TidyFailure};
use crate::output::OutputFormatter;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full run
#[derive(Serialize)]
struct JsonOutput<'a> {
    started_at: DateTime<Utc>,
    dry_run: bool,
    summary: JsonSummary,
    projects: Vec<JsonProject<'a>>,
    #[serde(skip_serializing_if = "is_empty_slice")]
    root_failures: &'a [RootFailure],
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    projects: usize,
    failed_projects: usize,
    updated: usize,
    #[serde(skip_serializing_if = "is_zero")]
    planned: usize,
}

/// JSON representation of one project
#[derive(Serialize)]
struct JsonProject<'a> {
    dir: String,
    success: bool,
    elapsed_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_error: Option<&'a str>,
    modules: &'a [ModuleOutcome],
    #[serde(skip_serializing_if = "is_empty_slice")]
    tidy_failures: &'a [TidyFailure],
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

fn is_empty_slice<T>(items: &&[T]) -> bool {
    items.is_empty()
}

impl<'a> From<&'a ProjectOutcome> for JsonProject<'a> {
    fn from(project: &'a ProjectOutcome) -> Self {
        Self {
            dir: project.dir.display().to_string(),
            success: project.is_success(),
            elapsed_ms: project.elapsed.as_millis(),
            list_error: project.list_error.as_deref(),
            modules: &project.modules,
            tidy_failures: &project.tidy_failures,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            started_at: summary.started_at,
            dry_run: summary.dry_run,
            summary: JsonSummary {
                projects: summary.projects.len(),
                failed_projects: summary.failed_projects().count(),
                updated: summary.total_updated(),
                planned: summary.total_planned(),
            },
            projects: summary.projects.iter().map(JsonProject::from).collect(),
            root_failures: &summary.root_failures,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
