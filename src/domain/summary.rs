//! Run-level summary
//!
//! Collects project outcomes and root traversal failures for reporting.

use super::ProjectOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A root whose walk was aborted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootFailure {
    /// Root path as supplied
    pub root: PathBuf,
    /// Error message
    pub error: String,
}

/// Overall summary of one invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Roots walked, in order
    pub roots: Vec<PathBuf>,
    /// Project outcomes in discovery order
    pub projects: Vec<ProjectOutcome>,
    /// Roots whose walk failed
    pub root_failures: Vec<RootFailure>,
}

impl RunSummary {
    /// Creates a new RunSummary
    pub fn new(roots: Vec<PathBuf>, dry_run: bool) -> Self {
        Self {
            started_at: Utc::now(),
            dry_run,
            roots,
            projects: Vec::new(),
            root_failures: Vec::new(),
        }
    }

    /// Adds a project outcome
    pub fn add_project(&mut self, outcome: ProjectOutcome) {
        self.projects.push(outcome);
    }

    /// Records a failed root
    pub fn add_root_failure(&mut self, root: impl Into<PathBuf>, error: impl Into<String>) {
        self.root_failures.push(RootFailure {
            root: root.into(),
            error: error.into(),
        });
    }

    /// Returns true if any root walk failed
    pub fn has_root_failures(&self) -> bool {
        !self.root_failures.is_empty()
    }

    /// Projects with a listing or module failure
    pub fn failed_projects(&self) -> impl Iterator<Item = &ProjectOutcome> {
        self.projects.iter().filter(|p| !p.is_success())
    }

    /// Total modules updated across all projects
    pub fn total_updated(&self) -> usize {
        self.projects.iter().map(|p| p.updated_count()).sum()
    }

    /// Total modules a dry run would update
    pub fn total_planned(&self) -> usize {
        self.projects.iter().map(|p| p.planned_count()).sum()
    }
}
