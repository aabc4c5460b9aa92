//! Project and per-project outcome types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// A directory containing a `go.mod`, with its updatable modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Absolute project directory
    pub dir: PathBuf,
    /// Direct dependency module paths, in listing order
    pub modules: Vec<String>,
}

impl Project {
    /// Creates a new Project
    pub fn new(dir: impl Into<PathBuf>, modules: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            modules,
        }
    }
}

/// What happened to a single module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum ModuleStatus {
    /// `go get` succeeded
    Updated,
    /// `go get` failed with the given message
    Failed(String),
    /// Skipped because an earlier module failed
    NotAttempted,
    /// Dry run: would have been updated
    Planned,
}

/// Outcome for one module of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOutcome {
    /// Module path
    pub module: String,
    /// Result of the update attempt
    pub status: ModuleStatus,
}

impl ModuleOutcome {
    pub fn new(module: impl Into<String>, status: ModuleStatus) -> Self {
        Self {
            module: module.into(),
            status,
        }
    }
}

/// Which tidy invocation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TidyPhase {
    Before,
    After,
}

/// Record of a non-fatal tidy failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TidyFailure {
    pub phase: TidyPhase,
    pub error: String,
}

/// Everything that happened while updating one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectOutcome {
    /// Absolute project directory
    pub dir: PathBuf,
    /// Listing failure; when set no module was touched
    pub list_error: Option<String>,
    /// Per-module results in listing order
    pub modules: Vec<ModuleOutcome>,
    /// Tidy failures, never fatal
    pub tidy_failures: Vec<TidyFailure>,
    /// Wall time spent on the project
    pub elapsed: Duration,
}

impl ProjectOutcome {
    /// Creates an empty outcome for a project directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            list_error: None,
            modules: Vec::new(),
            tidy_failures: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Record a tidy failure
    pub fn add_tidy_failure(&mut self, phase: TidyPhase, error: impl Into<String>) {
        self.tidy_failures.push(TidyFailure {
            phase,
            error: error.into(),
        });
    }

    /// Number of modules successfully updated
    pub fn updated_count(&self) -> usize {
        self.count(|s| matches!(s, ModuleStatus::Updated))
    }

    /// Number of modules a dry run would update
    pub fn planned_count(&self) -> usize {
        self.count(|s| matches!(s, ModuleStatus::Planned))
    }

    /// Number of modules skipped after a failure
    pub fn not_attempted_count(&self) -> usize {
        self.count(|s| matches!(s, ModuleStatus::NotAttempted))
    }

    /// The module whose update failed, if any
    pub fn failed_module(&self) -> Option<&ModuleOutcome> {
        self.modules
            .iter()
            .find(|m| matches!(m.status, ModuleStatus::Failed(_)))
    }

    /// Returns true if listing and every module update succeeded
    pub fn is_success(&self) -> bool {
        self.list_error.is_none() && self.failed_module().is_none()
    }

    fn count(&self, predicate: impl Fn(&ModuleStatus) -> bool) -> usize {
        self.modules.iter().filter(|m| predicate(&m.status)).count()
    }
}
