//! Core domain models for goup
//!
//! - Projects discovered by the walk and their update outcomes
//! - The run summary reported at the end of an invocation

mod project;
mod summary;

pub use project::{ModuleOutcome, ModuleStatus, Project, ProjectOutcome, TidyFailure, TidyPhase};
pub use summary::{RootFailure, RunSummary};
