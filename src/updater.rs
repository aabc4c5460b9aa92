//! Update sequencing
//!
//! This module provides:
//! - The per-project sequence: tidy → list → get each module → tidy
//! - The run loop over all roots with per-root failure isolation
//! - Dry-run mode, which lists modules without touching the project

use crate::config::RunConfig;
use crate::domain::{ModuleOutcome, ModuleStatus, Project, ProjectOutcome, RunSummary, TidyPhase};
use crate::error::ConfigError;
use crate::toolchain::GoToolchain;
use crate::walker::{walk_root, FilterChain};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};

/// Runs the update sequence for each discovered project
pub struct Updater<'a, T: GoToolchain> {
    toolchain: &'a T,
    verbose: bool,
    dry_run: bool,
}

impl<'a, T: GoToolchain> Updater<'a, T> {
    /// Create an updater backed by the given toolchain
    pub fn new(toolchain: &'a T) -> Self {
        Self {
            toolchain,
            verbose: false,
            dry_run: false,
        }
    }

    /// Log per-module progress
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// List modules only
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Update a single project directory.
    ///
    /// Tidy failures are recorded and ignored. A listing failure abandons the
    /// project. The first failing module stops the update loop, the closing
    /// tidy still runs.
    pub fn update_project(&self, dir: &Path) -> ProjectOutcome {
        let start = Instant::now();
        let mut outcome = ProjectOutcome::new(dir);
        info!("In: {}", dir.display());

        if !self.dry_run {
            self.tidy(dir, TidyPhase::Before, &mut outcome);
        }

        let modules = match self.toolchain.list_modules(dir) {
            Ok(modules) => modules,
            Err(e) => {
                error!("Get modules list, err: {}", e);
                outcome.list_error = Some(e.to_string());
                outcome.elapsed = start.elapsed();
                return outcome;
            }
        };
        let project = Project::new(dir, modules);
        debug!("Modules: {:?}", project.modules);

        if self.dry_run {
            info!("Would update {} modules", project.modules.len());
            outcome.modules = project
                .modules
                .into_iter()
                .map(|m| ModuleOutcome::new(m, ModuleStatus::Planned))
                .collect();
        } else {
            info!("Updating {} modules", project.modules.len());
            outcome.modules = self.update_modules(&project);
            self.tidy(dir, TidyPhase::After, &mut outcome);
        }

        outcome.elapsed = start.elapsed();
        info!("Done in {:.2?}", outcome.elapsed);
        outcome
    }

    fn update_modules(&self, project: &Project) -> Vec<ModuleOutcome> {
        let total = project.modules.len();
        let mut results = Vec::with_capacity(total);
        let mut failed = false;

        for (i, module) in project.modules.iter().enumerate() {
            if failed {
                results.push(ModuleOutcome::new(module, ModuleStatus::NotAttempted));
                continue;
            }

            if self.verbose {
                info!("[{}/{}] Updating {}", i + 1, total, module);
            }

            match self.toolchain.get(&project.dir, module) {
                Ok(()) => {
                    if self.verbose {
                        info!("Updated {}", module);
                    }
                    results.push(ModuleOutcome::new(module, ModuleStatus::Updated));
                }
                Err(e) => {
                    error!("Failed to update {}, err: {}", module, e);
                    results.push(ModuleOutcome::new(module, ModuleStatus::Failed(e.to_string())));
                    failed = true;
                }
            }
        }

        results
    }

    fn tidy(&self, dir: &Path, phase: TidyPhase, outcome: &mut ProjectOutcome) {
        if let Err(e) = self.toolchain.tidy(dir) {
            error!("Failed to tidy, err: {}", e);
            outcome.add_tidy_failure(phase, e.to_string());
        }
    }
}

/// Walk every root and update each project found.
///
/// Invalid exclude patterns abort before anything is walked. A traversal
/// error aborts only its own root; it is logged, recorded in the summary and
/// the next root is attempted.
pub fn run<T: GoToolchain>(config: &RunConfig, toolchain: &T) -> Result<RunSummary, ConfigError> {
    let chain = FilterChain::from_config(&config.filter, &config.roots)?;
    let updater = Updater::new(toolchain)
        .with_verbose(config.verbose)
        .with_dry_run(config.dry_run);
    let mut summary = RunSummary::new(config.roots.clone(), config.dry_run);

    debug!("Lookup paths: {:?}", config.roots);
    info!("Starting update");

    for root in &config.roots {
        let result = walk_root(root, &chain, |dir| {
            summary.add_project(updater.update_project(dir));
        });

        if let Err(e) = result {
            error!("{}", e);
            summary.add_root_failure(root, e.to_string());
        }
    }

    info!("Completed");
    Ok(summary)
}
