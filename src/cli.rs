//! CLI argument parsing module for goup

use crate::config::{FilterConfig, RunConfig, DEFAULT_GO_BINARY};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Update dependencies for all Go projects at once
#[derive(Parser, Debug, Clone)]
#[command(
    name = "goup",
    version,
    about = "Update dependencies for all projects at once"
)]
pub struct CliArgs {
    /// Directories to search for go.mod (default: current directory)
    #[arg(value_name = "DIRS")]
    pub paths: Vec<PathBuf>,

    /// Recursively walk directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Include hidden directories
    #[arg(short = 'a', long = "all")]
    pub include_hidden: bool,

    /// Include vendor directories
    #[arg(long = "vendor")]
    pub include_vendor: bool,

    /// Exclude directories that match pattern (can be specified multiple times)
    #[arg(short, long, value_name = "PATTERN", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Verbose output
    #[arg(long, visible_alias = "vv")]
    pub verbose: bool,

    /// Enable debug mode
    #[arg(long)]
    pub debug: bool,

    /// List updatable modules without running go mod tidy or go get
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not print the run summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Go binary to invoke
    #[arg(long = "go", value_name = "PATH", default_value = DEFAULT_GO_BINARY)]
    pub go_binary: PathBuf,
}

impl CliArgs {
    /// Build the directory filter configuration
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig::new()
            .with_recursive(self.recursive)
            .with_include_hidden(self.include_hidden)
            .with_include_vendor(self.include_vendor)
            .with_exclude(self.exclude.clone())
    }

    /// Build the immutable run configuration
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig::new(self.paths.clone())
            .with_filter(self.filter_config())
            .with_verbose(self.verbose)
            .with_dry_run(self.dry_run)
            .with_go_binary(self.go_binary.clone())
    }
}
