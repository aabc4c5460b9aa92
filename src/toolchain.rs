//! Go toolchain integration
//!
//! This module provides:
//! - The [`GoToolchain`] trait, the boundary between update sequencing and
//!   external processes
//! - [`SystemGo`], which runs the real `go` binary
//! - Parsing of the module listing output

use crate::config::DEFAULT_GO_BINARY;
use crate::error::CommandError;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Template printing direct, non-main modules only
pub const LIST_TEMPLATE: &str = "{{if not (or .Main .Indirect)}}{{.Path}}{{end}}";

/// Operations the updater needs from the Go toolchain
pub trait GoToolchain {
    /// Reconcile `go.mod` with the imports of the project (`go mod tidy`)
    fn tidy(&self, dir: &Path) -> Result<(), CommandError>;

    /// List direct dependency module paths of the project
    fn list_modules(&self, dir: &Path) -> Result<Vec<String>, CommandError>;

    /// Update a single module to its latest version (`go get <module>`)
    fn get(&self, dir: &Path, module: &str) -> Result<(), CommandError>;
}

/// Toolchain that executes the installed Go binary
#[derive(Debug, Clone)]
pub struct SystemGo {
    binary: PathBuf,
}

impl Default for SystemGo {
    fn default() -> Self {
        Self::new(DEFAULT_GO_BINARY)
    }
}

impl SystemGo {
    /// Create a toolchain for the given binary
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Path of the binary being invoked
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn command(&self, args: &[&str], dir: &Path) -> Command {
        let mut command = Command::new(&self.binary);
        command.args(args).current_dir(dir);
        command
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut parts = vec![self.binary.display().to_string()];
        parts.extend(args.iter().map(|arg| arg.to_string()));
        parts.join(" ")
    }

    /// Run a command with stdin and stderr attached so prompts reach the user.
    ///
    /// Child stdout is redirected to our stderr, stdout carries only the summary.
    fn run_interactive(&self, args: &[&str], dir: &Path) -> Result<(), CommandError> {
        let status = self
            .command(args, dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::from(std::io::stderr()))
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| CommandError::spawn(self.describe(args), e))?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::status(self.describe(args), status))
        }
    }
}

impl GoToolchain for SystemGo {
    fn tidy(&self, dir: &Path) -> Result<(), CommandError> {
        self.run_interactive(&["mod", "tidy"], dir)
    }

    fn list_modules(&self, dir: &Path) -> Result<Vec<String>, CommandError> {
        let args = ["list", "-m", "-f", LIST_TEMPLATE, "all"];
        let output = self
            .command(&args, dir)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| CommandError::spawn(self.describe(&args), e))?;

        if !output.status.success() {
            return Err(CommandError::status(self.describe(&args), output.status));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| CommandError::output(self.describe(&args), e.to_string()))?;

        Ok(parse_module_list(&stdout))
    }

    fn get(&self, dir: &Path, module: &str) -> Result<(), CommandError> {
        self.run_interactive(&["get", module], dir)
    }
}

/// Split listing output into module paths.
///
/// Lines are trimmed and blank lines dropped; the listing template prints an
/// empty line for the main module and for every indirect dependency.
pub fn parse_module_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
