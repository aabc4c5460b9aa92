//! Immutable run configuration
//!
//! Built once from the CLI and shared read-only by the walker and updater.

use std::path::{Component, Path, PathBuf};

/// Default Go binary
pub const DEFAULT_GO_BINARY: &str = "go";

/// Directory filter toggles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Descend into all subdirectories, not just the roots
    pub recursive: bool,
    /// Include directories with hidden (dot-prefixed) path segments
    pub include_hidden: bool,
    /// Include directories named `vendor`
    pub include_vendor: bool,
    /// Glob patterns matched against directory leaf names
    pub exclude_patterns: Vec<String>,
}

impl FilterConfig {
    /// Create a new FilterConfig with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set recursive walking
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set hidden directory inclusion
    pub fn with_include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Set vendor directory inclusion
    pub fn with_include_vendor(mut self, include: bool) -> Self {
        self.include_vendor = include;
        self
    }

    /// Set exclude patterns
    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }
}

/// Full configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Cleaned root paths, never empty
    pub roots: Vec<PathBuf>,
    /// Directory filters
    pub filter: FilterConfig,
    /// Log per-module progress
    pub verbose: bool,
    /// List modules without running tidy or get
    pub dry_run: bool,
    /// Go binary to invoke
    pub go_binary: PathBuf,
}

impl RunConfig {
    /// Create a configuration for the given roots, defaulting to `.`
    pub fn new(roots: Vec<PathBuf>) -> Self {
        let roots = if roots.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            roots.iter().map(|root| clean_path(root)).collect()
        };

        Self {
            roots,
            filter: FilterConfig::default(),
            verbose: false,
            dry_run: false,
            go_binary: PathBuf::from(DEFAULT_GO_BINARY),
        }
    }

    /// Set directory filters
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Set verbose progress
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the Go binary
    pub fn with_go_binary(mut self, go_binary: impl Into<PathBuf>) -> Self {
        self.go_binary = go_binary.into();
        self
    }
}

/// Lexically clean a path: drop `.` segments, duplicate and trailing separators,
/// and collapse `name/..` pairs.
///
/// `..` directly under the root is dropped, leading `..` of a relative path is
/// kept. The filesystem is never consulted, so symlinks are not resolved.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    let cleaned: PathBuf = parts.iter().collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
