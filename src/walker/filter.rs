//! Directory filter chain
//!
//! Filters are evaluated in a fixed order for every directory below a root:
//! recursion gate, hidden gate, vendor gate, exclude patterns. The first
//! filter that rejects a directory prunes its whole subtree.

use crate::config::{clean_path, FilterConfig};
use crate::error::ConfigError;
use glob::Pattern;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Name of the directory holding vendored dependencies
pub const VENDOR_DIR: &str = "vendor";

/// Why a directory was pruned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Below a root while recursion is disabled
    NotRecursive,
    /// A path segment is hidden
    Hidden,
    /// Directory is named `vendor`
    Vendor,
    /// Leaf name matched an exclude pattern
    Excluded(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotRecursive => write!(f, "non-recursive"),
            SkipReason::Hidden => write!(f, "hidden"),
            SkipReason::Vendor => write!(f, "vendor"),
            SkipReason::Excluded(pattern) => write!(f, "excluded by '{}'", pattern),
        }
    }
}

/// Outcome of evaluating a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Visit the directory's contents
    Descend,
    /// Prune the directory and everything beneath it
    Skip(SkipReason),
}

impl Verdict {
    /// Returns true if the directory should be pruned
    pub fn is_skip(&self) -> bool {
        matches!(self, Verdict::Skip(_))
    }
}

/// A single directory predicate
pub trait DirFilter {
    /// Evaluate a directory path as produced by the walk
    fn check(&self, dir: &Path) -> Verdict;
}

/// Skips every directory that is not itself a root.
///
/// Paths are compared after lexical cleaning, so `./sub` and `sub` match.
pub struct RecursionGate {
    roots: Vec<PathBuf>,
}

impl RecursionGate {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots: roots.iter().map(|root| clean_path(root)).collect(),
        }
    }
}

impl DirFilter for RecursionGate {
    fn check(&self, dir: &Path) -> Verdict {
        let dir = clean_path(dir);
        if self.roots.iter().any(|root| *root == dir) {
            Verdict::Descend
        } else {
            Verdict::Skip(SkipReason::NotRecursive)
        }
    }
}

/// Skips directories with any hidden path segment
pub struct HiddenGate;

impl DirFilter for HiddenGate {
    fn check(&self, dir: &Path) -> Verdict {
        if contains_hidden_segment(dir) {
            Verdict::Skip(SkipReason::Hidden)
        } else {
            Verdict::Descend
        }
    }
}

/// Skips directories named `vendor`
pub struct VendorGate;

impl DirFilter for VendorGate {
    fn check(&self, dir: &Path) -> Verdict {
        if dir.file_name().is_some_and(|name| name == VENDOR_DIR) {
            Verdict::Skip(SkipReason::Vendor)
        } else {
            Verdict::Descend
        }
    }
}

/// Skips directories whose leaf name matches any pattern, first match wins
pub struct ExcludeGate {
    patterns: Vec<Pattern>,
}

impl ExcludeGate {
    /// Compile patterns, failing on the first invalid one
    pub fn new(patterns: &[String]) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|raw| {
                Pattern::new(raw).map_err(|e| ConfigError::invalid_pattern(raw, e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }
}

impl DirFilter for ExcludeGate {
    fn check(&self, dir: &Path) -> Verdict {
        let Some(name) = dir.file_name() else {
            return Verdict::Descend;
        };
        let name = name.to_string_lossy();

        match self.patterns.iter().find(|p| p.matches(&name)) {
            Some(pattern) => Verdict::Skip(SkipReason::Excluded(pattern.as_str().to_string())),
            None => Verdict::Descend,
        }
    }
}

/// Ordered list of directory filters built from configuration
pub struct FilterChain {
    filters: Vec<Box<dyn DirFilter>>,
}

impl FilterChain {
    /// Build the chain for a run. Invalid exclude patterns are reported here,
    /// before any directory is visited.
    pub fn from_config(config: &FilterConfig, roots: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut filters: Vec<Box<dyn DirFilter>> = Vec::new();

        if !config.recursive {
            filters.push(Box::new(RecursionGate::new(roots.to_vec())));
        }
        if !config.include_hidden {
            filters.push(Box::new(HiddenGate));
        }
        if !config.include_vendor {
            filters.push(Box::new(VendorGate));
        }
        if !config.exclude_patterns.is_empty() {
            filters.push(Box::new(ExcludeGate::new(&config.exclude_patterns)?));
        }

        Ok(Self { filters })
    }

    /// Evaluate filters in order, stopping at the first skip
    pub fn evaluate(&self, dir: &Path) -> Verdict {
        self.filters
            .iter()
            .map(|filter| filter.check(dir))
            .find(Verdict::is_skip)
            .unwrap_or(Verdict::Descend)
    }

    /// Number of active filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if no filter is active
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Check whether any segment of the path is hidden.
///
/// A hidden segment starts with a single `.` and is longer than one
/// character, so `.` and `..` style segments never count.
pub fn contains_hidden_segment(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(segment) => {
            let segment = segment.to_string_lossy();
            segment.len() > 1 && segment.starts_with('.') && !segment.starts_with("..")
        }
        _ => false,
    })
}
