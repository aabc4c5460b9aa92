//! Depth-first discovery of Go projects
//!
//! Each root is walked in lexical order. Directories below a root pass
//! through the [`FilterChain`]; files named `go.mod` mark a project whose
//! absolute directory is handed to the caller before the walk continues.

mod filter;

pub use filter::{
    contains_hidden_segment, DirFilter, ExcludeGate, FilterChain, HiddenGate, RecursionGate,
    SkipReason, Verdict, VendorGate, VENDOR_DIR,
};

use crate::error::WalkError;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// File name identifying a Go project
pub const MANIFEST_FILENAME: &str = "go.mod";

/// What to do with a single walk entry
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// Nothing to do, keep walking
    Continue,
    /// Prune this directory
    SkipSubtree(SkipReason),
    /// A manifest was found in this project directory
    Project(PathBuf),
}

/// Walk a single root, invoking `on_project` for every manifest found.
///
/// The callback runs to completion before the walk moves on. The first
/// traversal error aborts the walk of this root.
pub fn walk_root<F>(root: &Path, chain: &FilterChain, mut on_project: F) -> Result<(), WalkError>
where
    F: FnMut(&Path),
{
    let mut entries = WalkDir::new(root).sort_by_file_name().into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry.map_err(|e| WalkError::traversal(root, e))?;

        match classify(&entry, chain)? {
            Step::Continue => {}
            Step::SkipSubtree(reason) => {
                debug!("Skip {} directory: {}", reason, entry.path().display());
                entries.skip_current_dir();
            }
            Step::Project(dir) => on_project(&dir),
        }
    }

    Ok(())
}

fn classify(entry: &DirEntry, chain: &FilterChain) -> Result<Step, WalkError> {
    if entry.file_type().is_dir() {
        // Roots are always descended
        if entry.depth() == 0 {
            return Ok(Step::Continue);
        }
        return Ok(match chain.evaluate(entry.path()) {
            Verdict::Descend => Step::Continue,
            Verdict::Skip(reason) => Step::SkipSubtree(reason),
        });
    }

    if entry.file_name() != MANIFEST_FILENAME {
        return Ok(Step::Continue);
    }

    let manifest = std::path::absolute(entry.path())
        .map_err(|e| WalkError::resolve(entry.path(), e))?;
    let dir = manifest
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"));

    Ok(Step::Project(dir))
}
