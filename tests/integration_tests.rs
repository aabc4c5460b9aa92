//! Integration tests for goup
//!
//! These tests verify, on real directory trees with a recording toolchain:
//! - Which projects the filter chain lets through
//! - The tidy → list → get → tidy sequence per project
//! - Per-root failure isolation

use goup::config::{FilterConfig, RunConfig};
use goup::error::{CommandError, ConfigError};
use goup::toolchain::GoToolchain;
use goup::updater;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temp dirs must not start with a dot, or every descendant counts as hidden
fn create_test_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("goup-it")
        .tempdir()
        .expect("Failed to create temp directory")
}

fn add_project(base: &Path, rel: &str) {
    let dir = base.join(rel);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("go.mod"), "module example.com/test\n\ngo 1.22\n").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Tidy(PathBuf),
    List(PathBuf),
    Get(PathBuf, String),
}

/// Toolchain double that records every invocation
#[derive(Default)]
struct RecordingGo {
    modules: HashMap<PathBuf, Vec<String>>,
    failing_modules: Vec<String>,
    calls: RefCell<Vec<Call>>,
}

impl RecordingGo {
    fn with_modules(mut self, dir: &Path, modules: &[&str]) -> Self {
        self.modules.insert(
            dir.to_path_buf(),
            modules.iter().map(|m| m.to_string()).collect(),
        );
        self
    }

    fn failing(mut self, module: &str) -> Self {
        self.failing_modules.push(module.to_string());
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn listed_dirs(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::List(dir) => Some(dir),
                _ => None,
            })
            .collect()
    }

    fn tidy_count(&self, dir: &Path) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Tidy(d) if d == dir))
            .count()
    }

    fn fetched(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Get(_, module) => Some(module),
                _ => None,
            })
            .collect()
    }
}

impl GoToolchain for RecordingGo {
    fn tidy(&self, dir: &Path) -> Result<(), CommandError> {
        self.calls.borrow_mut().push(Call::Tidy(dir.to_path_buf()));
        Ok(())
    }

    fn list_modules(&self, dir: &Path) -> Result<Vec<String>, CommandError> {
        self.calls.borrow_mut().push(Call::List(dir.to_path_buf()));
        Ok(self.modules.get(dir).cloned().unwrap_or_default())
    }

    fn get(&self, dir: &Path, module: &str) -> Result<(), CommandError> {
        self.calls
            .borrow_mut()
            .push(Call::Get(dir.to_path_buf(), module.to_string()));
        if self.failing_modules.iter().any(|m| m == module) {
            return Err(CommandError::output(format!("go get {}", module), "exit status 1"));
        }
        Ok(())
    }
}

fn config(roots: &[&Path], filter: FilterConfig) -> RunConfig {
    RunConfig::new(roots.iter().map(|r| r.to_path_buf()).collect()).with_filter(filter)
}

mod discovery {
    use super::*;

    #[test]
    fn test_vendor_projects_skipped_by_default() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        add_project(root, "a");
        add_project(root, "a/vendor/b");

        let go = RecordingGo::default();
        let filter = FilterConfig::new().with_recursive(true);
        updater::run(&config(&[root], filter), &go).unwrap();
        assert_eq!(go.listed_dirs(), vec![root.join("a")]);

        let go = RecordingGo::default();
        let filter = FilterConfig::new()
            .with_recursive(true)
            .with_include_vendor(true);
        updater::run(&config(&[root], filter), &go).unwrap();
        assert_eq!(
            go.listed_dirs(),
            vec![root.join("a"), root.join("a/vendor/b")]
        );
    }

    #[test]
    fn test_non_recursive_only_visits_root_files() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        add_project(root, "");
        add_project(root, "child");
        add_project(root, "child/grandchild");

        let go = RecordingGo::default();
        updater::run(&config(&[root], FilterConfig::new()), &go).unwrap();
        assert_eq!(go.listed_dirs(), vec![root.to_path_buf()]);
    }

    #[test]
    fn test_excluded_subtree_never_checked() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        add_project(root, "svc");
        add_project(root, "svc/testdata/fixture");
        add_project(root, "tools/testdata");
        add_project(root, "build-cache/mod");

        let go = RecordingGo::default();
        let filter = FilterConfig::new()
            .with_recursive(true)
            .with_exclude(vec!["testdata".to_string(), "build-*".to_string()]);
        updater::run(&config(&[root], filter), &go).unwrap();
        assert_eq!(go.listed_dirs(), vec![root.join("svc")]);
    }

    #[test]
    fn test_hidden_ancestor_prunes_descendants() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        add_project(root, ".config/nested/deep");
        add_project(root, "visible");

        let go = RecordingGo::default();
        updater::run(
            &config(&[root], FilterConfig::new().with_recursive(true)),
            &go,
        )
        .unwrap();
        assert_eq!(go.listed_dirs(), vec![root.join("visible")]);

        let go = RecordingGo::default();
        let filter = FilterConfig::new()
            .with_recursive(true)
            .with_include_hidden(true);
        updater::run(&config(&[root], filter), &go).unwrap();
        assert_eq!(
            go.listed_dirs(),
            vec![root.join(".config/nested/deep"), root.join("visible")]
        );
    }

    #[test]
    fn test_hidden_segment_in_root_path_applies_to_descendants() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join(".workspace");
        add_project(&root, "");
        add_project(&root, "sub");

        let go = RecordingGo::default();
        updater::run(
            &config(&[&root], FilterConfig::new().with_recursive(true)),
            &go,
        )
        .unwrap();
        // The root itself is never filtered, its subdirectories are
        assert_eq!(go.listed_dirs(), vec![root.clone()]);
    }

    #[test]
    fn test_invalid_exclude_pattern_aborts_run() {
        let temp_dir = create_test_dir();
        add_project(temp_dir.path(), "");

        let go = RecordingGo::default();
        let filter = FilterConfig::new().with_exclude(vec!["[".to_string()]);
        let result = updater::run(&config(&[temp_dir.path()], filter), &go);

        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
        assert!(go.calls().is_empty());
    }
}

mod update_sequence {
    use super::*;

    #[test]
    fn test_modules_updated_in_listed_order() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        add_project(root, "");

        let go = RecordingGo::default().with_modules(root, &["mod1", "mod2"]);
        let summary = updater::run(&config(&[root], FilterConfig::new()), &go).unwrap();

        let dir = root.to_path_buf();
        assert_eq!(
            go.calls(),
            vec![
                Call::Tidy(dir.clone()),
                Call::List(dir.clone()),
                Call::Get(dir.clone(), "mod1".to_string()),
                Call::Get(dir.clone(), "mod2".to_string()),
                Call::Tidy(dir),
            ]
        );
        assert_eq!(summary.total_updated(), 2);
    }

    #[test]
    fn test_zero_modules_still_tidies_twice() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        add_project(root, "");

        let go = RecordingGo::default();
        updater::run(&config(&[root], FilterConfig::new()), &go).unwrap();

        assert_eq!(go.tidy_count(root), 2);
        assert!(go.fetched().is_empty());
    }

    #[test]
    fn test_failing_module_stops_project_but_not_walk() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        add_project(root, "first");
        add_project(root, "second");

        let go = RecordingGo::default()
            .with_modules(&root.join("first"), &["mod1", "mod2"])
            .with_modules(&root.join("second"), &["mod3"])
            .failing("mod1");
        let filter = FilterConfig::new().with_recursive(true);
        let summary = updater::run(&config(&[root], filter), &go).unwrap();

        assert_eq!(go.fetched(), vec!["mod1", "mod3"]);
        assert_eq!(go.tidy_count(&root.join("first")), 2);
        assert_eq!(go.tidy_count(&root.join("second")), 2);
        assert_eq!(summary.failed_projects().count(), 1);
        assert!(!summary.has_root_failures());
    }

    #[test]
    fn test_dry_run_never_tidies_or_fetches() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        add_project(root, "");

        let go = RecordingGo::default().with_modules(root, &["mod1"]);
        let config = config(&[root], FilterConfig::new()).with_dry_run(true);
        let summary = updater::run(&config, &go).unwrap();

        assert_eq!(go.calls(), vec![Call::List(root.to_path_buf())]);
        assert_eq!(summary.total_planned(), 1);
        assert!(summary.dry_run);
    }
}

mod roots {
    use super::*;

    #[test]
    fn test_failed_root_does_not_stop_next_root() {
        let temp_dir = create_test_dir();
        let missing = temp_dir.path().join("missing");
        let present = temp_dir.path().join("present");
        add_project(&present, "");

        let go = RecordingGo::default();
        let summary =
            updater::run(&config(&[&missing, &present], FilterConfig::new()), &go).unwrap();

        assert_eq!(go.listed_dirs(), vec![present.clone()]);
        assert_eq!(summary.root_failures.len(), 1);
        assert_eq!(summary.root_failures[0].root, missing);
        assert_eq!(summary.projects.len(), 1);
    }

    #[test]
    fn test_each_root_walked_in_order() {
        let temp_dir = create_test_dir();
        let b = temp_dir.path().join("b");
        let a = temp_dir.path().join("a");
        add_project(&b, "");
        add_project(&a, "");

        let go = RecordingGo::default();
        updater::run(&config(&[&b, &a], FilterConfig::new()), &go).unwrap();

        assert_eq!(go.listed_dirs(), vec![b, a]);
    }
}
