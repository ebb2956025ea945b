//! Fixture catalog.
//!
//! Lists the fixture files a test module ships. Only YAML files directly
//! inside the fixture directory count; subdirectories and other files are
//! skipped. Results are sorted by file name so parametrised tests see a
//! stable order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::FIXTURE_EXTENSIONS;
use crate::paths::fixtures::PathSet;
use crate::{FixtureError, FixtureResult};

/// Lists the test-case definition files for a module.
///
/// # Errors
///
/// Returns `FixtureError::DirRead` if the test cases directory cannot be read.
pub fn list_test_cases(paths: &PathSet) -> FixtureResult<Vec<PathBuf>> {
    list_fixture_files(paths.test_cases_path())
}

/// Lists the configuration template files for a module.
///
/// # Errors
///
/// Returns `FixtureError::DirRead` if the templates directory cannot be read.
pub fn list_configuration_templates(paths: &PathSet) -> FixtureResult<Vec<PathBuf>> {
    list_fixture_files(paths.configurations_path())
}

fn is_fixture_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FIXTURE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn list_fixture_files(dir: &Path) -> FixtureResult<Vec<PathBuf>> {
    let dir_read_error = |source| FixtureError::DirRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(dir_read_error)? {
        let entry = entry.map_err(dir_read_error)?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if !is_fixture_file(&path) {
            tracing::warn!("skipping non-YAML fixture file: {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!("found {} fixture file(s) in {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn module_with_layout() -> (TempDir, PathSet) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let paths = PathSet::for_module_dir(temp_dir.path());
        fs::create_dir_all(paths.test_cases_path()).expect("create test_cases");
        fs::create_dir_all(paths.configurations_path()).expect("create templates");
        (temp_dir, paths)
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_lists_yaml_files_sorted() {
        let (_temp_dir, paths) = module_with_layout();
        for name in ["cases_b.yaml", "cases_a.yml", "cases_c.YAML"] {
            fs::write(paths.test_cases_path().join(name), "[]").expect("write case");
        }

        let files = list_test_cases(&paths).expect("list test cases");
        assert_eq!(names(&files), vec!["cases_a.yml", "cases_b.yaml", "cases_c.YAML"]);
        assert!(files.iter().all(|f| f.starts_with(paths.test_cases_path())));
    }

    #[test]
    fn test_skips_other_files_and_subdirectories() {
        let (_temp_dir, paths) = module_with_layout();
        let templates = paths.configurations_path();
        fs::write(templates.join("configuration_basic.yaml"), "- sections: []").expect("write");
        fs::write(templates.join("notes.txt"), "ignore me").expect("write");
        fs::create_dir(templates.join("nested.yaml")).expect("mkdir");

        let files = list_configuration_templates(&paths).expect("list templates");
        assert_eq!(names(&files), vec!["configuration_basic.yaml"]);
    }

    #[test]
    fn test_empty_directory_lists_nothing() {
        let (_temp_dir, paths) = module_with_layout();
        assert!(list_test_cases(&paths).expect("list").is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let paths = PathSet::for_module_dir(temp_dir.path());

        let err = list_test_cases(&paths).expect_err("directory is absent");
        match err {
            FixtureError::DirRead { path, .. } => assert_eq!(path, paths.test_cases_path()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
