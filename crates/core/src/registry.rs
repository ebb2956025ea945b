//! Process-wide fixture path constants for test modules.
//!
//! A test module declares its fixture paths with [`fixture_paths!`]:
//!
//! ```ignore
//! fixtures_core::fixture_paths!();
//!
//! #[test]
//! fn loads_cases() {
//!     let cases = TEST_CASES_PATH.join("cases_basic.yaml");
//!     // ...
//! }
//! ```
//!
//! The declared statics are computed once, on first access, from the
//! declaring file's own location and are never mutated afterwards.

use std::path::{Path, PathBuf};

use crate::paths::fixtures::PathSet;

/// Resolves a source file reported by `file!()` to an absolute path.
///
/// rustc reports source paths relative to the directory cargo invoked it
/// from, which is the workspace root for workspace members and the package
/// root otherwise. Neither is known at compile time, so this walks up from
/// `manifest_dir` and returns the first ancestor that contains
/// `source_file`. If none does, `manifest_dir` joined with `source_file` is
/// returned unchecked. Absolute `source_file` values are returned as is.
pub fn resolve_source_file(manifest_dir: &Path, source_file: &str) -> PathBuf {
    let source_file = Path::new(source_file);
    if source_file.is_absolute() {
        return source_file.to_path_buf();
    }

    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(source_file);
        if candidate.is_file() {
            return candidate;
        }
    }

    tracing::debug!(
        "could not locate {} above {}; assuming it is package-relative",
        source_file.display(),
        manifest_dir.display()
    );
    manifest_dir.join(source_file)
}

/// Builds the [`PathSet`] for the module whose source is `source_file`.
pub fn paths_for_source_file(manifest_dir: &str, source_file: &str) -> PathSet {
    let module_file = resolve_source_file(Path::new(manifest_dir), source_file);
    let paths = PathSet::for_module_file(&module_file);
    tracing::debug!(
        "resolved fixture paths for {}: {}",
        module_file.display(),
        paths.test_data_path().display()
    );
    paths
}

/// Declares the fixture path constants for the calling module.
///
/// Expands to four statics in the calling scope:
///
/// - `FIXTURE_PATHS: LazyLock<PathSet>`
/// - `TEST_DATA_PATH: LazyLock<PathBuf>`: `<module dir>/data`
/// - `TEST_CASES_PATH: LazyLock<PathBuf>`: `<module dir>/data/test_cases`
/// - `CONFIGURATIONS_PATH: LazyLock<PathBuf>`: `<module dir>/data/configuration_templates`
///
/// They are `pub` by default; pass a visibility to change that, e.g.
/// `fixture_paths!(pub(crate))`.
#[macro_export]
macro_rules! fixture_paths {
    () => {
        $crate::fixture_paths!(pub);
    };
    ($vis:vis) => {
        $vis static FIXTURE_PATHS: ::std::sync::LazyLock<$crate::PathSet> =
            ::std::sync::LazyLock::new(|| {
                $crate::registry::paths_for_source_file(env!("CARGO_MANIFEST_DIR"), file!())
            });

        $vis static TEST_DATA_PATH: ::std::sync::LazyLock<::std::path::PathBuf> =
            ::std::sync::LazyLock::new(|| FIXTURE_PATHS.test_data_path().to_path_buf());

        $vis static TEST_CASES_PATH: ::std::sync::LazyLock<::std::path::PathBuf> =
            ::std::sync::LazyLock::new(|| FIXTURE_PATHS.test_cases_path().to_path_buf());

        $vis static CONFIGURATIONS_PATH: ::std::sync::LazyLock<::std::path::PathBuf> =
            ::std::sync::LazyLock::new(|| FIXTURE_PATHS.configurations_path().to_path_buf());
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    mod declared {
        crate::fixture_paths!(pub(super));
    }

    #[test]
    fn test_absolute_source_file_is_kept() {
        let resolved = resolve_source_file(Path::new("/ignored"), "/repo/tests/x/mod.rs");
        assert_eq!(resolved, PathBuf::from("/repo/tests/x/mod.rs"));
    }

    #[test]
    fn test_workspace_relative_source_file_found_in_ancestor() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let workspace = temp_dir.path();
        let manifest_dir = workspace.join("crates/core");
        let module_file = workspace.join("crates/core/tests/x/mod.rs");
        fs::create_dir_all(module_file.parent().unwrap()).expect("mkdir");
        fs::write(&module_file, "").expect("write module");

        let resolved = resolve_source_file(&manifest_dir, "crates/core/tests/x/mod.rs");
        assert_eq!(resolved, module_file);
    }

    #[test]
    fn test_package_relative_source_file_found_in_manifest_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let manifest_dir = temp_dir.path().join("pkg");
        let module_file = manifest_dir.join("tests/x.rs");
        fs::create_dir_all(module_file.parent().unwrap()).expect("mkdir");
        fs::write(&module_file, "").expect("write module");

        let resolved = resolve_source_file(&manifest_dir, "tests/x.rs");
        assert_eq!(resolved, module_file);
    }

    #[test]
    fn test_unlocated_source_file_falls_back_to_manifest_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let resolved = resolve_source_file(temp_dir.path(), "no/such/module.rs");
        assert_eq!(resolved, temp_dir.path().join("no/such/module.rs"));
    }

    #[test]
    fn test_paths_for_source_file_uses_module_dir() {
        let paths = paths_for_source_file("/ignored", "/repo/tests/x/mod.rs");
        assert_eq!(paths, PathSet::for_module_dir("/repo/tests/x"));
    }

    #[test]
    fn test_macro_resolves_next_to_this_file() {
        let this_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

        assert_eq!(*declared::TEST_DATA_PATH, this_dir.join("data"));
        assert_eq!(*declared::TEST_CASES_PATH, this_dir.join("data/test_cases"));
        assert_eq!(
            *declared::CONFIGURATIONS_PATH,
            this_dir.join("data/configuration_templates")
        );
        assert_eq!(declared::FIXTURE_PATHS.test_data_path(), &*declared::TEST_DATA_PATH);
    }

    #[test]
    fn test_macro_statics_are_stable_across_reads() {
        let first: &PathBuf = &declared::TEST_CASES_PATH;
        let second: &PathBuf = &declared::TEST_CASES_PATH;
        assert!(std::ptr::eq(first, second));
    }
}
