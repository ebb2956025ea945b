//! Fixture directory paths for a test module.
//!
//! Every test module that carries fixtures keeps them beside itself:
//! ```text
//! <module dir>/
//!     data/
//!         test_cases/
//!         configuration_templates/
//! ```
//!
//! [`PathSet`] resolves that layout against a module location. Construction
//! is a pure path join: nothing is read from disk and nothing is checked for
//! existence. Tests that need the directories to exist can call
//! [`PathSet::ensure_layout`].

use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIGURATION_TEMPLATES_DIR_NAME, DATA_DIR_NAME, TEST_CASES_DIR_NAME};
use crate::validation::FixtureName;
use crate::{FixtureError, FixtureResult};

/// Root fixture data directory, inside the module's own directory.
#[derive(Debug, Clone, Copy)]
pub struct DataDir;

impl DataDir {
    pub const NAME: &'static str = DATA_DIR_NAME;
}

/// Test-case definitions directory, inside [`DataDir`].
#[derive(Debug, Clone, Copy)]
pub struct TestCasesDir;

impl TestCasesDir {
    pub const NAME: &'static str = TEST_CASES_DIR_NAME;
}

/// Configuration templates directory, inside [`DataDir`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationTemplatesDir;

impl ConfigurationTemplatesDir {
    pub const NAME: &'static str = CONFIGURATION_TEMPLATES_DIR_NAME;
}

/// One of the three directories a [`PathSet`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureDir {
    TestData,
    TestCases,
    ConfigurationTemplates,
}

impl FixtureDir {
    pub const ALL: [FixtureDir; 3] = [
        FixtureDir::TestData,
        FixtureDir::TestCases,
        FixtureDir::ConfigurationTemplates,
    ];
}

impl fmt::Display for FixtureDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FixtureDir::TestData => "test data",
            FixtureDir::TestCases => "test cases",
            FixtureDir::ConfigurationTemplates => "configuration templates",
        };
        f.write_str(label)
    }
}

/// Resolved fixture directories for one test module.
///
/// `test_cases_path` and `configurations_path` are always direct children of
/// `test_data_path`. The set is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    test_data_path: PathBuf,
    test_cases_path: PathBuf,
    configurations_path: PathBuf,
}

impl PathSet {
    /// Builds the fixture paths for a module living in `module_dir`.
    ///
    /// # Arguments
    ///
    /// * `module_dir` - The directory containing the test module
    pub fn for_module_dir(module_dir: impl AsRef<Path>) -> Self {
        let test_data_path = module_dir.as_ref().join(DataDir::NAME);
        Self {
            test_cases_path: test_data_path.join(TestCasesDir::NAME),
            configurations_path: test_data_path.join(ConfigurationTemplatesDir::NAME),
            test_data_path,
        }
    }

    /// Builds the fixture paths for the module whose source file is `module_file`.
    ///
    /// The module's directory is the file's parent. A path with no parent
    /// (a filesystem root) is treated as the directory itself.
    pub fn for_module_file(module_file: impl AsRef<Path>) -> Self {
        let module_file = module_file.as_ref();
        Self::for_module_dir(module_file.parent().unwrap_or(module_file))
    }

    /// Returns the root fixture data directory.
    pub fn test_data_path(&self) -> &Path {
        &self.test_data_path
    }

    /// Returns the test-case definitions directory.
    pub fn test_cases_path(&self) -> &Path {
        &self.test_cases_path
    }

    /// Returns the configuration templates directory.
    pub fn configurations_path(&self) -> &Path {
        &self.configurations_path
    }

    pub fn dir(&self, dir: FixtureDir) -> &Path {
        match dir {
            FixtureDir::TestData => &self.test_data_path,
            FixtureDir::TestCases => &self.test_cases_path,
            FixtureDir::ConfigurationTemplates => &self.configurations_path,
        }
    }

    /// Returns the path to a test-case definition file. Performs no I/O.
    pub fn test_case(&self, name: &FixtureName) -> PathBuf {
        self.test_cases_path.join(name.as_str())
    }

    /// Returns the path to a configuration template file. Performs no I/O.
    pub fn configuration_template(&self, name: &FixtureName) -> PathBuf {
        self.configurations_path.join(name.as_str())
    }

    /// Lists the fixture directories that are not existing directories.
    pub fn missing_dirs(&self) -> Vec<(FixtureDir, PathBuf)> {
        FixtureDir::ALL
            .into_iter()
            .filter(|dir| !self.dir(*dir).is_dir())
            .map(|dir| (dir, self.dir(dir).to_path_buf()))
            .collect()
    }

    /// Checks that all three fixture directories exist.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingFixtureDirs` naming every directory that
    /// is absent or not a directory.
    pub fn ensure_layout(&self) -> FixtureResult<()> {
        let missing = self.missing_dirs();
        if missing.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            "fixture layout under {} is missing {} director(ies)",
            self.test_data_path.display(),
            missing.len()
        );
        Err(FixtureError::MissingFixtureDirs { missing })
    }
}
