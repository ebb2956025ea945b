//! Test-case definition files.
//!
//! A test-case file is a YAML sequence. Each entry names one case and carries
//! the parameters to substitute into a configuration template plus free-form
//! metadata the test asserts against:
//!
//! ```yaml
//! - name: location_single_file
//!   description: Monitor a single log file.
//!   configuration_parameters:
//!     LOCATION: /tmp/test.log
//!   metadata:
//!     location: /tmp/test.log
//! ```
//!
//! Applying the parameters to a template is left to the caller.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Mapping;

use crate::{FixtureError, FixtureResult};

/// One entry of a test-case definition file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestCase {
    /// Unique name within its file, also used as the test id.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Values substituted into the configuration template.
    #[serde(default)]
    pub configuration_parameters: Mapping,
    /// Expected outcomes and other case-specific values.
    #[serde(default)]
    pub metadata: Mapping,
}

/// Loads and validates every test case in a definition file.
///
/// An empty file yields no cases. Names are trimmed.
///
/// # Errors
///
/// Returns `FixtureError` if:
/// - the file cannot be read (`FileRead`),
/// - it is not a YAML sequence of test cases (`YamlDeserialization`),
/// - a name is empty (`EmptyTestCaseName`),
/// - a name appears twice (`DuplicateTestCaseName`).
pub fn load_test_cases(path: &Path) -> FixtureResult<Vec<TestCase>> {
    let contents = fs::read_to_string(path).map_err(|source| FixtureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim().is_empty() {
        tracing::warn!("test case file is empty: {}", path.display());
        return Ok(Vec::new());
    }

    let mut cases: Vec<TestCase> =
        serde_yaml::from_str(&contents).map_err(|source| FixtureError::YamlDeserialization {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::new();
    for (index, case) in cases.iter_mut().enumerate() {
        case.name = case.name.trim().to_string();
        if case.name.is_empty() {
            return Err(FixtureError::EmptyTestCaseName {
                path: path.to_path_buf(),
                index,
            });
        }
        if !seen.insert(case.name.clone()) {
            return Err(FixtureError::DuplicateTestCaseName {
                path: path.to_path_buf(),
                name: case.name.clone(),
            });
        }
    }

    tracing::debug!("loaded {} test case(s) from {}", cases.len(), path.display());
    Ok(cases)
}

/// Returns the case names in file order, for use as test ids.
pub fn test_case_ids(cases: &[TestCase]) -> Vec<&str> {
    cases.iter().map(|case| case.name.as_str()).collect()
}
