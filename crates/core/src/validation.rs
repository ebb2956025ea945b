//! Input validation utilities.
//!
//! Fixture file names come from test code and command-line arguments. They
//! are joined onto fixture directories, so they must name a single file and
//! never climb out of the directory.

use std::fmt;
use std::path::{Component, Path};

use crate::{FixtureError, FixtureResult};

/// A validated fixture file name.
///
/// The name is trimmed and must be exactly one normal path component: no
/// separators, no `.` or `..`, no root or drive prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixtureName(String);

impl FixtureName {
    /// Creates a new `FixtureName` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidInput` if the trimmed input is empty or
    /// is not a single plain file name.
    pub fn new(input: impl AsRef<str>) -> FixtureResult<Self> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FixtureError::InvalidInput(
                "fixture name cannot be empty".into(),
            ));
        }

        let mut components = Path::new(trimmed).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_normal || trimmed.contains(['/', '\\']) {
            return Err(FixtureError::InvalidInput(format!(
                "fixture name '{trimmed}' must be a single file name"
            )));
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FixtureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FixtureName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_file_names() {
        for name in ["cases_basic.yaml", "configuration_basic.yml", "README"] {
            assert_eq!(FixtureName::new(name).expect("valid").as_str(), name);
        }
    }

    #[test]
    fn test_trims_whitespace() {
        let name = FixtureName::new("  cases.yaml\n").expect("valid");
        assert_eq!(name.to_string(), "cases.yaml");
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(FixtureName::new("").is_err());
        assert!(FixtureName::new("   ").is_err());
    }

    #[test]
    fn test_rejects_traversal_and_separators() {
        for name in ["..", ".", "../cases.yaml", "sub/cases.yaml", "/etc/passwd", "a\\b"] {
            let err = FixtureName::new(name).expect_err(name);
            assert!(matches!(err, FixtureError::InvalidInput(_)), "{name}");
        }
    }
}
