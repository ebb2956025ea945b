//! Fixture runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the
//! operations that need it. Operations never read environment variables
//! themselves, so parallel test threads always see the same values.

use std::path::PathBuf;

use crate::constants::DEFAULT_INSTALL_DIR;
use crate::paths::product::ProductPaths;
use crate::{FixtureError, FixtureResult};

/// Configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct FixturesConfig {
    product: ProductPaths,
}

impl FixturesConfig {
    /// Create a new `FixturesConfig`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidInput` if `install_dir` is not absolute.
    pub fn new(install_dir: PathBuf) -> FixtureResult<Self> {
        if !install_dir.is_absolute() {
            return Err(FixtureError::InvalidInput(format!(
                "install directory must be absolute: {}",
                install_dir.display()
            )));
        }

        Ok(Self {
            product: ProductPaths::new(install_dir),
        })
    }

    pub fn product(&self) -> &ProductPaths {
        &self.product
    }
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            product: ProductPaths::new(DEFAULT_INSTALL_DIR),
        }
    }
}

/// Parse the product installation directory from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default install
/// directory.
pub fn install_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALL_DIR))
}
