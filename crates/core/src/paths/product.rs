//! Installed product paths.
//!
//! Tests watch the product's log file and swap its configuration file. Both
//! live at fixed locations under the installation directory:
//! ```text
//! <install dir>/
//!     etc/
//!         ossec.conf
//!     logs/
//!         ossec.log
//! ```

use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILENAME, ETC_DIR_NAME, LOGS_DIR_NAME, LOG_FILENAME};

/// Paths of an installed product, relative to its installation directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPaths {
    install_dir: PathBuf,
}

impl ProductPaths {
    pub fn new(install_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
        }
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.install_dir.join(LOGS_DIR_NAME)
    }

    /// Returns the main log file that log-collector tests monitor.
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILENAME)
    }

    pub fn config_file(&self) -> PathBuf {
        self.install_dir.join(ETC_DIR_NAME).join(CONFIG_FILENAME)
    }
}
