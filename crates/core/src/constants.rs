//! Constants used throughout the fixtures core crate.
//!
//! Directory and file names live here so every path is spelled once.

/// Directory holding all fixture data, inside the test module's directory.
pub const DATA_DIR_NAME: &str = "data";

/// Directory holding test-case definitions, inside [`DATA_DIR_NAME`].
pub const TEST_CASES_DIR_NAME: &str = "test_cases";

/// Directory holding configuration templates, inside [`DATA_DIR_NAME`].
pub const CONFIGURATION_TEMPLATES_DIR_NAME: &str = "configuration_templates";

/// File extensions recognised as fixture files.
pub const FIXTURE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Default product installation directory when no override is configured.
pub const DEFAULT_INSTALL_DIR: &str = "/var/ossec";

/// Directory name for product logs under the installation directory.
pub const LOGS_DIR_NAME: &str = "logs";

/// Filename of the product's main log.
pub const LOG_FILENAME: &str = "ossec.log";

/// Directory name for product configuration under the installation directory.
pub const ETC_DIR_NAME: &str = "etc";

/// Filename of the product's main configuration file.
pub const CONFIG_FILENAME: &str = "ossec.conf";
