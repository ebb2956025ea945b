//! # Fixtures Core
//!
//! Fixture path registry for the log-collector configuration test package.
//!
//! A test module declares its fixture paths once with [`fixture_paths!`]:
//!
//! ```text
//! <module dir>/
//!     data/
//!         test_cases/
//!         configuration_templates/
//! ```
//!
//! The paths are pure joins against the module's own location. Nothing here
//! checks that the directories exist; [`PathSet::ensure_layout`] is there for
//! callers that want to.
//!
//! Alongside the registry this crate can list the fixtures in those
//! directories, load test-case definitions, and name the product's installed
//! log file.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod paths;
pub mod registry;
pub mod test_cases;
pub mod validation;

pub use catalog::{list_configuration_templates, list_test_cases};
pub use config::FixturesConfig;
pub use error::{FixtureError, FixtureResult};
pub use paths::fixtures::{FixtureDir, PathSet};
pub use paths::product::ProductPaths;
pub use test_cases::{load_test_cases, test_case_ids, TestCase};
pub use validation::FixtureName;
