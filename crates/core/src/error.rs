use std::path::PathBuf;

use crate::paths::fixtures::FixtureDir;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("missing fixture directories: {}", describe_missing(missing))]
    MissingFixtureDirs { missing: Vec<(FixtureDir, PathBuf)> },
    #[error("failed to read fixture directory {path}: {source}", path = path.display())]
    DirRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read fixture file {path}: {source}", path = path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to deserialize YAML in {path}: {source}", path = path.display())]
    YamlDeserialization {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("test case {index} in {path} has an empty name", path = path.display())]
    EmptyTestCaseName { path: PathBuf, index: usize },
    #[error("duplicate test case name '{name}' in {path}", path = path.display())]
    DuplicateTestCaseName { path: PathBuf, name: String },
}

pub type FixtureResult<T> = std::result::Result<T, FixtureError>;

fn describe_missing(missing: &[(FixtureDir, PathBuf)]) -> String {
    missing
        .iter()
        .map(|(dir, path)| format!("{dir} ({})", path.display()))
        .collect::<Vec<_>>()
        .join(", ")
}
