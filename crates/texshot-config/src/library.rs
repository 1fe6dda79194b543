//! Equation library configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the static equation library is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LibraryConfig {
    /// Path to the JSON equation list, relative to the working directory.
    /// Default: "equations.json"
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("equations.json")
}
