//! Editor behaviour and user-defined helper templates.

use serde::{Deserialize, Serialize};

/// Editor behaviour toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditorConfig {
    /// Typing `{`, `(` or `[` inserts the matching closer around the selection.
    /// Default: true
    #[serde(default = "default_true")]
    pub auto_close: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { auto_close: true }
    }
}

/// A named helper template declared in the config file.
///
/// ```toml
/// [[helpers]]
/// Name = "hat"
/// Template = "\\hat{[[sel]][[cur]]}"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HelperConfig {
    /// Name used to invoke the helper
    pub name: String,
    /// Template text with `[[sel]]`, `[[cur]]` and `[[nl]]` tokens
    pub template: String,
    /// Optional one-line description
    #[serde(default)]
    pub description: String,
}

fn default_true() -> bool {
    true
}
