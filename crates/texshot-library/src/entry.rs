//! A single named equation.

use serde::{Deserialize, Serialize};

/// An equation and the names it can be found under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationEntry {
    /// Aliases; the first one is the canonical display name
    pub names: Vec<String>,
    /// The equation's LaTeX source
    pub latex: String,
}

impl EquationEntry {
    /// Create an entry.
    pub fn new<I, S>(names: I, latex: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            latex: latex.into(),
        }
    }

    /// The canonical display name, if the entry has any names.
    pub fn display_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}
