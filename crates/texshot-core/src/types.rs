//! Core types for texshot

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` inside the editor buffer.
///
/// A collapsed selection (`start == end`) is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Selection {
    /// Create a selection, ordering the endpoints.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create a collapsed selection at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Whether nothing is selected.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Length of the selected range in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the selection is empty.
    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }
}

/// How the height of an exported image is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightMode {
    /// Derive the height from the number of lines in the input
    #[default]
    Auto,
    /// Use the height typed by the user
    Manual,
}

impl std::fmt::Display for HeightMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeightMode::Auto => write!(f, "auto"),
            HeightMode::Manual => write!(f, "manual"),
        }
    }
}

impl std::str::FromStr for HeightMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(HeightMode::Auto),
            "manual" => Ok(HeightMode::Manual),
            other => Err(format!("unknown height mode: {}", other)),
        }
    }
}

/// A message for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Text shown to the user
    pub message: String,
    /// Errors are highlighted differently
    pub is_error: bool,
}

impl Status {
    /// An informational status.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    /// An error status.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_orders_endpoints() {
        let sel = Selection::new(7, 3);
        assert_eq!(sel.start, 3);
        assert_eq!(sel.end, 7);
        assert_eq!(sel.len(), 4);
        assert!(!sel.is_collapsed());
    }

    #[test]
    fn test_caret() {
        let sel = Selection::caret(5);
        assert!(sel.is_collapsed());
        assert_eq!(sel.len(), 0);
    }

    #[test]
    fn test_height_mode_parse() {
        assert_eq!("auto".parse::<HeightMode>().unwrap(), HeightMode::Auto);
        assert_eq!("Manual".parse::<HeightMode>().unwrap(), HeightMode::Manual);
        assert!("tall".parse::<HeightMode>().is_err());
        assert_eq!(HeightMode::Manual.to_string(), "manual");
    }

    #[test]
    fn test_status_constructors() {
        assert!(!Status::info("Saved PNG.").is_error);
        assert!(Status::error("Save failed: disk").is_error);
        assert_eq!(Status::info("ok").to_string(), "ok");
    }
}
