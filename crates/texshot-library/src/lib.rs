//! Texshot Library
//!
//! A static list of named equations and a lookup service over it.
//!
//! The library is loaded once from a JSON array of
//! `{ "names": [...], "latex": "..." }` objects and is read-only afterwards.
//! Queries are matched against every alias after both sides go through
//! [`normalize_equation_name`].
//!
//! # Example
//!
//! ```
//! use texshot_library::EquationLibrary;
//!
//! let mut library = EquationLibrary::new();
//! library
//!     .load_from_str(r#"[{"names":["Pythagorean theorem"],"latex":"a^2+b^2=c^2"}]"#)
//!     .unwrap();
//!
//! let found = library.lookup("  PYTHAGOREAN   theorem ").unwrap();
//! assert_eq!(found.latex, "a^2+b^2=c^2");
//! assert_eq!(found.name, "Pythagorean theorem");
//! ```

pub mod entry;
pub mod index;

pub use entry::EquationEntry;
pub use index::{normalize_equation_name, EquationIndex};

use log::{debug, warn};
use std::path::Path;
use texshot_core::{Result, TexshotError};
use thiserror::Error;

/// Shown when the library could not be loaded.
pub const LIBRARY_UNAVAILABLE: &str = "Equation library unavailable. Check that the equations file \
exists and holds a JSON array of { \"names\": [...], \"latex\": \"...\" } entries.";

/// Why a lookup produced no equation.
///
/// The `Display` text is what the status line shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The library has not been loaded, or loading failed
    #[error("Equation library is not loaded yet.")]
    NotLoaded,

    /// The query was blank
    #[error("Type an equation name to look up.")]
    EmptyQuery,

    /// No alias matched the query
    #[error("No equation found for \"{0}\".")]
    NoMatch(String),
}

/// A successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquationMatch<'a> {
    /// Canonical display name (the entry's first alias)
    pub name: &'a str,
    /// The equation's LaTeX
    pub latex: &'a str,
}

/// Load state of the library.
#[derive(Debug, Clone, Default)]
enum LibraryState {
    #[default]
    Unloaded,
    Loaded(EquationIndex),
    Failed(String),
}

/// The equation library service.
///
/// Constructed empty, initialised once with one of the `load_*` methods,
/// then only read.
#[derive(Debug, Clone, Default)]
pub struct EquationLibrary {
    state: LibraryState,
}

impl EquationLibrary {
    /// Create an unloaded library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the library from a JSON document.
    ///
    /// On failure the library is left unusable and remembers the reason.
    ///
    /// # Returns
    /// The number of equations loaded.
    pub fn load_from_str(&mut self, json: &str) -> Result<usize> {
        match parse_entries(json) {
            Ok(entries) => {
                let index = EquationIndex::build(entries);
                let count = index.len();
                debug!(
                    "Loaded {} equations under {} aliases",
                    count,
                    index.alias_count()
                );
                self.state = LibraryState::Loaded(index);
                Ok(count)
            }
            Err(e) => {
                warn!("Equation library rejected: {}", e);
                self.state = LibraryState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Load the library from a JSON file.
    pub fn load_from_path(&mut self, path: &Path) -> Result<usize> {
        match std::fs::read_to_string(path) {
            Ok(content) => self.load_from_str(&content),
            Err(e) => {
                warn!("Could not read equation library {}: {}", path.display(), e);
                self.state = LibraryState::Failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Whether a library is loaded and lookups are possible.
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LibraryState::Loaded(_))
    }

    /// The reason the last load failed, if it did.
    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            LibraryState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// The index, once loaded.
    pub fn index(&self) -> Option<&EquationIndex> {
        match &self.state {
            LibraryState::Loaded(index) => Some(index),
            _ => None,
        }
    }

    /// All loaded entries in file order.
    pub fn entries(&self) -> &[EquationEntry] {
        self.index().map(EquationIndex::entries).unwrap_or(&[])
    }

    /// Number of loaded equations.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether no equations are loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a free-text query to an equation.
    pub fn lookup(&self, query: &str) -> std::result::Result<EquationMatch<'_>, LookupError> {
        let index = self.index().ok_or(LookupError::NotLoaded)?;

        if query.trim().is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let entry = index
            .get(query)
            .ok_or_else(|| LookupError::NoMatch(query.trim().to_string()))?;

        Ok(EquationMatch {
            name: entry.display_name().unwrap_or_default(),
            latex: &entry.latex,
        })
    }
}

/// Parse and validate the JSON payload.
fn parse_entries(json: &str) -> Result<Vec<EquationEntry>> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| TexshotError::Library(format!("invalid JSON: {}", e)))?;

    if !value.is_array() {
        return Err(TexshotError::Library(
            "expected a JSON array of equations".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| TexshotError::Library(format!("malformed equation entry: {}", e)))
}
