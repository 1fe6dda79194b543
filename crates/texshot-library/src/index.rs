//! Normalized-alias index over the equation list.

use crate::entry::EquationEntry;
use log::trace;
use std::collections::HashMap;

/// Reduce a name to its matching key.
///
/// Lowercases, drops everything but `a-z`, `0-9` and whitespace,
/// collapses whitespace runs to one space and trims.
///
/// # Example
///
/// ```
/// use texshot_library::normalize_equation_name;
///
/// assert_eq!(normalize_equation_name("  Euler's   Identity! "), "eulers identity");
/// assert_eq!(normalize_equation_name("E = mc²"), "e mc");
/// ```
pub fn normalize_equation_name(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut pending_space = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() {
            pending_space = true;
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_space && !key.is_empty() {
                key.push(' ');
            }
            pending_space = false;
            key.push(ch);
        }
    }

    key
}

/// Lookup table from normalized alias to equation.
///
/// The first entry to claim a key keeps it; later duplicates are ignored.
#[derive(Debug, Clone, Default)]
pub struct EquationIndex {
    entries: Vec<EquationEntry>,
    keys: HashMap<String, usize>,
}

impl EquationIndex {
    /// Build the index from entries in file order.
    pub fn build(entries: Vec<EquationEntry>) -> Self {
        let mut keys = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            for name in &entry.names {
                let key = normalize_equation_name(name);
                if key.is_empty() {
                    continue;
                }
                if keys.contains_key(&key) {
                    trace!("Alias {:?} already taken, skipping", name);
                    continue;
                }
                keys.insert(key, idx);
            }
        }

        Self { entries, keys }
    }

    /// Find the entry for a free-text query.
    pub fn get(&self, query: &str) -> Option<&EquationEntry> {
        let key = normalize_equation_name(query);
        self.keys.get(&key).map(|&idx| &self.entries[idx])
    }

    /// All entries in file order.
    pub fn entries(&self) -> &[EquationEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct normalized aliases.
    pub fn alias_count(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize_equation_name("Schrödinger's equation"), "schrdingers equation");
        assert_eq!(normalize_equation_name("a-b_c"), "abc");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_equation_name("\tquadratic \n formula  "), "quadratic formula");
    }

    #[test]
    fn test_normalize_punctuation_between_words() {
        // Removing the dash joins the words; whitespace decides the gaps
        assert_eq!(normalize_equation_name("Navier - Stokes"), "navier stokes");
        assert_eq!(normalize_equation_name("Navier-Stokes"), "navierstokes");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_equation_name(""), "");
        assert_eq!(normalize_equation_name("?!"), "");
        assert_eq!(normalize_equation_name("  !  "), "");
    }

    #[test]
    fn test_first_registered_alias_wins() {
        let index = EquationIndex::build(vec![
            EquationEntry::new(["Area of a circle", "circle"], r"A = \pi r^2"),
            EquationEntry::new(["Circumference", "Circle!"], r"C = 2\pi r"),
        ]);

        assert_eq!(index.get("circle").unwrap().latex, r"A = \pi r^2");
        assert_eq!(index.get("circumference").unwrap().latex, r"C = 2\pi r");
        assert_eq!(index.alias_count(), 3);
    }

    #[test]
    fn test_empty_keys_not_indexed() {
        let index = EquationIndex::build(vec![EquationEntry::new(["???", "ok"], "x")]);
        assert_eq!(index.alias_count(), 1);
        assert!(index.get("???").is_none());
    }

    #[test]
    fn test_entries_keep_file_order() {
        let index = EquationIndex::build(vec![
            EquationEntry::new(["b"], "2"),
            EquationEntry::new(["a"], "1"),
        ]);
        assert_eq!(index.entries()[0].latex, "2");
        assert_eq!(index.len(), 2);
    }
}
