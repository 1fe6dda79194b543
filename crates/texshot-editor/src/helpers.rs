//! Built-in helper templates and the helper catalog.
//!
//! The catalog starts from the built-ins and then applies helpers from the
//! config file: a configured helper with a built-in's name replaces it,
//! any other name is appended.

use texshot_config::HelperConfig;

/// A named helper template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Helper {
    /// Name used to invoke the helper
    pub name: String,
    /// Short description
    pub description: String,
    /// Template text (doubled backslashes, `[[sel]]`/`[[cur]]`/`[[nl]]` tokens)
    pub template: String,
}

impl Helper {
    /// Create a helper.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            template: template.into(),
        }
    }
}

impl From<&HelperConfig> for Helper {
    fn from(config: &HelperConfig) -> Self {
        Self::new(&config.name, &config.description, &config.template)
    }
}

/// Get all built-in helpers.
pub fn builtin_helpers() -> Vec<Helper> {
    [
        ("frac", "Fraction", r"\\frac{[[sel]]}{[[cur]]}"),
        ("sqrt", "Square root", r"\\sqrt{[[sel]][[cur]]}"),
        ("root", "n-th root", r"\\sqrt[[[cur]]]{[[sel]]}"),
        ("sup", "Superscript", r"[[sel]]^{[[cur]]}"),
        ("sub", "Subscript", r"[[sel]]_{[[cur]]}"),
        ("sum", "Summation", r"\\sum_{[[cur]]}^{} [[sel]]"),
        ("int", "Integral", r"\\int_{[[cur]]}^{} [[sel]] \\, dx"),
        ("lim", "Limit", r"\\lim_{[[cur]] \\to } [[sel]]"),
        ("paren", "Scaled parentheses", r"\\left( [[sel]][[cur]] \\right)"),
        (
            "matrix",
            "2x2 matrix",
            r"\\begin{pmatrix} [[sel]][[cur]] & \\\\[[nl]] & \\end{pmatrix}",
        ),
        (
            "cases",
            "Piecewise cases",
            r"\\begin{cases} [[sel]][[cur]] & \\text{if } \\\\[[nl]] & \\text{otherwise} \\end{cases}",
        ),
        (
            "align",
            "Aligned equations",
            r"\\begin{aligned}[[nl]][[sel]][[cur]][[nl]]\\end{aligned}",
        ),
        ("text", "Upright text", r"\\text{[[sel]][[cur]]}"),
        ("bold", "Bold symbol", r"\\mathbf{[[sel]][[cur]]}"),
        ("vec", "Vector arrow", r"\\vec{[[sel]][[cur]]}"),
    ]
    .into_iter()
    .map(|(name, description, template)| Helper::new(name, description, template))
    .collect()
}

/// The set of helpers available to the editor.
#[derive(Debug, Clone, Default)]
pub struct HelperCatalog {
    helpers: Vec<Helper>,
}

impl HelperCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in helpers.
    pub fn with_builtins() -> Self {
        Self {
            helpers: builtin_helpers(),
        }
    }

    /// Built-ins plus the helpers declared in config.
    pub fn from_config(configured: &[HelperConfig]) -> Self {
        let mut catalog = Self::with_builtins();
        for helper in configured {
            catalog.register(Helper::from(helper));
        }
        catalog
    }

    /// Add a helper, replacing any helper with the same name.
    pub fn register(&mut self, helper: Helper) {
        match self.helpers.iter_mut().find(|h| h.name == helper.name) {
            Some(existing) => *existing = helper,
            None => self.helpers.push(helper),
        }
    }

    /// Find a helper by exact name.
    pub fn get(&self, name: &str) -> Option<&Helper> {
        self.helpers.iter().find(|h| h.name == name)
    }

    /// Helper names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.helpers.iter().map(|h| h.name.as_str()).collect()
    }

    /// Iterate over the helpers.
    pub fn iter(&self) -> impl Iterator<Item = &Helper> {
        self.helpers.iter()
    }

    /// Number of helpers.
    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::expand_template;

    #[test]
    fn test_builtins_present() {
        let catalog = HelperCatalog::with_builtins();
        assert!(catalog.len() >= 10);
        for name in ["frac", "sqrt", "matrix", "cases", "align"] {
            assert!(catalog.get(name).is_some(), "missing {}", name);
        }
    }

    #[test]
    fn test_builtin_names_unique() {
        let catalog = HelperCatalog::with_builtins();
        let mut names = catalog.names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_every_builtin_places_caret() {
        for helper in builtin_helpers() {
            let expansion = expand_template(&helper.template, "x");
            assert!(expansion.caret <= expansion.text.len());
            assert!(!expansion.text.contains("[["), "{} left a token", helper.name);
        }
    }

    #[test]
    fn test_matrix_row_break() {
        let catalog = HelperCatalog::with_builtins();
        let expansion = expand_template(&catalog.get("matrix").unwrap().template, "a");
        assert_eq!(
            expansion.text,
            "\\begin{pmatrix} a & \\\\\n & \\end{pmatrix}"
        );
    }

    #[test]
    fn test_config_overrides_and_extends() {
        let configured = vec![
            HelperConfig {
                name: "frac".to_string(),
                template: r"\\dfrac{[[sel]]}{[[cur]]}".to_string(),
                description: "Display fraction".to_string(),
            },
            HelperConfig {
                name: "hat".to_string(),
                template: r"\\hat{[[sel]]}".to_string(),
                description: String::new(),
            },
        ];

        let catalog = HelperCatalog::from_config(&configured);
        assert_eq!(catalog.len(), builtin_helpers().len() + 1);
        assert_eq!(catalog.get("frac").unwrap().description, "Display fraction");
        assert_eq!(catalog.names().last(), Some(&"hat"));
    }

    #[test]
    fn test_unknown_helper() {
        assert!(HelperCatalog::with_builtins().get("FRAC").is_none());
        assert!(HelperCatalog::new().is_empty());
    }
}
