//! Texshot Config
//!
//! This crate handles configuration loading and management
//! for texshot, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/texshot/config.toml`
//! - macOS: `~/Library/Application Support/texshot/config.toml`
//! - Windows: `%APPDATA%\texshot\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use texshot_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod editor;
mod export;
mod library;

pub use editor::{EditorConfig, HelperConfig};
pub use export::ExportConfig;
pub use library::LibraryConfig;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use texshot_core::{Result, TexshotError};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r##"[export]
PixelsPerLine = 42
RenderScale   = 2.0
Background    = "#ffffff"
Filename      = "equation.png"
CountNewlines = true
HeightMode    = "auto"
ManualHeight  = ""

[library]
Path = "equations.json"

[editor]
AutoClose = true
"##;

/// Main configuration structure.
///
/// Contains all configuration sections for texshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Image export configuration
    #[serde(default)]
    pub export: ExportConfig,

    /// Equation library configuration
    #[serde(default)]
    pub library: LibraryConfig,

    /// Editor behaviour
    #[serde(default)]
    pub editor: EditorConfig,

    /// User-defined helper templates
    #[serde(default)]
    pub helpers: Vec<HelperConfig>,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use texshot_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[export]"));
    /// assert!(toml.contains("[library]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "texshot")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| TexshotError::Config("Could not determine config directory".into()))?;
        Self::ensure_config_file_in(&config_dir)
    }

    /// Writes `config.toml` with the defaults into `config_dir` unless it exists.
    pub fn ensure_config_file_in(config_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use texshot_config::Config;
    /// use std::path::Path;
    /// let config = Config::load_from(Path::new("./config.toml")).unwrap();
    /// ```
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| TexshotError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Parse configuration from an inline TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TexshotError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` is a path to an existing file, overlay its contents
    /// 3. Otherwise treat it as inline TOML and overlay that
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            if override_path.exists() {
                let content = std::fs::read_to_string(override_path)?;
                config.merge_toml(&content).map_err(|e| {
                    TexshotError::Config(format!("{} ({})", e, override_path.display()))
                })?;
            } else {
                config.merge_toml(override_str)?;
            }
        }

        Ok(config)
    }

    /// Overlay a TOML document onto this config.
    ///
    /// Only the keys present in `content` change; everything else keeps its
    /// current value. Helpers are merged by name: a helper in `content`
    /// replaces one with the same name, new names are appended.
    ///
    /// # Example
    ///
    /// ```
    /// use texshot_config::Config;
    ///
    /// let mut base = Config::from_toml("[export]\nRenderScale = 2.2\n").unwrap();
    /// base.merge_toml(r#"
    ///     [export]
    ///     PixelsPerLine = 64
    /// "#).unwrap();
    ///
    /// assert_eq!(base.export.pixels_per_line, 64);
    /// assert_eq!(base.export.render_scale, 2.2);
    /// ```
    pub fn merge_toml(&mut self, content: &str) -> Result<()> {
        let overlay: toml::Table = toml::from_str(content)
            .map_err(|e| TexshotError::Config(format!("Parse error: {}", e)))?;

        let mut merged = toml::Table::try_from(&*self)
            .map_err(|e| TexshotError::Config(format!("Serialization error: {}", e)))?;
        overlay_table(&mut merged, overlay);

        *self = merged
            .try_into()
            .map_err(|e| TexshotError::Config(format!("Parse error: {}", e)))?;
        Ok(())
    }
}

/// Recursively copy `overlay` into `base`. Tables merge key by key,
/// `helpers` arrays merge by `Name`, any other value replaces the old one.
fn overlay_table(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        let replacement = match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(table)) => {
                overlay_table(existing, table);
                None
            }
            (Some(toml::Value::Array(existing)), toml::Value::Array(items)) if key == "helpers" => {
                merge_named(existing, items);
                None
            }
            (_, value) => Some(value),
        };

        if let Some(value) = replacement {
            base.insert(key, value);
        }
    }
}

fn merge_named(existing: &mut Vec<toml::Value>, items: Vec<toml::Value>) {
    for item in items {
        let name = item.get("Name").cloned();
        match existing
            .iter_mut()
            .find(|h| name.is_some() && h.get("Name") == name.as_ref())
        {
            Some(slot) => *slot = item,
            None => existing.push(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texshot_core::HeightMode;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.export.pixels_per_line, 42);
        assert!((config.export.render_scale - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.export.background, "#ffffff");
        assert_eq!(config.export.filename, "equation.png");
        assert_eq!(config.export.height_mode, HeightMode::Auto);
        assert_eq!(config.library.path, PathBuf::from("equations.json"));
        assert!(config.editor.auto_close);
        assert!(config.helpers.is_empty());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml("[export]\nRenderScale = 2.2\n").unwrap();
        assert!((config.export.render_scale - 2.2).abs() < f64::EPSILON);
        assert_eq!(config.export.pixels_per_line, 42);
        assert!(config.export.count_newlines);
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();

        let override_toml = r#"
            [export]
            PixelsPerLine = 64
            HeightMode = "manual"
            ManualHeight = "120"
            [editor]
            AutoClose = false
        "#;

        base.merge_toml(override_toml).unwrap();
        assert_eq!(base.export.pixels_per_line, 64);
        assert_eq!(base.export.height_mode, HeightMode::Manual);
        assert_eq!(base.export.manual_height, "120");
        assert!(!base.editor.auto_close);
    }

    #[test]
    fn test_merge_keeps_unmentioned_keys() {
        let mut base = Config::from_toml(
            r##"
            [export]
            RenderScale = 2.2
            Background = "#000000"
            CountNewlines = false
            [library]
            Path = "mine.json"
            [editor]
            AutoClose = false
            "##,
        )
        .unwrap();

        base.merge_toml("[export]\nPixelsPerLine = 64\n").unwrap();
        assert_eq!(base.export.pixels_per_line, 64);
        assert!((base.export.render_scale - 2.2).abs() < f64::EPSILON);
        assert_eq!(base.export.background, "#000000");
        assert!(!base.export.count_newlines);
        assert_eq!(base.library.path, PathBuf::from("mine.json"));
        assert!(!base.editor.auto_close);
    }

    #[test]
    fn test_merge_helpers_by_name() {
        let mut base = Config::from_toml(
            r#"
            [[helpers]]
            Name = "dot"
            Template = "\\dot{[[sel]]}"
            Description = "Dot accent"
            "#,
        )
        .unwrap();

        base.merge_toml(
            r#"
            [[helpers]]
            Name = "dot"
            Template = "\\ddot{[[sel]]}"

            [[helpers]]
            Name = "hat"
            Template = "\\hat{[[sel]]}"
            "#,
        )
        .unwrap();
        assert_eq!(base.helpers.len(), 2);
        assert_eq!(base.helpers[0].template, "\\ddot{[[sel]]}");
        assert!(base.helpers[0].description.is_empty());
        assert_eq!(base.helpers[1].name, "hat");
    }

    #[test]
    fn test_merge_invalid_toml_leaves_config() {
        let mut base = Config::from_toml("[export]\nPixelsPerLine = 64\n").unwrap();
        assert!(base.merge_toml("[export\n").is_err());
        assert!(base.merge_toml("[export]\nPixelsPerLine = \"tall\"\n").is_err());
        assert_eq!(base.export.pixels_per_line, 64);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml("[export\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_config_path() {
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("texshot"));
        }
    }

    #[test]
    fn test_ensure_config_file_in() {
        let dir = std::env::temp_dir().join(format!("texshot-config-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let path = Config::ensure_config_file_in(&dir).unwrap();
        assert_eq!(path, dir.join("config.toml"));
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.export.pixels_per_line, 42);
        assert_eq!(loaded.library.path, PathBuf::from("equations.json"));

        std::fs::write(&path, "[export]\nPixelsPerLine = 64\n").unwrap();
        Config::ensure_config_file_in(&dir).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().export.pixels_per_line, 64);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.export.pixels_per_line, parsed.export.pixels_per_line);
        assert_eq!(config.library.path, parsed.library.path);
    }
}
