//! Image export configuration.
//!
//! The two constants that drive automatic sizing live here:
//! pixels per line and the supersampling scale.

use serde::{Deserialize, Serialize};
use texshot_core::HeightMode;

/// Image export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportConfig {
    /// Height in pixels of one line of math in auto height mode.
    /// Default: 42
    #[serde(default = "default_pixels_per_line")]
    pub pixels_per_line: u32,

    /// Supersampling factor used when rasterizing the preview.
    /// Default: 2.0
    #[serde(default = "default_render_scale")]
    pub render_scale: f64,

    /// Background colour of exported images.
    /// Default: "#ffffff"
    #[serde(default = "default_background")]
    pub background: String,

    /// File name used when saving an image.
    /// Default: "equation.png"
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Count literal newlines as line breaks in addition to `\\`.
    /// Default: true
    #[serde(default = "default_true")]
    pub count_newlines: bool,

    /// Initial height mode.
    /// Default: auto
    #[serde(default)]
    pub height_mode: HeightMode,

    /// Initial manual height text, parsed when the mode is manual.
    /// Default: ""
    #[serde(default)]
    pub manual_height: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pixels_per_line: default_pixels_per_line(),
            render_scale: default_render_scale(),
            background: default_background(),
            filename: default_filename(),
            count_newlines: true,
            height_mode: HeightMode::Auto,
            manual_height: String::new(),
        }
    }
}

fn default_pixels_per_line() -> u32 {
    42
}

fn default_render_scale() -> f64 {
    2.0
}

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_filename() -> String {
    "equation.png".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let export = ExportConfig::default();
        assert_eq!(export.pixels_per_line, 42);
        assert!((export.render_scale - 2.0).abs() < f64::EPSILON);
        assert!(export.count_newlines);
        assert!(export.manual_height.is_empty());
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r##"
            PixelsPerLine = 64
            RenderScale = 2.2
            Background = "#000000"
            Filename = "out.png"
            CountNewlines = false
            HeightMode = "manual"
            ManualHeight = "300"
        "##;

        let export: ExportConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(export.pixels_per_line, 64);
        assert!((export.render_scale - 2.2).abs() < f64::EPSILON);
        assert_eq!(export.background, "#000000");
        assert_eq!(export.filename, "out.png");
        assert!(!export.count_newlines);
        assert_eq!(export.height_mode, HeightMode::Manual);
        assert_eq!(export.manual_height, "300");
    }
}
