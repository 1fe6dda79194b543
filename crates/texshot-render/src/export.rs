//! Image export: target height selection and rescaling.
//!
//! The preview is rasterized once at the supersampling scale, then
//! resampled so its height matches the target. In auto mode the target is
//! `pixels_per_line * line_count`; in manual mode it is the number the user
//! typed. Width follows the aspect ratio.

use crate::raster::{RasterOptions, Rasterizer};
use crate::renderer::Preview;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::{debug, warn};
use texshot_config::ExportConfig;
use texshot_core::{hex2rgba, HeightMode, Result, TexshotError};
use texshot_latex::{line_count, BreakCounting};

/// Largest bitmap area the rescaler will allocate (16384 x 16384).
pub const MAX_CANVAS_AREA: u64 = 16_384 * 16_384;

/// Resolved export constants.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// Height of one line in auto mode
    pub pixels_per_line: u32,
    /// Supersampling factor passed to the rasterizer
    pub render_scale: f64,
    /// RGBA background
    pub background: [u8; 4],
    /// How line breaks are counted
    pub counting: BreakCounting,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            pixels_per_line: 42,
            render_scale: 2.0,
            background: [255, 255, 255, 255],
            counting: BreakCounting::EscapesAndNewlines,
        }
    }
}

impl ExportSettings {
    /// Resolve settings from the `[export]` config section.
    pub fn from_config(config: &ExportConfig) -> Result<Self> {
        let background = hex2rgba(&config.background).ok_or_else(|| {
            TexshotError::Config(format!("invalid background colour: {}", config.background))
        })?;

        if !(config.render_scale.is_finite() && config.render_scale > 0.0) {
            return Err(TexshotError::Config(format!(
                "render scale must be positive, got {}",
                config.render_scale
            )));
        }

        Ok(Self {
            pixels_per_line: config.pixels_per_line,
            render_scale: config.render_scale,
            background,
            counting: BreakCounting::from_count_newlines(config.count_newlines),
        })
    }

    /// Options handed to the rasterizer.
    pub fn raster_options(&self) -> RasterOptions {
        RasterOptions {
            background: self.background,
            scale: self.render_scale,
        }
    }
}

/// Parse an integer the way a browser's `parseInt(text, 10)` does.
///
/// Leading whitespace and a sign are accepted, then as many decimal digits
/// as follow; anything after them is ignored. No digits means no number.
///
/// # Example
///
/// ```
/// use texshot_render::parse_int;
///
/// assert_eq!(parse_int(" 120px"), Some(120));
/// assert_eq!(parse_int("-5"), Some(-5));
/// assert_eq!(parse_int("12.9"), Some(12));
/// assert_eq!(parse_int("px"), None);
/// ```
pub fn parse_int(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for digit in digits {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    seen.then_some(if negative { -value } else { value })
}

/// The height an export should have, or `None` to keep the rasterized size.
pub fn target_height(
    raw_input: &str,
    mode: HeightMode,
    manual_height: &str,
    settings: &ExportSettings,
) -> Option<u32> {
    let height = match mode {
        HeightMode::Auto => {
            let lines = line_count(raw_input, settings.counting) as u64;
            i64::try_from(lines.saturating_mul(u64::from(settings.pixels_per_line))).ok()?
        }
        HeightMode::Manual => parse_int(manual_height)?,
    };

    if height <= 0 {
        return None;
    }
    Some(u32::try_from(height).unwrap_or(u32::MAX))
}

/// Rescale a bitmap to `target` pixels high, keeping the aspect ratio.
///
/// The base bitmap is returned untouched when there is no target, when it
/// already has the target height, or when the rescaled bitmap would exceed
/// [`MAX_CANVAS_AREA`].
pub fn fit_to_height(base: RgbaImage, target: Option<u32>) -> RgbaImage {
    let Some(target) = target else {
        return base;
    };

    let (base_width, base_height) = base.dimensions();
    if target == 0 || base_height == 0 || target == base_height {
        return base;
    }

    let scale = f64::from(target) / f64::from(base_height);
    let width = (f64::from(base_width) * scale).round().max(1.0) as u32;

    if u64::from(width) * u64::from(target) > MAX_CANVAS_AREA {
        warn!(
            "Rescaled image {}x{} exceeds the canvas limit, keeping {}x{}",
            width, target, base_width, base_height
        );
        return base;
    }

    debug!(
        "Rescaling {}x{} to {}x{}",
        base_width, base_height, width, target
    );
    imageops::resize(&base, width, target, FilterType::CatmullRom)
}

/// Rasterize the preview and size it for export.
pub fn export_bitmap<R: Rasterizer + ?Sized>(
    raw_input: &str,
    preview: &Preview,
    rasterizer: &R,
    mode: HeightMode,
    manual_height: &str,
    settings: &ExportSettings,
) -> Result<RgbaImage> {
    let source = match preview {
        Preview::Rendered { source, .. } => source,
        Preview::Placeholder => {
            return Err(TexshotError::Raster("Nothing to export.".to_string()))
        }
        Preview::Error { message } => {
            return Err(TexshotError::Raster(format!(
                "the equation has an error: {}",
                message
            )))
        }
    };

    let target = target_height(raw_input, mode, manual_height, settings);
    let base = rasterizer.rasterize(source, &settings.raster_options())?;
    Ok(fit_to_height(base, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
    }

    /// Rasterizer producing a fixed-size bitmap.
    struct Fixed(u32, u32);

    impl Rasterizer for Fixed {
        fn rasterize(&self, _source: &str, options: &RasterOptions) -> Result<RgbaImage> {
            Ok(RgbaImage::from_pixel(self.0, self.1, Rgba(options.background)))
        }
    }

    fn rendered() -> Preview {
        Preview::Rendered {
            source: "x".to_string(),
            markup: "<span>x</span>".to_string(),
        }
    }

    #[test]
    fn test_rescale_doubles() {
        let out = fit_to_height(solid(150, 100), Some(200));
        assert_eq!(out.height(), 200);
        assert_eq!(out.width(), 300);
    }

    #[test]
    fn test_rescale_rounds_width() {
        let out = fit_to_height(solid(101, 100), Some(150));
        assert_eq!(out.dimensions(), (152, 150));
    }

    #[test]
    fn test_rescale_width_floor() {
        let out = fit_to_height(solid(1, 1000), Some(10));
        assert_eq!(out.dimensions(), (1, 10));
    }

    #[test]
    fn test_same_height_is_noop() {
        let base = solid(64, 100);
        let ptr = base.as_raw().as_ptr();
        let out = fit_to_height(base, Some(100));
        assert_eq!(out.as_raw().as_ptr(), ptr);
        assert_eq!(out.dimensions(), (64, 100));
    }

    #[test]
    fn test_no_target_is_noop() {
        let base = solid(64, 100);
        let expected = base.clone();
        assert_eq!(fit_to_height(base, None), expected);
    }

    #[test]
    fn test_oversized_target_falls_back() {
        let base = solid(1000, 1);
        let out = fit_to_height(base, Some(400_000));
        assert_eq!(out.dimensions(), (1000, 1));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("  +7 "), Some(7));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("1e3"), Some(1));
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_target_height_auto() {
        let settings = ExportSettings::default();
        assert_eq!(target_height("x", HeightMode::Auto, "", &settings), Some(42));
        assert_eq!(
            target_height("a\\\\\nb\\\\\nc", HeightMode::Auto, "", &settings),
            Some(126)
        );

        let tall = ExportSettings {
            pixels_per_line: 64,
            ..ExportSettings::default()
        };
        assert_eq!(target_height("a\nb", HeightMode::Auto, "", &tall), Some(128));
    }

    #[test]
    fn test_target_height_manual() {
        let settings = ExportSettings::default();
        assert_eq!(target_height("x", HeightMode::Manual, "120px", &settings), Some(120));
        assert_eq!(target_height("x", HeightMode::Manual, "abc", &settings), None);
        assert_eq!(target_height("x", HeightMode::Manual, "-5", &settings), None);
        assert_eq!(target_height("x", HeightMode::Manual, "0", &settings), None);
    }

    #[test]
    fn test_zero_pixels_per_line_keeps_size() {
        let settings = ExportSettings {
            pixels_per_line: 0,
            ..ExportSettings::default()
        };
        assert_eq!(target_height("x", HeightMode::Auto, "", &settings), None);
    }

    #[test]
    fn test_default_config_counts_newlines() {
        let settings = ExportSettings::from_config(&ExportConfig::default()).unwrap();
        assert_eq!(settings, ExportSettings::default());
        assert_eq!(target_height("a\nb", HeightMode::Auto, "", &settings), Some(84));

        let escapes_only = ExportSettings {
            counting: BreakCounting::EscapesOnly,
            ..settings
        };
        assert_eq!(target_height("a\nb", HeightMode::Auto, "", &escapes_only), Some(42));
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = ExportConfig::default();
        config.background = "#000000".to_string();
        config.count_newlines = false;
        let settings = ExportSettings::from_config(&config).unwrap();
        assert_eq!(settings.background, [0, 0, 0, 255]);
        assert_eq!(settings.counting, BreakCounting::EscapesOnly);

        config.background = "black".to_string();
        assert!(ExportSettings::from_config(&config).is_err());

        config.background = "#ffffff".to_string();
        config.render_scale = 0.0;
        assert!(ExportSettings::from_config(&config).is_err());
    }

    #[test]
    fn test_export_bitmap_auto_height() {
        let settings = ExportSettings::default();
        let out = export_bitmap(
            "a \\\\ b",
            &rendered(),
            &Fixed(200, 50),
            HeightMode::Auto,
            "",
            &settings,
        )
        .unwrap();
        assert_eq!(out.dimensions(), (336, 84));
    }

    #[test]
    fn test_export_bitmap_requires_render() {
        let settings = ExportSettings::default();
        let err = export_bitmap(
            "",
            &Preview::Placeholder,
            &Fixed(1, 1),
            HeightMode::Auto,
            "",
            &settings,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Nothing to export"));

        let broken = Preview::Error {
            message: "bad".to_string(),
        };
        assert!(export_bitmap("x", &broken, &Fixed(1, 1), HeightMode::Auto, "", &settings).is_err());
    }
}
