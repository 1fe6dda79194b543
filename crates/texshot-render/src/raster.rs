//! Rasterization: the seam that turns a rendered preview into pixels.

use image::RgbaImage;
use texshot_core::Result;

/// Options passed to the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    /// RGBA background painted under the math
    pub background: [u8; 4],
    /// Supersampling factor
    pub scale: f64,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            background: [255, 255, 255, 255],
            scale: 2.0,
        }
    }
}

/// Turns a rendered preview into a bitmap.
pub trait Rasterizer {
    /// Rasterize the normalized LaTeX shown by the preview.
    fn rasterize(&self, source: &str, options: &RasterOptions) -> Result<RgbaImage>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn rasterize(&self, source: &str, options: &RasterOptions) -> Result<RgbaImage> {
        (**self).rasterize(source, options)
    }
}

#[cfg(feature = "mathjax")]
pub use mathjax::MathJaxRasterizer;

#[cfg(feature = "mathjax")]
mod mathjax {
    use super::{RasterOptions, Rasterizer};
    use image::RgbaImage;
    use log::debug;
    use resvg::{tiny_skia, usvg};
    use texshot_core::{Result, TexshotError};

    /// Typesets with MathJax to SVG, then rasterizes the SVG with resvg.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct MathJaxRasterizer;

    impl MathJaxRasterizer {
        /// Create a MathJax rasterizer.
        pub fn new() -> Self {
            Self
        }
    }

    impl Rasterizer for MathJaxRasterizer {
        fn rasterize(&self, source: &str, options: &RasterOptions) -> Result<RgbaImage> {
            let svg = mathjax_svg::convert_to_svg(source)
                .map_err(|e| TexshotError::Raster(format!("MathJax: {:?}", e)))?;

            let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
                .map_err(|e| TexshotError::Raster(e.to_string()))?;

            let scale = options.scale as f32;
            let size = tree.size();
            let width = (size.width() * scale).ceil().max(1.0) as u32;
            let height = (size.height() * scale).ceil().max(1.0) as u32;
            debug!("Rasterizing {}x{} at scale {}", width, height, scale);

            let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
                TexshotError::Raster(format!("cannot allocate a {}x{} bitmap", width, height))
            })?;

            let [r, g, b, a] = options.background;
            pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
            resvg::render(
                &tree,
                tiny_skia::Transform::from_scale(scale, scale),
                &mut pixmap.as_mut(),
            );

            let mut data = Vec::with_capacity(pixmap.data().len());
            for pixel in pixmap.pixels() {
                let c = pixel.demultiply();
                data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
            }

            RgbaImage::from_raw(width, height, data)
                .ok_or_else(|| TexshotError::Raster("pixel buffer size mismatch".to_string()))
        }
    }
}
