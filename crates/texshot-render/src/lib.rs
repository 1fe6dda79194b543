//! Texshot Render
//!
//! Everything between the editor text and the exported artefacts:
//!
//! - **Preview** - [`render_preview`] normalizes the input and typesets it
//!   through a [`MathRenderer`], producing a [`Preview`]
//! - **MathML export** - [`render_mathml`]
//! - **Image export** - [`export_bitmap`] rasterizes the preview through a
//!   [`Rasterizer`] and rescales it to the target height
//! - **Encoding** - PNG bytes and `data:` URLs
//! - **Delivery** - [`Clipboard`] and [`Downloader`] adapters
//!
//! The typesetting and rasterizing engines sit behind traits. With the
//! `katex` feature [`KatexRenderer`] typesets through KaTeX; with the
//! `mathjax` feature [`MathJaxRasterizer`] rasterizes through MathJax SVG
//! and resvg.
//!
//! # Example
//!
//! ```
//! use texshot_render::{render_preview, MathRenderer, Preview, RenderOptions};
//!
//! struct Echo;
//!
//! impl MathRenderer for Echo {
//!     fn render(&self, latex: &str, _options: &RenderOptions) -> texshot_core::Result<String> {
//!         Ok(format!("<math>{}</math>", latex))
//!     }
//! }
//!
//! let preview = render_preview("a\nb", &Echo);
//! assert_eq!(preview.markup(), Some("<math>a\\\\\nb</math>"));
//! assert!(render_preview("   ", &Echo).is_placeholder());
//! ```

pub mod clipboard;
pub mod download;
pub mod encode;
pub mod export;
pub mod raster;
pub mod renderer;

pub use clipboard::{Clipboard, Osc52Clipboard, MAX_CLIPBOARD_SIZE};
pub use download::{DirectoryDownloader, Downloader};
pub use encode::{data_url, decode_data_url, encode_png, PNG_MIME};
pub use export::{
    export_bitmap, fit_to_height, parse_int, target_height, ExportSettings, MAX_CANVAS_AREA,
};
pub use raster::{RasterOptions, Rasterizer};
pub use renderer::{
    render_mathml, render_preview, MathRenderer, OutputFormat, Preview, RenderOptions,
    PLACEHOLDER_TEXT,
};

#[cfg(feature = "katex")]
pub use renderer::KatexRenderer;

#[cfg(feature = "mathjax")]
pub use raster::MathJaxRasterizer;

/// Re-exported so callers can name the bitmap type without depending on `image`.
pub use image::RgbaImage;
