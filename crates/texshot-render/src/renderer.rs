//! Typesetting: the renderer seam and the preview built on it.

use texshot_core::{Result, TexshotError};
use texshot_latex::normalize;

/// Shown instead of a preview while the editor is empty.
pub const PLACEHOLDER_TEXT: &str = "Type LaTeX to see a preview.";

/// Markup produced by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// HTML for on-screen display
    #[default]
    Html,
    /// MathML for export
    Mathml,
}

/// Options passed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Report malformed LaTeX as an error instead of rendering it in red
    pub throw_on_error: bool,
    /// Render as display (block) math
    pub display_mode: bool,
    /// Markup to produce
    pub output: OutputFormat,
}

impl RenderOptions {
    /// Options for the on-screen preview.
    pub fn preview() -> Self {
        Self {
            throw_on_error: true,
            display_mode: true,
            output: OutputFormat::Html,
        }
    }

    /// Options for the MathML export.
    pub fn mathml() -> Self {
        Self {
            output: OutputFormat::Mathml,
            ..Self::preview()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::preview()
    }
}

/// A typesetting engine.
///
/// Malformed input is reported as [`TexshotError::Render`] carrying the
/// engine's own message.
pub trait MathRenderer {
    /// Render LaTeX to markup.
    fn render(&self, latex: &str, options: &RenderOptions) -> Result<String>;
}

impl<R: MathRenderer + ?Sized> MathRenderer for &R {
    fn render(&self, latex: &str, options: &RenderOptions) -> Result<String> {
        (**self).render(latex, options)
    }
}

/// What the preview surface currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preview {
    /// Nothing typed yet
    #[default]
    Placeholder,
    /// Successfully typeset
    Rendered {
        /// Normalized LaTeX that was rendered
        source: String,
        /// Renderer output
        markup: String,
    },
    /// The renderer rejected the input
    Error {
        /// Renderer message
        message: String,
    },
}

impl Preview {
    /// Rendered markup, if any.
    pub fn markup(&self) -> Option<&str> {
        match self {
            Preview::Rendered { markup, .. } => Some(markup),
            _ => None,
        }
    }

    /// Normalized source of a successful render.
    pub fn source(&self) -> Option<&str> {
        match self {
            Preview::Rendered { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Error message, if rendering failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Preview::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Whether the preview shows the placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Preview::Placeholder)
    }

    /// Text a plain surface would display.
    pub fn display_text(&self) -> &str {
        match self {
            Preview::Placeholder => PLACEHOLDER_TEXT,
            Preview::Rendered { markup, .. } => markup,
            Preview::Error { .. } => "",
        }
    }
}

/// Render the editor text for the preview surface.
///
/// Blank input shows the placeholder without calling the renderer.
pub fn render_preview<R: MathRenderer + ?Sized>(raw: &str, renderer: &R) -> Preview {
    let value = raw.trim();
    if value.is_empty() {
        return Preview::Placeholder;
    }

    let source = normalize(value);
    match renderer.render(&source, &RenderOptions::preview()) {
        Ok(markup) => Preview::Rendered { source, markup },
        Err(e) => Preview::Error {
            message: e.to_string(),
        },
    }
}

/// Render the editor text as MathML for export.
pub fn render_mathml<R: MathRenderer + ?Sized>(raw: &str, renderer: &R) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(TexshotError::Render("Nothing to export.".to_string()));
    }
    renderer.render(&normalize(value), &RenderOptions::mathml())
}

/// KaTeX-backed renderer.
#[cfg(feature = "katex")]
#[derive(Debug, Clone, Copy, Default)]
pub struct KatexRenderer;

#[cfg(feature = "katex")]
impl KatexRenderer {
    /// Create a KaTeX renderer.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "katex")]
impl MathRenderer for KatexRenderer {
    fn render(&self, latex: &str, options: &RenderOptions) -> Result<String> {
        let output_type = match options.output {
            OutputFormat::Html => katex::OutputType::Html,
            OutputFormat::Mathml => katex::OutputType::Mathml,
        };

        let opts = katex::Opts::builder()
            .display_mode(options.display_mode)
            .throw_on_error(options.throw_on_error)
            .output_type(output_type)
            .build()
            .map_err(|e| TexshotError::Render(e.to_string()))?;

        katex::render_with_opts(latex, opts).map_err(|e| match e {
            katex::Error::JsExecError(message) => TexshotError::Render(message),
            other => TexshotError::Render(other.to_string()),
        })
    }
}
