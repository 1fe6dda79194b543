//! Clipboard adapters.
//!
//! The [`Clipboard`] trait mirrors the two kinds of write the exporter
//! needs: plain text (LaTeX, MathML) and PNG images.
//! [`Osc52Clipboard`] reaches the system clipboard through the terminal.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::io::Write;
use texshot_core::{Result, TexshotError};

/// Maximum size for OSC 52 clipboard (50KB - terminal limit).
pub const MAX_CLIPBOARD_SIZE: usize = 50_000;

/// Somewhere copied text and images go.
pub trait Clipboard {
    /// Write plain text.
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Write a PNG image.
    fn write_image(&mut self, png: &[u8]) -> Result<()>;
}

/// OSC 52 clipboard.
///
/// Sends text to the terminal's clipboard using the OSC 52 escape sequence.
/// This works in many modern terminals (kitty, iTerm2, tmux, etc.).
/// OSC 52 carries text only, so image writes are refused.
///
/// # Example
///
/// ```
/// use texshot_render::{Clipboard, Osc52Clipboard};
///
/// let mut out = Vec::new();
/// Osc52Clipboard::new(&mut out).write_text("x^2").unwrap();
/// assert_eq!(out, b"\x1b]52;c;eF4y\x07");
/// ```
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Clipboard<W> {
    /// Create a clipboard writing escape sequences to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if text.len() > MAX_CLIPBOARD_SIZE {
            return Err(TexshotError::Clipboard(format!(
                "text is {} bytes, the terminal clipboard takes at most {}",
                text.len(),
                MAX_CLIPBOARD_SIZE
            )));
        }

        let encoded = STANDARD.encode(text.as_bytes());

        // OSC 52: \033]52;c;<base64>\a
        // The 'c' means clipboard (as opposed to 'p' for primary selection)
        write!(self.writer, "\x1b]52;c;{}\x07", encoded)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_image(&mut self, _png: &[u8]) -> Result<()> {
        Err(TexshotError::Clipboard(
            "the terminal clipboard only accepts text".to_string(),
        ))
    }
}
