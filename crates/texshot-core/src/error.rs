//! Error types for texshot

use thiserror::Error;

/// Main error type for texshot operations
#[derive(Error, Debug)]
pub enum TexshotError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// LaTeX rejected by the typesetting renderer.
    ///
    /// The message is the renderer's own, shown verbatim to the user.
    #[error("{0}")]
    Render(String),

    /// Rasterization of the preview failed
    #[error("Rasterization error: {0}")]
    Raster(String),

    /// Image encoding failed
    #[error("Encoding error: {0}")]
    Encode(String),

    /// Clipboard write failed
    #[error("{0}")]
    Clipboard(String),

    /// Download failed
    #[error("{0}")]
    Download(String),

    /// Equation library could not be loaded
    #[error("Library error: {0}")]
    Library(String),
}

/// Result type alias for texshot operations
pub type Result<T> = std::result::Result<T, TexshotError>;
