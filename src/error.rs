//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors ([`LyricsError`], [`SynthError`], [`OutputError`],
//!   [`ConfigError`]) for detailed handling
//!
//! # Example
//!
//! ```ignore
//! use pixel_cover::error::{Result, ResultExt};
//!
//! fn load_input(path: &Path) -> Result<DynamicImage> {
//!     let image = image::open(path).with_context("while reading input")?;
//!     Ok(image)
//! }
//! ```

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::lyrics::LyricsError;
use crate::output::OutputError;
use crate::synth::SynthError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding/encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Lyric lookup error
    #[error("Lyrics error: {0}")]
    Lyrics(#[from] LyricsError),

    /// Diffusion backend error
    #[error("Synthesis error: {0}")]
    Synth(#[from] SynthError),

    /// Saving the cover failed
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File not found
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a not found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, image::ImageError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Image(e).context(ctx))
    }
}
