//! # blockart
//!
//! Converts RGB images into 2x2 block-character art using a fixed 16 colour
//! palette.
//!
//! ## Features
//!
//! - **Matcher**: exhaustive nearest-match search of every 2x2 pixel block
//!   against all (background, foreground, mask) combinations
//! - **Encoder**: IRC colour codes with run-length compression, raw glyphs,
//!   or HTML markup
//!
//! ## Quick Start
//!
//! ```ignore
//! use blockart::{build_grid, render, OutputFormat};
//!
//! // RGB image data (3 bytes per pixel), 2x2 solid red
//! let rgb = [255u8, 0, 0].repeat(4);
//! let grid = build_grid(&rgb, 2, 2)?;
//! let out = render(&grid, OutputFormat::Irc);
//! print!("{}", out.text);
//! ```

use thiserror::Error;

pub mod encoder;
pub mod mask;
pub mod matcher;
pub mod palette;

pub use encoder::{
    compress_row, expand_runs, render, render_html, render_irc, render_raw, OutputFormat, Rendered,
    Run, IRC_LINE_LIMIT,
};
pub use mask::Mask;
pub use matcher::{build_grid, candidates, even, match_block, Candidate, Grid, Match, PixelBlock};
pub use palette::{PaletteColor, Rgb, PALETTE};

/// Errors that can occur while converting an image.
#[derive(Debug, Error)]
pub enum BlockError {
    /// Image is empty, too large, or smaller than a single 2x2 block
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Buffer size doesn't match expected size for dimensions
    #[error("buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Requested output format is not one of irc, raw or html
    #[error("unsupported format '{0}' (expected irc, raw or html)")]
    UnsupportedFormat(String),
}

/// Result type for block art operations.
pub type Result<T> = core::result::Result<T, BlockError>;
