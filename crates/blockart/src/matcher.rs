//! Nearest-match search of 2x2 pixel blocks against every
//! (background, foreground, mask) combination.
//!
//! The search is deliberately exhaustive. Candidates are enumerated with
//! background colours outermost, then foreground colours, then masks, and the
//! first candidate reaching the minimum error wins, so the output for a given
//! image never changes.

use crate::mask::Mask;
use crate::palette::{distinct_colors, PaletteColor, Rgb};
use crate::{BlockError, Result};
use rayon::prelude::*;

/// The four pixels of a 2x2 block in mask cell order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBlock(pub [Rgb; 4]);

impl PixelBlock {
    /// Every cell set to the same colour.
    #[cfg(test)]
    pub(crate) fn uniform(color: Rgb) -> Self {
        Self([color; 4])
    }
}

/// A (background, foreground, mask) combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub background: PaletteColor,
    pub foreground: PaletteColor,
    pub mask: Mask,
}

/// The candidate chosen for a block.
pub type Match = Candidate;

impl Candidate {
    /// Expected colour of cell `i` (0..4).
    #[inline]
    pub fn cell_color(&self, i: usize) -> Rgb {
        if self.mask.bits()[i] {
            self.foreground.rgb
        } else {
            self.background.rgb
        }
    }

    /// Total absolute channel error against `block`.
    pub fn error(&self, block: &PixelBlock) -> u32 {
        block
            .0
            .iter()
            .enumerate()
            .map(|(i, px)| px.channel_distance(&self.cell_color(i)))
            .sum()
    }

    /// Colour the foreground is drawn with. Solid blocks reuse the
    /// background.
    pub fn display_foreground(&self) -> PaletteColor {
        if self.mask.is_solid() {
            self.background
        } else {
            self.foreground
        }
    }
}

lazy_static::lazy_static! {
    static ref CANDIDATES: Vec<Candidate> = {
        let colors = distinct_colors();
        let mut table = Vec::with_capacity(colors.len() * colors.len() * Mask::ALL.len());
        for &background in colors {
            for &foreground in colors {
                for mask in Mask::ALL {
                    table.push(Candidate {
                        background,
                        foreground,
                        mask,
                    });
                }
            }
        }
        log::debug!("built {} match candidates", table.len());
        table
    };
}

/// The full candidate table in enumeration order.
pub fn candidates() -> &'static [Candidate] {
    &CANDIDATES
}

/// Finds the candidate with the smallest error for `block`.
pub fn match_block(block: &PixelBlock) -> Match {
    let table = candidates();
    let mut best = table[0];
    let mut best_error = best.error(block);
    for candidate in &table[1..] {
        let error = candidate.error(block);
        if error < best_error {
            best_error = error;
            best = *candidate;
            if error == 0 {
                break;
            }
        }
    }
    best
}

/// Drops a trailing odd pixel row or column.
#[inline]
pub const fn even(dimension: usize) -> usize {
    dimension - dimension % 2
}

/// Matched blocks of a whole image, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Match>,
}

impl Grid {
    /// Creates a grid from row-major cells.
    pub fn new(width: usize, height: usize, cells: Vec<Match>) -> Result<Self> {
        if cells.len() != width * height {
            return Err(BlockError::BufferSizeMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    /// Width in blocks.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in blocks.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Match> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    pub fn row(&self, y: usize) -> Option<&[Match]> {
        if y >= self.height {
            return None;
        }
        self.cells.get(y * self.width..(y + 1) * self.width)
    }

    /// Every block row, including empty ones when the width is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[Match]> {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    pub fn cells(&self) -> &[Match] {
        &self.cells
    }
}

/// Matches every 2x2 block of an RGB888 image.
///
/// # Arguments
/// * `rgb` - Raw pixel data, 3 bytes per pixel
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// A trailing odd row or column is ignored, so an image only one pixel wide
/// or tall gives a grid with no blocks. Block rows are matched in parallel;
/// the result is identical to a sequential scan.
pub fn build_grid(rgb: &[u8], width: usize, height: usize) -> Result<Grid> {
    if width == 0 || height == 0 {
        return Err(BlockError::InvalidDimensions { width, height });
    }
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or(BlockError::InvalidDimensions { width, height })?;
    if rgb.len() != expected {
        return Err(BlockError::BufferSizeMismatch {
            expected,
            actual: rgb.len(),
        });
    }

    let pixel = |x: usize, y: usize| -> Rgb {
        let o = (y * width + x) * 3;
        Rgb::from([rgb[o], rgb[o + 1], rgb[o + 2]])
    };

    let cols = even(width) / 2;
    let rows = even(height) / 2;
    log::debug!("matching {cols}x{rows} blocks from {width}x{height} pixels");

    let cells: Vec<Match> = (0..rows)
        .into_par_iter()
        .flat_map_iter(|by| {
            let y = by * 2;
            (0..cols).map(move |bx| {
                let x = bx * 2;
                match_block(&PixelBlock([
                    pixel(x, y),
                    pixel(x + 1, y),
                    pixel(x, y + 1),
                    pixel(x + 1, y + 1),
                ]))
            })
        })
        .collect();

    Grid::new(cols, rows, cells)
}
