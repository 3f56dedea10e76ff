//! The fixed 16 colour palette.
//!
//! The table is reproduced in its declared order. Two entries (`blue` and
//! `blue2`) share the same RGB value; colour lookups resolve such a duplicate
//! to the index declared last, while enumeration keeps the position of the
//! first declaration.

use std::fmt;

/// An 8-bit RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sum of the absolute per-channel differences.
    #[inline]
    pub fn channel_distance(&self, other: &Rgb) -> u32 {
        self.r.abs_diff(other.r) as u32
            + self.g.abs_diff(other.g) as u32
            + self.b.abs_diff(other.b) as u32
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for Rgb {
    /// Formats as `rgb(R, G, B)`, usable as a CSS colour value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// One row of the declared palette table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub rgb: Rgb,
    pub index: u8,
}

const fn entry(name: &'static str, r: u8, g: u8, b: u8, index: u8) -> PaletteEntry {
    PaletteEntry {
        name,
        rgb: Rgb::new(r, g, b),
        index,
    }
}

/// Number of entries in the declared palette table.
pub const PALETTE_SIZE: usize = 16;

/// The declared palette, in order.
pub const PALETTE: [PaletteEntry; PALETTE_SIZE] = [
    entry("white", 255, 255, 255, 0),
    entry("black", 0, 0, 0, 1),
    entry("blue", 0, 0, 255, 2),
    entry("green", 0, 128, 0, 3),
    entry("red", 255, 0, 0, 4),
    entry("brown", 128, 64, 64, 5),
    entry("purple", 128, 0, 255, 6),
    entry("olive", 128, 128, 0, 7),
    entry("yellow", 255, 255, 79, 8),
    entry("lightgreen", 0, 255, 0, 9),
    entry("teal", 0, 128, 128, 10),
    entry("cyan", 0, 255, 255, 11),
    entry("blue2", 0, 0, 255, 12),
    entry("magenta", 255, 0, 255, 13),
    entry("grey", 128, 128, 128, 14),
    entry("lightgrey", 192, 192, 192, 15),
];

/// A palette colour as seen by the matcher and the renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaletteColor {
    pub index: u8,
    pub rgb: Rgb,
}

lazy_static::lazy_static! {
    static ref DISTINCT_COLORS: Vec<PaletteColor> = {
        let mut colors: Vec<PaletteColor> = Vec::with_capacity(PALETTE_SIZE);
        for e in PALETTE.iter() {
            if colors.iter().all(|c| c.rgb != e.rgb) {
                let index = index_of(e.rgb).unwrap_or(e.index);
                colors.push(PaletteColor { index, rgb: e.rgb });
            }
        }
        colors
    };
}

/// The palette with duplicate RGB values collapsed, in enumeration order.
pub fn distinct_colors() -> &'static [PaletteColor] {
    &DISTINCT_COLORS
}

/// Looks up the index a colour is rendered with.
pub fn index_of(rgb: Rgb) -> Option<u8> {
    PALETTE.iter().rev().find(|e| e.rgb == rgb).map(|e| e.index)
}

/// Resolves a colour by its palette name.
#[cfg(test)]
pub(crate) fn by_name(name: &str) -> Option<PaletteColor> {
    let e = PALETTE.iter().find(|e| e.name == name)?;
    index_of(e.rgb).map(|index| PaletteColor { index, rgb: e.rgb })
}
