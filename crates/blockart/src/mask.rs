//! 2x2 transparency masks and their display glyphs.

/// Selects, per cell of a 2x2 block, the background (`false`) or the
/// foreground (`true`) colour. Cells are ordered top-left, top-right,
/// bottom-left, bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mask {
    /// The whole block is background. Rendered with the foreground forced
    /// to the background colour.
    Solid,
    /// `▜`
    NoLowerLeft,
    /// `▟`
    NoUpperLeft,
    /// `▞`
    AntiDiagonal,
    /// `▛`
    NoLowerRight,
    /// `▙`
    NoUpperRight,
}

impl Mask {
    /// All masks in enumeration order.
    pub const ALL: [Mask; 6] = [
        Mask::Solid,
        Mask::NoLowerLeft,
        Mask::NoUpperLeft,
        Mask::AntiDiagonal,
        Mask::NoLowerRight,
        Mask::NoUpperRight,
    ];

    pub const fn bits(self) -> [bool; 4] {
        match self {
            Mask::Solid => [false, false, false, false],
            Mask::NoLowerLeft => [true, true, false, true],
            Mask::NoUpperLeft => [false, true, true, true],
            Mask::AntiDiagonal => [false, true, true, false],
            Mask::NoLowerRight => [true, true, true, false],
            Mask::NoUpperRight => [true, false, true, true],
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Mask::Solid => '▖',
            Mask::NoLowerLeft => '▜',
            Mask::NoUpperLeft => '▟',
            Mask::AntiDiagonal => '▞',
            Mask::NoLowerRight => '▛',
            Mask::NoUpperRight => '▙',
        }
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        self == Mask::Solid
    }
}
