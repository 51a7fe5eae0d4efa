//! Checkerboard cell colors

use crate::spatial::point::Point;
use std::fmt;

/// Color of a single cell, either on a figure or on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Dark square
    Black,
    /// Light square
    White,
}

impl Color {
    /// The other color
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Color of a cell at `offset` on a checkerboard whose `(0, 0)` cell has this color
    #[must_use]
    pub const fn at_offset(self, offset: Point) -> Self {
        if offset.is_odd() { self.invert() } else { self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("black"),
            Self::White => f.write_str("white"),
        }
    }
}
