//! Figure set of the standard 8x8 puzzle

use crate::io::error::Result;
use crate::shapes::figure::Figure;
use crate::spatial::{Color, Point};

// Origin color followed by the offsets of the remaining cells
const STANDARD_SHAPES: [(Color, &[(i32, i32)]); 13] = [
    (Color::Black, &[(1, 0), (2, 0), (3, 0), (4, 0)]),
    (Color::White, &[(1, 0), (1, 1), (0, 1)]),
    (Color::Black, &[(1, 0), (0, 1), (-1, 0), (0, -1)]),
    (Color::Black, &[(1, 0), (2, 0), (3, 0), (3, 1)]),
    (Color::Black, &[(1, 0), (1, 1), (0, 1), (2, 0)]),
    (Color::White, &[(1, 0), (-1, 0), (1, 1), (-1, 1)]),
    (Color::White, &[(0, 1), (0, 2), (1, 2), (-1, 2)]),
    (Color::Black, &[(1, 0), (2, 0), (2, 1), (3, 1)]),
    (Color::Black, &[(1, 0), (1, 1), (2, 1), (2, 2)]),
    (Color::Black, &[(-1, 1), (0, 1), (1, 1), (1, 2)]),
    (Color::White, &[(1, 0), (2, 0), (2, 1), (2, 2)]),
    (Color::White, &[(1, 0), (2, 0), (2, 1), (3, 0)]),
    (Color::Black, &[(0, 1), (0, 2), (1, 2), (-1, 2)]),
];

/// The thirteen figures of the standard puzzle, in search order
///
/// # Errors
///
/// Returns `InvalidFigure` if a catalog entry is malformed
pub fn standard_figures() -> Result<Vec<Figure>> {
    STANDARD_SHAPES
        .iter()
        .map(|(color, offsets)| {
            Figure::new(
                *color,
                offsets.iter().map(|&(x, y)| Point::new(x, y)),
            )
        })
        .collect()
}
