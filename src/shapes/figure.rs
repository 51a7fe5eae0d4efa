//! Immutable checkered figures
//!
//! A figure is a set of cells given as offsets from its origin cell. Each
//! cell's color follows the checkerboard pattern anchored at the origin, so
//! only the origin color is ever specified.

use crate::io::error::{Result, invalid_figure};
use crate::spatial::{Color, Point};
use std::collections::HashSet;
use std::fmt;

/// A single cell of a figure
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FigureCell {
    relative_point: Point,
    color: Color,
}

impl FigureCell {
    /// Create a cell at an offset from the figure origin
    pub const fn new(relative_point: Point, color: Color) -> Self {
        Self {
            relative_point,
            color,
        }
    }

    /// Offset from the figure origin
    pub const fn relative_point(&self) -> Point {
        self.relative_point
    }

    /// Cell color
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// Stable identifier of an input figure
///
/// Index into the figure list the search was started with. Two figures with
/// the same shape and coloring still get distinct ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(pub usize);

impl FigureId {
    /// Position in the input figure list
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Immutable shape with checkerboard coloring
///
/// The first cell is always the origin `(0, 0)`; no two cells share a point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Figure {
    origin_color: Color,
    cells: Vec<FigureCell>,
}

impl Figure {
    /// Build a figure from its origin color and the offsets of its other cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidFigure` if:
    /// - No offsets are given
    /// - An offset is the origin itself
    /// - Two offsets coincide
    pub fn new(origin_color: Color, other_points: impl IntoIterator<Item = Point>) -> Result<Self> {
        let other_points: Vec<Point> = other_points.into_iter().collect();

        if other_points.is_empty() {
            return Err(invalid_figure(&"a figure needs at least one cell besides the origin"));
        }

        let mut seen = HashSet::with_capacity(other_points.len() + 1);
        seen.insert(Point::ORIGIN);
        for &point in &other_points {
            if !seen.insert(point) {
                return Err(invalid_figure(&format!("cell {point} is listed twice")));
            }
        }

        Ok(Self::from_offsets(origin_color, other_points))
    }

    /// Build a figure from offsets already known to be distinct and non-origin
    pub(crate) fn from_offsets(
        origin_color: Color,
        other_points: impl IntoIterator<Item = Point>,
    ) -> Self {
        let cells = std::iter::once(Point::ORIGIN)
            .chain(other_points)
            .map(|point| FigureCell::new(point, origin_color.at_offset(point)))
            .collect();
        Self {
            origin_color,
            cells,
        }
    }

    /// All cells, origin first
    pub fn cells(&self) -> &[FigureCell] {
        &self.cells
    }

    /// Cells other than the origin
    pub fn other_cells(&self) -> &[FigureCell] {
        self.cells.get(1..).unwrap_or(&[])
    }

    /// Color of the origin cell
    pub const fn origin_color(&self) -> Color {
        self.origin_color
    }

    /// Number of cells including the origin
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell at a relative point, if the figure covers it
    pub fn cell_at(&self, relative_point: Point) -> Option<&FigureCell> {
        self.cells
            .iter()
            .find(|cell| cell.relative_point == relative_point)
    }

    /// Board points covered when the origin is placed at `anchor`
    pub fn cell_points(&self, anchor: Point) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .map(move |cell| anchor.shift(cell.relative_point))
    }
}
