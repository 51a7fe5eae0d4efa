//! Square board extent with raster-order indexing

use crate::io::configuration::{BOARD_HIGH, BOARD_LOW};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::point::Point;

/// Inclusive coordinate range shared by both board axes
///
/// Cells are indexed in raster order, rows from `low` to `high` and
/// columns within each row from `low` to `high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardDomain {
    low: i32,
    high: i32,
}

impl BoardDomain {
    /// Create a domain covering `low..=high` on both axes
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `high < low`
    pub fn new(low: i32, high: i32) -> Result<Self> {
        if high < low {
            return Err(invalid_parameter(
                "domain",
                &format!("{low}..={high}"),
                &"upper bound must not be below lower bound",
            ));
        }
        Ok(Self { low, high })
    }

    /// The 8x8 board of the standard puzzle
    pub const fn standard() -> Self {
        Self {
            low: BOARD_LOW,
            high: BOARD_HIGH,
        }
    }

    /// Lowest coordinate on either axis
    pub const fn low(&self) -> i32 {
        self.low
    }

    /// Highest coordinate on either axis
    pub const fn high(&self) -> i32 {
        self.high
    }

    /// Number of cells along one axis
    pub const fn width(&self) -> usize {
        (self.high - self.low + 1) as usize
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width() * self.width()
    }

    /// Number of cells whose coordinate sum is odd
    ///
    /// Corners always have an even coordinate sum, so odd cells are never
    /// the majority.
    pub const fn odd_cell_count(&self) -> usize {
        self.cell_count() / 2
    }

    /// Grid bounds check
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.low && point.x <= self.high && point.y >= self.low && point.y <= self.high
    }

    /// Raster index of an in-range point
    pub const fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains(point) {
            return None;
        }
        let row = (point.y - self.low) as usize;
        let col = (point.x - self.low) as usize;
        Some(row * self.width() + col)
    }

    /// Point at a raster index
    pub const fn point_at(&self, index: usize) -> Option<Point> {
        if index >= self.cell_count() {
            return None;
        }
        let width = self.width();
        Some(Point::new(
            self.low + (index % width) as i32,
            self.low + (index / width) as i32,
        ))
    }

    /// All points in raster order
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (low, high) = (self.low, self.high);
        (low..=high).flat_map(move |y| (low..=high).map(move |x| Point::new(x, y)))
    }
}

impl Default for BoardDomain {
    fn default() -> Self {
        Self::standard()
    }
}
