//! Occupancy bitmap over a board domain

use crate::spatial::domain::BoardDomain;
use crate::spatial::point::Point;
use bitvec::prelude::*;
use std::fmt;

/// One bit per board cell, set when a placement covers the cell
///
/// Bits are laid out in the raster order of the owning [`BoardDomain`], so
/// the first unset bit is the first free point in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyBitmap {
    bits: BitVec,
    domain: BoardDomain,
}

impl OccupancyBitmap {
    /// Create a bitmap with no occupied cells
    pub fn new(domain: BoardDomain) -> Self {
        Self {
            bits: bitvec![0; domain.cell_count()],
            domain,
        }
    }

    /// Domain the bitmap indexes
    pub const fn domain(&self) -> BoardDomain {
        self.domain
    }

    /// Mark a point as occupied
    ///
    /// Returns false when the point lies outside the domain.
    pub fn insert(&mut self, point: Point) -> bool {
        match self.domain.index_of(point) {
            Some(index) => {
                self.bits.set(index, true);
                true
            }
            None => false,
        }
    }

    /// Test whether a point is occupied
    pub fn contains(&self, point: Point) -> bool {
        self.domain
            .index_of(point)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Copy with every given point marked as occupied
    #[must_use]
    pub fn with_points(&self, points: impl IntoIterator<Item = Point>) -> Self {
        let mut result = self.clone();
        for point in points {
            result.insert(point);
        }
        result
    }

    /// First unoccupied point in raster order
    pub fn first_free(&self) -> Option<Point> {
        self.bits
            .first_zero()
            .and_then(|index| self.domain.point_at(index))
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Test if no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Occupied points in raster order
    pub fn occupied_points(&self) -> Vec<Point> {
        self.bits
            .iter_ones()
            .filter_map(|index| self.domain.point_at(index))
            .collect()
    }
}

impl fmt::Display for OccupancyBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bit) in self.bits.iter().by_vals().enumerate() {
            if index > 0 && index % self.domain.width() == 0 {
                f.write_str("\n")?;
            }
            f.write_str(if bit { "#" } else { "." })?;
        }
        Ok(())
    }
}
