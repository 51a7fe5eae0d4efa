//! Immutable board states built one placement at a time
//!
//! Every placement yields a new [`Board`]. The occupancy bitmap and the
//! board's checkerboard phase are computed when the board is built, from the
//! previous board's values, so queries never rescan the placement history.

use crate::io::error::{PuzzleError, Result};
use crate::shapes::Figure;
use crate::spatial::{BoardDomain, Color, OccupancyBitmap, Point};
use std::rc::Rc;

/// A figure anchored at a board point
#[derive(Clone, Debug)]
pub struct Placement {
    figure: Rc<Figure>,
    point: Point,
    sequence_number: usize,
}

impl Placement {
    /// Placed figure in the orientation it was placed with
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Board point of the figure's origin cell
    pub const fn point(&self) -> Point {
        self.point
    }

    /// 1-based position in placement order
    pub const fn sequence_number(&self) -> usize {
        self.sequence_number
    }

    /// Board points covered by this placement
    pub fn cell_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.figure.cell_points(self.point)
    }

    /// Color this placement gives to a board point, if it covers the point
    pub fn color_at(&self, point: Point) -> Option<Color> {
        self.figure
            .cell_at(point - self.point)
            .map(|cell| cell.color())
    }
}

/// Owner and color of an occupied board point
#[derive(Clone, Copy, Debug)]
pub struct PointInfo<'a> {
    /// Placement covering the point
    pub placement: &'a Placement,
    /// Color of the covering cell
    pub color: Color,
}

/// Board state: placements so far, their occupancy, and the checkerboard phase
#[derive(Clone, Debug)]
pub struct Board {
    placements: Vec<Placement>,
    occupancy: OccupancyBitmap,
    odd_cells_color: Option<Color>,
}

impl Board {
    /// Board with no placements
    pub fn create_empty(domain: BoardDomain) -> Self {
        Self {
            placements: Vec::new(),
            occupancy: OccupancyBitmap::new(domain),
            odd_cells_color: None,
        }
    }

    /// Board that results from placing `figure` with its origin at `anchor`
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlacement` if the figure leaves the board, overlaps a
    /// previous placement, or disagrees with the established odd-cell color
    pub fn create_by_placing_figure(prev: &Self, figure: Rc<Figure>, anchor: Point) -> Result<Self> {
        if !prev.is_possible_placement(&figure, anchor) {
            return Err(PuzzleError::InvalidPlacement {
                anchor,
                reason: "figure leaves the board or overlaps a placed figure",
            });
        }

        let placement_color = odd_cells_color_for(anchor, figure.origin_color());
        let odd_cells_color = match prev.odd_cells_color {
            Some(color) if color != placement_color => {
                return Err(PuzzleError::InvalidPlacement {
                    anchor,
                    reason: "figure coloring disagrees with the board's checkerboard phase",
                });
            }
            Some(color) => color,
            None => placement_color,
        };

        let occupancy = prev.occupancy.with_points(figure.cell_points(anchor));

        let mut placements = Vec::with_capacity(prev.placements.len() + 1);
        placements.extend(prev.placements.iter().cloned());
        placements.push(Placement {
            figure,
            point: anchor,
            sequence_number: prev.placements.len() + 1,
        });

        Ok(Self {
            placements,
            occupancy,
            odd_cells_color: Some(odd_cells_color),
        })
    }

    /// Board extent
    pub const fn domain(&self) -> BoardDomain {
        self.occupancy.domain()
    }

    /// Placements in placement order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of placed figures
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Occupancy bitmap over the whole domain
    pub const fn occupancy(&self) -> &OccupancyBitmap {
        &self.occupancy
    }

    /// Color required on odd-parity points, once the first figure is placed
    pub const fn odd_cells_color(&self) -> Option<Color> {
        self.odd_cells_color
    }

    /// Grid bounds check
    pub const fn is_in_range(&self, point: Point) -> bool {
        self.occupancy.domain().contains(point)
    }

    /// Whether a placed figure covers the point
    pub fn has_cell(&self, point: Point) -> bool {
        self.occupancy.contains(point)
    }

    /// Whether every cell is covered
    pub fn is_full(&self) -> bool {
        self.occupancy.is_full()
    }

    /// Bounds and overlap check, ignoring colors
    pub fn is_possible_placement(&self, figure: &Figure, anchor: Point) -> bool {
        figure
            .cell_points(anchor)
            .all(|point| self.is_in_range(point) && !self.has_cell(point))
    }

    /// Bounds, overlap, and checkerboard phase check
    pub fn is_valid_placement(&self, figure: &Figure, anchor: Point) -> bool {
        if !self.is_possible_placement(figure, anchor) {
            return false;
        }

        self.odd_cells_color
            .is_none_or(|color| color == odd_cells_color_for(anchor, figure.origin_color()))
    }

    /// First uncovered point in raster order
    pub fn find_first_free_point(&self) -> Option<Point> {
        self.occupancy.first_free()
    }

    /// Which placement covers a point and with what color
    pub fn point_info(&self, point: Point) -> Option<PointInfo<'_>> {
        if !self.has_cell(point) {
            return None;
        }
        self.placements.iter().find_map(|placement| {
            placement
                .color_at(point)
                .map(|color| PointInfo { placement, color })
        })
    }
}

// Color an anchored figure puts on odd-parity board points
const fn odd_cells_color_for(anchor: Point, origin_color: Color) -> Color {
    if anchor.is_odd() {
        origin_color
    } else {
        origin_color.invert()
    }
}
