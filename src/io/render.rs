//! Board snapshots and terminal rendering
//!
//! A snapshot copies the per-cell owner and color of a board into a dense
//! grid so renderers can walk it without querying placements cell by cell.

use crate::algorithm::board::Board;
use crate::spatial::{BoardDomain, Color, Point};
use ndarray::Array2;
use std::fmt;

/// What a renderer needs to know about one covered cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    /// Sequence number of the covering placement
    pub sequence_number: usize,
    /// Color of the covering cell
    pub color: Color,
}

/// Dense copy of a board's cells, indexed by (row, column)
#[derive(Clone, Debug)]
pub struct BoardSnapshot {
    cells: Array2<Option<CellView>>,
    domain: BoardDomain,
}

impl BoardSnapshot {
    /// Copy the owner and color of every board cell
    pub fn capture(board: &Board) -> Self {
        let domain = board.domain();
        let width = domain.width();
        let mut cells = Array2::from_elem((width, width), None);

        for placement in board.placements() {
            for point in placement.cell_points() {
                let Some(index) = grid_index(domain, point) else {
                    continue;
                };
                if let (Some(slot), Some(color)) = (cells.get_mut(index), placement.color_at(point))
                {
                    *slot = Some(CellView {
                        sequence_number: placement.sequence_number(),
                        color,
                    });
                }
            }
        }

        Self { cells, domain }
    }

    /// Board extent the snapshot covers
    pub const fn domain(&self) -> BoardDomain {
        self.domain
    }

    /// Cell at a board point, `None` when uncovered or out of range
    pub fn cell(&self, point: Point) -> Option<CellView> {
        grid_index(self.domain, point).and_then(|index| self.cells.get(index).copied().flatten())
    }

    /// Cell at a grid index
    pub fn cell_at(&self, row: usize, col: usize) -> Option<CellView> {
        self.cells.get((row, col)).copied().flatten()
    }

    /// Number of rows (and columns)
    pub fn width(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of covered cells
    pub fn covered_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

fn grid_index(domain: BoardDomain, point: Point) -> Option<(usize, usize)> {
    domain.contains(point).then(|| {
        (
            (point.y - domain.low()) as usize,
            (point.x - domain.low()) as usize,
        )
    })
}

/// Text rendering, one row per line and four characters per cell
///
/// Black cells show their sequence number in brackets, white cells
/// between spaces, uncovered cells as dots.
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                match cell {
                    Some(CellView {
                        sequence_number,
                        color: Color::Black,
                    }) => write!(f, "[{sequence_number:02}]")?,
                    Some(CellView {
                        sequence_number,
                        color: Color::White,
                    }) => write!(f, " {sequence_number:02} ")?,
                    None => f.write_str(" .. ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
