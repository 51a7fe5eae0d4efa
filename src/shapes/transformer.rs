//! Figure orientations and symmetry reduction
//!
//! Generates the rotations (90°, 180°, 270°) and X-reflections of a figure
//! and drops orientations that coincide after translation. Cell colors take
//! part in the comparison, so a shape whose coloring changes under a
//! transformation keeps both orientations.

use crate::shapes::figure::{Figure, FigureId};
use crate::spatial::{Color, Point};
use std::collections::HashSet;
use std::rc::Rc;

/// Apply a point mapping to every non-origin cell of a figure
///
/// The origin stays in place and keeps its color; the mapped cells get
/// their colors re-derived from the checkerboard pattern.
#[must_use]
pub fn transform(figure: &Figure, point_map: impl Fn(Point) -> Point) -> Figure {
    Figure::from_offsets(
        figure.origin_color(),
        figure
            .other_cells()
            .iter()
            .map(|cell| point_map(cell.relative_point())),
    )
}

/// Quarter turn: `(x, y) -> (y, -x)`
#[must_use]
pub fn rotate_right(figure: &Figure) -> Figure {
    transform(figure, |p| Point::new(p.y, -p.x))
}

/// Mirror across the vertical axis: `(x, y) -> (-x, y)`
#[must_use]
pub fn flip_x(figure: &Figure) -> Figure {
    transform(figure, |p| Point::new(-p.x, p.y))
}

/// The figure followed by its three successive quarter turns
pub fn rotations(figure: &Figure) -> [Figure; 4] {
    let rot90 = rotate_right(figure);
    let rot180 = rotate_right(&rot90);
    let rot270 = rotate_right(&rot180);
    [figure.clone(), rot90, rot180, rot270]
}

/// All distinct orientations of a figure
///
/// Rotations of the figure come first, then rotations of its mirror image.
/// Orientations with equal canonical forms are collapsed onto the first one.
pub fn transformations(figure: &Figure) -> Vec<Figure> {
    let mirrored = flip_x(figure);

    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(8);
    for candidate in rotations(figure).into_iter().chain(rotations(&mirrored)) {
        if seen.insert(CanonicalForm::of(&candidate)) {
            unique.push(candidate);
        }
    }
    unique
}

/// Translation-independent representation of a figure's colored cells
///
/// Every cell is shifted so the per-axis minimum becomes zero, then cells
/// are sorted by color and by point order. Points are unique within a
/// figure, so two figures share a canonical form exactly when one is a
/// translation of the other with matching colors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalForm {
    cells: Vec<(Color, Point)>,
}

impl CanonicalForm {
    /// Compute the canonical form of a figure
    pub fn of(figure: &Figure) -> Self {
        let min_x = figure
            .cells()
            .iter()
            .map(|c| c.relative_point().x)
            .min()
            .unwrap_or(0);
        let min_y = figure
            .cells()
            .iter()
            .map(|c| c.relative_point().y)
            .min()
            .unwrap_or(0);
        let reference = Point::new(min_x, min_y);

        let mut cells: Vec<(Color, Point)> = figure
            .cells()
            .iter()
            .map(|c| (c.color(), c.relative_point() - reference))
            .collect();
        cells.sort_unstable();

        Self { cells }
    }

    /// Normalized cells in canonical order
    pub fn cells(&self) -> &[(Color, Point)] {
        &self.cells
    }
}

/// Input figures together with their precomputed orientations
///
/// Built once before the search starts and shared read-only by every
/// search node.
#[derive(Debug)]
pub struct TransformationTable {
    figures: Vec<Figure>,
    variants: Vec<Vec<Rc<Figure>>>,
}

impl TransformationTable {
    /// Compute the orientations of every figure
    pub fn build(figures: Vec<Figure>) -> Self {
        let variants = figures
            .iter()
            .map(|figure| transformations(figure).into_iter().map(Rc::new).collect())
            .collect();
        Self { figures, variants }
    }

    /// Number of input figures
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Whether the table holds no figures
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Ids of all input figures in input order
    pub fn ids(&self) -> impl Iterator<Item = FigureId> + use<> {
        (0..self.figures.len()).map(FigureId)
    }

    /// Original figure for an id
    pub fn figure(&self, id: FigureId) -> Option<&Figure> {
        self.figures.get(id.index())
    }

    /// Distinct orientations of a figure, empty for unknown ids
    pub fn variants(&self, id: FigureId) -> &[Rc<Figure>] {
        self.variants.get(id.index()).map_or(&[], Vec::as_slice)
    }

    /// Total cell count of all input figures
    pub fn total_cells(&self) -> usize {
        self.figures.iter().map(Figure::cell_count).sum()
    }

    /// Number of input figure cells with the given color
    pub fn color_count(&self, color: Color) -> usize {
        self.figures
            .iter()
            .flat_map(Figure::cells)
            .filter(|cell| cell.color() == color)
            .count()
    }
}
