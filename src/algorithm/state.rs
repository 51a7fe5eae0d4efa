//! Search tree nodes and placement decision generation

use crate::algorithm::board::Board;
use crate::io::error::{PuzzleError, Result};
use crate::shapes::{Figure, FigureId, TransformationTable};
use crate::spatial::{BoardDomain, Color, Point};
use std::collections::VecDeque;
use std::rc::Rc;

/// Candidate next move of the search
#[derive(Clone, Debug)]
pub struct Decision {
    /// Input figure being placed
    pub selected_figure: FigureId,
    /// Orientation of the figure used for the placement
    pub transformed_figure: Rc<Figure>,
    /// Board point where the oriented figure's origin lands
    pub placement_point: Point,
}

/// One node of the search tree
///
/// Holds a board, the figures still to place, and the queue of decisions
/// that remain to be tried from this node. The queue is computed once when
/// the node is built and only shrinks afterwards.
#[derive(Debug)]
pub struct SolutionState {
    board: Board,
    rest_figures: Vec<FigureId>,
    transformations: Rc<TransformationTable>,
    possible_decisions: VecDeque<Decision>,
}

impl SolutionState {
    /// Root node: empty board and every figure still to place
    pub fn create_initial(figures: Vec<Figure>, domain: BoardDomain) -> Self {
        let transformations = Rc::new(TransformationTable::build(figures));
        let rest_figures = transformations.ids().collect();
        Self::new(Board::create_empty(domain), rest_figures, transformations)
    }

    fn new(
        board: Board,
        rest_figures: Vec<FigureId>,
        transformations: Rc<TransformationTable>,
    ) -> Self {
        let possible_decisions = calculate_decisions(&board, &rest_figures, &transformations);
        Self {
            board,
            rest_figures,
            transformations,
            possible_decisions,
        }
    }

    /// Board at this node
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Figures not placed yet, in input order
    pub fn rest_figures(&self) -> &[FigureId] {
        &self.rest_figures
    }

    /// Orientation table shared by the whole search
    pub fn transformations(&self) -> &TransformationTable {
        &self.transformations
    }

    /// Whether every figure has been placed
    pub fn is_final(&self) -> bool {
        self.rest_figures.is_empty()
    }

    /// Necessary condition for a full tiling from the root
    ///
    /// The figures must cover the board's area exactly, and their black cell
    /// count must equal the number of odd or of even board cells, since one
    /// checkerboard phase is shared by every placement.
    pub fn colors_fit_board(&self) -> bool {
        let domain = self.board.domain();
        let odd = domain.odd_cell_count();
        let even = domain.cell_count() - odd;
        let black = self.transformations.color_count(Color::Black);
        self.transformations.total_cells() == domain.cell_count() && (black == odd || black == even)
    }

    /// Decisions not tried yet, in the order they will be tried
    pub fn possible_decisions(&self) -> impl Iterator<Item = &Decision> {
        self.possible_decisions.iter()
    }

    /// Number of decisions not tried yet
    pub fn remaining_decisions(&self) -> usize {
        self.possible_decisions.len()
    }

    /// Take the next untried decision
    pub fn next_decision(&mut self) -> Option<Decision> {
        self.possible_decisions.pop_front()
    }

    /// Child node reached by applying a decision
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The selected figure was already placed (`FigureNotAvailable`)
    /// - The placement is not valid on this board (`InvalidPlacement`)
    pub fn create_next_state(&self, decision: &Decision) -> Result<Self> {
        if !self.rest_figures.contains(&decision.selected_figure) {
            return Err(PuzzleError::FigureNotAvailable {
                index: decision.selected_figure.index(),
            });
        }

        let board = Board::create_by_placing_figure(
            &self.board,
            Rc::clone(&decision.transformed_figure),
            decision.placement_point,
        )?;

        let rest_figures = self
            .rest_figures
            .iter()
            .copied()
            .filter(|&id| id != decision.selected_figure)
            .collect();

        Ok(Self::new(board, rest_figures, Rc::clone(&self.transformations)))
    }
}

// Every valid placement of a remaining figure that covers the first free point
fn calculate_decisions(
    board: &Board,
    rest_figures: &[FigureId],
    transformations: &TransformationTable,
) -> VecDeque<Decision> {
    let mut decisions = VecDeque::new();

    let Some(target) = board.find_first_free_point() else {
        return decisions;
    };

    for &figure_id in rest_figures {
        for variant in transformations.variants(figure_id) {
            // Try each cell of the oriented figure as the one covering the target
            for cell in variant.cells() {
                let placement_point = target - cell.relative_point();
                if board.is_valid_placement(variant, placement_point) {
                    decisions.push_back(Decision {
                        selected_figure: figure_id,
                        transformed_figure: Rc::clone(variant),
                        placement_point,
                    });
                }
            }
        }
    }

    decisions
}
