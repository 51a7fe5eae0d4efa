//! Command-line interface for solving the standard puzzle

use crate::algorithm::board::Board;
use crate::algorithm::resolver::{Resolver, SearchStatus};
use crate::algorithm::state::SolutionState;
use crate::io::configuration::{DEFAULT_CELL_SIZE, MAX_CELL_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_board_as_png;
use crate::io::progress::SearchProgress;
use crate::io::render::BoardSnapshot;
use crate::shapes::catalog::standard_figures;
use crate::spatial::BoardDomain;
use clap::Parser;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "chesspuzzle")]
#[command(
    author,
    version,
    about = "Tile the chessboard with the thirteen checkered puzzle figures"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Export the solved board as a PNG image
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Edge length of one board cell in the exported image, in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Shuffle the figure order with this seed before searching
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Give up after visiting this many search states
    #[arg(long)]
    pub max_states: Option<u64>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check argument combinations clap cannot express
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero state limit or an out-of-range cell size
    pub fn validate(&self) -> Result<()> {
        if self.max_states == Some(0) {
            return Err(invalid_parameter(
                "max_states",
                &0,
                &"must allow at least one state",
            ));
        }
        if self.cell_size == 0 || self.cell_size > MAX_CELL_SIZE {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &format!("must be between 1 and {MAX_CELL_SIZE}"),
            ));
        }
        Ok(())
    }
}

/// Outcome of one solver run
#[derive(Debug)]
pub struct SearchReport {
    /// Whether every figure was placed
    pub found: bool,
    /// How the search ended
    pub status: SearchStatus,
    /// State visits, revisits included
    pub visited_states: u64,
    /// Wall-clock search time
    pub elapsed: Duration,
    /// Whether figure area and colors can match the board at all
    pub colors_fit_board: bool,
    /// Catalog index of each figure in search order
    pub figure_order: Vec<usize>,
    /// Board of the final state, when one was reached
    pub final_board: Option<Board>,
}

/// Runs the standard puzzle according to the CLI arguments
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Catalog order, shuffled when a seed is given
    pub fn figure_order(&self, figure_count: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..figure_count).collect();
        if let Some(seed) = self.cli.seed {
            let mut rng = StdRng::seed_from_u64(seed);
            order.shuffle(&mut rng);
        }
        order
    }

    /// Root search state for the standard board in the configured figure order
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments or the figure catalog are invalid
    pub fn initial_state(&self) -> Result<(SolutionState, Vec<usize>)> {
        self.cli.validate()?;

        let catalog = standard_figures()?;
        let figure_order = self.figure_order(catalog.len());
        let figures = figure_order
            .iter()
            .filter_map(|&index| catalog.get(index).cloned())
            .collect();

        Ok((
            SolutionState::create_initial(figures, BoardDomain::standard()),
            figure_order,
        ))
    }

    /// Search for a tiling of the standard board
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or the search fails
    pub fn solve(&self) -> Result<SearchReport> {
        let (initial_state, figure_order) = self.initial_state()?;
        self.search(initial_state, figure_order)
    }

    fn search(&self, initial_state: SolutionState, figure_order: Vec<usize>) -> Result<SearchReport> {
        let colors_fit_board = initial_state.colors_fit_board();

        let mut progress = if self.cli.should_show_progress() {
            SearchProgress::new(self.cli.max_states)
        } else {
            SearchProgress::hidden(self.cli.max_states)
        };

        let start_time = Instant::now();
        let mut resolver = Resolver::new();
        let found = resolver.search_solution_with(initial_state, &mut progress)?;
        let elapsed = start_time.elapsed();

        progress.finish(&format!(
            "Search {} after {} states",
            resolver.status(),
            resolver.visited_states()
        ));

        Ok(SearchReport {
            found,
            status: resolver.status(),
            visited_states: resolver.visited_states(),
            elapsed,
            colors_fit_board,
            figure_order,
            final_board: resolver.final_state().map(|state| state.board().clone()),
        })
    }

    /// Solve, print the outcome, and export the board if requested
    ///
    /// # Errors
    ///
    /// Returns an error if solving or the image export fails
    // Allow print for the solver's user-facing report
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn run(&self) -> Result<SearchReport> {
        let (initial_state, figure_order) = self.initial_state()?;
        if !initial_state.colors_fit_board() && !self.cli.quiet {
            eprintln!(
                "Warning: figure area or colors cannot match the board's checkerboard, \
                 the search will end without a solution"
            );
        }

        let report = self.search(initial_state, figure_order)?;

        if report.found {
            println!(
                "Resolved :)\nStates tested: {}\nTime: {:.3?}",
                report.visited_states, report.elapsed
            );
        } else {
            println!(
                "Solution not found ({}) :(\nStates tested: {}\nTime: {:.3?}",
                report.status, report.visited_states, report.elapsed
            );
        }

        if let Some(board) = &report.final_board {
            let snapshot = BoardSnapshot::capture(board);
            print!("{snapshot}");

            if let Some(path) = &self.cli.output {
                export_board_as_png(&snapshot, self.cli.cell_size, path)?;
                if !self.cli.quiet {
                    eprintln!("Saved board image to {}", path.display());
                }
            }
        } else if self.cli.output.is_some() && !self.cli.quiet {
            eprintln!("No solved board to export");
        }

        Ok(report)
    }
}
