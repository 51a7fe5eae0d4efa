//! Backtracking solver for the checkered chessboard tiling puzzle
//!
//! A fixed set of figures, each colored like a patch of a chessboard, must
//! cover an 8x8 board without overlaps so that all figures agree on a single
//! checkerboard phase. The search fills the board in raster order, trying
//! every orientation of every remaining figure on the first free cell and
//! backtracking through an explicit stack of immutable states.

#![forbid(unsafe_code)]

/// Boards, search states, and the backtracking driver
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Figures and their orientations
pub mod shapes;
/// Points, colors, and board geometry
pub mod spatial;

pub use algorithm::board::Board;
pub use algorithm::resolver::{Resolver, SearchObserver, SearchStatus};
pub use algorithm::state::{Decision, SolutionState};
pub use io::error::{PuzzleError, Result};
