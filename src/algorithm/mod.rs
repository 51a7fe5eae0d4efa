/// Immutable boards and placements
pub mod board;
/// Depth-first search driver
pub mod resolver;
/// Search tree nodes and decision generation
pub mod state;
