//! Figure shapes and their orientations

/// Figure set of the standard puzzle
pub mod catalog;
/// Figure and cell definitions
pub mod figure;
/// Rotations, reflections, and canonical forms
pub mod transformer;

pub use figure::{Figure, FigureCell, FigureId};
pub use transformer::TransformationTable;
