//! Error types for puzzle construction, search, and output

use crate::spatial::point::Point;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Figure construction precondition failed
    InvalidFigure {
        /// Description of what's wrong with the figure
        reason: String,
    },

    /// Attempt to commit a placement that fails the board checks
    ///
    /// Occurs when a figure:
    /// - Leaves the board domain
    /// - Overlaps an existing placement
    /// - Disagrees with the board's checkerboard phase
    InvalidPlacement {
        /// Anchor point of the rejected placement
        anchor: Point,
        /// Which check failed
        reason: &'static str,
    },

    /// Decision refers to a figure that is no longer available
    FigureNotAvailable {
        /// Index of the figure in the input list
        index: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered board to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFigure { reason } => {
                write!(f, "Invalid figure: {reason}")
            }
            Self::InvalidPlacement { anchor, reason } => {
                write!(f, "Invalid placement at {anchor}: {reason}")
            }
            Self::FigureNotAvailable { index } => {
                write!(f, "Figure #{index} is not among the remaining figures")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid figure error
pub fn invalid_figure(reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidFigure {
        reason: reason.to_string(),
    }
}
