//! Board geometry primitives
//!
//! This module contains the coordinate-level building blocks:
//! - Points and their raster ordering
//! - Checkerboard colors
//! - The square board domain and its cell indexing
//! - The occupancy bitmap used by boards

/// Checkerboard cell colors
pub mod color;
/// Board extent and raster indexing
pub mod domain;
/// Bit-per-cell occupancy tracking
pub mod occupancy;
/// Integer coordinates
pub mod point;

pub use color::Color;
pub use domain::BoardDomain;
pub use occupancy::OccupancyBitmap;
pub use point::Point;
