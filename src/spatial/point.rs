//! Integer board coordinates

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A point on the board or an offset relative to a figure's origin cell
///
/// Points are ordered in raster order: by `y` first, then by `x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column coordinate
    pub x: i32,
    /// Row coordinate
    pub y: i32,
}

impl Point {
    /// The origin cell of every figure
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a point from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether `x + y` is odd
    pub const fn is_odd(self) -> bool {
        (self.x + self.y) & 1 == 1
    }

    /// Translate this point by an offset
    #[must_use]
    pub const fn shift(self, offset: Self) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.shift(rhs)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.shift(-rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
