//! Integer points in curve-grid and canvas-pixel space.

use std::fmt;

/// A point on the curve grid, in grid units rather than pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    /// Horizontal grid coordinate.
    pub x: i32,
    /// Vertical grid coordinate.
    pub y: i32,
}

impl GridPoint {
    /// Create a new grid point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Calculate the Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Manhattan (taxicab) distance between two points.
    pub fn manhattan(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Whether two points share a row or a column.
    pub fn is_axis_aligned_with(&self, other: &Self) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<GridPoint> for (i32, i32) {
    fn from(p: GridPoint) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// A point on the output canvas, in pixels.
///
/// Pixel points are not clipped: orientations whose origin is offset from the
/// grid corner map part of the curve past the canvas edge, and it is up to the
/// canvas to discard what it cannot show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    /// Horizontal pixel coordinate.
    pub x: i32,
    /// Vertical pixel coordinate.
    pub y: i32,
}

impl PixelPoint {
    /// Create a new pixel point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
