//! Recursive Hilbert curve generation.
//!
//! The curve is built over a square cell described by an origin and two
//! basis vectors spanning its edges. Each level splits the cell into four
//! quadrants whose bases are halved, swapped and negated so that the leaf
//! centres, collected depth-first, come out in traversal order. Basis
//! vectors stay powers of two down to the leaves, so every halving is exact
//! and all points land on odd grid coordinates.

use std::{
    ops::{Add, Neg},
    slice,
};

use crate::{
    error,
    orientation::Orientation,
    point::{GridPoint, PixelPoint},
};

/// Deepest curve [`generate`] will build. Coordinates stay within `i32`, but
/// the sequence is fully materialised: `4^depth` points of 8 bytes each, so
/// depth 15 needs 8 GiB. Front ends should cap depth well below this.
pub const MAX_DEPTH: u32 = 15;

/// Check that `depth` lies in `1..=max`.
pub fn validate_depth(depth: u32, max: u32) -> error::Result<()> {
    if depth == 0 || depth > max {
        return Err(error::Error::InvalidDepth { depth, max });
    }
    Ok(())
}

/// One edge of a cell, as a step in grid units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Basis {
    /// Horizontal component.
    i: i32,
    /// Vertical component.
    j: i32,
}

impl Basis {
    /// Halve both components, truncating toward zero.
    fn half(self) -> Self {
        Self {
            i: self.i / 2,
            j: self.j / 2,
        }
    }
}

impl Add for Basis {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl Neg for Basis {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            i: -self.i,
            j: -self.j,
        }
    }
}

impl Add<Basis> for GridPoint {
    type Output = Self;

    fn add(self, rhs: Basis) -> Self {
        Self::new(self.x + rhs.i, self.y + rhs.j)
    }
}

/// Append the leaf centres of one cell to `out`, in curve order.
fn subdivide(origin: GridPoint, u: Basis, v: Basis, level: u32, out: &mut Vec<GridPoint>) {
    if level == 0 {
        out.push(origin + (u + v).half());
        return;
    }

    let (hu, hv) = (u.half(), v.half());
    let mid = origin + hu;
    subdivide(origin, hv, hu, level - 1, out);
    subdivide(mid, hu, hv, level - 1, out);
    subdivide(mid + hv, hu, hv, level - 1, out);
    subdivide(mid + v, -hv, -hu, level - 1, out);
}

/// An ordered run of grid points tracing one Hilbert curve.
///
/// Consecutive points define the drawn segments. A sequence is never patched
/// in place; a new one is generated whenever depth or orientation changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveSequence {
    /// Recursion depth the sequence was generated at.
    depth: u32,
    /// Orientation the sequence was generated with.
    orientation: Orientation,
    /// Points in traversal order.
    points: Vec<GridPoint>,
}

impl CurveSequence {
    /// Recursion depth of this curve.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Orientation of this curve.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of points, always `4^depth`.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sequence has no points. Never true for a generated curve.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in traversal order.
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Iterate over points in traversal order.
    pub fn iter(&self) -> slice::Iter<'_, GridPoint> {
        self.points.iter()
    }

    /// Iterate over consecutive point pairs; one per drawn segment.
    pub fn segments(&self) -> impl Iterator<Item = (GridPoint, GridPoint)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Side length of the outermost cell, `2^(depth+1)` grid units.
    pub fn side(&self) -> i32 {
        grid_side(self.depth)
    }

    /// Origin of the outermost cell.
    pub fn origin(&self) -> GridPoint {
        self.orientation.origin(self.depth)
    }

    /// Consume the sequence, returning the raw points.
    pub fn into_points(self) -> Vec<GridPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a CurveSequence {
    type Item = &'a GridPoint;
    type IntoIter = slice::Iter<'a, GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Side length of the outermost cell at `depth`.
fn grid_side(depth: u32) -> i32 {
    1i32 << (depth + 1)
}

/// Generate the Hilbert curve of the given depth and orientation.
///
/// Returns `4^depth` points. Fails only when `depth` is 0 or exceeds
/// [`MAX_DEPTH`].
pub fn generate(depth: u32, orientation: Orientation) -> error::Result<CurveSequence> {
    validate_depth(depth, MAX_DEPTH)?;

    let side = grid_side(depth);
    let u = Basis { i: side, j: 0 };
    let v = Basis { i: 0, j: side };

    let mut points = Vec::with_capacity(1usize << (2 * depth));
    subdivide(orientation.origin(depth), u, v, depth, &mut points);

    Ok(CurveSequence {
        depth,
        orientation,
        points,
    })
}

/// Pixels per grid unit for a curve of `depth` drawn on a square canvas.
pub fn pixel_scale(depth: u32, canvas_size: u32) -> f64 {
    f64::from(canvas_size) / f64::from(grid_side(depth))
}

/// Map a grid point onto a canvas so that the outermost cell fills it.
///
/// Fractional pixel positions are truncated toward zero.
pub fn scale(point: GridPoint, depth: u32, canvas_size: u32) -> PixelPoint {
    let factor = pixel_scale(depth, canvas_size);
    let px = |c: i32| (f64::from(c) * factor) as i32;
    PixelPoint::new(px(point.x), px(point.y))
}
