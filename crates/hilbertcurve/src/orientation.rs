//! The four canonical starting placements of the curve.

use std::{fmt, str::FromStr};

use crate::{error, point::GridPoint};

/// Starting placement of the curve on its grid.
///
/// Every orientation uses the same pair of basis vectors; only the origin of
/// the outermost cell differs. `C` and `D` share an origin and therefore draw
/// the same curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Origin at `(2^depth, 2^depth)`.
    #[default]
    A,
    /// Origin at `(2^depth, 0)`.
    B,
    /// Origin at `(0, 0)`.
    C,
    /// Origin at `(0, 0)`, identical to [`Orientation::C`].
    D,
}

impl Orientation {
    /// All orientations, in selection order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Origin of the outermost cell for a curve of the given depth.
    ///
    /// Callers are expected to have validated `depth`; see
    /// [`crate::generate::MAX_DEPTH`].
    pub fn origin(self, depth: u32) -> GridPoint {
        let half = 1i32 << depth;
        match self {
            Self::A => GridPoint::new(half, half),
            Self::B => GridPoint::new(half, 0),
            Self::C | Self::D => GridPoint::new(0, 0),
        }
    }

    /// Upper-case single letter name.
    pub fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Orientation {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            "d" => Ok(Self::D),
            _ => Err(error::Error::UnknownOrientation(s.to_string())),
        }
    }
}
