//! Binary occupation state of a lattice cell.

use std::fmt;

/// The occupation state of a single lattice cell.
///
/// Every coordinate of a [`Grid`](crate::Grid) holds exactly one
/// `CellKind`. `Solid` is the land/rock being eroded; `Fluid` is the
/// water advancing into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKind {
    /// Land or rock. Candidate for erosion.
    Solid,
    /// Water.
    Fluid,
}

impl CellKind {
    /// `true` for [`CellKind::Fluid`].
    pub fn is_fluid(self) -> bool {
        matches!(self, Self::Fluid)
    }

    /// `true` for [`CellKind::Solid`].
    pub fn is_solid(self) -> bool {
        matches!(self, Self::Solid)
    }

    /// Single-character glyph used by the grid `Display` impl.
    pub fn glyph(self) -> char {
        match self {
            Self::Solid => '#',
            Self::Fluid => '~',
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Fluid => write!(f, "fluid"),
        }
    }
}
