//! Error types for lattice construction and model execution.
//!
//! Organized by subsystem: [`GridError`] for lattice construction and
//! addressing, [`ModelError`] for model parameter validation and the
//! modelling assumptions checked while a model runs.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or addressing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// The requested side length does not fit the coordinate type.
    DimensionTooLarge {
        /// The rejected side length.
        value: usize,
        /// Largest accepted side length.
        max: usize,
    },
    /// A coordinate lies outside the lattice.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Side length of the lattice.
        size: u32,
    },
    /// A flat cell buffer does not have `size * size` entries.
    CellCountMismatch {
        /// `size * size`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "grid size {value} exceeds maximum {max}")
            }
            Self::CoordOutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} out of bounds for {size}x{size} grid")
            }
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from the invasion percolation and Kawasaki diffusion models.
#[derive(Clone, Debug, PartialEq)]
pub enum ModelError {
    /// A model parameter is outside its documented domain.
    InvalidParameter {
        /// Parameter name as used by the builder.
        name: &'static str,
        /// Human-readable description of the violation.
        reason: String,
    },
    /// An exchange produced an energy change above the acceptance
    /// table's range.
    EnergyOutOfRange {
        /// The rounded energy change.
        delta: f64,
        /// Largest energy change the table covers.
        max: usize,
    },
    /// The grid handed to a model is unusable.
    Grid(GridError),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter '{name}': {reason}")
            }
            Self::EnergyOutOfRange { delta, max } => {
                write!(
                    f,
                    "energy change {delta} exceeds acceptance table range 0..={max}"
                )
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ModelError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl ModelError {
    /// Shorthand for [`ModelError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
