//! Core types for the Littoral coastal erosion simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! shared square lattice that both simulation models mutate, the binary
//! occupation state of each cell, coordinates, error types, and a
//! deterministic grid fingerprint.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;
pub mod hash;

pub use cell::CellKind;
pub use coord::{Coord, Direction};
pub use error::{GridError, ModelError};
pub use grid::Grid;
pub use hash::grid_hash;
