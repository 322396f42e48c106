//! Canned grid layouts.
//!
//! - [`column_split`]: the `k` seaward columns are Fluid.
//! - [`checkerboard`]: alternating kinds, zero Fluid-Fluid bonds.

use littoral_core::{CellKind, Grid};

/// `size × size` grid whose columns `x < fluid_cols` are Fluid.
///
/// # Panics
///
/// If `size` is 0 or above [`Grid::MAX_SIZE`].
pub fn column_split(size: u32, fluid_cols: u32) -> Grid {
    Grid::from_fn(size, |c| {
        if c.x < fluid_cols {
            CellKind::Fluid
        } else {
            CellKind::Solid
        }
    })
    .unwrap()
}

/// Checkerboard with Fluid where `x + y` is even.
pub fn checkerboard(size: u32) -> Grid {
    Grid::from_fn(size, |c| {
        if (c.x + c.y) % 2 == 0 {
            CellKind::Fluid
        } else {
            CellKind::Solid
        }
    })
    .unwrap()
}
