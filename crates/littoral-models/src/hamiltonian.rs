//! Nearest-neighbour interaction energy.
//!
//! Canonical convention: a cell's energy is the sum, over its in-bounds
//! 4-neighbours, of [`FLUID_FLUID_COUPLING`] for every pair in which both
//! the cell and the neighbour are Fluid. Solid-Solid and mixed pairs
//! contribute zero. Under Metropolis dynamics this penalises clustered
//! water, so exchanges disperse the fluid into the land.

use littoral_core::{Coord, Grid};

/// Energy of one Fluid-Fluid bond.
pub const FLUID_FLUID_COUPLING: f64 = 1.0;

/// Energy of the cell at `coord` given its current neighbourhood.
pub fn site_energy(grid: &Grid, coord: Coord) -> f64 {
    if !grid[coord].is_fluid() {
        return 0.0;
    }
    grid.neighbours(coord)
        .iter()
        .filter(|&&nb| grid[nb].is_fluid())
        .count() as f64
        * FLUID_FLUID_COUPLING
}

/// Combined site energy of an exchange pair.
pub fn pair_energy(grid: &Grid, a: Coord, b: Coord) -> f64 {
    site_energy(grid, a) + site_energy(grid, b)
}

/// Energy of the whole lattice, counting each bond once.
pub fn total_energy(grid: &Grid) -> f64 {
    let size = grid.size();
    let mut bonds = 0u64;
    for (c, kind) in grid.iter() {
        if !kind.is_fluid() {
            continue;
        }
        // East and north bonds only, so each bond is seen from one end.
        if c.x + 1 < size && grid[Coord::new(c.x + 1, c.y)].is_fluid() {
            bonds += 1;
        }
        if c.y + 1 < size && grid[Coord::new(c.x, c.y + 1)].is_fluid() {
            bonds += 1;
        }
    }
    bonds as f64 * FLUID_FLUID_COUPLING
}
