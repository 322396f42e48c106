//! Benchmark profiles and utilities for the Littoral simulator.
//!
//! Provides pre-built [`SimulationConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 128x128 straight coastline (16K cells)
//! - [`stress_profile`]: 256x256 straight coastline (64K cells)
//! - [`eroded_grid`]: a post-invasion grid to feed diffusion benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use littoral_core::{Grid, ModelError};
use littoral_engine::{DiffusionSchedule, Shoreline, SimulationConfig};
use littoral_models::{AcceptanceParams, InvasionPercolation};

/// Reference profile: 128x128 split coast, p = 0.6, ten sweeps per step.
pub fn reference_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        grid_size: 128,
        erosion_bias: 0.6,
        shoreline: Shoreline::Split,
        seed,
        acceptance: AcceptanceParams::default(),
        schedule: DiffusionSchedule::default(),
    }
}

/// Stress profile: 256x256, the size of the classic flood-incursion runs.
///
/// Same parameters as [`reference_profile`] at 4x the cell count.
pub fn stress_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        grid_size: 256,
        ..reference_profile(seed)
    }
}

/// Split grid of side `size` after one invasion run at bias `p`.
pub fn eroded_grid(size: u32, p: f64, seed: u64) -> Result<Grid, ModelError> {
    let mut grid = Grid::split(size)?;
    InvasionPercolation::builder()
        .erosion_bias(p)
        .seed(seed)
        .build()?
        .run(&mut grid)?;
    Ok(grid)
}
