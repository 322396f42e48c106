//! Littoral: coastal erosion on a square lattice.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Littoral sub-crates. For most users, adding `littoral` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use littoral::prelude::*;
//!
//! // Erode a 32×32 straight coastline, then let it diffuse.
//! let sim = CoastlineSimulation::new(SimulationConfig {
//!     grid_size: 32,
//!     erosion_bias: 0.6,
//!     seed: 42,
//!     ..Default::default()
//! })
//! .unwrap();
//! let result = sim.run().unwrap();
//!
//! assert_eq!(result.invasion.status, InvasionStatus::ReachedBoundary);
//! assert_eq!(
//!     result.grid.count(CellKind::Fluid),
//!     32 * 16 + result.invasion.steps as usize
//! );
//! ```
//!
//! The models can also be driven directly:
//!
//! ```rust
//! use littoral::prelude::*;
//!
//! let mut grid = Grid::split(16).unwrap();
//! let erosion = InvasionPercolation::builder()
//!     .erosion_bias(0.3)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! let outcome = erosion.run(&mut grid).unwrap();
//!
//! let diffusion = KawasakiDiffusion::builder().seed(2).build().unwrap();
//! let report = diffusion.run(&mut grid, 5).unwrap();
//! assert_eq!(report.sweeps, 5);
//! assert!(outcome.steps >= 8);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `littoral-core` | Cells, coordinates, the grid, errors, hashing |
//! | [`models`] | `littoral-models` | Random field, frontier, invasion, acceptance, Hamiltonian, diffusion |
//! | [`engine`] | `littoral-engine` | Driver, configuration, schedule, sweeps, CSV export |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Lattice primitives and error types (`littoral-core`).
pub use littoral_core as types;

/// Erosion and diffusion models (`littoral-models`).
///
/// [`models::InvasionPercolation`] erodes the shoreline,
/// [`models::KawasakiDiffusion`] relaxes it.
pub use littoral_models as models;

/// Simulation driver and sweep harness (`littoral-engine`).
pub use littoral_engine as engine;

/// Common imports for typical Littoral usage.
///
/// ```rust
/// use littoral::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use littoral_core::{grid_hash, CellKind, Coord, Direction, Grid};

    // Errors
    pub use littoral_core::{GridError, ModelError};
    pub use littoral_engine::{ConfigError, ExportError};

    // Models
    pub use littoral_models::{
        AcceptanceParams, DiffusionReport, InvasionOutcome, InvasionPercolation,
        InvasionStatus, KawasakiDiffusion,
    };

    // Engine
    pub use littoral_engine::{
        write_csv, CoastlineSimulation, DiffusionSchedule, ParameterSweep, RunMetrics,
        Shoreline, SimulationConfig, SimulationResult, SweepConfig, SweepRecord,
    };
}
