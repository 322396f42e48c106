//! Simulation engine orchestrating Littoral coastline runs.
//!
//! [`CoastlineSimulation`] chains the two models from `littoral-models`
//! over one grid: invasion percolation erodes the shoreline, then Kawasaki
//! diffusion relaxes it for a number of sweeps derived from the erosion
//! length by a [`DiffusionSchedule`]. [`ParameterSweep`] repeats that over
//! a range of erosion biases and collects [`SweepRecord`]s, which
//! [`write_csv`] renders as delimited text.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod export;
pub mod metrics;
pub mod schedule;
pub mod sweep;

pub use config::{ConfigError, Shoreline, SimulationConfig, SweepConfig};
pub use driver::{CoastlineSimulation, SimulationResult};
pub use export::{write_csv, ExportError, CSV_HEADER};
pub use metrics::RunMetrics;
pub use schedule::DiffusionSchedule;
pub use sweep::{ParameterSweep, SweepOutput, SweepRecord};
