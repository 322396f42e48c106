//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] describes one erosion-then-diffusion run and
//! [`SweepConfig`] a family of runs over a range of erosion biases. Both
//! are plain values checked by `validate()` before anything runs.

use std::error::Error;
use std::fmt;

use littoral_core::{Grid, GridError, ModelError};
use littoral_models::invasion::{MAX_EROSION_BIAS, MIN_EROSION_BIAS};
use littoral_models::AcceptanceParams;

use crate::schedule::DiffusionSchedule;

// ── Shoreline ──────────────────────────────────────────────────────

/// Initial land/water layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shoreline {
    /// Straight coast: the seaward half (`x < N / 2`) is Fluid.
    #[default]
    Split,
    /// Island: a Solid disc of `radius` cells centred on the grid.
    Radial {
        /// Disc radius in cells.
        radius: u32,
    },
}

impl Shoreline {
    /// Build the initial `size × size` grid.
    pub fn build(&self, size: u32) -> Result<Grid, GridError> {
        match *self {
            Self::Split => Grid::split(size),
            Self::Radial { radius } => Grid::radial(size, radius),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a configuration.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// A model parameter is outside its domain.
    Model(ModelError),
    /// The grid cannot be constructed.
    Grid(GridError),
    /// Sweep range or repeat count is unusable.
    InvalidSweep {
        /// Description of which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(e) => write!(f, "model: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidSweep { reason } => write!(f, "invalid sweep config: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::InvalidSweep { .. } => None,
        }
    }
}

impl From<ModelError> for ConfigError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for one coastline run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Lattice side length `N`. Default: 256.
    pub grid_size: u32,
    /// Erosion bias `p`, in `[-1, 0.9]`. Default: 0.6.
    pub erosion_bias: f64,
    /// Initial layout used by [`run`](crate::CoastlineSimulation::run).
    pub shoreline: Shoreline,
    /// Base seed; stage seeds are derived from it. Default: 0.
    pub seed: u64,
    /// Metropolis acceptance table parameters.
    pub acceptance: AcceptanceParams,
    /// Diffusion length relative to the erosion run.
    pub schedule: DiffusionSchedule,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: 256,
            erosion_bias: 0.6,
            shoreline: Shoreline::Split,
            seed: 0,
            acceptance: AcceptanceParams::default(),
            schedule: DiffusionSchedule::default(),
        }
    }
}

impl SimulationConfig {
    /// Validate all parameters without building a grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(GridError::EmptyGrid.into());
        }
        if self.grid_size > Grid::MAX_SIZE {
            return Err(GridError::DimensionTooLarge {
                value: self.grid_size as usize,
                max: Grid::MAX_SIZE as usize,
            }
            .into());
        }
        check_bias("erosion_bias", self.erosion_bias)?;
        self.acceptance.validate()?;
        if self.schedule.sweeps_per_step == 0 {
            return Err(ModelError::invalid("sweeps_per_step", "must be at least 1").into());
        }
        Ok(())
    }
}

fn check_bias(name: &'static str, p: f64) -> Result<(), ModelError> {
    if p.is_finite() && (MIN_EROSION_BIAS..=MAX_EROSION_BIAS).contains(&p) {
        Ok(())
    } else {
        Err(ModelError::invalid(
            name,
            format!("must lie in [{MIN_EROSION_BIAS}, {MAX_EROSION_BIAS}], got {p}"),
        ))
    }
}

// ── SweepConfig ────────────────────────────────────────────────────

/// A range of erosion biases, each run `repeats` times.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    /// First bias. Default: -1.0.
    pub p_start: f64,
    /// Last bias (inclusive). Default: 0.9.
    pub p_end: f64,
    /// Evenly spaced values from `p_start` to `p_end`. Default: 20.
    pub num_parameters: usize,
    /// Passes over the whole range. Default: 1.
    pub repeats: usize,
    /// Settings shared by every run; its `erosion_bias` is ignored.
    pub base: SimulationConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            p_start: MIN_EROSION_BIAS,
            p_end: MAX_EROSION_BIAS,
            num_parameters: 20,
            repeats: 1,
            base: SimulationConfig::default(),
        }
    }
}

impl SweepConfig {
    /// Validate the range, counts and base configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_bias("p_start", self.p_start)?;
        check_bias("p_end", self.p_end)?;
        if self.num_parameters == 0 {
            return Err(ConfigError::InvalidSweep {
                reason: "num_parameters must be at least 1".into(),
            });
        }
        if self.num_parameters == 1 && self.p_start != self.p_end {
            return Err(ConfigError::InvalidSweep {
                reason: format!(
                    "a single parameter needs p_start == p_end, got {} and {}",
                    self.p_start, self.p_end
                ),
            });
        }
        if self.repeats == 0 {
            return Err(ConfigError::InvalidSweep {
                reason: "repeats must be at least 1".into(),
            });
        }
        SimulationConfig {
            erosion_bias: self.p_start,
            ..self.base.clone()
        }
        .validate()
    }
}
