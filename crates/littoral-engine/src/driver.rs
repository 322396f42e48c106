//! Erosion-then-diffusion pipeline over one grid.
//!
//! A run has three phases:
//!
//! 1. build the initial grid from the configured [`Shoreline`](crate::Shoreline)
//!    (skipped by [`CoastlineSimulation::run_on`]);
//! 2. invasion percolation until the front reaches `x = N - 1` or stalls;
//! 3. Kawasaki diffusion for the number of sweeps the
//!    [`DiffusionSchedule`](crate::DiffusionSchedule) derives from the
//!    invasion length.
//!
//! Each model stage draws from its own ChaCha8 stream, seeded from the
//! configured seed XOR a fixed per-stage salt.

use std::time::Instant;

use littoral_core::{Grid, ModelError};
use littoral_models::{DiffusionReport, InvasionOutcome, InvasionPercolation, KawasakiDiffusion};
use tracing::{debug, info};

use crate::config::{ConfigError, SimulationConfig};
use crate::metrics::RunMetrics;
use crate::schedule::DiffusionSchedule;

/// Salt for the invasion stage's seed.
pub const INVASION_SALT: u64 = 0x9E37_79B9_7F4A_7C15;
/// Salt for the diffusion stage's seed.
pub const DIFFUSION_SALT: u64 = 0xC2B2_AE3D_27D4_EB4F;

/// Everything produced by one coastline run.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Grid after both stages.
    pub grid: Grid,
    /// Invasion percolation outcome.
    pub invasion: InvasionOutcome,
    /// Diffusion steps derived from the invasion length.
    pub diffusion_steps: u64,
    /// Kawasaki diffusion counters.
    pub diffusion: DiffusionReport,
    /// Stage timings.
    pub metrics: RunMetrics,
}

/// A validated, reusable coastline simulation.
///
/// Holds only configuration; repeated [`run`](Self::run) calls with the
/// same configuration produce identical grids.
///
/// ```
/// use littoral_engine::{CoastlineSimulation, SimulationConfig};
///
/// let sim = CoastlineSimulation::new(SimulationConfig {
///     grid_size: 24,
///     ..Default::default()
/// })
/// .unwrap();
/// let result = sim.run().unwrap();
/// assert!(result.invasion.reached_boundary());
/// assert_eq!(result.diffusion.sweeps, 10 * result.diffusion_steps);
/// ```
#[derive(Clone, Debug)]
pub struct CoastlineSimulation {
    config: SimulationConfig,
    invasion: InvasionPercolation,
    diffusion: KawasakiDiffusion,
}

impl CoastlineSimulation {
    /// Validate `config` and prepare both models.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::assemble(config).map_err(ConfigError::from)
    }

    /// Build the models from an already validated configuration.
    pub(crate) fn assemble(config: SimulationConfig) -> Result<Self, ModelError> {
        let invasion = InvasionPercolation::builder()
            .erosion_bias(config.erosion_bias)
            .seed(config.seed ^ INVASION_SALT)
            .build()?;
        let diffusion = KawasakiDiffusion::builder()
            .acceptance(config.acceptance.clone())
            .seed(config.seed ^ DIFFUSION_SALT)
            .build()?;
        Ok(Self {
            config,
            invasion,
            diffusion,
        })
    }

    /// The configuration this simulation was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run both stages on a fresh grid built from the configured shoreline.
    pub fn run(&self) -> Result<SimulationResult, ModelError> {
        let start = Instant::now();
        let grid = self.config.shoreline.build(self.config.grid_size)?;
        self.execute(grid, start)
    }

    /// Run both stages on a caller-supplied grid of any size.
    pub fn run_on(&self, grid: Grid) -> Result<SimulationResult, ModelError> {
        self.execute(grid, Instant::now())
    }

    fn execute(&self, mut grid: Grid, start: Instant) -> Result<SimulationResult, ModelError> {
        let p = self.config.erosion_bias;

        let invasion_start = Instant::now();
        let invasion = self.invasion.run(&mut grid)?;
        let invasion_us = invasion_start.elapsed().as_micros() as u64;

        let diffusion_steps = DiffusionSchedule::diffusion_steps(invasion.steps, p);
        let sweeps = self.config.schedule.sweeps(invasion.steps, p);
        debug!(
            invasion_steps = invasion.steps,
            diffusion_steps,
            sweeps,
            "diffusion scheduled"
        );

        let diffusion_start = Instant::now();
        let diffusion = self.diffusion.run(&mut grid, sweeps)?;
        let diffusion_us = diffusion_start.elapsed().as_micros() as u64;

        let metrics = RunMetrics {
            invasion_us,
            diffusion_us,
            total_us: start.elapsed().as_micros() as u64,
        };
        info!(
            size = grid.size(),
            p,
            invasion_steps = invasion.steps,
            diffusion_steps,
            total_us = metrics.total_us,
            "coastline run complete"
        );
        Ok(SimulationResult {
            grid,
            invasion,
            diffusion_steps,
            diffusion,
            metrics,
        })
    }
}
