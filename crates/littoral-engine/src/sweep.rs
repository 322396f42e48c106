//! Repeated runs over a range of erosion biases.
//!
//! [`ParameterSweep`] visits `num_parameters` evenly spaced values of `p`
//! from `p_start` to `p_end` inclusive, `repeats` times over. Each run gets
//! its own seed, `base ^ (repeat << 32) ^ index`, so any single record can
//! be reproduced with a one-off [`CoastlineSimulation`].

use littoral_core::{Grid, ModelError};
use tracing::{debug, info};

use crate::config::{ConfigError, SimulationConfig, SweepConfig};
use crate::driver::CoastlineSimulation;

/// Measurements from one run of a sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepRecord {
    /// Pass over the range, from 0.
    pub repeat: usize,
    /// Erosion bias of this run.
    pub p: f64,
    /// Cells eroded by invasion percolation.
    pub invasion_steps: u64,
    /// Invasion wall-clock time in seconds.
    pub invasion_secs: f64,
    /// Frontier cells left Solid, as a fraction of `N²`.
    pub fraction_touched: f64,
    /// Diffusion steps derived from the invasion length.
    pub diffusion_steps: u64,
    /// Diffusion wall-clock time in seconds.
    pub diffusion_secs: f64,
    /// Whole-run wall-clock time in seconds.
    pub total_secs: f64,
}

/// Records of every run plus the grid left by the last one.
#[derive(Clone, Debug)]
pub struct SweepOutput {
    /// One record per run, in execution order.
    pub records: Vec<SweepRecord>,
    /// Grid after the final run. Always `Some` for a validated sweep.
    pub final_grid: Option<Grid>,
}

/// A validated parameter sweep.
#[derive(Clone, Debug)]
pub struct ParameterSweep {
    config: SweepConfig,
    p_values: Vec<f64>,
}

impl ParameterSweep {
    /// Validate `config` and precompute the bias values.
    pub fn new(config: SweepConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let p_values = spaced(config.p_start, config.p_end, config.num_parameters);
        Ok(Self { config, p_values })
    }

    /// The bias values visited on every pass.
    pub fn p_values(&self) -> &[f64] {
        &self.p_values
    }

    /// The sweep configuration.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Seed of the run at (`repeat`, `index`).
    pub fn run_seed(&self, repeat: usize, index: usize) -> u64 {
        self.config.base.seed ^ ((repeat as u64) << 32) ^ index as u64
    }

    /// Configuration of the run at (`repeat`, `index`).
    pub fn run_config(&self, repeat: usize, index: usize) -> Option<SimulationConfig> {
        let p = *self.p_values.get(index)?;
        Some(self.config_at(repeat, index, p))
    }

    fn config_at(&self, repeat: usize, index: usize, p: f64) -> SimulationConfig {
        SimulationConfig {
            erosion_bias: p,
            seed: self.run_seed(repeat, index),
            ..self.config.base.clone()
        }
    }

    /// Execute every run.
    pub fn run(&self) -> Result<SweepOutput, ModelError> {
        let total = self.config.repeats * self.p_values.len();
        info!(
            runs = total,
            grid_size = self.config.base.grid_size,
            "parameter sweep starting"
        );

        let mut records = Vec::with_capacity(total);
        let mut final_grid = None;
        for repeat in 0..self.config.repeats {
            for (index, &p) in self.p_values.iter().enumerate() {
                let config = self.config_at(repeat, index, p);
                let result = CoastlineSimulation::assemble(config)?.run()?;
                let record = SweepRecord {
                    repeat,
                    p,
                    invasion_steps: result.invasion.steps,
                    invasion_secs: result.metrics.invasion_secs(),
                    fraction_touched: result.invasion.fraction_touched(),
                    diffusion_steps: result.diffusion_steps,
                    diffusion_secs: result.metrics.diffusion_secs(),
                    total_secs: result.metrics.total_secs(),
                };
                debug!(
                    repeat,
                    p,
                    invasion_steps = record.invasion_steps,
                    diffusion_steps = record.diffusion_steps,
                    "sweep run recorded"
                );
                records.push(record);
                final_grid = Some(result.grid);
            }
        }

        info!(runs = records.len(), "parameter sweep finished");
        Ok(SweepOutput {
            records,
            final_grid,
        })
    }
}

/// `count` evenly spaced values from `start` to `end`, ends exact.
fn spaced(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![start];
    }
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let last = count - 1;
    (0..count)
        .map(|i| {
            if i == last {
                end
            } else {
                (start + (end - start) * i as f64 / last as f64).clamp(lo, hi)
            }
        })
        .collect()
}
