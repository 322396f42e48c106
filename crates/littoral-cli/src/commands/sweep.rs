//! `littoral sweep`: statistics over a range of erosion biases.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use littoral::prelude::*;
use tracing::info;

/// Arguments for a parameter sweep.
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// First erosion bias
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    pub p_start: f64,

    /// Last erosion bias (inclusive)
    #[arg(long, default_value_t = 0.9, allow_negative_numbers = true)]
    pub p_end: f64,

    /// Number of evenly spaced bias values
    #[arg(long, default_value_t = 20)]
    pub count: usize,

    /// Passes over the whole range
    #[arg(long, default_value_t = 1)]
    pub repeats: usize,

    /// Lattice side length N
    #[arg(long, default_value_t = 256)]
    pub grid_size: u32,

    /// Base RNG seed
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// CSV destination (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl SweepArgs {
    /// Map the arguments onto a sweep configuration.
    pub fn to_config(&self) -> SweepConfig {
        SweepConfig {
            p_start: self.p_start,
            p_end: self.p_end,
            num_parameters: self.count,
            repeats: self.repeats,
            base: SimulationConfig {
                grid_size: self.grid_size,
                seed: self.seed,
                ..Default::default()
            },
        }
    }
}

/// Execute the sweep command.
pub fn execute(args: SweepArgs) -> Result<()> {
    let sweep = ParameterSweep::new(args.to_config()).context("invalid sweep configuration")?;
    let output = sweep.run().context("sweep failed")?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_csv(&output.records, BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), records = output.records.len(), "results written");
        }
        None => {
            let stdout = io::stdout();
            write_csv(&output.records, stdout.lock()).context("failed to write stdout")?;
        }
    }
    Ok(())
}
