//! `littoral run`: one erosion-then-diffusion run.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use littoral::engine::schedule::DEFAULT_SWEEPS_PER_STEP;
use littoral::prelude::*;
use tracing::info;

use super::ShorelineKind;

/// Arguments for a single run.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Lattice side length N
    #[arg(long, default_value_t = 256)]
    pub grid_size: u32,

    /// Erosion bias p, in [-1, 0.9]
    #[arg(short, long, default_value_t = 0.6, allow_negative_numbers = true)]
    pub p: f64,

    /// RNG seed
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Initial layout
    #[arg(long, value_enum, default_value_t = ShorelineKind::Split)]
    pub shoreline: ShorelineKind,

    /// Island radius for the radial layout (default: N / 4)
    #[arg(long)]
    pub radius: Option<u32>,

    /// Kawasaki sweeps per diffusion step
    #[arg(long, default_value_t = DEFAULT_SWEEPS_PER_STEP)]
    pub sweeps_per_step: u64,

    /// Print the final grid ('~' water, '#' land)
    #[arg(long)]
    pub print: bool,
}

impl RunArgs {
    /// Map the arguments onto a simulation configuration.
    pub fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            grid_size: self.grid_size,
            erosion_bias: self.p,
            shoreline: self.shoreline.resolve(self.grid_size, self.radius),
            seed: self.seed,
            acceptance: AcceptanceParams::default(),
            schedule: DiffusionSchedule {
                sweeps_per_step: self.sweeps_per_step,
            },
        }
    }
}

/// Execute the run command, writing the summary to stdout.
pub fn execute(args: RunArgs) -> Result<()> {
    let stdout = io::stdout();
    execute_to(&args, stdout.lock())
}

/// Execute the run command, writing the summary to `out`.
pub fn execute_to(args: &RunArgs, mut out: impl Write) -> Result<()> {
    let sim = CoastlineSimulation::new(args.to_config())
        .context("invalid simulation configuration")?;
    info!(grid_size = args.grid_size, p = args.p, seed = args.seed, "starting run");
    let result = sim.run().context("simulation failed")?;

    let status = match result.invasion.status {
        InvasionStatus::ReachedBoundary => "reached boundary",
        InvasionStatus::Stalled => "stalled",
    };
    writeln!(out, "grid:             {0}x{0}", result.grid.size())?;
    writeln!(out, "erosion bias:     {}", args.p)?;
    writeln!(out, "invasion steps:   {} ({status})", result.invasion.steps)?;
    writeln!(
        out,
        "fraction touched: {:.4}",
        result.invasion.fraction_touched()
    )?;
    writeln!(
        out,
        "diffusion:        {} steps, {} sweeps, acceptance {:.3}",
        result.diffusion_steps,
        result.diffusion.sweeps,
        result.diffusion.acceptance_rate()
    )?;
    writeln!(
        out,
        "elapsed:          {:.3}s (invasion {:.3}s, diffusion {:.3}s)",
        result.metrics.total_secs(),
        result.metrics.invasion_secs(),
        result.metrics.diffusion_secs()
    )?;
    writeln!(out, "grid hash:        {:016x}", grid_hash(&result.grid))?;
    if args.print {
        write!(out, "\n{}", result.grid)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(grid_size: u32, print: bool) -> RunArgs {
        RunArgs {
            grid_size,
            p: 0.6,
            seed: 3,
            shoreline: ShorelineKind::Split,
            radius: None,
            sweeps_per_step: 1,
            print,
        }
    }

    fn render(a: &RunArgs) -> String {
        let mut buf = Vec::new();
        execute_to(a, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn summary_mentions_outcome() {
        let text = render(&args(16, false));
        assert!(text.contains("grid:             16x16"), "{text}");
        assert!(text.contains("reached boundary"), "{text}");
        assert!(text.contains("grid hash:"), "{text}");
    }

    #[test]
    fn print_appends_grid_rows() {
        let text = render(&args(8, true));
        let rows: Vec<&str> = text
            .lines()
            .filter(|l| !l.is_empty() && l.chars().all(|c| c == '~' || c == '#'))
            .collect();
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().all(|r| r.len() == 8));
    }

    #[test]
    fn zero_sweeps_per_step_is_reported() {
        let mut a = args(8, false);
        a.sweeps_per_step = 0;
        let err = execute_to(&a, Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("sweeps_per_step"), "{err:#}");
    }

    #[test]
    fn invalid_bias_is_reported() {
        let mut a = args(8, false);
        a.p = 1.5;
        let err = execute_to(&a, Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("erosion_bias"), "{err:#}");
    }
}
