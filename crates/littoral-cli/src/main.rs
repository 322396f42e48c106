//! Headless command-line driver for Littoral.
//!
//! ```text
//! littoral run --grid-size 128 --p 0.6 --seed 7 --print
//! littoral sweep --p-start -1.0 --p-end 0.9 --count 20 --output stats.csv
//! ```
//!
//! Logging goes to stderr and honours `RUST_LOG`; `--log-level` sets the
//! filter when `RUST_LOG` is unset.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Coastal erosion simulator: invasion percolation plus Kawasaki diffusion.
#[derive(Parser, Debug)]
#[command(name = "littoral")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Coastal erosion simulator", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Erode one coastline and let it diffuse
    Run(commands::run::RunArgs),
    /// Sweep the erosion bias and export CSV statistics
    Sweep(commands::sweep::SweepArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Sweep(args) => commands::sweep::execute(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_with_defaults() {
        let cli = Cli::try_parse_from(["littoral", "run"]).unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.grid_size, 256);
        assert_eq!(args.p, 0.6);
        assert_eq!(args.sweeps_per_step, 10);
        assert!(!args.print);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn parses_negative_sweep_bounds() {
        let cli = Cli::try_parse_from([
            "littoral", "sweep", "--p-start", "-1.0", "--p-end", "-0.2", "--count", "5",
        ])
        .unwrap();
        let Commands::Sweep(args) = cli.command else {
            panic!("expected sweep");
        };
        assert_eq!(args.p_start, -1.0);
        assert_eq!(args.p_end, -0.2);
        assert_eq!(args.count, 5);
    }

    #[test]
    fn rejects_unknown_shoreline() {
        assert!(Cli::try_parse_from(["littoral", "run", "--shoreline", "delta"]).is_err());
    }

    #[test]
    fn log_level_is_global() {
        let cli = Cli::try_parse_from(["littoral", "run", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
    }
}
