//! Subcommand implementations.

pub mod run;
pub mod sweep;

use clap::ValueEnum;
use littoral::prelude::Shoreline;

/// Initial coastline layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShorelineKind {
    /// Straight coast, seaward half water
    Split,
    /// Island of land in open water
    Radial,
}

impl ShorelineKind {
    /// Resolve to a [`Shoreline`]; the island radius defaults to a quarter
    /// of the grid.
    pub fn resolve(self, grid_size: u32, radius: Option<u32>) -> Shoreline {
        match self {
            Self::Split => Shoreline::Split,
            Self::Radial => Shoreline::Radial {
                radius: radius.unwrap_or(grid_size / 4),
            },
        }
    }
}
