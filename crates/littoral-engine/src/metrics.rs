//! Per-run timing for the simulation driver.

/// Wall-clock timings collected during a single simulation run.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Time spent in invasion percolation (field, frontier and growth).
    pub invasion_us: u64,
    /// Time spent in Kawasaki diffusion.
    pub diffusion_us: u64,
    /// Wall-clock time for the entire run, including grid setup.
    pub total_us: u64,
}

impl RunMetrics {
    /// Invasion time in seconds.
    pub fn invasion_secs(&self) -> f64 {
        self.invasion_us as f64 / 1e6
    }

    /// Diffusion time in seconds.
    pub fn diffusion_secs(&self) -> f64 {
        self.diffusion_us as f64 / 1e6
    }

    /// Total time in seconds.
    pub fn total_secs(&self) -> f64 {
        self.total_us as f64 / 1e6
    }
}
