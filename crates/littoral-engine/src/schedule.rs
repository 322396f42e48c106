//! How much diffusion follows an erosion run.
//!
//! The number of diffusion steps grows with the square root of the
//! invasion length and scales with the erosion bias:
//!
//! ```text
//! steps = | round_half_even( sqrt(invasion_steps) / 2 * p ) |
//! ```
//!
//! Each step is [`DiffusionSchedule::sweeps_per_step`] full Kawasaki
//! sweeps.

/// Sweeps per diffusion step used by [`DiffusionSchedule::default`].
pub const DEFAULT_SWEEPS_PER_STEP: u64 = 10;

/// Maps an invasion run onto a Kawasaki sweep count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffusionSchedule {
    /// Kawasaki sweeps per diffusion step, at least 1. Default: 10.
    pub sweeps_per_step: u64,
}

impl Default for DiffusionSchedule {
    fn default() -> Self {
        Self {
            sweeps_per_step: DEFAULT_SWEEPS_PER_STEP,
        }
    }
}

impl DiffusionSchedule {
    /// Diffusion steps for an invasion of `invasion_steps` at bias `p`.
    ///
    /// Negative `p` yields the same count as `|p|`.
    pub fn diffusion_steps(invasion_steps: u64, p: f64) -> u64 {
        let raw = ((invasion_steps as f64).sqrt() / 2.0 * p).round_ties_even();
        raw.abs() as u64
    }

    /// Total Kawasaki sweeps for an invasion of `invasion_steps` at bias `p`.
    pub fn sweeps(&self, invasion_steps: u64, p: f64) -> u64 {
        Self::diffusion_steps(invasion_steps, p).saturating_mul(self.sweeps_per_step)
    }
}
