//! Kawasaki exchange diffusion with Metropolis acceptance.
//!
//! One sweep visits every cell exactly once, in an order given by a single
//! uniform shuffle of all `N²` coordinates. For each visited cell:
//!
//! 1. pick one of its in-bounds 4-neighbours uniformly at random;
//! 2. skip if both cells have the same kind;
//! 3. otherwise swap them and compute `ΔE = E_after - E_before` over the
//!    pair's [site energies](crate::hamiltonian::site_energy);
//! 4. keep the swap if `ΔE < 0`, else keep it with probability
//!    [`AcceptanceTable::probability`]`(ΔE)` and undo it otherwise.
//!
//! The exchange conserves the number of Fluid and Solid cells.
//!
//! Constructed via the builder pattern: [`KawasakiDiffusion::builder`].

use crate::acceptance::{AcceptanceParams, AcceptanceTable};
use crate::hamiltonian::pair_energy;
use littoral_core::{Coord, Grid, ModelError};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

/// Counters collected over a diffusion run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffusionReport {
    /// Completed sweeps.
    pub sweeps: u64,
    /// Cells visited that had at least one neighbour.
    pub proposals: u64,
    /// Proposals skipped because both cells had the same kind.
    pub same_kind_skips: u64,
    /// Exchanges kept.
    pub accepted: u64,
    /// Exchanges undone.
    pub rejected: u64,
}

impl DiffusionReport {
    /// Fraction of attempted (mixed-kind) exchanges that were kept.
    pub fn acceptance_rate(&self) -> f64 {
        let attempted = self.accepted + self.rejected;
        if attempted == 0 {
            return 0.0;
        }
        self.accepted as f64 / attempted as f64
    }
}

/// Kawasaki exchange diffusion model.
///
/// Holds only immutable configuration; the acceptance table and visiting
/// order are rebuilt on every [`run`](Self::run).
///
/// ```
/// use littoral_core::{CellKind, Grid};
/// use littoral_models::KawasakiDiffusion;
///
/// let model = KawasakiDiffusion::builder().seed(7).build().unwrap();
/// let mut grid = Grid::split(16).unwrap();
/// let report = model.run(&mut grid, 5).unwrap();
///
/// assert_eq!(report.sweeps, 5);
/// // Exchanges conserve both kinds.
/// assert_eq!(grid.count(CellKind::Fluid), 128);
/// ```
#[derive(Clone, Debug)]
pub struct KawasakiDiffusion {
    acceptance: AcceptanceParams,
    seed: u64,
}

/// Builder for [`KawasakiDiffusion`].
///
/// All fields have defaults: [`AcceptanceParams::default()`] and seed 0.
pub struct KawasakiDiffusionBuilder {
    acceptance: AcceptanceParams,
    seed: u64,
}

impl KawasakiDiffusion {
    /// Create a new builder.
    pub fn builder() -> KawasakiDiffusionBuilder {
        KawasakiDiffusionBuilder {
            acceptance: AcceptanceParams::default(),
            seed: 0,
        }
    }

    /// Acceptance table parameters.
    pub fn acceptance(&self) -> &AcceptanceParams {
        &self.acceptance
    }

    /// Seed of the run-scoped RNG used by [`run`](Self::run).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Perform `sweeps` full sweeps over `grid`.
    pub fn run(&self, grid: &mut Grid, sweeps: u64) -> Result<DiffusionReport, ModelError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.run_with_rng(grid, sweeps, &mut rng)
    }

    /// Like [`run`](Self::run), drawing from a caller-supplied RNG.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        sweeps: u64,
        rng: &mut R,
    ) -> Result<DiffusionReport, ModelError> {
        let table = AcceptanceTable::new(&self.acceptance)?;
        let mut order: Vec<Coord> = grid.coords().collect();
        let mut report = DiffusionReport::default();

        for sweep in 0..sweeps {
            order.shuffle(rng);
            for &cell in &order {
                exchange(grid, &table, cell, rng, &mut report)?;
            }
            report.sweeps += 1;
            trace!(
                sweep,
                accepted = report.accepted,
                rejected = report.rejected,
                "kawasaki sweep complete"
            );
        }

        info!(
            sweeps = report.sweeps,
            accepted = report.accepted,
            rejected = report.rejected,
            acceptance_rate = report.acceptance_rate(),
            "kawasaki diffusion finished"
        );
        Ok(report)
    }
}

/// Propose and accept/reject one exchange between `cell` and a random
/// neighbour.
fn exchange<R: Rng + ?Sized>(
    grid: &mut Grid,
    table: &AcceptanceTable,
    cell: Coord,
    rng: &mut R,
    report: &mut DiffusionReport,
) -> Result<(), ModelError> {
    let neighbours = grid.neighbours(cell);
    let Some(&other) = neighbours.choose(rng) else {
        return Ok(());
    };
    report.proposals += 1;
    if grid[cell] == grid[other] {
        report.same_kind_skips += 1;
        return Ok(());
    }

    let before = pair_energy(grid, cell, other);
    grid.swap(cell, other)?;
    let delta = pair_energy(grid, cell, other) - before;

    if delta < 0.0 {
        report.accepted += 1;
        return Ok(());
    }
    let p = match table.probability(delta) {
        Ok(p) => p,
        Err(e) => {
            grid.swap(cell, other)?;
            return Err(e);
        }
    };
    let r: f64 = rng.random();
    if r >= p {
        grid.swap(cell, other)?;
        report.rejected += 1;
    } else {
        report.accepted += 1;
    }
    Ok(())
}

impl KawasakiDiffusionBuilder {
    /// Replace all acceptance table parameters.
    pub fn acceptance(mut self, params: AcceptanceParams) -> Self {
        self.acceptance = params;
        self
    }

    /// Set the simulation temperature `T` (default: 14.0).
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.acceptance.temperature = temperature;
        self
    }

    /// Set the RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the model, validating the acceptance parameters.
    pub fn build(self) -> Result<KawasakiDiffusion, ModelError> {
        self.acceptance.validate()?;
        Ok(KawasakiDiffusion {
            acceptance: self.acceptance,
            seed: self.seed,
        })
    }
}
