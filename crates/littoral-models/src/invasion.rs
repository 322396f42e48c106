//! Invasion percolation: erosion of Solid cells by an advancing Fluid front.
//!
//! Each run moves through `Initializing → Growing → Terminated`:
//!
//! 1. **Initializing**: draw a [`RandomField`] and rebuild the
//!    [`GrowthFrontier`] from every Fluid cell's Solid neighbours.
//! 2. **Growing**: pop the highest-scoring candidate, flip it to Fluid,
//!    and add its Solid neighbours to the frontier. One step per erosion.
//! 3. **Terminated**: the step that erodes a cell at `x = N - 1`, or an
//!    exhausted frontier (a stall, reported but not an error).
//!
//! Constructed via the builder pattern: [`InvasionPercolation::builder`].

use crate::frontier::GrowthFrontier;
use crate::random_field::RandomField;
use littoral_core::{CellKind, Coord, Grid, ModelError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

/// Lowest accepted erosion bias.
pub const MIN_EROSION_BIAS: f64 = -1.0;
/// Highest accepted erosion bias.
pub const MAX_EROSION_BIAS: f64 = 0.9;

/// How an invasion run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvasionStatus {
    /// A cell on the landward boundary was eroded.
    ReachedBoundary,
    /// The frontier ran dry before the boundary was reached.
    Stalled,
}

/// Result of one invasion percolation run.
#[derive(Clone, Debug, PartialEq)]
pub struct InvasionOutcome {
    /// Number of growth steps; equals the number of cells eroded.
    pub steps: u64,
    /// How the run ended.
    pub status: InvasionStatus,
    /// Eroded cells in erosion order.
    pub eroded: Vec<Coord>,
    /// Cells that entered the frontier and were never eroded.
    pub touched: usize,
    /// `N²` of the grid the run operated on.
    pub cell_count: usize,
}

impl InvasionOutcome {
    /// Fraction of all cells that were frontier candidates but stayed Solid.
    pub fn fraction_touched(&self) -> f64 {
        if self.cell_count == 0 {
            return 0.0;
        }
        self.touched as f64 / self.cell_count as f64
    }

    /// `true` if the front reached the landward boundary.
    pub fn reached_boundary(&self) -> bool {
        self.status == InvasionStatus::ReachedBoundary
    }
}

/// Invasion percolation model.
///
/// Holds only immutable configuration. Every [`run`](Self::run) draws a
/// new random field and builds a new frontier.
///
/// ```
/// use littoral_core::{CellKind, Grid};
/// use littoral_models::{InvasionPercolation, InvasionStatus};
///
/// let model = InvasionPercolation::builder()
///     .erosion_bias(0.6)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut grid = Grid::split(16).unwrap();
/// let before = grid.count(CellKind::Fluid);
/// let outcome = model.run(&mut grid).unwrap();
///
/// assert_eq!(outcome.status, InvasionStatus::ReachedBoundary);
/// assert_eq!(grid.count(CellKind::Fluid), before + outcome.steps as usize);
/// ```
#[derive(Clone, Debug)]
pub struct InvasionPercolation {
    erosion_bias: f64,
    seed: u64,
}

/// Builder for [`InvasionPercolation`].
///
/// Required field: `erosion_bias`.
pub struct InvasionPercolationBuilder {
    erosion_bias: Option<f64>,
    seed: u64,
}

impl InvasionPercolation {
    /// Create a new builder.
    pub fn builder() -> InvasionPercolationBuilder {
        InvasionPercolationBuilder {
            erosion_bias: None,
            seed: 0,
        }
    }

    /// The erosion bias `p`.
    pub fn erosion_bias(&self) -> f64 {
        self.erosion_bias
    }

    /// Seed of the run-scoped RNG used by [`run`](Self::run).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Erode `grid` until the front reaches `x = N - 1` or stalls.
    pub fn run(&self, grid: &mut Grid) -> Result<InvasionOutcome, ModelError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.run_with_rng(grid, &mut rng)
    }

    /// Like [`run`](Self::run), drawing from a caller-supplied RNG.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<InvasionOutcome, ModelError> {
        let size = grid.size();
        let boundary = size - 1;

        let field = RandomField::generate(size, self.erosion_bias, rng)?;
        let mut frontier = GrowthFrontier::rebuild(grid, &field);
        debug!(
            size,
            p = self.erosion_bias,
            candidates = frontier.len(),
            "invasion frontier initialised"
        );

        let mut eroded = Vec::new();
        let status = loop {
            let Some(site) = frontier.pop_max() else {
                warn!(
                    steps = eroded.len(),
                    "invasion front stalled before reaching the boundary"
                );
                break InvasionStatus::Stalled;
            };
            grid[site.coord] = CellKind::Fluid;
            eroded.push(site.coord);
            frontier.discover(grid, &field, site.coord);
            if site.coord.x == boundary {
                break InvasionStatus::ReachedBoundary;
            }
        };

        let outcome = InvasionOutcome {
            steps: eroded.len() as u64,
            status,
            eroded,
            touched: frontier.len(),
            cell_count: grid.cell_count(),
        };
        info!(
            steps = outcome.steps,
            status = ?outcome.status,
            fraction_touched = outcome.fraction_touched(),
            "invasion percolation finished"
        );
        Ok(outcome)
    }
}

impl InvasionPercolationBuilder {
    /// Set the erosion bias `p`. Must lie in `[-1, 0.9]`.
    pub fn erosion_bias(mut self, p: f64) -> Self {
        self.erosion_bias = Some(p);
        self
    }

    /// Set the RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the model, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err(ModelError::InvalidParameter)` if `erosion_bias` is
    /// missing, non-finite, or outside `[-1, 0.9]`.
    pub fn build(self) -> Result<InvasionPercolation, ModelError> {
        let p = self
            .erosion_bias
            .ok_or_else(|| ModelError::invalid("erosion_bias", "is required"))?;
        if !p.is_finite() || !(MIN_EROSION_BIAS..=MAX_EROSION_BIAS).contains(&p) {
            return Err(ModelError::invalid(
                "erosion_bias",
                format!("must lie in [{MIN_EROSION_BIAS}, {MAX_EROSION_BIAS}], got {p}"),
            ));
        }
        Ok(InvasionPercolation {
            erosion_bias: p,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use littoral_test_utils::column_split;

    fn model(p: f64, seed: u64) -> InvasionPercolation {
        InvasionPercolation::builder()
            .erosion_bias(p)
            .seed(seed)
            .build()
            .unwrap()
    }

    // ── Builder tests ───────────────────────────────────────────

    #[test]
    fn builder_rejects_missing_bias() {
        let err = InvasionPercolation::builder().build().unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidParameter {
                name: "erosion_bias",
                ..
            }
        ));
    }

    #[test]
    fn builder_rejects_out_of_domain_bias() {
        for p in [-1.01, 0.95, f64::NAN, f64::INFINITY] {
            assert!(
                InvasionPercolation::builder()
                    .erosion_bias(p)
                    .build()
                    .is_err(),
                "p = {p} should be rejected"
            );
        }
    }

    #[test]
    fn builder_accepts_domain_edges() {
        assert!(InvasionPercolation::builder().erosion_bias(-1.0).build().is_ok());
        assert!(InvasionPercolation::builder().erosion_bias(0.9).build().is_ok());
        assert!(InvasionPercolation::builder().erosion_bias(0.0).build().is_ok());
    }

    // ── Run tests ───────────────────────────────────────────────

    #[test]
    fn four_by_four_erodes_column_two_first() {
        for seed in 0..32 {
            let mut grid = column_split(4, 2);
            let outcome = model(0.5, seed).run(&mut grid).unwrap();

            assert_eq!(outcome.status, InvasionStatus::ReachedBoundary);
            assert!(outcome.steps <= 8, "seed {seed}: {} steps", outcome.steps);
            assert_eq!(outcome.eroded[0].x, 2);
            let last = outcome.eroded.last().copied().unwrap();
            assert_eq!(last.x, 3);
            // Terminates on the first landward erosion.
            let landward = outcome.eroded.iter().filter(|c| c.x == 3).count();
            assert_eq!(landward, 1, "seed {seed}");
            assert_eq!(grid.count(CellKind::Fluid), 8 + outcome.steps as usize);
        }
    }

    #[test]
    fn every_eroded_cell_was_solid_and_on_the_front() {
        let mut grid = column_split(12, 3);
        let mut replay = grid.clone();
        let outcome = model(0.6, 9).run(&mut grid).unwrap();

        for &c in &outcome.eroded {
            assert_eq!(replay[c], CellKind::Solid, "{c} eroded twice");
            assert!(
                replay.neighbours(c).iter().any(|&nb| replay[nb].is_fluid()),
                "{c} had no fluid neighbour when eroded"
            );
            replay[c] = CellKind::Fluid;
        }
        assert_eq!(replay, grid);
    }

    #[test]
    fn all_solid_grid_stalls_immediately() {
        let mut grid = Grid::new(6, CellKind::Solid).unwrap();
        let outcome = model(0.5, 0).run(&mut grid).unwrap();
        assert_eq!(outcome.status, InvasionStatus::Stalled);
        assert_eq!(outcome.steps, 0);
        assert_eq!(grid.count(CellKind::Fluid), 0);
    }

    #[test]
    fn island_that_misses_the_boundary_stalls_after_eroding_it() {
        // Radius 2 disc on a 9x9 grid never touches x = 8; the landward
        // column is already water, so the run stalls once the island is gone.
        let mut grid = Grid::radial(9, 2).unwrap();
        let solid = grid.count(CellKind::Solid);
        let outcome = model(0.5, 4).run(&mut grid).unwrap();
        assert_eq!(outcome.status, InvasionStatus::Stalled);
        assert_eq!(outcome.steps as usize, solid);
        assert_eq!(grid.count(CellKind::Solid), 0);
        assert_eq!(outcome.touched, 0);
    }

    #[test]
    fn single_cell_grid_stalls() {
        let mut grid = Grid::new(1, CellKind::Fluid).unwrap();
        let outcome = model(0.3, 0).run(&mut grid).unwrap();
        assert_eq!(outcome.status, InvasionStatus::Stalled);
        assert_eq!(outcome.steps, 0);
    }

    #[test]
    fn touched_cells_are_still_solid() {
        let mut grid = Grid::split(20).unwrap();
        let outcome = model(0.2, 5).run(&mut grid).unwrap();
        let solid = grid.count(CellKind::Solid);
        assert!(outcome.touched > 0);
        assert!(outcome.touched <= solid);
        let f = outcome.fraction_touched();
        assert!(f > 0.0 && f < 1.0);
    }

    #[test]
    fn same_seed_same_outcome() {
        let mut a = Grid::split(24).unwrap();
        let mut b = Grid::split(24).unwrap();
        let oa = model(0.6, 77).run(&mut a).unwrap();
        let ob = model(0.6, 77).run(&mut b).unwrap();
        assert_eq!(oa, ob);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = Grid::split(24).unwrap();
        let mut b = Grid::split(24).unwrap();
        let oa = model(0.6, 1).run(&mut a).unwrap();
        let ob = model(0.6, 2).run(&mut b).unwrap();
        assert_ne!(oa.eroded, ob.eroded);
    }
}
