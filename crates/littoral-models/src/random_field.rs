//! Pore incursion probability field for invasion percolation.
//!
//! Each site gets a score made of a row-dependent deterministic bias
//! `P(x)` plus a bounded uniform perturbation scaled by the erosion bias
//! `p`:
//!
//! ```text
//! P(x) = (1 + p) * (N + x) / N             if p < 0
//! P(x) = (1 - p) * (N - x + 1) / (x + 1)   otherwise
//! field[x, y] = P(x) + u * p,  u ~ U[0, 1)
//! ```
//!
//! Rows near the seaward edge score systematically differently from rows
//! near the landward boundary, which is what drives the front across the
//! lattice.

use littoral_core::{Coord, GridError, ModelError};
use rand::Rng;

/// An `N × N` matrix of incursion scores, read-only after generation.
#[derive(Clone, Debug)]
pub struct RandomField {
    size: u32,
    values: Vec<f64>,
}

impl RandomField {
    /// Deterministic component `P(x)` for row `x` of a `size`-wide lattice.
    pub fn row_bias(size: u32, p: f64, x: u32) -> f64 {
        let n = f64::from(size);
        let x = f64::from(x);
        if p < 0.0 {
            (1.0 + p) * (n + x) / n
        } else {
            (1.0 - p) * (n - x + 1.0) / (x + 1.0)
        }
    }

    /// Draw a fresh field, one uniform sample per site in x-major order.
    ///
    /// Any finite `p` is accepted here; values outside `[-1, 0.9]` merely
    /// give degenerate erosion rates. Domain enforcement belongs to
    /// [`InvasionPercolation`](crate::InvasionPercolation).
    pub fn generate<R: Rng + ?Sized>(size: u32, p: f64, rng: &mut R) -> Result<Self, ModelError> {
        if size == 0 {
            return Err(GridError::EmptyGrid.into());
        }
        if !p.is_finite() {
            return Err(ModelError::invalid(
                "erosion_bias",
                format!("must be finite, got {p}"),
            ));
        }
        let n = size as usize;
        let mut values = Vec::with_capacity(n * n);
        for x in 0..size {
            let bias = Self::row_bias(size, p, x);
            for _ in 0..size {
                let u: f64 = rng.random();
                values.push(bias + u * p);
            }
        }
        Ok(Self { size, values })
    }

    /// Side length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Score at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the field.
    pub fn get(&self, coord: Coord) -> f64 {
        assert!(
            coord.x < self.size && coord.y < self.size,
            "coordinate {coord} outside {0}x{0} field",
            self.size
        );
        self.values[(coord.x as usize) * (self.size as usize) + coord.y as usize]
    }

    /// All scores in x-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn row_bias_positive_branch() {
        // (1 - 0.5) * (4 - 0 + 1) / 1 = 2.5
        assert!((RandomField::row_bias(4, 0.5, 0) - 2.5).abs() < 1e-12);
        // (1 - 0.5) * (4 - 3 + 1) / 4 = 0.25
        assert!((RandomField::row_bias(4, 0.5, 3) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn row_bias_negative_branch() {
        // (1 - 0.5) * (10 + 0) / 10 = 0.5
        assert!((RandomField::row_bias(10, -0.5, 0) - 0.5).abs() < 1e-12);
        // (1 - 0.5) * (10 + 9) / 10 = 0.95
        assert!((RandomField::row_bias(10, -0.5, 9) - 0.95).abs() < 1e-12);
    }

    #[test]
    fn row_bias_zero_p_uses_positive_branch() {
        assert!((RandomField::row_bias(8, 0.0, 1) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn perturbation_is_bounded_by_p() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let p = 0.6;
        let field = RandomField::generate(16, p, &mut rng).unwrap();
        for x in 0..16 {
            let bias = RandomField::row_bias(16, p, x);
            for y in 0..16 {
                let v = field.get(Coord::new(x, y));
                assert!(v >= bias && v < bias + p, "({x},{y}) = {v}, bias {bias}");
            }
        }
    }

    #[test]
    fn negative_p_perturbation_lies_below_bias() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let p = -0.4;
        let field = RandomField::generate(8, p, &mut rng).unwrap();
        for x in 0..8 {
            let bias = RandomField::row_bias(8, p, x);
            for y in 0..8 {
                let v = field.get(Coord::new(x, y));
                assert!(v <= bias && v > bias + p);
            }
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = RandomField::generate(10, 0.3, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        let b = RandomField::generate(10, 0.3, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn rejects_empty_and_non_finite() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            RandomField::generate(0, 0.5, &mut rng),
            Err(ModelError::Grid(GridError::EmptyGrid))
        ));
        assert!(matches!(
            RandomField::generate(4, f64::NAN, &mut rng),
            Err(ModelError::InvalidParameter { name: "erosion_bias", .. })
        ));
    }
}
