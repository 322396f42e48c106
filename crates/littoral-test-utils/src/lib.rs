//! Test utilities for Littoral development.
//!
//! Provides canned [`Grid`] layouts ([`fixtures`]) and checkers for the
//! structural invariants the models must uphold.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{checkerboard, column_split};

use littoral_core::{CellKind, Coord, Grid};

/// Coordinates in `candidates` that are not valid growth sites of `grid`.
///
/// A valid site is in bounds, Solid, and has at least one Fluid
/// 4-neighbour. Returns an empty vector when every candidate is valid.
pub fn frontier_violations(grid: &Grid, candidates: impl IntoIterator<Item = Coord>) -> Vec<Coord> {
    candidates
        .into_iter()
        .filter(|&c| !is_growth_site(grid, c))
        .collect()
}

/// Every growth site of `grid`, in storage order.
pub fn growth_sites(grid: &Grid) -> Vec<Coord> {
    grid.coords().filter(|&c| is_growth_site(grid, c)).collect()
}

fn is_growth_site(grid: &Grid, c: Coord) -> bool {
    grid.get(c) == Some(CellKind::Solid)
        && grid.neighbours(c).iter().any(|&nb| grid[nb].is_fluid())
}

/// Panic unless `a` and `b` hold the same number of each kind.
pub fn assert_kinds_conserved(a: &Grid, b: &Grid) {
    assert_eq!(a.size(), b.size(), "grid sizes differ");
    for kind in [CellKind::Fluid, CellKind::Solid] {
        assert_eq!(
            a.count(kind),
            b.count(kind),
            "{kind:?} count changed: {} -> {}",
            a.count(kind),
            b.count(kind)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_front_is_column_three() {
        let grid = column_split(6, 3);
        let sites = growth_sites(&grid);
        assert_eq!(sites.len(), 6);
        assert!(sites.iter().all(|c| c.x == 3));
        assert!(frontier_violations(&grid, sites).is_empty());
    }

    #[test]
    fn violations_flag_fluid_and_isolated_cells() {
        let grid = column_split(6, 3);
        let bad = frontier_violations(
            &grid,
            [Coord::new(0, 0), Coord::new(5, 5), Coord::new(9, 9), Coord::new(3, 1)],
        );
        assert_eq!(bad, vec![Coord::new(0, 0), Coord::new(5, 5), Coord::new(9, 9)]);
    }

    #[test]
    #[should_panic(expected = "count changed")]
    fn conservation_check_panics_on_change() {
        assert_kinds_conserved(&column_split(4, 1), &column_split(4, 2));
    }
}
