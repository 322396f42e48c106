//! Max-ordered set of invadable sites on the eroding front.
//!
//! Entries are keyed by `(probability, coord)`. The coordinate breaks ties
//! between sites with bit-identical scores, so every distinct Solid
//! candidate is tracked even when two field values collide. A per-cell
//! membership bitmap makes insertion idempotent per site.

use crate::random_field::RandomField;
use littoral_core::{CellKind, Coord, Grid};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// A candidate site and its incursion score.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry {
    /// Score drawn from the [`RandomField`].
    pub probability: f64,
    /// The candidate Solid cell.
    pub coord: Coord,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.probability
            .total_cmp(&other.probability)
            .then_with(|| self.coord.cmp(&other.coord))
    }
}

/// Growth sites: Solid cells with at least one Fluid neighbour.
///
/// Supports insert-if-absent, remove, and retrieval of the maximum entry.
/// The frontier never holds a Fluid cell as long as cells only leave the
/// Solid state through [`pop_max`](Self::pop_max) or
/// [`remove`](Self::remove).
#[derive(Clone, Debug)]
pub struct GrowthFrontier {
    entries: BTreeSet<FrontierEntry>,
    member: Vec<bool>,
    size: u32,
}

impl GrowthFrontier {
    /// Empty frontier for a `size × size` lattice.
    pub fn new(size: u32) -> Self {
        let n = size as usize;
        Self {
            entries: BTreeSet::new(),
            member: vec![false; n * n],
            size,
        }
    }

    fn slot(&self, coord: Coord) -> usize {
        (coord.x as usize) * (self.size as usize) + coord.y as usize
    }

    /// Scan the whole grid and insert every Solid neighbour of every Fluid
    /// cell, keyed by that neighbour's own field value.
    pub fn rebuild(grid: &Grid, field: &RandomField) -> Self {
        let mut frontier = Self::new(grid.size());
        for (coord, kind) in grid.iter() {
            if kind.is_fluid() {
                frontier.discover(grid, field, coord);
            }
        }
        frontier
    }

    /// Insert the Solid neighbours of `coord`. Returns how many were new.
    pub fn discover(&mut self, grid: &Grid, field: &RandomField, coord: Coord) -> usize {
        let mut added = 0;
        for nb in grid.neighbours(coord) {
            if grid[nb] == CellKind::Solid
                && self.insert(FrontierEntry {
                    probability: field.get(nb),
                    coord: nb,
                })
            {
                added += 1;
            }
        }
        added
    }

    /// Insert `entry` unless its site is already present.
    pub fn insert(&mut self, entry: FrontierEntry) -> bool {
        let slot = self.slot(entry.coord);
        if self.member[slot] {
            return false;
        }
        self.member[slot] = true;
        self.entries.insert(entry);
        true
    }

    /// Remove `entry`. Returns `false` if it was not present.
    pub fn remove(&mut self, entry: &FrontierEntry) -> bool {
        if !self.entries.remove(entry) {
            return false;
        }
        let slot = self.slot(entry.coord);
        self.member[slot] = false;
        true
    }

    /// The highest-scoring entry, without removing it.
    pub fn peek_max(&self) -> Option<&FrontierEntry> {
        self.entries.last()
    }

    /// Remove and return the highest-scoring entry.
    pub fn pop_max(&mut self) -> Option<FrontierEntry> {
        let entry = self.entries.pop_last()?;
        let slot = self.slot(entry.coord);
        self.member[slot] = false;
        Some(entry)
    }

    /// `true` if the site at `coord` is a current candidate.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size && self.member[self.slot(coord)]
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no candidate remains.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending score order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &FrontierEntry> {
        self.entries.iter()
    }
}
