//! Deterministic fingerprint of a grid's cell assignment.
//!
//! Uses FNV-1a for fast, deterministic hashing. Not cryptographically
//! secure; intended for equality checks in determinism tests and sweep
//! logs.

use crate::cell::CellKind;
use crate::grid::Grid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the side length followed by every cell in storage order.
///
/// Two grids hash equal iff (barring collisions) they have the same size
/// and the same state at every coordinate.
pub fn grid_hash(grid: &Grid) -> u64 {
    let mut hash = fnv1a_u32(FNV_OFFSET, grid.size());
    for &kind in grid.cells() {
        let byte = match kind {
            CellKind::Solid => 0u8,
            CellKind::Fluid => 1u8,
        };
        hash = fnv1a_byte(hash, byte);
    }
    hash
}
