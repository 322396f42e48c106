//! Lattice coordinates and the four cardinal directions.

use std::fmt;

/// Integer address of a lattice cell.
///
/// `x` runs along the erosion axis, from the seaward edge (`x = 0`) to the
/// landward boundary (`x = size - 1`); `y` runs across it. Ordering is
/// lexicographic on `(x, y)`, which is also the grid's storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Position along the erosion axis.
    pub x: u32,
    /// Position across the erosion axis.
    pub y: u32,
}

impl Coord {
    /// Construct a coordinate.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The coordinate one step in `dir`, or `None` if that step would leave
    /// a `size × size` lattice.
    pub fn step(self, dir: Direction, size: u32) -> Option<Self> {
        let (dx, dy) = dir.offset();
        let nx = i64::from(self.x) + i64::from(dx);
        let ny = i64::from(self.y) + i64::from(dy);
        let n = i64::from(size);
        if nx < 0 || ny < 0 || nx >= n || ny >= n {
            return None;
        }
        Some(Self::new(nx as u32, ny as u32))
    }
}

impl From<(u32, u32)> for Coord {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four 4-connected neighbour directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `+y`.
    North,
    /// `+x`.
    East,
    /// `-y`.
    South,
    /// `-x`.
    West,
}

impl Direction {
    /// All directions in N, E, S, W order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(dx, dy)` unit offset.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}
