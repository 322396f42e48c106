//! Square lattice of cell states with 4-connected neighbourhood.

use crate::cell::CellKind;
use crate::coord::{Coord, Direction};
use crate::error::GridError;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Index, IndexMut};

/// An `N × N` lattice in which every coordinate holds exactly one
/// [`CellKind`].
///
/// Cells are stored x-major: the cell at `(x, y)` lives at flat index
/// `x * N + y`. Neighbours are the four cardinal directions; the lattice
/// does not wrap, so edge cells have three neighbours and corners two.
///
/// The grid is owned by the caller and lent by `&mut` to whichever model
/// is running.
///
/// # Examples
///
/// ```
/// use littoral_core::{CellKind, Coord, Grid};
///
/// let grid = Grid::split(8).unwrap();
/// assert_eq!(grid.count(CellKind::Fluid), 32);
/// assert_eq!(grid[Coord::new(3, 0)], CellKind::Fluid);
/// assert_eq!(grid[Coord::new(4, 0)], CellKind::Solid);
///
/// // Corner cells have two in-bounds neighbours.
/// assert_eq!(grid.neighbours(Coord::new(0, 0)).len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Largest accepted side length.
    pub const MAX_SIZE: u32 = 1 << 15;

    /// Create a grid with every cell set to `fill`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for `size == 0` and
    /// `Err(GridError::DimensionTooLarge)` above [`Grid::MAX_SIZE`].
    pub fn new(size: u32, fill: CellKind) -> Result<Self, GridError> {
        Self::check_size(size)?;
        let n = size as usize;
        Ok(Self {
            size,
            cells: vec![fill; n * n],
        })
    }

    /// Create a grid from an x-major flat buffer of `size * size` cells.
    pub fn from_cells(size: u32, cells: Vec<CellKind>) -> Result<Self, GridError> {
        Self::check_size(size)?;
        let expected = (size as usize) * (size as usize);
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Create a grid by evaluating `f` at every coordinate in storage order.
    pub fn from_fn(size: u32, mut f: impl FnMut(Coord) -> CellKind) -> Result<Self, GridError> {
        Self::check_size(size)?;
        let n = size as usize;
        let mut cells = Vec::with_capacity(n * n);
        for x in 0..size {
            for y in 0..size {
                cells.push(f(Coord::new(x, y)));
            }
        }
        Ok(Self { size, cells })
    }

    /// Straight shoreline: cells with `x >= size / 2` are Solid, the rest
    /// Fluid.
    pub fn split(size: u32) -> Result<Self, GridError> {
        let boundary = size / 2;
        Self::from_fn(size, |c| {
            if c.x >= boundary {
                CellKind::Solid
            } else {
                CellKind::Fluid
            }
        })
    }

    /// Island: a Solid disc of the given radius centred on the grid,
    /// surrounded by Fluid.
    pub fn radial(size: u32, radius: u32) -> Result<Self, GridError> {
        let centre = (f64::from(size) - 1.0) / 2.0;
        let r2 = f64::from(radius) * f64::from(radius);
        Self::from_fn(size, |c| {
            let dx = f64::from(c.x) - centre;
            let dy = f64::from(c.y) - centre;
            if dx * dx + dy * dy <= r2 {
                CellKind::Solid
            } else {
                CellKind::Fluid
            }
        })
    }

    fn check_size(size: u32) -> Result<(), GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        if size > Self::MAX_SIZE {
            return Err(GridError::DimensionTooLarge {
                value: size as usize,
                max: Self::MAX_SIZE as usize,
            });
        }
        Ok(())
    }

    /// Side length `N`.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells, `N²`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// `true` if `coord` addresses a cell of this grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Flat storage index of `coord`. Caller guarantees bounds.
    #[inline]
    pub fn index_of(&self, coord: Coord) -> usize {
        (coord.x as usize) * (self.size as usize) + coord.y as usize
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        let n = self.size as usize;
        Coord::new((index / n) as u32, (index % n) as u32)
    }

    fn checked_index(&self, coord: Coord) -> Result<usize, GridError> {
        if self.contains(coord) {
            Ok(self.index_of(coord))
        } else {
            Err(GridError::CoordOutOfBounds {
                coord,
                size: self.size,
            })
        }
    }

    /// The state at `coord`, or `None` outside the lattice.
    pub fn get(&self, coord: Coord) -> Option<CellKind> {
        self.contains(coord).then(|| self.cells[self.index_of(coord)])
    }

    /// Overwrite the state at `coord`.
    pub fn set(&mut self, coord: Coord, kind: CellKind) -> Result<(), GridError> {
        let i = self.checked_index(coord)?;
        self.cells[i] = kind;
        Ok(())
    }

    /// Exchange the states at `a` and `b`.
    ///
    /// Both coordinates are checked before anything is written, so a
    /// rejected call leaves the grid untouched. Swapping the same pair
    /// twice restores the original assignment.
    pub fn swap(&mut self, a: Coord, b: Coord) -> Result<(), GridError> {
        let ia = self.checked_index(a)?;
        let ib = self.checked_index(b)?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// In-bounds 4-connected neighbours of `coord`, in N, E, S, W order.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| coord.step(dir, self.size))
            .collect()
    }

    /// Number of cells in state `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// All coordinates in storage order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(move |i| self.coord_of(i))
    }

    /// `(coord, state)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &k)| (self.coord_of(i), k))
    }

    /// The x-major flat cell buffer.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }
}

impl Index<Coord> for Grid {
    type Output = CellKind;

    /// # Panics
    ///
    /// Panics if `coord` is outside the lattice.
    fn index(&self, coord: Coord) -> &CellKind {
        assert!(
            self.contains(coord),
            "coordinate {coord} out of bounds for {0}x{0} grid",
            self.size
        );
        &self.cells[self.index_of(coord)]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut CellKind {
        assert!(
            self.contains(coord),
            "coordinate {coord} out of bounds for {0}x{0} grid",
            self.size
        );
        let i = self.index_of(coord);
        &mut self.cells[i]
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("fluid", &self.count(CellKind::Fluid))
            .field("solid", &self.count(CellKind::Solid))
            .finish()
    }
}

/// Renders one line per `y` row, highest `y` first, `x` increasing left
/// to right.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.size).rev() {
            for x in 0..self.size {
                write!(f, "{}", self[Coord::new(x, y)].glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
