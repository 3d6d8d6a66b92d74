//! Core lattice structure and cell views.

use crate::config::validate_side;
use crate::error::{LatticeError, Result};

/// A cell coordinate. Components may lie outside the lattice; lookups treat
/// such coordinates as dead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Coord { x, y, z }
    }
}

impl From<(i32, i32, i32)> for Coord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Coord { x, y, z }
    }
}

/// One committed cell as reported to hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellState {
    pub index: usize,
    pub coord: Coord,
    pub alive: bool,
}

/// The N×N×N grid of alive/dead cells.
///
/// Cells are stored in a single vector indexed by `z·N² + y·N + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    pub(crate) side: i64,
    pub(crate) cells: Vec<bool>,
    pub(crate) generation: u64,
}

impl Lattice {
    /// An all-dead lattice of side `side`.
    pub fn new(side: i64) -> Result<Self> {
        validate_side(side)?;
        let len = (side * side * side) as usize;
        Ok(Lattice {
            side,
            cells: vec![false; len],
            generation: 0,
        })
    }

    /// A lattice holding exactly `cells`, in index order.
    pub fn from_cells(side: i64, cells: Vec<bool>) -> Result<Self> {
        let mut lattice = Lattice::new(side)?;
        if cells.len() != lattice.cells.len() {
            return Err(LatticeError::CellCountMismatch {
                expected: lattice.cells.len(),
                actual: cells.len(),
            });
        }
        lattice.cells = cells;
        Ok(lattice)
    }

    #[inline]
    pub fn side(&self) -> i64 {
        self.side
    }

    /// Number of cells, N³.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed lattice; N is at least 1.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// State of the cell at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.cells.get(index).copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Every cell in index-ascending order.
    pub fn cells(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &alive)| CellState {
                index,
                coord: crate::automaton::to_coord(self, index),
                alive,
            })
    }
}
