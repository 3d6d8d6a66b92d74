//! Coordinate mapping, cell lookup, and neighbor counting.

use serde::{Deserialize, Serialize};

use crate::state::{Coord, Lattice};

/// Which candidates of the 3×3×3 block around a cell are counted as neighbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborRule {
    /// Count a candidate only when all three of its coordinates differ from
    /// the center's: the 8 corner diagonals.
    #[default]
    Diagonal,

    /// Count a candidate when at least one coordinate equals the center's.
    /// Admits 19 candidates, the center cell included.
    AxisShared,

    /// Classic 26-cell Moore neighborhood, clipped per axis at the lattice
    /// faces instead of by linear index.
    Moore,
}

impl NeighborRule {
    /// Whether the candidate at offset `(dx, dy, dz)` from the center counts.
    #[inline]
    pub fn admits(self, dx: i64, dy: i64, dz: i64) -> bool {
        let all_differ = dx != 0 && dy != 0 && dz != 0;
        match self {
            NeighborRule::Diagonal => all_differ,
            NeighborRule::AxisShared => !all_differ,
            NeighborRule::Moore => !(dx == 0 && dy == 0 && dz == 0),
        }
    }
}

#[inline]
fn linear_index(side: i64, x: i64, y: i64, z: i64) -> i64 {
    z * side * side + y * side + x
}

/// Linear index `z·N² + y·N + x`. Defined for any coordinate; the result is
/// outside `[0, N³)` for most out-of-lattice input, but not all of it.
#[inline]
pub fn to_index(lattice: &Lattice, x: i32, y: i32, z: i32) -> i64 {
    linear_index(lattice.side, x as i64, y as i64, z as i64)
}

/// Inverse of [`to_index`] for `index < N³`.
#[inline]
pub fn to_coord(lattice: &Lattice, index: usize) -> Coord {
    let side = lattice.side as usize;
    let plane = side * side;
    let z = index / plane;
    let rest = index - z * plane;
    let y = rest / side;
    let x = rest % side;
    Coord::new(x as i32, y as i32, z as i32)
}

/// Check if every axis of the coordinate lies in `[0, N)`.
#[inline]
pub fn in_bounds(lattice: &Lattice, x: i64, y: i64, z: i64) -> bool {
    let n = lattice.side;
    (0..n).contains(&x) && (0..n).contains(&y) && (0..n).contains(&z)
}

#[inline]
fn alive_at_linear(lattice: &Lattice, x: i64, y: i64, z: i64) -> bool {
    let index = linear_index(lattice.side, x, y, z);
    index >= 0 && (index as usize) < lattice.cells.len() && lattice.cells[index as usize]
}

/// Stored state when the linear index falls inside the lattice, dead otherwise.
///
/// The range check is on the linear index only, so a coordinate such as
/// `(N, -1, 0)` aliases cell `(0, 0, 0)`.
#[inline]
pub fn is_alive_at(lattice: &Lattice, x: i32, y: i32, z: i32) -> bool {
    alive_at_linear(lattice, x as i64, y as i64, z as i64)
}

/// Count alive cells in the 3×3×3 block around `(x, y, z)` admitted by `rule`.
pub fn count_neighbors(lattice: &Lattice, rule: NeighborRule, x: i32, y: i32, z: i32) -> u8 {
    let (x, y, z) = (x as i64, y as i64, z as i64);
    let mut count = 0;

    for dx in -1..=1 {
        for dy in -1..=1 {
            for dz in -1..=1 {
                if !rule.admits(dx, dy, dz) {
                    continue;
                }

                let (nx, ny, nz) = (x + dx, y + dy, z + dz);
                let alive = match rule {
                    NeighborRule::Moore => {
                        in_bounds(lattice, nx, ny, nz) && alive_at_linear(lattice, nx, ny, nz)
                    }
                    NeighborRule::Diagonal | NeighborRule::AxisShared => {
                        alive_at_linear(lattice, nx, ny, nz)
                    }
                };
                if alive {
                    count += 1;
                }
            }
        }
    }

    count
}
