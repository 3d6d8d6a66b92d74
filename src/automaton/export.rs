//! Bulk export and import of the whole lattice as bytes.

use crate::error::{LatticeError, Result};
use crate::state::Lattice;

/// Write every cell into `out_buf` as 0 (dead) or 1 (alive).
///
/// # Layout
/// Index order: x changes fastest, z slowest.
///
/// # Returns
/// Number of bytes written, or 0 if the buffer is shorter than the lattice.
pub fn export_cells(lattice: &Lattice, out_buf: &mut [u8]) -> usize {
    let len = lattice.cells.len();
    if out_buf.len() < len {
        return 0;
    }

    for (byte, &alive) in out_buf.iter_mut().zip(lattice.cells.iter()) {
        *byte = alive as u8;
    }

    len
}

/// Replace every cell from `in_buf`, in the same layout as [`export_cells`].
/// Input values are normalized: 0 = dead, any non-zero = alive.
///
/// The generation counter is left as is.
pub fn import_cells(lattice: &mut Lattice, in_buf: &[u8]) -> Result<usize> {
    let len = lattice.cells.len();
    if in_buf.len() != len {
        return Err(LatticeError::CellCountMismatch {
            expected: len,
            actual: in_buf.len(),
        });
    }

    for (cell, &byte) in lattice.cells.iter_mut().zip(in_buf.iter()) {
        *cell = byte != 0;
    }

    Ok(len)
}
