//! Cell addressing, lookup, stepping, and reset.

use tracing::warn;

use crate::ffi::LatticeHandle;

/// Computes the linear index `z·N² + y·N + x`. Defined for any coordinate,
/// so the result may be negative or past the end.
///
/// # Safety
/// - `ptr` must be a valid handle, or null
///
/// # Returns
/// The index, or `i64::MIN` if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gl_to_index(ptr: *const LatticeHandle, x: i32, y: i32, z: i32) -> i64 {
    if ptr.is_null() {
        return i64::MIN;
    }
    (*ptr).to_index(x, y, z)
}

/// Writes the coordinate of cell `index` into `out_x`, `out_y`, `out_z`.
///
/// # Safety
/// - `ptr` must be a valid handle, or null
/// - the three out pointers must be valid for writes, or null
///
/// # Returns
/// 0 on success, 1 on null pointer or `index >= N³`.
#[no_mangle]
pub unsafe extern "C" fn gl_to_coord(
    ptr: *const LatticeHandle,
    index: u64,
    out_x: *mut i32,
    out_y: *mut i32,
    out_z: *mut i32,
) -> i32 {
    if ptr.is_null() || out_x.is_null() || out_y.is_null() || out_z.is_null() {
        return 1;
    }

    match (*ptr).to_coord(index as usize) {
        Some(coord) => {
            *out_x = coord.x;
            *out_y = coord.y;
            *out_z = coord.z;
            0
        }
        None => 1,
    }
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid handle, or null
///
/// # Returns
/// 1 if the linear index of `(x, y, z)` lies in the lattice and that cell is
/// alive; 0 otherwise, including for a null pointer.
#[no_mangle]
pub unsafe extern "C" fn gl_is_alive(ptr: *const LatticeHandle, x: i32, y: i32, z: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).is_alive_at(x, y, z) as u8
}

/// Counts live neighbors of `(x, y, z)` under the handle's neighbor rule.
///
/// # Safety
/// - `ptr` must be a valid handle, or null
///
/// # Returns
/// The count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gl_neighbor_count(
    ptr: *const LatticeHandle,
    x: i32,
    y: i32,
    z: i32,
) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).neighbor_count(x, y, z)
}

/// Advances the lattice by one generation and reports it to the callback.
///
/// # Safety
/// - `ptr` must be a valid handle, or null
#[no_mangle]
pub unsafe extern "C" fn gl_step(ptr: *mut LatticeHandle) {
    if ptr.is_null() {
        return;
    }
    (*ptr).advance();
}

/// Re-randomizes every cell with probability `live_percent / 100`.
///
/// # Safety
/// - `ptr` must be a valid handle, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 if `live_percent` is outside `0..=100`
/// (the lattice is left unchanged).
#[no_mangle]
pub unsafe extern "C" fn gl_reset(ptr: *mut LatticeHandle, live_percent: i32) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    match (*ptr).reset(live_percent as i64) {
        Ok(()) => 0,
        Err(err) => {
            warn!(%err, "gl_reset rejected");
            2
        }
    }
}
