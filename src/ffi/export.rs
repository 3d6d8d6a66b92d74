//! Whole-lattice export and import FFI functions.

use tracing::warn;

use crate::ffi::LatticeHandle;

/// Copies every cell into a flat output buffer as 0 (dead) or 1 (alive).
///
/// # Layout
/// Index order: x changes fastest, z slowest. This matches the layout
/// expected by `gl_import_cells`.
///
/// # Safety
/// - `ptr` must be a valid handle, or null
/// - `out_buf` must point to at least `out_len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written (N³), or 0 on null pointers or `out_len < N³`.
#[no_mangle]
pub unsafe extern "C" fn gl_export_cells(
    ptr: *const LatticeHandle,
    out_buf: *mut u8,
    out_len: u64,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, out_len as usize);
    (*ptr).export(buf_slice) as u64
}

/// Replaces every cell from a flat buffer and reports the new state to the
/// callback. Input values are normalized: 0 = dead, non-zero = alive.
///
/// # Safety
/// - `ptr` must be a valid handle, or null
/// - `in_buf` must point to at least `in_len` readable bytes, or be null
///
/// # Returns
/// Number of bytes read, or 0 on null pointers or `in_len != N³`.
#[no_mangle]
pub unsafe extern "C" fn gl_import_cells(
    ptr: *mut LatticeHandle,
    in_buf: *const u8,
    in_len: u64,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts(in_buf, in_len as usize);
    match (*ptr).import(buf_slice) {
        Ok(()) => in_len,
        Err(err) => {
            warn!(%err, "gl_import_cells rejected");
            0
        }
    }
}
