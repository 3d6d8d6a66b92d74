//! Host callback sink.

use std::ffi::c_void;

use crate::ffi::LatticeHandle;
use crate::sink::PresentationSink;
use crate::state::CellState;

/// Called once per cell, in index order, after every committed generation.
pub type CellCallback =
    extern "C" fn(user_data: *mut c_void, index: u64, x: i32, y: i32, z: i32, alive: u8);

/// Forwards reports to a C function pointer. Inert until a callback is set.
pub struct CallbackSink {
    callback: Option<CellCallback>,
    user_data: *mut c_void,
}

impl Default for CallbackSink {
    fn default() -> Self {
        CallbackSink {
            callback: None,
            user_data: std::ptr::null_mut(),
        }
    }
}

impl PresentationSink for CallbackSink {
    fn present(&mut self, cell: CellState) {
        if let Some(callback) = self.callback {
            callback(
                self.user_data,
                cell.index as u64,
                cell.coord.x,
                cell.coord.y,
                cell.coord.z,
                cell.alive as u8,
            );
        }
    }
}

/// Registers (or, with a null `callback`, clears) the per-cell callback and
/// immediately reports the current generation through it.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `gl_create*()`, or null
/// - `user_data` is passed back verbatim and must stay valid for as long as
///   the callback is registered
///
/// # Returns
/// 0 on success, 1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn gl_set_callback(
    ptr: *mut LatticeHandle,
    callback: Option<CellCallback>,
    user_data: *mut c_void,
) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let sim = &mut *ptr;
    let sink = sim.sink_mut();
    sink.callback = callback;
    sink.user_data = user_data;
    sim.publish();
    0
}
