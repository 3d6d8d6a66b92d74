//! Handle creation, destruction, and counter queries.

use std::ffi::{c_char, CStr};

use tracing::warn;

use crate::config::LatticeConfig;
use crate::ffi::callback::CallbackSink;
use crate::ffi::LatticeHandle;
use crate::simulator::Simulator;

fn create(config: &LatticeConfig) -> *mut LatticeHandle {
    match Simulator::initialize(config, CallbackSink::default()) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(err) => {
            warn!(%err, "gl_create rejected configuration");
            std::ptr::null_mut()
        }
    }
}

/// Creates a lattice of side `side` with each cell alive with probability
/// `live_percent / 100`, seeded from OS entropy.
///
/// # Returns
/// A pointer to a new handle, or null if `side` is not in `1..=1024` or
/// `live_percent` is not in `0..=100`.
///
/// # Safety
/// The returned pointer must eventually be freed with `gl_destroy()`.
#[no_mangle]
pub extern "C" fn gl_create(side: i32, live_percent: i32) -> *mut LatticeHandle {
    create(&LatticeConfig::new(side as i64, live_percent as i64))
}

/// Like `gl_create()`, with a fixed RNG seed for reproducible runs.
#[no_mangle]
pub extern "C" fn gl_create_seeded(side: i32, live_percent: i32, seed: u64) -> *mut LatticeHandle {
    create(&LatticeConfig::new(side as i64, live_percent as i64).with_seed(seed))
}

/// Creates a lattice from a JSON configuration document (UTF-8, NUL-terminated).
///
/// # Safety
/// - `json` must be a valid NUL-terminated string, or null
///
/// # Returns
/// A pointer to a new handle, or null on a null, malformed, or invalid document.
#[no_mangle]
pub unsafe extern "C" fn gl_create_from_json(json: *const c_char) -> *mut LatticeHandle {
    if json.is_null() {
        return std::ptr::null_mut();
    }

    let text = match CStr::from_ptr(json).to_str() {
        Ok(text) => text,
        Err(err) => {
            warn!(%err, "gl_create_from_json: configuration is not UTF-8");
            return std::ptr::null_mut();
        }
    };

    match LatticeConfig::from_json(text) {
        Ok(config) => create(&config),
        Err(err) => {
            warn!(%err, "gl_create_from_json rejected configuration");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a handle and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `gl_create*()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gl_destroy(ptr: *mut LatticeHandle) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid handle, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gl_get_generation(ptr: *const LatticeHandle) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Gets the side length N.
///
/// # Safety
/// - `ptr` must be a valid handle, or null
///
/// # Returns
/// N, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gl_get_side(ptr: *const LatticeHandle) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).side() as i32
}

/// Gets the number of alive cells.
///
/// # Safety
/// - `ptr` must be a valid handle, or null
#[no_mangle]
pub unsafe extern "C" fn gl_alive_count(ptr: *const LatticeHandle) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).alive_count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            let sim = gl_create(4, 10);
            assert!(!sim.is_null());
            assert_eq!(gl_get_side(sim), 4);
            assert_eq!(gl_get_generation(sim), 0);

            // Should not crash
            gl_destroy(sim);
        }
    }

    #[test]
    fn test_create_rejects_invalid() {
        assert!(gl_create(0, 10).is_null());
        assert!(gl_create(-2, 10).is_null());
        assert!(gl_create(4, 101).is_null());
        assert!(gl_create(4, -1).is_null());
        assert!(gl_create_seeded(2000, 10, 0).is_null());
    }

    #[test]
    fn test_create_seeded_extremes() {
        unsafe {
            let full = gl_create_seeded(3, 100, 9);
            assert_eq!(gl_alive_count(full), 27);
            gl_destroy(full);

            let empty = gl_create_seeded(3, 0, 9);
            assert_eq!(gl_alive_count(empty), 0);
            gl_destroy(empty);
        }
    }

    #[test]
    fn test_create_from_json() {
        unsafe {
            let json = CString::new(r#"{"world_length": 5, "start_living_percent": 100}"#).unwrap();
            let sim = gl_create_from_json(json.as_ptr());
            assert!(!sim.is_null());
            assert_eq!(gl_get_side(sim), 5);
            assert_eq!(gl_alive_count(sim), 125);
            gl_destroy(sim);

            let bad = CString::new(r#"{"world_length": 0}"#).unwrap();
            assert!(gl_create_from_json(bad.as_ptr()).is_null());

            let garbage = CString::new("world_length = 5").unwrap();
            assert!(gl_create_from_json(garbage.as_ptr()).is_null());

            assert!(gl_create_from_json(ptr::null()).is_null());
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            gl_destroy(ptr::null_mut());
            assert_eq!(gl_get_generation(ptr::null()), 0);
            assert_eq!(gl_get_side(ptr::null()), 0);
            assert_eq!(gl_alive_count(ptr::null()), 0);
        }
    }
}
