//! C FFI layer for engine hosts.
//!
//! This module exports C ABI functions so a host engine can drive the
//! simulation from its own frame loop. All functions are marked with
//! `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `automaton` and `Simulator`. These functions are thin
//! wrappers that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod callback;
pub mod export;
pub mod grid;
pub mod lifecycle;

use crate::simulator::Simulator;

/// Opaque handle passed across the C boundary.
pub type LatticeHandle = Simulator<callback::CallbackSink>;

pub use callback::{gl_set_callback, CallbackSink, CellCallback};
pub use export::{gl_export_cells, gl_import_cells};
pub use grid::{gl_is_alive, gl_neighbor_count, gl_reset, gl_step, gl_to_coord, gl_to_index};
pub use lifecycle::{
    gl_alive_count, gl_create, gl_create_from_json, gl_create_seeded, gl_destroy,
    gl_get_generation, gl_get_side,
};
