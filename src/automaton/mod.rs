//! Core automaton logic and lattice operations.
//!
//! This module contains the actual logic for addressing cells, counting
//! neighbors, stepping generations, and seeding or exporting state.
//! The `Simulator` and the FFI layer in `ffi/` call these functions.

pub mod export;
pub mod grid;
pub mod seeding;
pub mod stepping;

pub use export::{export_cells, import_cells};
pub use grid::{count_neighbors, in_bounds, is_alive_at, to_coord, to_index, NeighborRule};
pub use seeding::fill_random;
pub use stepping::{next_generation, next_state, step_lattice};
