//! Life Lattice - 3D Game of Life Simulation Core
//!
//! A cubic N×N×N lattice of alive/dead cells advanced one whole generation at
//! a time. Hosts drive it either through [`Simulator`] or through the C ABI in
//! [`ffi`], and receive committed state through a [`PresentationSink`].

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod simulator;
pub mod sink;
pub mod state;

pub use automaton::NeighborRule;
pub use config::LatticeConfig;
pub use error::{LatticeError, Result};
pub use simulator::Simulator;
pub use sink::{FrameSink, NullSink, PresentationSink};
pub use state::{CellState, Coord, Lattice};
