//! Error type shared by the lattice, configuration, and simulator.

use crate::config::MAX_SIDE;

#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    #[error("side length must be in 1..={max}, got {0}", max = MAX_SIDE)]
    InvalidSide(i64),

    #[error("live percent must be in 0..=100, got {0}")]
    InvalidLivePercent(i64),

    #[error("cell state has {actual} entries, lattice holds {expected}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LatticeError>;
