//! Lattice configuration.
//!
//! Defaults match the authoring values the simulator was first tuned with: a
//! 2×2×2 world where roughly one cell in ten starts alive.

use serde::{Deserialize, Serialize};

use crate::automaton::NeighborRule;
use crate::error::{LatticeError, Result};

/// Largest accepted side length. 1024³ cells is already a gigabyte of state.
pub const MAX_SIDE: i64 = 1024;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    /// Side length N of the cubic lattice.
    pub world_length: i64,

    /// Chance, in whole percent, that a cell starts alive.
    pub start_living_percent: i64,

    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    pub neighbor_rule: NeighborRule,

    /// Threads used for the neighbor pass. 0 and 1 both mean serial.
    pub worker_threads: u8,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        LatticeConfig {
            world_length: 2,
            start_living_percent: 10,
            seed: None,
            neighbor_rule: NeighborRule::default(),
            worker_threads: 1,
        }
    }
}

impl LatticeConfig {
    pub fn new(world_length: i64, start_living_percent: i64) -> Self {
        LatticeConfig {
            world_length,
            start_living_percent,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rule(mut self, rule: NeighborRule) -> Self {
        self.neighbor_rule = rule;
        self
    }

    pub fn with_worker_threads(mut self, threads: u8) -> Self {
        self.worker_threads = threads;
        self
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: LatticeConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range values instead of clamping them.
    pub fn validate(&self) -> Result<()> {
        validate_side(self.world_length)?;
        validate_live_percent(self.start_living_percent)?;
        Ok(())
    }
}

pub fn validate_side(side: i64) -> Result<()> {
    if (1..=MAX_SIDE).contains(&side) {
        Ok(())
    } else {
        Err(LatticeError::InvalidSide(side))
    }
}

pub fn validate_live_percent(percent: i64) -> Result<()> {
    if (0..=100).contains(&percent) {
        Ok(())
    } else {
        Err(LatticeError::InvalidLivePercent(percent))
    }
}
