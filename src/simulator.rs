//! The lattice simulator: owns the lattice, its RNG, and the presentation sink.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::automaton::{self, NeighborRule};
use crate::config::LatticeConfig;
use crate::error::Result;
use crate::sink::{NullSink, PresentationSink};
use crate::state::{CellState, Coord, Lattice};

pub struct Simulator<S: PresentationSink = NullSink> {
    lattice: Lattice,
    rule: NeighborRule,
    rng: ChaCha8Rng,
    pool: Option<rayon::ThreadPool>,
    sink: S,
}

/// Build the worker pool for the neighbor pass. `None` means serial.
fn build_pool(worker_threads: u8) -> Option<rayon::ThreadPool> {
    if worker_threads <= 1 {
        return None;
    }

    match rayon::ThreadPoolBuilder::new()
        .num_threads(worker_threads as usize)
        .build()
    {
        Ok(pool) => Some(pool),
        Err(err) => {
            warn!(%err, worker_threads, "worker pool unavailable, stepping serially");
            None
        }
    }
}

impl Simulator<NullSink> {
    /// Random lattice of side `side`, no sink attached.
    pub fn new(side: i64, live_percent: i64) -> Result<Self> {
        Simulator::initialize(&LatticeConfig::new(side, live_percent), NullSink)
    }
}

impl<S: PresentationSink> Simulator<S> {
    /// Build a randomly populated lattice and report it to `sink`.
    pub fn initialize(config: &LatticeConfig, sink: S) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut lattice = Lattice::new(config.world_length)?;
        automaton::fill_random(&mut lattice, config.start_living_percent, &mut rng)?;

        info!(
            side = config.world_length,
            live_percent = config.start_living_percent,
            rule = ?config.neighbor_rule,
            alive = lattice.alive_count(),
            "lattice created"
        );

        Ok(Self::assemble(lattice, config, rng, sink))
    }

    /// Wrap an existing lattice. Only the RNG, rule, and worker fields of
    /// `config` are used; the lattice keeps its own size and state.
    pub fn from_lattice(lattice: Lattice, config: &LatticeConfig, sink: S) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::assemble(lattice, config, rng, sink)
    }

    fn assemble(lattice: Lattice, config: &LatticeConfig, rng: ChaCha8Rng, sink: S) -> Self {
        let mut sim = Simulator {
            lattice,
            rule: config.neighbor_rule,
            rng,
            pool: build_pool(config.worker_threads),
            sink,
        };
        sim.publish();
        sim
    }

    /// Advance every cell by one generation and report the result.
    pub fn advance(&mut self) {
        automaton::step_lattice(&mut self.lattice, self.rule, self.pool.as_ref());
        debug!(
            generation = self.lattice.generation,
            alive = self.lattice.alive_count(),
            "generation committed"
        );
        self.publish();
    }

    /// Re-randomize every cell. Size and mapping are kept; the generation
    /// counter restarts at 0. On error the lattice is unchanged.
    pub fn reset(&mut self, live_percent: i64) -> Result<()> {
        automaton::fill_random(&mut self.lattice, live_percent, &mut self.rng)?;
        self.lattice.generation = 0;
        info!(live_percent, alive = self.lattice.alive_count(), "lattice reset");
        self.publish();
        Ok(())
    }

    /// Replace the whole state from bytes in index order (0 = dead).
    pub fn import(&mut self, in_buf: &[u8]) -> Result<()> {
        automaton::import_cells(&mut self.lattice, in_buf)?;
        self.publish();
        Ok(())
    }

    /// Write the whole state as bytes in index order. See [`automaton::export_cells`].
    pub fn export(&self, out_buf: &mut [u8]) -> usize {
        automaton::export_cells(&self.lattice, out_buf)
    }

    /// Report the current generation to the sink again.
    pub fn publish(&mut self) {
        for cell in self.lattice.cells() {
            self.sink.present(cell);
        }
        self.sink.committed(self.lattice.generation);
    }

    pub fn to_index(&self, x: i32, y: i32, z: i32) -> i64 {
        automaton::to_index(&self.lattice, x, y, z)
    }

    /// Coordinate of cell `index`, or `None` when `index >= N³`.
    pub fn to_coord(&self, index: usize) -> Option<Coord> {
        (index < self.lattice.len()).then(|| automaton::to_coord(&self.lattice, index))
    }

    pub fn is_alive_at(&self, x: i32, y: i32, z: i32) -> bool {
        automaton::is_alive_at(&self.lattice, x, y, z)
    }

    pub fn neighbor_count(&self, x: i32, y: i32, z: i32) -> u8 {
        automaton::count_neighbors(&self.lattice, self.rule, x, y, z)
    }

    /// Every cell in index-ascending order.
    pub fn cells(&self) -> impl Iterator<Item = CellState> + '_ {
        self.lattice.cells()
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn rule(&self) -> NeighborRule {
        self.rule
    }

    pub fn side(&self) -> i64 {
        self.lattice.side
    }

    pub fn generation(&self) -> u64 {
        self.lattice.generation
    }

    pub fn alive_count(&self) -> usize {
        self.lattice.alive_count()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
