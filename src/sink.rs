//! Presentation sinks: where committed cell state is reported.
//!
//! The simulator only ever writes to a sink. Hosts map each report to their
//! own representation, e.g. scaling a rendered cube to zero for a dead cell.

use crate::state::CellState;

pub trait PresentationSink {
    /// Called once per cell, in index-ascending order, after a generation is
    /// committed.
    fn present(&mut self, cell: CellState);

    /// Called after the last cell of a committed generation.
    fn committed(&mut self, _generation: u64) {}
}

/// Discards every report. For hosts that pull state instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    #[inline]
    fn present(&mut self, _cell: CellState) {}
}

impl<F: FnMut(CellState)> PresentationSink for F {
    fn present(&mut self, cell: CellState) {
        self(cell)
    }
}

/// Keeps the most recent full report. Handy for hosts that diff frames.
#[derive(Clone, Debug, Default)]
pub struct FrameSink {
    pending: Vec<CellState>,
    frame: Vec<CellState>,
    generation: Option<u64>,
}

impl FrameSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells of the last committed generation, in index order.
    pub fn frame(&self) -> &[CellState] {
        &self.frame
    }

    /// Generation number of [`frame`](Self::frame), if anything was committed.
    pub fn generation(&self) -> Option<u64> {
        self.generation
    }
}

impl PresentationSink for FrameSink {
    fn present(&mut self, cell: CellState) {
        self.pending.push(cell);
    }

    fn committed(&mut self, generation: u64) {
        self.frame = std::mem::take(&mut self.pending);
        self.generation = Some(generation);
    }
}
