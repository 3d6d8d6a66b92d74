//! Random initial state.

use rand::Rng;

use crate::config::validate_live_percent;
use crate::error::Result;
use crate::state::Lattice;

/// Set every cell alive independently with probability `live_percent / 100`.
///
/// Each cell draws a uniform integer in `0..100` and lives when the draw is
/// below `live_percent`, so 0 and 100 are exact.
pub fn fill_random<R: Rng + ?Sized>(
    lattice: &mut Lattice,
    live_percent: i64,
    rng: &mut R,
) -> Result<()> {
    validate_live_percent(live_percent)?;
    for cell in lattice.cells.iter_mut() {
        *cell = rng.gen_range(0..100) < live_percent;
    }
    Ok(())
}
