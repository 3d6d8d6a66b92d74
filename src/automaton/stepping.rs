//! Whole-lattice generation stepping.
//!
//! Every next state is computed from the current generation, which stays
//! untouched until the full next generation exists. The new vector then
//! replaces the old one in a single assignment.

use rayon::prelude::*;

use super::grid::{count_neighbors, to_coord, NeighborRule};
use crate::state::Lattice;

/// Life rule for one cell.
///
/// Alive next generation when `(alive && neighbors == 2) || neighbors == 3`;
/// the second clause applies to dead and alive cells alike. The explicit
/// birth branch below is already covered by it and never changes a result.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive && neighbors == 2 || neighbors == 3 {
        true
    } else {
        neighbors == 3 && !alive
    }
}

#[inline]
fn cell_next(lattice: &Lattice, rule: NeighborRule, index: usize) -> bool {
    let c = to_coord(lattice, index);
    let neighbors = count_neighbors(lattice, rule, c.x, c.y, c.z);
    next_state(lattice.cells[index], neighbors)
}

/// Compute the next generation without committing it.
///
/// With a pool the per-cell pass runs on its workers; the result is identical
/// to the serial pass.
pub fn next_generation(
    lattice: &Lattice,
    rule: NeighborRule,
    pool: Option<&rayon::ThreadPool>,
) -> Vec<bool> {
    match pool {
        Some(pool) => pool.install(|| {
            (0..lattice.cells.len())
                .into_par_iter()
                .map(|i| cell_next(lattice, rule, i))
                .collect()
        }),
        None => (0..lattice.cells.len())
            .map(|i| cell_next(lattice, rule, i))
            .collect(),
    }
}

/// Step the lattice forward by one generation.
pub fn step_lattice(lattice: &mut Lattice, rule: NeighborRule, pool: Option<&rayon::ThreadPool>) {
    let next_cells = next_generation(lattice, rule, pool);
    lattice.cells = next_cells;
    lattice.generation += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::grid::{is_alive_at, to_index};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_lattice(side: i64, seed: u64) -> Lattice {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let len = (side * side * side) as usize;
        let cells = (0..len).map(|_| rng.gen_bool(0.3)).collect();
        Lattice::from_cells(side, cells).unwrap()
    }

    #[test]
    fn test_next_state_table() {
        // Survival on 2 needs a live cell
        assert!(next_state(true, 2));
        assert!(!next_state(false, 2));

        // 3 always yields a live cell
        assert!(next_state(true, 3));
        assert!(next_state(false, 3));

        for n in [0, 1, 4, 5, 8, 19, 26] {
            assert!(!next_state(true, n), "alive with {n} should die");
            assert!(!next_state(false, n), "dead with {n} should stay dead");
        }
    }

    #[test]
    fn test_step_two_lattice_by_hand() {
        // Diagonal rule on N=2. The corner offsets of any cell shift its
        // linear index by one of ±1, ±3, ±5, ±7, each exactly once, and the
        // range check is on the linear index. So cell i counts every alive
        // cell whose index has the opposite parity to i.
        //
        // Generation 0: {0, 1, 2, 4}. Even alive: 3, odd alive: 1.
        //   even cells see 1 -> all die
        //   odd cells see 3  -> all alive
        // Generation 1: {1, 3, 5, 7}. Even alive: 0, odd alive: 4.
        //   even cells see 4, odd cells see 0 -> all dead
        let mut cells = vec![false; 8];
        for i in [0, 1, 2, 4] {
            cells[i] = true;
        }
        let mut lattice = Lattice::from_cells(2, cells).unwrap();

        step_lattice(&mut lattice, NeighborRule::Diagonal, None);
        assert_eq!(
            lattice.as_slice(),
            &[false, true, false, true, false, true, false, true]
        );
        assert_eq!(lattice.generation, 1);

        step_lattice(&mut lattice, NeighborRule::Diagonal, None);
        assert_eq!(lattice.as_slice(), &[false; 8]);
        assert_eq!(lattice.generation, 2);
    }

    #[test]
    fn test_step_two_lattice_still_life() {
        // Two alive of each parity: every cell sees exactly 2. Alive cells
        // survive, dead cells stay dead.
        let mut cells = vec![false; 8];
        for i in [0, 1, 6, 7] {
            cells[i] = true;
        }
        let mut lattice = Lattice::from_cells(2, cells.clone()).unwrap();

        step_lattice(&mut lattice, NeighborRule::Diagonal, None);
        assert_eq!(lattice.cells, cells);
    }

    #[test]
    fn test_step_two_lattice_axis_shared_by_hand() {
        // AxisShared on N=2. The 19 admitted offsets shift the linear index
        // by d = 4dz + 2dy + dx with multiplicities
        //   d:    -6 -5 -4 -3 -2 -1  0  1  2  3  4  5  6
        //   mult:  1  1  1  2  2  2  1  2  2  2  1  1  1
        // and cell i counts sum(mult(j - i)) over alive j.
        //
        // Alive {3, 6}:
        //   i=0: mult(3)+mult(6)   = 2+1 = 3 -> born
        //   i=1: mult(2)+mult(5)   = 2+1 = 3 -> born
        //   i=2: mult(1)+mult(4)   = 2+1 = 3 -> born
        //   i=3: mult(0)+mult(3)   = 1+2 = 3 -> survives
        //   i=4: mult(-1)+mult(2)  = 2+2 = 4 -> stays dead
        //   i=5: mult(-2)+mult(1)  = 2+2 = 4 -> stays dead
        //   i=6: mult(-3)+mult(0)  = 2+1 = 3 -> survives
        //   i=7: mult(-4)+mult(-1) = 1+2 = 3 -> born
        let mut cells = vec![false; 8];
        cells[3] = true;
        cells[6] = true;
        let mut lattice = Lattice::from_cells(2, cells).unwrap();

        step_lattice(&mut lattice, NeighborRule::AxisShared, None);
        assert_eq!(
            lattice.as_slice(),
            &[true, true, true, true, false, false, true, true]
        );
    }

    #[test]
    fn test_single_cell_always_dies() {
        for rule in [NeighborRule::Diagonal, NeighborRule::AxisShared, NeighborRule::Moore] {
            let mut lattice = Lattice::from_cells(1, vec![true]).unwrap();
            step_lattice(&mut lattice, rule, None);
            assert_eq!(lattice.as_slice(), &[false]);
            step_lattice(&mut lattice, rule, None);
            assert_eq!(lattice.as_slice(), &[false]);
        }
    }

    #[test]
    fn test_moore_blinker_flips() {
        // Three in a row along x in the z=2 plane of a 5-lattice. With the
        // 26-cell rule each end cell sees only the middle (1 neighbor) and
        // dies; the middle sees 2 and survives; the cells beside the middle
        // in y and z see all 3 and are born.
        let mut lattice = Lattice::new(5).unwrap();
        for x in 1..=3 {
            let i = to_index(&lattice, x, 2, 2) as usize;
            lattice.cells[i] = true;
        }

        step_lattice(&mut lattice, NeighborRule::Moore, None);

        assert!(is_alive_at(&lattice, 2, 2, 2));
        assert!(!is_alive_at(&lattice, 1, 2, 2));
        assert!(!is_alive_at(&lattice, 3, 2, 2));
        assert!(is_alive_at(&lattice, 2, 1, 2));
        assert!(is_alive_at(&lattice, 2, 3, 2));
        assert!(is_alive_at(&lattice, 2, 2, 1));
        assert!(is_alive_at(&lattice, 2, 2, 3));
    }

    #[test]
    fn test_step_is_deterministic() {
        let lattice = random_lattice(6, 42);

        let mut a = lattice.clone();
        let mut b = lattice.clone();
        step_lattice(&mut a, NeighborRule::Diagonal, None);
        step_lattice(&mut b, NeighborRule::Diagonal, None);

        assert_eq!(a.cells, b.cells);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap();

        for rule in [NeighborRule::Diagonal, NeighborRule::AxisShared, NeighborRule::Moore] {
            let lattice = random_lattice(12, 7);
            let serial = next_generation(&lattice, rule, None);
            let parallel = next_generation(&lattice, rule, Some(&pool));
            assert_eq!(serial, parallel, "{rule:?}");
        }
    }

    #[test]
    fn test_next_generation_leaves_lattice_untouched() {
        let lattice = random_lattice(4, 3);
        let before = lattice.clone();

        let _ = next_generation(&lattice, NeighborRule::Diagonal, None);
        assert_eq!(lattice, before);
    }
}
