use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform random placement by rejection sampling: pick a cell uniformly with
/// replacement and arm it, until the armed count reaches the target. A pick
/// that lands on an already armed cell wastes the attempt but is harmless.
///
/// The expected attempt count grows as the target approaches the cell total,
/// which is why board construction rejects `mine_count >= rows * cols` before
/// this loop ever runs.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn place(&mut self, grid: &mut Array2<Cell>, mine_count: usize) {
        let cells = grid.as_slice_mut().expect("layout should be standard");

        if mine_count >= cells.len() {
            // The board validates this away; arm everything instead of
            // looping forever if a degenerate request slips through.
            log::warn!(
                "degenerate placement request, armed all {} cells (requested {})",
                cells.len(),
                mine_count
            );
            for cell in cells {
                cell.set_mine();
            }
            return;
        }

        let mut armed = 0;
        while armed < mine_count {
            let pick = self.rng.random_range(0..cells.len());
            if !cells[pick].is_mined() {
                cells[pick].set_mine();
                armed += 1;
            }
        }
    }
}
