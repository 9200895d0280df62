use crate::cell::Cell;
use ndarray::Array2;

pub use planted::*;
pub use random::*;

mod planted;
mod random;

/// Mine placement strategy. The board hands the strategy its blank grid and
/// the number of mines to arm; the strategy mutates cells in place through
/// the idempotent `set_mine`.
///
/// Strategies are stateful so that a seeded generator yields a deterministic
/// sequence of layouts across board resets.
pub trait MineGenerator {
    fn place(&mut self, grid: &mut Array2<Cell>, mine_count: usize);
}
