//! Rule engine for a grid-based mine-clearing puzzle.
//!
//! The crate owns the board model and its three algorithms: mine placement,
//! zero-region reveal propagation, and win/loss detection. Rendering, input
//! handling, and the process entry point are external collaborators that call
//! into [`Board`] and subscribe to its outcome notifications with
//! [`Board::register_listener`].
//!
//! ```
//! use minefield_core::Board;
//!
//! let mut board = Board::new(9, 9, 10)?;
//! board.register_listener(|won| println!("game over, won: {won}"));
//! board.reveal(4, 4);
//! board.toggle_flag(0, 0);
//! # Ok::<(), minefield_core::GameError>(())
//! ```

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Board dimensions plus mine count, validated before any placement runs so
/// the rejection-sampling generator can never loop forever.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub mine_count: usize,
}

impl BoardConfig {
    pub const fn new(rows: usize, cols: usize, mine_count: usize) -> Self {
        Self {
            rows,
            cols,
            mine_count,
        }
    }

    pub const fn total_cells(&self) -> usize {
        self.rows * self.cols
    }

    pub fn validate(self) -> Result<Self> {
        if self.rows == 0 || self.cols == 0 {
            Err(GameError::EmptyBoard)
        } else if self.mine_count >= self.total_cells() {
            Err(GameError::TooManyMines)
        } else {
            Ok(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_counts_cells() {
        assert_eq!(BoardConfig::new(3, 5, 4).total_cells(), 15);
    }

    #[test]
    fn config_validation_bounds_the_mine_count() {
        assert!(BoardConfig::new(3, 3, 8).validate().is_ok());
        assert_eq!(
            BoardConfig::new(3, 3, 9).validate(),
            Err(GameError::TooManyMines)
        );
        assert_eq!(
            BoardConfig::new(0, 3, 0).validate(),
            Err(GameError::EmptyBoard)
        );
    }
}
