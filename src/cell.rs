use serde::{Deserialize, Serialize};

/// Signal returned by a cell when a reveal actually changed its state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellEvent {
    /// A safe cell was revealed.
    Opened,
    /// A mined cell was revealed.
    Exploded,
}

/// A single grid position. Coordinates live in the board's grid index, not in
/// the cell; the cell only owns its own mutable state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mined: bool,
    revealed: bool,
    flagged: bool,
}

impl Cell {
    pub const fn is_mined(self) -> bool {
        self.mined
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Reveals the cell. A flag acts as a lock against accidental reveal, and
    /// a revealed cell stays revealed, so both cases report nothing.
    pub fn reveal(&mut self) -> Option<CellEvent> {
        if self.revealed || self.flagged {
            return None;
        }

        self.revealed = true;
        if self.mined {
            Some(CellEvent::Exploded)
        } else {
            Some(CellEvent::Opened)
        }
    }

    /// Flips the flag on an unrevealed cell. Revealed cells cannot be flagged.
    /// Returns whether anything changed.
    pub fn toggle_flag(&mut self) -> bool {
        if self.revealed {
            return false;
        }

        self.flagged = !self.flagged;
        true
    }

    /// Idempotently arms the cell. Placement only.
    pub(crate) fn set_mine(&mut self) {
        self.mined = true;
    }

    /// Forces the cell open without the flag lock. Used when a lost board
    /// shows its remaining mines.
    pub(crate) fn force_open(&mut self) {
        self.revealed = true;
    }

    /// Returns the cell to its blank state. Position and adjacency are
    /// untouched since they are not stored here.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Per-cell share of the win condition: a safe cell must be revealed,
    /// while a mined cell satisfies the objective whether or not it is
    /// flagged. The board wins when every cell passes this predicate, which
    /// amounts to every safe cell being revealed.
    pub const fn objective_reached(self) -> bool {
        self.mined || self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_safe_cell_opens_it() {
        let mut cell = Cell::default();
        assert_eq!(cell.reveal(), Some(CellEvent::Opened));
        assert!(cell.is_revealed());
    }

    #[test]
    fn reveal_mined_cell_explodes() {
        let mut cell = Cell::default();
        cell.set_mine();
        assert_eq!(cell.reveal(), Some(CellEvent::Exploded));
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut cell = Cell::default();
        assert!(cell.reveal().is_some());
        assert_eq!(cell.reveal(), None);
    }

    #[test]
    fn flag_locks_out_reveal() {
        let mut cell = Cell::default();
        assert!(cell.toggle_flag());
        assert_eq!(cell.reveal(), None);
        assert!(!cell.is_revealed());
    }

    #[test]
    fn revealed_cell_cannot_be_flagged() {
        let mut cell = Cell::default();
        cell.reveal();
        assert!(!cell.toggle_flag());
        assert!(!cell.is_flagged());
    }

    #[test]
    fn toggling_twice_restores_the_flag_state() {
        let mut cell = Cell::default();
        cell.toggle_flag();
        cell.toggle_flag();
        assert!(!cell.is_flagged());
    }

    #[test]
    fn set_mine_is_idempotent() {
        let mut cell = Cell::default();
        cell.set_mine();
        cell.set_mine();
        assert!(cell.is_mined());
    }

    #[test]
    fn reset_clears_all_state() {
        let mut cell = Cell::default();
        cell.set_mine();
        cell.reveal();
        cell.reset();
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn objective_covers_safe_revealed_and_any_mined_cell() {
        let mut safe = Cell::default();
        assert!(!safe.objective_reached());
        safe.reveal();
        assert!(safe.objective_reached());

        let mut mined = Cell::default();
        mined.set_mine();
        assert!(mined.objective_reached());
        mined.toggle_flag();
        assert!(mined.objective_reached());
    }
}
