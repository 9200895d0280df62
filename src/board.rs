use core::fmt;
use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CellEvent};
use crate::error::Result;
use crate::generator::{MineGenerator, RandomMineGenerator};
use crate::types::{Coord, Coord2, NeighborIter};
use crate::BoardConfig;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Exploded,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Callback invoked with the terminal result: `true` for a win, `false` for
/// a loss.
pub type OutcomeListener = Box<dyn FnMut(bool)>;

/// Per-cell view handed to renderers. `mined` is populated only once the cell
/// is revealed or the game is over; until then the placement stays hidden.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub row: Coord,
    pub col: Coord,
    pub revealed: bool,
    pub flagged: bool,
    pub mined: Option<bool>,
    pub adjacent_mines: u8,
}

/// The full puzzle: a row-major grid of cells, the mine placement strategy,
/// and the listeners to notify when the game ends.
///
/// All mutation goes through `&mut self`, so a reveal cascade is atomic with
/// respect to any other operation. Out-of-range coordinates are silent
/// no-ops: the API stays forgiving toward pointer-driven frontends. Once a
/// terminal state is reached the board ignores further input, which also
/// guarantees listeners fire at most once per terminal transition.
pub struct Board {
    mine_count: usize,
    grid: Array2<Cell>,
    state: GameState,
    generator: Box<dyn MineGenerator>,
    listeners: Vec<OutcomeListener>,
}

impl Board {
    /// Builds a board with uniform random mine placement seeded from entropy.
    pub fn new(rows: usize, cols: usize, mine_count: usize) -> Result<Self> {
        Self::with_generator(
            BoardConfig::new(rows, cols, mine_count),
            RandomMineGenerator::from_entropy(),
        )
    }

    /// Builds a board with an injected placement strategy. This is the
    /// deterministic entry point: a seeded or planted generator makes every
    /// layout reproducible.
    pub fn with_generator(
        config: BoardConfig,
        generator: impl MineGenerator + 'static,
    ) -> Result<Self> {
        let config = config.validate()?;
        let mut grid = Array2::default((config.rows, config.cols));
        let mut generator = Box::new(generator);
        generator.place(&mut grid, config.mine_count);

        Ok(Self {
            mine_count: config.mine_count,
            grid,
            state: GameState::Active,
            generator,
            listeners: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.nrows()
    }

    pub fn cols(&self) -> usize {
        self.grid.ncols()
    }

    pub const fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub const fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Number of mined neighbors of the given position, derived on demand
    /// from the positional adjacency.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.neighbors(coords)
            .filter(|&pos| self.grid[pos].is_mined())
            .count() as u8
    }

    /// True iff every safe cell is revealed. Mined cells satisfy their share
    /// of the objective whether flagged or not.
    pub fn objective_reached(&self) -> bool {
        self.grid.iter().all(|cell| cell.objective_reached())
    }

    /// Registers an outcome listener. Fan-out happens in registration order,
    /// at most once per terminal transition.
    pub fn register_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Row-major iteration over the whole grid for rendering.
    pub fn cells(&self) -> impl Iterator<Item = CellSnapshot> + '_ {
        let terminal = self.state.is_finished();
        self.grid.indexed_iter().map(move |((row, col), cell)| {
            let visible = cell.is_revealed() || terminal;
            CellSnapshot {
                row,
                col,
                revealed: cell.is_revealed(),
                flagged: cell.is_flagged(),
                mined: visible.then(|| cell.is_mined()),
                adjacent_mines: self.adjacent_mine_count((row, col)),
            }
        })
    }

    /// Reveals the cell at `(row, col)`, cascading through its zero-adjacency
    /// region and settling the game when the move was terminal.
    pub fn reveal(&mut self, row: usize, col: usize) -> RevealOutcome {
        if self.state.is_finished() || !self.in_bounds((row, col)) {
            return RevealOutcome::NoChange;
        }

        match self.grid[(row, col)].reveal() {
            Some(event) => self.on_cell_event((row, col), event),
            None => RevealOutcome::NoChange,
        }
    }

    /// Flips the flag at `(row, col)`. Revealed cells, out-of-range positions,
    /// and finished boards are all no-ops.
    pub fn toggle_flag(&mut self, row: usize, col: usize) -> FlagOutcome {
        if self.state.is_finished() || !self.in_bounds((row, col)) {
            return FlagOutcome::NoChange;
        }

        if self.grid[(row, col)].toggle_flag() {
            FlagOutcome::Changed
        } else {
            FlagOutcome::NoChange
        }
    }

    /// Returns every cell to its blank state and re-samples exactly
    /// `mine_count` mines. Dimensions, adjacency, and registered listeners
    /// all survive the reset.
    pub fn reset(&mut self) {
        for cell in self.grid.iter_mut() {
            cell.reset();
        }
        self.generator.place(&mut self.grid, self.mine_count);
        self.state = GameState::Active;
    }

    /// Aggregates a cell-level event into the board-level outcome: an
    /// explosion loses the game, a safe open cascades if needed and wins the
    /// game once the objective holds.
    fn on_cell_event(&mut self, coords: Coord2, event: CellEvent) -> RevealOutcome {
        match event {
            CellEvent::Exploded => {
                self.show_mines();
                self.finish(false);
                RevealOutcome::Exploded
            }
            CellEvent::Opened => {
                if self.adjacent_mine_count(coords) == 0 {
                    self.cascade(coords);
                }

                if self.objective_reached() {
                    self.finish(true);
                    RevealOutcome::Won
                } else {
                    RevealOutcome::Revealed
                }
            }
        }
    }

    /// Flood-fills the zero-adjacency region around `origin` with an explicit
    /// worklist, stopping at the first ring of numbered cells. The origin is
    /// already revealed with zero adjacent mines, so no cell touched here can
    /// be mined.
    fn cascade(&mut self, origin: Coord2) {
        let mut to_visit: VecDeque<Coord2> = self.neighbors(origin).collect();

        while let Some(coords) = to_visit.pop_front() {
            // reveal() refuses revealed and flagged cells, so a position
            // queued more than once is processed at most once.
            if self.grid[coords].reveal().is_none() {
                continue;
            }

            if self.adjacent_mine_count(coords) == 0 {
                let pending = self
                    .neighbors(coords)
                    .filter(|&pos| !self.grid[pos].is_revealed() && !self.grid[pos].is_flagged());
                to_visit.extend(pending);
            }
        }
    }

    /// Opens every mined cell the player had not flagged, so a lost board
    /// shows where the mines were without disturbing correct flags.
    fn show_mines(&mut self) {
        for cell in self.grid.iter_mut() {
            if cell.is_mined() && !cell.is_flagged() {
                cell.force_open();
            }
        }
    }

    fn finish(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::debug!("game over, won={won}");

        for listener in &mut self.listeners {
            listener(won);
        }
    }

    fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.grid.dim())
    }

    fn in_bounds(&self, (row, col): Coord2) -> bool {
        row < self.grid.nrows() && col < self.grid.ncols()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.rows())
            .field("cols", &self.cols())
            .field("mine_count", &self.mine_count)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
