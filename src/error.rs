use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Mine count must be smaller than the number of cells")]
    TooManyMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
