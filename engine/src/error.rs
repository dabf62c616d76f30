use thiserror::Error;

/// Errors raised by the board, the search and the game state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have {expected} cells, got {found}")]
    InvalidBoardSize { expected: usize, found: usize },

    #[error("Invalid cell value: {0:?}")]
    InvalidCellValue(String),

    #[error("No legal move available")]
    NoLegalMove,

    #[error("Game is already over")]
    GameOver,

    #[error("Not your turn")]
    NotYourTurn,

    #[error("Cell {0} is already marked")]
    CellOccupied(usize),

    #[error("Position {0} is out of bounds")]
    OutOfBounds(usize),
}
