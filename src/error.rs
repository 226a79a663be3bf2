//! Error types for the solver crate

use thiserror::Error;

/// Main error type for the solver crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    #[error("illegal move: cell ({row}, {col}) is outside the 3x3 grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("position '{board}' is terminal; there is no move left to search for")]
    TerminalPosition { board: String },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string must hold {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
