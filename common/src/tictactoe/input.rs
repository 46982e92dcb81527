use crate::tictactoe::board::CellIndex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// None of these are fatal. A rejected move leaves the game exactly as it was,
// so callers are free to log the error and carry on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Cell index {0} is outside the board (expected 0 to 8)")]
    OutOfRange(usize),
    #[error("Cell {0} is already occupied")]
    Occupied(CellIndex),
    #[error("The round is over; reset the board to keep playing")]
    GameOver,
}

// The intents a presentation layer can forward to the engine
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Action {
    Place { index: usize },
    ResetBoard,
    NewGame,
}
