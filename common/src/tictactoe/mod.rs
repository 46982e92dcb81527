mod board;
mod game_state;
mod input;
mod logic;
mod mark;
mod scoreboard;
mod snapshot;

pub use board::{Board, Cell, CellIndex, Line, BOARD_WIDTH, CELL_COUNT, LINES};
pub use game_state::GameState;
pub use input::{Action, MoveError};
pub use logic::{evaluate, Evaluation, Outcome};
pub use mark::Mark;
pub use scoreboard::Scoreboard;
pub use snapshot::Snapshot;
