use crate::tictactoe::board::{Board, Cell, CellIndex, Line, CELL_COUNT};
use crate::tictactoe::logic::Outcome;
use crate::tictactoe::mark::Mark;
use crate::tictactoe::scoreboard::Scoreboard;
use serde::{Deserialize, Serialize};

/// A read-only copy of everything a display needs, taken after each change.
///
/// Presentation code renders from this alone; it never has to reach back
/// into the engine or recompute the outcome.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Snapshot {
    board: Board,
    turn: Mark,
    outcome: Outcome,
    winning_line: Option<Line>,
    scoreboard: Scoreboard,
}

impl Snapshot {
    pub fn new(
        board: Board,
        turn: Mark,
        outcome: Outcome,
        winning_line: Option<Line>,
        scoreboard: Scoreboard,
    ) -> Self {
        Snapshot {
            board,
            turn,
            outcome,
            winning_line,
            scoreboard,
        }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        self.board.cells()
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn status_text(&self) -> String {
        match self.outcome {
            Outcome::Won(mark) => format!("Winner: {}", mark),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::InProgress => format!("Current Player: {}", self.turn),
        }
    }

    // The scoreboard stops highlighting a player once someone has won. A draw
    // still highlights whoever made the last move.
    pub fn active_player(&self) -> Option<Mark> {
        match self.outcome {
            Outcome::Won(_) => None,
            _ => Some(self.turn),
        }
    }

    pub fn is_playable(&self, index: CellIndex) -> bool {
        !self.outcome.is_terminal() && self.board[index].is_empty()
    }

    pub fn is_winning_cell(&self, index: CellIndex) -> bool {
        self.winning_line
            .map_or(false, |line| line.contains(&index))
    }
}
