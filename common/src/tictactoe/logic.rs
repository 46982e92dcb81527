use crate::tictactoe::board::{Board, Line, LINES};
use crate::tictactoe::mark::Mark;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Evaluation {
    outcome: Outcome,
    // Only set when the outcome is a win
    line: Option<Line>,
}

impl Evaluation {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn line(&self) -> Option<Line> {
        self.line
    }
}

/// Derives the outcome of a board without touching any game state.
///
/// Lines are checked in [`LINES`] order and the first complete one is
/// reported. A full board with no complete line is a draw.
pub fn evaluate(board: &Board) -> Evaluation {
    let winner = LINES.iter().find_map(|line| {
        let [a, b, c] = *line;
        match board[a].mark() {
            Some(mark) if board[b].mark() == Some(mark) && board[c].mark() == Some(mark) => {
                Some((mark, *line))
            }
            _ => None,
        }
    });
    match winner {
        Some((mark, line)) => Evaluation {
            outcome: Outcome::Won(mark),
            line: Some(line),
        },
        None if board.is_full() => Evaluation {
            outcome: Outcome::Draw,
            line: None,
        },
        None => Evaluation::default(),
    }
}
