use crate::tictactoe::board::{Board, CellIndex, Line};
use crate::tictactoe::input::{Action, MoveError};
use crate::tictactoe::logic::{evaluate, Evaluation, Outcome};
use crate::tictactoe::mark::Mark;
use crate::tictactoe::scoreboard::Scoreboard;
use crate::tictactoe::snapshot::Snapshot;
use tracing::{debug, info};

/// The whole game: the current round plus the running scoreboard.
///
/// Every mutation goes through [`GameState::apply_move`],
/// [`GameState::reset_board`] or [`GameState::new_game`], so the cached
/// evaluation always matches the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Mark,
    evaluation: Evaluation,
    scoreboard: Scoreboard,
}

impl GameState {
    pub fn new() -> Self {
        GameState::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.evaluation.outcome()
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.evaluation.line()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.board,
            self.turn,
            self.evaluation.outcome(),
            self.evaluation.line(),
            self.scoreboard,
        )
    }

    pub fn handle(&mut self, action: Action) -> Result<(), MoveError> {
        match action {
            Action::Place { index } => self.apply_move(index).map(|_| ()),
            Action::ResetBoard => {
                self.reset_board();
                Ok(())
            }
            Action::NewGame => {
                self.new_game();
                Ok(())
            }
        }
    }

    // All checks happen before the board is touched, so a rejected move
    // leaves every field as it was.
    pub fn apply_move(&mut self, index: usize) -> Result<Evaluation, MoveError> {
        let index = CellIndex::new(index)?;
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let mark = self.turn;
        self.board.place(index, mark)?;
        debug!("{} placed at {}", mark, index);

        self.evaluation = evaluate(&self.board);
        match self.evaluation.outcome() {
            Outcome::InProgress => self.turn = mark.other(),
            outcome => {
                self.scoreboard.record(outcome);
                info!(
                    "Round over: {:?}, scoreboard {:?}\n{}",
                    outcome, self.scoreboard, self.board
                );
            }
        }
        Ok(self.evaluation)
    }

    pub fn reset_board(&mut self) {
        self.board = Board::default();
        self.turn = Mark::X;
        self.evaluation = Evaluation::default();
        info!("Board reset, scoreboard kept at {:?}", self.scoreboard);
    }

    pub fn new_game(&mut self) {
        self.reset_board();
        self.scoreboard.clear();
        info!("New game started");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::Cell;

    fn play(game: &mut GameState, moves: &[usize]) {
        for &index in moves {
            game.apply_move(index).unwrap();
        }
    }

    fn line(indices: [usize; 3]) -> Option<Line> {
        Some(indices.map(|i| CellIndex::new(i).unwrap()))
    }

    #[test]
    fn test_new() {
        let game = GameState::new();
        assert_eq!(game.board(), &Board::default());
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.scoreboard(), &Scoreboard::default());
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = GameState::new();
        game.apply_move(0).unwrap();
        assert_eq!(game.turn(), Mark::O);
        game.apply_move(1).unwrap();
        assert_eq!(game.turn(), Mark::X);
        let board = game.board();
        assert_eq!(board.cells()[0], Cell::Marked { mark: Mark::X });
        assert_eq!(board.cells()[1], Cell::Marked { mark: Mark::O });
    }

    #[test]
    fn test_x_wins_top_row() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4]);
        assert_eq!(game.scoreboard().wins(Mark::X), 0);
        let evaluation = game.apply_move(2).unwrap();
        assert_eq!(evaluation.outcome(), Outcome::Won(Mark::X));
        assert_eq!(game.outcome(), Outcome::Won(Mark::X));
        assert_eq!(game.winning_line(), line([0, 1, 2]));
        assert_eq!(game.scoreboard(), &Scoreboard::new(1, 0, 0));
        // The winner stays on turn once the round is over
        assert_eq!(game.turn(), Mark::X);
    }

    #[test]
    fn test_o_wins_left_column() {
        let mut game = GameState::new();
        play(&mut game, &[1, 0, 2, 3, 4, 6]);
        assert_eq!(game.outcome(), Outcome::Won(Mark::O));
        assert_eq!(game.winning_line(), line([0, 3, 6]));
        assert_eq!(game.scoreboard(), &Scoreboard::new(0, 1, 0));
        assert_eq!(game.turn(), Mark::O);
    }

    #[test]
    fn test_draw() {
        let mut game = GameState::new();
        play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.scoreboard(), &Scoreboard::new(0, 0, 1));
        assert!(game.board().is_full());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = GameState::new();
        assert_eq!(game.apply_move(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_occupied_rejected() {
        let mut game = GameState::new();
        game.apply_move(0).unwrap();
        let before = game.clone();
        let result = game.apply_move(0);
        assert_eq!(
            result,
            Err(MoveError::Occupied(CellIndex::new(0).unwrap()))
        );
        assert_eq!(game, before);
        assert_eq!(game.turn(), Mark::O);
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        let before = game.clone();
        assert_eq!(game.apply_move(5), Err(MoveError::GameOver));
        assert_eq!(game.apply_move(8), Err(MoveError::GameOver));
        assert_eq!(game, before);
        assert_eq!(game.scoreboard().wins(Mark::X), 1);
    }

    #[test]
    fn test_moves_after_draw_rejected() {
        let mut game = GameState::new();
        play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        let before = game.clone();
        assert_eq!(game.apply_move(0), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_reset_board_keeps_scoreboard() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        game.reset_board();
        assert_eq!(game.board(), &Board::default());
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.scoreboard(), &Scoreboard::new(1, 0, 0));

        play(&mut game, &[1, 0, 2, 3, 4, 6]);
        assert_eq!(game.scoreboard(), &Scoreboard::new(1, 1, 0));
    }

    #[test]
    fn test_reset_mid_round() {
        let mut game = GameState::new();
        play(&mut game, &[4, 0]);
        game.reset_board();
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_new_game_clears_scoreboard() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        game.reset_board();
        play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.scoreboard(), &Scoreboard::new(1, 0, 1));
        game.new_game();
        assert_eq!(game, GameState::new());
        assert_eq!(game.scoreboard().games_played(), 0);
    }

    #[test]
    fn test_handle() {
        let mut game = GameState::new();
        assert!(game.handle(Action::Place { index: 4 }).is_ok());
        assert_eq!(game.board().cells()[4], Cell::Marked { mark: Mark::X });
        assert_eq!(
            game.handle(Action::Place { index: 4 }),
            Err(MoveError::Occupied(CellIndex::new(4).unwrap()))
        );
        assert_eq!(
            game.handle(Action::Place { index: 42 }),
            Err(MoveError::OutOfRange(42))
        );
        for index in [3, 0, 5, 8] {
            game.handle(Action::Place { index }).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Won(Mark::X));
        assert!(game.handle(Action::ResetBoard).is_ok());
        assert_eq!(game.scoreboard(), &Scoreboard::new(1, 0, 0));
        assert!(game.handle(Action::NewGame).is_ok());
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.cells(), game.board().cells());
        assert_eq!(snapshot.turn(), game.turn());
        assert_eq!(snapshot.outcome(), game.outcome());
        assert_eq!(snapshot.winning_line(), game.winning_line());
        assert_eq!(snapshot.scoreboard(), game.scoreboard());
    }
}
