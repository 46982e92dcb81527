use crate::tictactoe::logic::Outcome;
use crate::tictactoe::mark::Mark;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Scoreboard {
    x: u32,
    o: u32,
    draws: u32,
}

impl Scoreboard {
    pub fn new(x: u32, o: u32, draws: u32) -> Self {
        Scoreboard { x, o, draws }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn games_played(&self) -> u32 {
        self.x + self.o + self.draws
    }

    // Bumps the counter matching a terminal outcome. In-progress outcomes are
    // ignored.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::X) => self.x += 1,
            Outcome::Won(Mark::O) => self.o += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Scoreboard::default();
    }
}
