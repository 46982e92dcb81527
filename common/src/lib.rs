//! Game engine for two-player Tic Tac Toe.
//!
//! [`GameState`] owns the board, whose turn it is and the running
//! [`Scoreboard`]. Outcomes are derived by [`evaluate`], a pure function over a
//! [`Board`]; presentation layers read a [`Snapshot`] and forward [`Action`]s.

pub mod tictactoe;

pub use tictactoe::*;
