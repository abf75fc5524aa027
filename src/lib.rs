use thiserror::Error;

mod board;
pub mod config;
mod controller;
pub mod logging;
pub mod outcome;
mod player;

pub use board::{Board, Cell, Symbol, SIZE};
pub use config::MatchConfig;
pub use controller::{MatchController, MoveSignal, Seat, Tally};
pub use outcome::{evaluate, evaluate_owners, Outcome, Verdict};
pub use player::{validate_name, Player};

/// Violated preconditions. None of these are expected during normal play; a
/// move on an occupied cell is not an error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid owner: {0:?} (expected \"\", \"X\" or \"O\" on an unowned cell)")]
    InvalidOwner(String),

    #[error("invalid symbol: {0:?} (expected \"X\" or \"O\")")]
    InvalidSymbol(String),

    #[error("invalid player name: {0:?}")]
    InvalidName(String),

    #[error("cell ({row}, {col}) is off the board!")]
    OutOfRange { row: usize, col: usize },

    #[error("invalid board: expected 9 cells, got {0}")]
    InvalidBoard(usize),
}
