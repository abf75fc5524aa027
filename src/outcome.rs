//! Win and draw detection over a 3x3 board.

use std::fmt;

use tracing::trace;

use crate::{
    board::{Board, Symbol, SIZE},
    Error,
};

/// Every line that wins the game, as row-major indices, in evaluation order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Horizontal
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Vertical
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonal
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Win(Symbol),
    Draw,
    /// The game continues.
    Ongoing,
}

impl Verdict {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match *self {
            Verdict::Win(symbol) => Some(Outcome::Win(symbol)),
            Verdict::Draw => Some(Outcome::Draw),
            Verdict::Ongoing => None,
        }
    }
}

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Symbol),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(symbol) => write!(f, "{symbol}"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

pub fn evaluate(board: &Board) -> Verdict {
    evaluate_squares(&board.owners())
}

/// Evaluates a row-major list of owners. Fails with [`Error::InvalidBoard`]
/// unless exactly nine owners are given.
pub fn evaluate_owners(owners: &[Option<Symbol>]) -> Result<Verdict, Error> {
    let squares: &[Option<Symbol>; SIZE * SIZE] = owners
        .try_into()
        .map_err(|_| Error::InvalidBoard(owners.len()))?;
    Ok(evaluate_squares(squares))
}

fn evaluate_squares(squares: &[Option<Symbol>; SIZE * SIZE]) -> Verdict {
    // First winning line wins; two simultaneous lines only happen off the legal path.
    for seq in WIN_LINES {
        let first = squares[seq[0]];
        if let Some(symbol) = first {
            if seq.iter().all(|i| squares[*i] == first) {
                trace!(?seq, %symbol, "winning line");
                return Verdict::Win(symbol);
            }
        }
    }

    if squares.iter().all(Option::is_some) {
        Verdict::Draw
    } else {
        Verdict::Ongoing
    }
}
