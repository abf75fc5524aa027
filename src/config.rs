//! Command-line configuration shared by the host binaries.

use clap::Parser;
use sodium::SodiumCtx;

use crate::{Error, MatchController, SIZE};

/// Two players, one board, as many games as you like.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, long_about = None)]
pub struct MatchConfig {
    /// Name of the first player, who plays X and always opens
    #[arg(long, default_value = "Player1")]
    pub player1: String,

    /// Name of the second player, who plays O
    #[arg(long, default_value = "Player2")]
    pub player2: String,
}

impl MatchConfig {
    pub fn build(&self, ctx: &SodiumCtx) -> Result<MatchController, Error> {
        MatchController::with_names(ctx, &self.player1, &self.player2)
    }
}

/// Reads a cell typed by a player: `row col` (also `row,col`) counted from
/// zero, or a single keypad digit `1..=9` counted row-major.
pub fn parse_cell(input: &str) -> Option<(usize, usize)> {
    let parts: Vec<usize> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .map(str::parse::<usize>)
        .collect::<Result<_, _>>()
        .ok()?;

    let (row, col) = match parts[..] {
        [digit] if (1..=SIZE * SIZE).contains(&digit) => ((digit - 1) / SIZE, (digit - 1) % SIZE),
        [row, col] => (row, col),
        _ => return None,
    };
    (row < SIZE && col < SIZE).then_some((row, col))
}
