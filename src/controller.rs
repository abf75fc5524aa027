//! Turn handling for a running match.
//!
//! [`MatchController`] owns the board and both players. Each accepted move is
//! evaluated; a finished game is appended to the history and the board is
//! replaced with a fresh one, otherwise the turn passes to the other player.
//! Renderers learn about moves through the `signals` and `boards` streams.
//! Both fire at most once per sodium transaction: `signals` carries every
//! accepted move of the transaction in order, `boards` the last snapshot.

use sodium::{SodiumCtx, Stream, StreamSink};
use tracing::{debug, info};

use crate::{
    board::{Board, Symbol},
    outcome::{self, Outcome},
    player::Player,
    Error,
};

/// What a renderer should do after an accepted move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveSignal {
    /// Same game, redraw the board and prompt the other player.
    Continue,
    Win(Symbol),
    Draw,
}

impl MoveSignal {
    pub fn concludes_game(&self) -> bool {
        !matches!(self, MoveSignal::Continue)
    }
}

impl From<Outcome> for MoveSignal {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win(symbol) => MoveSignal::Win(symbol),
            Outcome::Draw => MoveSignal::Draw,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn swap(&self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Results over the match so far.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

pub struct MatchController {
    board: Board,
    players: [Player; 2],
    current: Seat,
    history: Vec<Outcome>,
    signals: StreamSink<Vec<MoveSignal>>,
    boards: StreamSink<Board>,
}

impl MatchController {
    /// The two players must hold different symbols. `player1` moves first in
    /// every game.
    pub fn new(ctx: &SodiumCtx, player1: Player, player2: Player) -> Result<Self, Error> {
        if player1.symbol() == player2.symbol() {
            return Err(Error::InvalidSymbol(player2.symbol().to_string()));
        }

        info!(
            player1 = player1.name(),
            player2 = player2.name(),
            "starting match"
        );
        Ok(MatchController {
            board: Board::new(),
            players: [player1, player2],
            current: Seat::First,
            history: Vec::new(),
            signals: ctx.new_stream_sink_with_coalescer(
                |earlier: &Vec<MoveSignal>, later: &Vec<MoveSignal>| {
                    earlier.iter().chain(later).copied().collect()
                },
            ),
            boards: ctx.new_stream_sink_with_coalescer(|_: &Board, later: &Board| *later),
        })
    }

    /// Player 1 plays `X`, player 2 plays `O`.
    pub fn with_names(ctx: &SodiumCtx, player1: &str, player2: &str) -> Result<Self, Error> {
        let player1 = Player::new(player1, Symbol::X)?;
        let player2 = Player::new(player2, Symbol::O)?;
        MatchController::new(ctx, player1, player2)
    }

    /// Plays the current player's symbol at `(row, col)`.
    ///
    /// Returns `Ok(None)` without touching any state when the cell is already
    /// owned. Out-of-range coordinates fail with [`Error::OutOfRange`].
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Option<MoveSignal>, Error> {
        if self.board.cell(row, col)?.has_owner() {
            debug!(row, col, "cell already owned, move ignored");
            return Ok(None);
        }

        let symbol = self.current_player().symbol();
        self.board.set_cell_owner(row, col, symbol)?;
        debug!(row, col, %symbol, "move applied");

        let signal = match outcome::evaluate(&self.board).outcome() {
            Some(outcome) => {
                self.conclude(outcome);
                MoveSignal::from(outcome)
            }
            None => {
                self.switch_current_player();
                MoveSignal::Continue
            }
        };

        self.boards.send(self.board);
        self.signals.send(vec![signal]);
        Ok(Some(signal))
    }

    fn conclude(&mut self, outcome: Outcome) {
        self.history.push(outcome);
        info!(?outcome, games = self.history.len(), "game concluded");

        self.current = Seat::First;
        self.board.reset();
        debug!("board reset");
    }

    pub fn switch_current_player(&mut self) {
        self.current = self.current.swap();
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        match self.current {
            Seat::First => &self.players[0],
            Seat::Second => &self.players[1],
        }
    }

    pub fn player1(&self) -> &Player {
        &self.players[0]
    }

    pub fn player2(&self) -> &Player {
        &self.players[1]
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    pub fn tally(&self) -> Tally {
        self.history
            .iter()
            .fold(Tally::default(), |mut tally, outcome| {
                match outcome {
                    Outcome::Win(Symbol::X) => tally.x_wins += 1,
                    Outcome::Win(Symbol::O) => tally.o_wins += 1,
                    Outcome::Draw => tally.draws += 1,
                }
                tally
            })
    }

    /// Signals of the accepted moves, in order. Moves applied one per
    /// transaction arrive as one-element batches.
    pub fn signals(&self) -> Stream<Vec<MoveSignal>> {
        self.signals.stream()
    }

    /// The board to display next; after a concluding move this is the fresh,
    /// empty board.
    pub fn boards(&self) -> Stream<Board> {
        self.boards.stream()
    }
}
