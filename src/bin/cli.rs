use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use sodium::SodiumCtx;
use tracing::debug;

use tttmatch::{config::parse_cell, Board, MatchConfig, MatchController, MoveSignal};

fn main() -> Result<()> {
    tttmatch::logging::init();

    let config = MatchConfig::parse();
    let ctx = SodiumCtx::new();

    let (mut game, _listeners) = ctx.transaction(|| -> Result<_> {
        let mut listeners = Vec::new();
        let game = config.build(&ctx)?;

        listeners.push(
            game.boards()
                .listen(|board: &Board| println!("\n{}", board)),
        );
        listeners.push(game.signals().listen(|signals: &Vec<MoveSignal>| {
            for signal in signals {
                match signal {
                    MoveSignal::Win(symbol) => println!("{} has won the game! New game.", symbol),
                    MoveSignal::Draw => println!("It's a draw! New game."),
                    MoveSignal::Continue => {}
                }
            }
        }));

        Ok((game, listeners))
    })?;

    println!("Welcome to Tic Tac Toe!\n");
    println!("Enter a cell as `row col` (0-2) or a keypad digit 1-9. `q` quits.\n");
    println!("{}", game.board());
    prompt(&game)?;

    let stdin = std::io::stdin().lock();
    for line in stdin.lines() {
        let line = line?;
        let line = line.trim();
        if line == "q" {
            break;
        }

        let Some((row, col)) = parse_cell(line) else {
            debug!(input = line, "unparseable cell");
            println!("invalid input: {:?}!", line);
            prompt(&game)?;
            continue;
        };

        match game.apply_move(row, col)? {
            None => println!("cell ({}, {}) is already taken!", row, col),
            Some(signal) if signal.concludes_game() => print_history(&game),
            Some(_) => {}
        }
        prompt(&game)?;
    }

    print_history(&game);
    Ok(())
}

fn prompt(game: &MatchController) -> Result<()> {
    let player = game.current_player();
    print!("{}'s move ({}): ", player.name(), player.symbol());
    std::io::stdout().flush()?;
    Ok(())
}

fn print_history(game: &MatchController) {
    let tally = game.tally();
    let history: Vec<String> = game.history().iter().map(|o| o.to_string()).collect();
    println!(
        "{} ({}) {} - {} ({}) {}, draws {}   [{}]",
        game.player1().name(),
        game.player1().symbol(),
        tally.x_wins,
        game.player2().name(),
        game.player2().symbol(),
        tally.o_wins,
        tally.draws,
        history.join(", ")
    );
}
