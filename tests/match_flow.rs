//! Whole-match scenarios driven through the public API, as a host would.

use std::sync::{Arc, Mutex};

use sodium::SodiumCtx;
use tttmatch::{evaluate, Board, Error, MatchController, MoveSignal, Outcome, Symbol, Verdict};

fn new_match(ctx: &SodiumCtx) -> MatchController {
    MatchController::with_names(ctx, "Player1", "Player2").unwrap()
}

#[test]
fn top_row_win_then_fresh_board() {
    let ctx = SodiumCtx::new();
    let mut game = new_match(&ctx);

    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
        assert_eq!(game.apply_move(row, col), Ok(Some(MoveSignal::Continue)));
    }

    // Evaluate the board X would leave behind before the controller resets it.
    let mut preview = *game.board();
    preview.set_cell_owner(0, 2, Symbol::X).unwrap();
    assert_eq!(evaluate(&preview), Verdict::Win(Symbol::X));

    assert_eq!(
        game.apply_move(0, 2),
        Ok(Some(MoveSignal::Win(Symbol::X)))
    );
    assert_eq!(game.history(), &[Outcome::Win(Symbol::X)]);
    assert!(game.board().is_empty());
    assert_eq!(game.current_player().name(), "Player1");
}

#[test]
fn signals_reach_listeners_in_order() {
    let ctx = SodiumCtx::new();
    let mut game = new_match(&ctx);

    let seen = Arc::new(Mutex::new(Vec::<MoveSignal>::new()));
    let _listener = game.signals().listen({
        let seen = seen.clone();
        move |signals: &Vec<MoveSignal>| seen.lock().unwrap().extend(signals)
    });

    game.apply_move(1, 1).unwrap();
    game.apply_move(1, 1).unwrap();
    for (row, col) in [(0, 0), (2, 2), (0, 2), (2, 0), (0, 1)] {
        game.apply_move(row, col).unwrap();
    }

    // The repeated (1, 1) emits nothing; O's (0, 1) completes the top row.
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            MoveSignal::Continue,
            MoveSignal::Continue,
            MoveSignal::Continue,
            MoveSignal::Continue,
            MoveSignal::Continue,
            MoveSignal::Win(Symbol::O),
        ]
    );
}

#[test]
fn moves_batched_in_one_transaction_all_reach_listeners() {
    let ctx = SodiumCtx::new();
    let mut game = new_match(&ctx);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let _listener = game.signals().listen({
        let seen = seen.clone();
        move |signals: &Vec<MoveSignal>| seen.lock().unwrap().push(signals.clone())
    });
    let shown = ctx.transaction(|| game.boards().hold(Board::new()));

    ctx.transaction(|| {
        game.apply_move(0, 0).unwrap();
        game.apply_move(0, 0).unwrap();
        game.apply_move(1, 1).unwrap();
    });
    game.apply_move(2, 2).unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            vec![MoveSignal::Continue, MoveSignal::Continue],
            vec![MoveSignal::Continue],
        ]
    );
    assert_eq!(shown.sample(), *game.board());
    assert_eq!(shown.sample().cell(1, 1).unwrap().owner(), Some(Symbol::O));
}

#[test]
fn board_stream_shows_fresh_board_after_conclusion() {
    let ctx = SodiumCtx::new();
    let mut game = new_match(&ctx);
    let shown = ctx.transaction(|| game.boards().hold(Board::new()));

    game.apply_move(0, 0).unwrap();
    assert_eq!(shown.sample().cell(0, 0).unwrap().owner(), Some(Symbol::X));

    for (row, col) in [(1, 0), (0, 1), (1, 1), (0, 2)] {
        game.apply_move(row, col).unwrap();
    }
    assert!(shown.sample().is_empty());
    assert_eq!(shown.sample(), *game.board());
}

#[test]
fn occupied_cell_is_a_quiet_no_op() {
    let ctx = SodiumCtx::new();
    let mut game = new_match(&ctx);
    let count = Arc::new(Mutex::new(0usize));
    let _listener = game.signals().listen({
        let count = count.clone();
        move |signals: &Vec<MoveSignal>| *count.lock().unwrap() += signals.len()
    });

    game.apply_move(2, 1).unwrap();
    let before = *game.board();

    assert_eq!(game.apply_move(2, 1), Ok(None));
    assert_eq!(*game.board(), before);
    assert_eq!(game.current_player().symbol(), Symbol::O);
    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn history_grows_once_per_concluded_game() {
    let ctx = SodiumCtx::new();
    let mut game = new_match(&ctx);

    let draw = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (2, 0),
        (2, 1),
        (1, 2),
        (2, 2),
    ];
    let mut lengths = Vec::new();
    for round in 0..3 {
        for &(row, col) in &draw {
            game.apply_move(row, col).unwrap();
            lengths.push(game.history().len());
        }
        assert_eq!(game.history().len(), round + 1);
    }

    assert_eq!(game.history(), &[Outcome::Draw; 3]);
    assert_eq!(game.tally().draws, 3);
    // The length only changes on each ninth move.
    for (i, len) in lengths.iter().enumerate() {
        assert_eq!(*len, (i + 1) / 9);
    }
}

#[test]
fn bad_coordinates_are_errors() {
    let ctx = SodiumCtx::new();
    let mut game = new_match(&ctx);
    assert_eq!(
        game.apply_move(0, 3),
        Err(Error::OutOfRange { row: 0, col: 3 })
    );
    assert!(game.board().is_empty());
}

#[test]
fn outcomes_display_as_symbols_or_draw() {
    assert_eq!(Outcome::Win(Symbol::O).to_string(), "O");
    assert_eq!(Outcome::Draw.to_string(), "draw");
}
