use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use sodium as na;
use tttmatch::{Board, MatchConfig, MatchController, MoveSignal, Symbol, SIZE};
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame, Terminal,
};

fn main() -> Result<()> {
    tttmatch::logging::init();

    let config = MatchConfig::parse();
    let ctx = na::SodiumCtx::new();

    let (mut game, ui) = ctx.transaction(|| -> Result<_> {
        let game = config.build(&ctx)?;
        let board = game.boards().hold(Board::new());
        let status = game
            .signals()
            .map(|signals: &Vec<MoveSignal>| {
                signals.last().map(describe).unwrap_or_default()
            })
            .hold(String::from("New game."));
        let ui = Ui {
            board,
            status,
            notice: String::new(),
        };
        Ok((game, ui))
    })?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &mut game, ui);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run<B: Backend>(terminal: &mut Terminal<B>, game: &mut MatchController, mut ui: Ui) -> Result<()> {
    loop {
        terminal.draw(|f| ui.draw(f, &*game))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                let (row, col) = (index / SIZE, index % SIZE);
                ui.notice = match game.apply_move(row, col)? {
                    Some(_) => String::new(),
                    None => format!("Cell {} is already taken.", c),
                };
            }
            _ => {}
        }
    }
}

fn describe(signal: &MoveSignal) -> String {
    match signal {
        MoveSignal::Continue => String::new(),
        MoveSignal::Win(symbol) => format!("{} won! New game.", symbol),
        MoveSignal::Draw => String::from("Draw! New game."),
    }
}

struct Ui {
    board: na::Cell<Board>,
    status: na::Cell<String>,
    notice: String,
}

impl Ui {
    fn draw<B: Backend>(&self, f: &mut Frame<B>, game: &MatchController) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .margin(2)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
            .split(f.size());
        let block = Block::default().title("Board").borders(Borders::ALL);
        self.draw_board(f, block.inner(chunks[0]));
        f.render_widget(block, chunks[0]);

        let block = Block::default().title("Game Info").borders(Borders::ALL);
        let info = Paragraph::new(self.info_lines(game)).block(block);
        f.render_widget(info, chunks[1]);
    }

    fn info_lines(&self, game: &MatchController) -> Vec<Spans<'static>> {
        let player = game.current_player();
        let tally = game.tally();
        let history: Vec<String> = game.history().iter().map(|o| o.to_string()).collect();
        vec![
            Spans::from(Span::styled(
                format!("{} to move ({})", player.name(), player.symbol()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Spans::from(""),
            Spans::from(format!(
                "{} (X): {}",
                game.player1().name(),
                tally.x_wins
            )),
            Spans::from(format!(
                "{} (O): {}",
                game.player2().name(),
                tally.o_wins
            )),
            Spans::from(format!("Draws: {}", tally.draws)),
            Spans::from(format!("History: {}", history.join(" "))),
            Spans::from(""),
            Spans::from(self.status.sample()),
            Spans::from(self.notice.clone()),
            Spans::from(""),
            Spans::from("1-9: play a cell, q: quit"),
        ]
    }

    fn draw_board<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let thirds = [
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ];
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(thirds.as_ref())
            .split(area);

        let board = self.board.sample();
        for (row, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(thirds.as_ref())
                .split(*row_area);
            for (col, chunk) in cols.iter().enumerate() {
                let owner = board.cell(row, col).ok().and_then(|cell| cell.owner());
                let block = Block::default()
                    .title(format!("{}", row * SIZE + col + 1))
                    .borders(Borders::ALL);
                f.render_widget(RenderMark(owner), block.inner(*chunk));
                f.render_widget(block, *chunk);
            }
        }
    }
}

struct RenderMark(Option<Symbol>);

impl Widget for RenderMark {
    fn render(self, area: Rect, buf: &mut tui::buffer::Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }
        match self.0 {
            Some(Symbol::X) => render_x(area, buf),
            Some(Symbol::O) => render_o(area, buf),
            None => {}
        }
    }
}

fn render_x(area: Rect, buf: &mut tui::buffer::Buffer) {
    let last = area.width - 1;
    for y in 0..area.height {
        let offset = y * last / (area.height - 1).max(1);
        buf.set_string(area.x + offset, area.y + y, "\\", Style::default());
        buf.set_string(area.x + last - offset, area.y + y, "/", Style::default());
    }
}

fn render_o(area: Rect, buf: &mut tui::buffer::Buffer) {
    let (right, bottom) = (area.width - 1, area.height - 1);
    for x in 1..right {
        buf.set_string(area.x + x, area.y, "@", Style::default());
        buf.set_string(area.x + x, area.y + bottom, "@", Style::default());
    }
    for y in 1..bottom {
        buf.set_string(area.x, area.y + y, "@", Style::default());
        buf.set_string(area.x + right, area.y + y, "@", Style::default());
    }
}
