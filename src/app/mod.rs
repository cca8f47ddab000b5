use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::ui::{cell_at, draw_game};
use crate::{Game, RoundStatus, GRID_H, GRID_W};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let mut game = Game::new();
    let mut cursor = (GRID_W / 2, GRID_H / 2);

    loop {
        terminal.draw(|frame| draw_game(frame, &game, cursor))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if matches!(key.code, KeyCode::Char('q')) {
                        break;
                    }
                    handle_key(key.code, &mut game, &mut cursor);
                }
                Event::Mouse(mouse) => {
                    let area = terminal.size()?;
                    handle_mouse(mouse, area, &mut game, &mut cursor);
                }
                _ => {}
            }
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn handle_key(code: KeyCode, game: &mut Game, cursor: &mut (usize, usize)) {
    match code {
        KeyCode::Left => cursor.0 = cursor.0.saturating_sub(1),
        KeyCode::Right => cursor.0 = (cursor.0 + 1).min(GRID_W - 1),
        KeyCode::Up => cursor.1 = cursor.1.saturating_sub(1),
        KeyCode::Down => cursor.1 = (cursor.1 + 1).min(GRID_H - 1),
        KeyCode::Enter | KeyCode::Char(' ') => game.on_click(cursor.0, cursor.1),
        KeyCode::Char('r') => game.reset(),
        KeyCode::Char('p') => {
            // Play-again is an end-of-round control.
            if game.status() != RoundStatus::Playing {
                game.play_again();
            }
        }
        _ => {}
    }
}

fn handle_mouse(mouse: MouseEvent, area: Rect, game: &mut Game, cursor: &mut (usize, usize)) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    if let Some((x, y)) = cell_at(area, mouse.column, mouse.row) {
        *cursor = (x, y);
        game.on_click(x, y);
    }
}
