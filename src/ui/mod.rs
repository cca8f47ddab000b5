use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::game::Cell;
use crate::{
    Game, CELL_STRIDE, CELL_W, GRID_H, GRID_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W, SIDEBAR_W,
};

pub fn draw_game(frame: &mut Frame, game: &Game, cursor: (usize, usize)) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("TILESPELL"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("TILESPELL")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    frame.render_widget(cabinet, area);

    let (play_rect, sidebar_rect) = layout_panes(area);
    draw_board(frame, game, cursor, play_rect);
    draw_sidebar(frame, game, sidebar_rect);

    if let Some(message) = game.status().message() {
        draw_end_overlay(frame, message, play_rect);
    }
}

/// Split the cabinet into the centered board lattice and the sidebar.
/// `cell_at` replays the same math, so hit-testing and drawing agree.
fn layout_panes(area: Rect) -> (Rect, Rect) {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min((PLAY_W as u16 + 6).max(30)),
            Constraint::Length(SIDEBAR_W),
        ])
        .split(inner);

    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAY_H as u16),
            Constraint::Min(1),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(1),
        ])
        .split(v_center[1]);

    (h_center[1], cols[1])
}

/// Map a terminal coordinate back to the grid cell under it, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<(usize, usize)> {
    if area.width < MIN_PANE_WIDTH {
        return None;
    }
    let (play_rect, _) = layout_panes(area);
    let rx = column.checked_sub(play_rect.x)? as usize;
    let ry = row.checked_sub(play_rect.y)? as usize;
    if rx >= PLAY_W || ry >= PLAY_H {
        return None;
    }
    if ry % 2 == 0 || rx % CELL_STRIDE == 0 {
        return None; // lattice line, not a cell
    }
    let x = rx / CELL_STRIDE;
    let y = ry / 2;
    (x < GRID_W && y < GRID_H).then_some((x, y))
}

fn draw_board(frame: &mut Frame, game: &Game, cursor: (usize, usize), play_rect: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(PLAY_H);
    lines.push(Line::raw(lattice_row('┌', '┬', '┐')));
    for y in 0..GRID_H {
        if y > 0 {
            lines.push(Line::raw(lattice_row('├', '┼', '┤')));
        }
        let mut spans: Vec<Span> = Vec::with_capacity(GRID_W * 2 + 1);
        for x in 0..GRID_W {
            spans.push(Span::raw("│"));
            let cell = game.grid.get(x, y);
            let selected = game.selection() == Some((x, y));
            let hovered = cursor == (x, y);
            spans.push(Span::styled(
                cell_text(&cell.content),
                cell_style(cell, selected, hovered),
            ));
        }
        spans.push(Span::raw("│"));
        lines.push(Line::from(spans));
    }
    lines.push(Line::raw(lattice_row('└', '┴', '┘')));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);
}

fn lattice_row(left: char, mid: char, right: char) -> String {
    let mut row = String::with_capacity(PLAY_W);
    row.push(left);
    for x in 0..GRID_W {
        if x > 0 {
            row.push(mid);
        }
        for _ in 0..CELL_W {
            row.push('─');
        }
    }
    row.push(right);
    row
}

fn cell_text(content: &str) -> String {
    // Merged blobs can outgrow the cell; keep the lattice aligned.
    if content.len() > CELL_W {
        let mut text: String = content.chars().take(CELL_W - 1).collect();
        text.push('…');
        text
    } else {
        format!("{:^width$}", content, width = CELL_W)
    }
}

fn cell_style(cell: &Cell, selected: bool, hovered: bool) -> Style {
    let mut style = Style::default();
    if cell.completed {
        style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
    }
    if selected {
        style = style.fg(Color::Black).bg(Color::Yellow);
    } else if hovered {
        style = style.bg(Color::DarkGray);
    }
    style
}

fn draw_sidebar(frame: &mut Frame, game: &Game, area: Rect) {
    let words_h = game.words().count() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(words_h),
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(area);

    let word_lines: Vec<Line> = game
        .words()
        .map(|(word, done)| {
            if done {
                Line::from(Span::styled(
                    format!("{word} ✓"),
                    Style::default().fg(Color::Green),
                ))
            } else {
                Line::raw(word)
            }
        })
        .collect();
    let words = Paragraph::new(word_lines)
        .block(Block::default().title("WORDS").borders(Borders::ALL));
    frame.render_widget(words, chunks[0]);

    let found = game.words().filter(|(_, done)| *done).count();
    let total = game.words().count();
    let status = match game.status() {
        crate::RoundStatus::Playing => "PLAYING",
        crate::RoundStatus::Won => "WON",
        crate::RoundStatus::Lost => "LOST",
    };
    let info = Paragraph::new(format!(
        "BOARD  {}\nWORDS  {found}/{total}\nSTATUS {status}",
        game.board_index() + 1
    ))
    .block(Block::default().title("INFO").borders(Borders::ALL));
    frame.render_widget(info, chunks[1]);

    let controls = Paragraph::new(
        "click/space merge\n←↑↓→ cursor\nr reset\np play again\nq quit",
    )
    .block(Block::default().title("CONTROLS").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}

fn draw_end_overlay(frame: &mut Frame, message: &str, play_rect: Rect) {
    let overlay_w = (PLAY_W as u16).saturating_sub(4).max(8);
    let overlay_h = 5u16;
    let popup = Rect {
        x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
        y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
        width: overlay_w,
        height: overlay_h,
    };
    let overlay = Paragraph::new(format!("{message}\n[p] play again  [r] reset"))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(overlay, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_round_trips_cell_interiors() {
        let area = Rect::new(0, 0, 80, 24);
        let (play_rect, _) = layout_panes(area);
        for y in 0..GRID_H {
            for x in 0..GRID_W {
                let column = play_rect.x + (x * CELL_STRIDE + 1) as u16;
                let row = play_rect.y + (y * 2 + 1) as u16;
                assert_eq!(cell_at(area, column, row), Some((x, y)));
            }
        }
    }

    #[test]
    fn test_cell_at_rejects_lattice_and_outside() {
        let area = Rect::new(0, 0, 80, 24);
        let (play_rect, _) = layout_panes(area);
        assert_eq!(cell_at(area, play_rect.x, play_rect.y), None);
        assert_eq!(cell_at(area, 0, 0), None);
        let narrow = Rect::new(0, 0, MIN_PANE_WIDTH - 1, 24);
        assert_eq!(cell_at(narrow, 5, 5), None);
    }

    #[test]
    fn test_cell_text_pads_and_truncates() {
        assert_eq!(cell_text("CAT"), " CAT  ");
        assert_eq!(cell_text("YELLOW"), "YELLOW");
        assert_eq!(cell_text("YELLOWS"), "YELLO…");
    }
}
