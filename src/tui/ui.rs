//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{Board, Player, Position};

const HELP: &str =
    "arrows/1-9 move  enter play  [ ] select  g jump  s sort  r restart  q quit";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(32)])
        .split(chunks[1]);

    draw_board(frame, body[0], &app.store().display_board(), app.cursor());
    draw_history(frame, body[1], app);

    let status = match app.message() {
        Some(message) => format!("{}  ({})", app.store().status(), message),
        None => app.store().status().to_string(),
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], board, cursor, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let cell = board.get(pos);

    let (symbol, base_style) = match cell.mark() {
        None => ("   ", Style::default().fg(Color::DarkGray)),
        Some(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    // The winning line keeps its colour under the cursor.
    let style = match (cell.is_winning(), pos == cursor) {
        (true, true) => base_style
            .bg(Color::LightRed)
            .fg(Color::White)
            .add_modifier(Modifier::UNDERLINED),
        (true, false) => base_style.bg(Color::LightRed).fg(Color::White),
        (false, true) => base_style.bg(Color::White).fg(Color::Black),
        (false, false) => base_style,
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .rows()
        .into_iter()
        .map(|row| {
            let marker = if row.current { "▶ " } else { "  " };
            let mut style = Style::default();
            if !row.jumpable {
                style = style.add_modifier(Modifier::ITALIC);
            }
            if row.position == app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(format!("{}{}", marker, row.text), style)))
        })
        .collect();

    let title = format!("History (s: {})", app.order().label());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MoveOrder;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render_buffer(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn render(app: &App) -> String {
        render_buffer(app)
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_fresh_screen() {
        let app = App::new(MoveOrder::Ascending);
        let screen = render(&app);
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("You are at game start"));
        assert!(screen.contains("Sort descending"));
    }

    #[test]
    fn test_winner_and_history_rendered() {
        let mut app = App::new(MoveOrder::Ascending);
        for key in ['5', '1', '3', '9', '7'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #4"));
        assert!(screen.contains("You are at move #5"));
    }

    #[test]
    fn test_whole_winning_line_highlighted_under_cursor() {
        let mut app = App::new(MoveOrder::Ascending);
        for key in ['5', '1', '3', '9', '7'] {
            app.handle_key(KeyCode::Char(key));
        }
        // The last move leaves the cursor on the winning line.
        assert_eq!(app.cursor(), Position::BottomLeft);

        let buffer = render_buffer(&app);
        let lit = buffer
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "X" && cell.bg == Color::LightRed)
            .count();
        assert_eq!(lit, 3);
    }
}
