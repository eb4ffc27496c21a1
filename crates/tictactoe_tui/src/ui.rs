//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tictactoe_core::{BoardView, CellView, GameView, Mark, Position, Status};

const HELP: &str =
    "arrows/1-9 move · enter play · [ ] step · home/end · o order · r restart · q quit";

/// Renders the game view with the cursor highlighted.
pub fn draw(frame: &mut Frame, view: &GameView, cursor: Position) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board + info
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_board(frame, body[0], &view.board, cursor);
    draw_info(frame, body[1], view);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &BoardView, cursor: Position) {
    let board_area = center_rect(area, 29, 11);

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

    for (i, cells) in board.rows().enumerate() {
        if i > 0 {
            draw_separator(frame, rows[2 * i - 1]);
        }
        draw_row(frame, rows[2 * i], cells, cursor);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &[CellView], cursor: Position) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            draw_separator_vertical(frame, cols[2 * i - 1]);
        }
        draw_cell(frame, cols[2 * i], cell, cursor);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, cursor: Position) {
    let mut style = match cell.mark {
        None => Style::default().fg(Color::DarkGray),
        Some(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Some(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if cell.highlighted {
        style = style.bg(Color::Green);
    }
    if cell.position == cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let symbol = match cell.mark {
        Some(mark) => format!(" {} ", mark),
        None => format!(" {} ", cell.position.index() + 1),
    };

    // Middle line of the three-line cell carries the symbol.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text)
        .style(if cell.highlighted || cell.position == cursor { style } else { Style::default() })
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, view: &GameView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let status_style = match view.status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status.to_string())
        .style(status_style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}. {}", entry.step, entry.text()),
                style,
            )))
        })
        .collect();

    let moves = List::new(items).block(
        Block::default()
            .title(format!("Moves {}", view.order_sign()))
            .borders(Borders::ALL),
    );
    frame.render_widget(moves, chunks[1]);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
