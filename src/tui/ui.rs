//! UI rendering for tic-tac-toe.
//!
//! Drawing a cell registers its focus handle, so the handle map always holds
//! the areas of the last frame.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, CellHandle};
use crate::{COLS, Game, Mark, Position, ROWS, Square};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const HELP: &str = "Arrows: move | Enter: mark | N: new game | R: reset scores | Q: quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Scores
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.game_mut());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let scores =
        Paragraph::new(app.game().scores().to_string()).alignment(Alignment::Center);
    frame.render_widget(scores, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, game: &mut Game<CellHandle>) {
    let width = CELL_WIDTH * COLS as u16 + (COLS as u16 - 1);
    let height = CELL_HEIGHT * ROWS as u16 + (ROWS as u16 - 1);
    let board_area = center_rect(area, width, height);

    for row in 0..ROWS {
        for col in 0..COLS {
            let position = Position::new(row, col);
            let cell_area = Rect::new(
                board_area.x + col as u16 * (CELL_WIDTH + 1),
                board_area.y + row as u16 * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area);
            game.register_handle(position, CellHandle { position, area: cell_area });
            draw_cell(frame, cell_area, game, position);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, game: &Game<CellHandle>, position: Position) {
    let (symbol, mut style) = match game.grid().get(position) {
        Some(Square::Occupied(Mark::X)) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Mark::O)) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (" ", Style::default().fg(Color::DarkGray)),
    };

    let winning = game
        .status()
        .winning_line()
        .is_some_and(|line| line.contains(position));
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if game.cursor() == Some(position) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
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
