//! Frame rendering: starfield background, board, status.

use super::app::App;
use super::stars::Stars;
use crate::games::tictactoe::{Cell, Coord, GameState, GameStatus, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const BOARD_WIDTH: u16 = 29;
const BOARD_HEIGHT: u16 = 13;

/// Draws one frame and records the board cell areas on the app.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let (cell_width, cell_height) = app.cell_size();
    let sprites = app.starfield_mut().sprites();
    frame.render_widget(Stars::new(&sprites, cell_width, cell_height), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, center_rect(chunks[0], 15, 1));

    let areas = draw_board(frame, chunks[1], app.snapshot(), app.cursor());
    app.set_cell_areas(areas);

    draw_status(frame, chunks[2], app.snapshot(), app.notice());

    let help = Paragraph::new("Arrows/Enter or 1-9: move | Click: move | R: reset | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_status(frame: &mut Frame, area: Rect, state: &GameState, notice: Option<&str>) {
    let color = match state.status() {
        GameStatus::InProgress => Color::Yellow,
        GameStatus::Won(_) => Color::Green,
        GameStatus::Drawn => Color::Magenta,
    };
    let mut spans = vec![Span::styled(
        state.status_text(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(notice) = notice {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(notice.to_string(), Style::default().fg(Color::Red)));
    }

    let area = center_rect(area, 60, 3);
    frame.render_widget(Clear, area);
    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, state: &GameState, cursor: Coord) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    frame.render_widget(Clear, board_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

    let mut areas = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(1),
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Length(8),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let Some(coord) = Coord::new(row, col) else {
                continue;
            };
            let cell_area = cols[col * 2];
            draw_cell(frame, cell_area, state, cursor, coord);
            areas[coord.to_index()] = cell_area;
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    areas
}

fn draw_cell(frame: &mut Frame, area: Rect, state: &GameState, cursor: Coord, coord: Coord) {
    let (symbol, base_style) = match state.board().get(coord) {
        Cell::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_line = state.winning_line().is_some_and(|line| line.contains(coord));
    let style = if on_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if coord == cursor && !state.is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(format!("{:^width$}", symbol, width = area.width as usize), style)),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
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
