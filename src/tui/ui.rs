//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{App, Focus};
use super::view::{self, CellView, MoveItemKind};
use crate::games::tictactoe::{Player, Position, Square};

/// Label of the move-order control.
pub const TOGGLE_LABEL: &str = "Toggle Moves";

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;

/// A clickable element found under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// A move-list row (`row` in display order) for history entry `index`.
    Move {
        /// Row in the displayed list.
        row: usize,
        /// History index of the entry.
        index: usize,
    },
    /// The move-order control.
    Toggle,
}

/// Screen areas of the clickable elements from the last draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    cells: Vec<(Rect, Position)>,
    moves: Vec<(Rect, usize, usize)>,
    toggle: Option<Rect>,
    list_offset: usize,
}

impl HitMap {
    /// Records the area of a board cell.
    pub fn add_cell(&mut self, area: Rect, pos: Position) {
        self.cells.push((area, pos));
    }

    /// Records the area of a jumpable move-list row.
    pub fn add_move(&mut self, area: Rect, row: usize, index: usize) {
        self.moves.push((area, row, index));
    }

    /// Display row shown at the top of the move list.
    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    /// Records the area of the move-order control.
    pub fn set_toggle(&mut self, area: Rect) {
        self.toggle = Some(area);
    }

    /// Finds the element at terminal cell (`column`, `row`).
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let point = ScreenPosition::new(column, row);
        if let Some((_, pos)) = self.cells.iter().find(|(area, _)| area.contains(point)) {
            return Some(Hit::Cell(*pos));
        }
        if let Some(&(_, list_row, index)) =
            self.moves.iter().find(|(area, _, _)| area.contains(point))
        {
            return Some(Hit::Move {
                row: list_row,
                index,
            });
        }
        self.toggle
            .filter(|area| area.contains(point))
            .map(|_| Hit::Toggle)
    }
}

/// Renders the whole screen and returns where the controls ended up.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let area = frame.area();
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(13),   // Board and moves
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly History - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(chunks[2]);

    draw_board(frame, body[0], app, &mut hits);
    draw_moves(frame, body[1], app, &mut hits);

    let help = Paragraph::new(
        "click/1-9: play  tab: switch pane  enter: select  t: toggle order  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    hits
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let border_style = match app.focus() {
        Focus::Board => Style::default().fg(Color::Cyan),
        Focus::Moves => Style::default().fg(Color::DarkGray),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let cells = view::cell_views(app.controller());
    for (row, cells) in cells.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], app, cells, hits);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, cells: &[CellView], hits: &mut HitMap) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (i, cell) in cells.iter().enumerate() {
        draw_cell(frame, cols[i * 2], app, cell);
        hits.add_cell(cols[i * 2], cell.position);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: &CellView) {
    let (symbol, base_style) = match cell.square {
        Square::Empty if *app.config().show_cell_numbers() => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (" ".to_string(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut style = base_style;
    if cell.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if *app.focus() == Focus::Board && cell.position == *app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(if cell.winning {
            Style::default().bg(Color::Green)
        } else {
            Style::default()
        })
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let toggle_area = Rect {
        width: chunks[0].width.min(TOGGLE_LABEL.len() as u16 + 4),
        ..chunks[0]
    };
    let toggle = Paragraph::new(TOGGLE_LABEL)
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, toggle_area);
    hits.set_toggle(toggle_area);

    let (border_style, highlight_style) = match app.focus() {
        Focus::Moves => (
            Style::default().fg(Color::Cyan),
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Focus::Board => (Style::default().fg(Color::DarkGray), Style::default()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Moves");
    let inner = block.inner(chunks[1]);

    let items = app.moves();
    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(row, item)| {
            let style = match item.kind() {
                MoveItemKind::Current => Style::default().add_modifier(Modifier::ITALIC),
                MoveItemKind::Jump => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:>2}. ", row + 1)),
                Span::styled(item.label().clone(), style),
            ]))
        })
        .collect();

    let list = List::new(list_items)
        .block(block)
        .highlight_style(highlight_style);

    // The selection follows the viewed entry, so the list scrolls to it.
    let mut list_state = *app.list_state();
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    let offset = list_state.offset();
    hits.list_offset = offset;
    for (row, item) in items
        .iter()
        .enumerate()
        .skip(offset)
        .take(inner.height as usize)
    {
        if item.is_jump() {
            let y = inner.y + (row - offset) as u16;
            hits.add_move(Rect::new(inner.x, y, inner.width, 1), row, *item.index());
        }
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
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
