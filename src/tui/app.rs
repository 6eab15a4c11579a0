//! Application state and input dispatch.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use derive_getters::Getters;
use ratatui::widgets::ListState;
use tracing::{debug, instrument, warn};

use super::input::{digit_position, move_cursor};
use super::ui::{Hit, HitMap};
use super::view::{self, MoveListItem};
use crate::config::GameConfig;
use crate::games::tictactoe::{ClickOutcome, GameController, Position};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw and keep going.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// Game state.
    controller: GameController,
    /// Session preferences.
    config: GameConfig,
    /// Keyboard cursor on the board.
    cursor: Position,
    /// Pane with keyboard focus.
    focus: Focus,
    /// Selected row and scroll offset of the displayed move list.
    list_state: ListState,
    /// Screen areas from the last draw.
    #[getter(skip)]
    hit_map: HitMap,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            controller: GameController::with_order(*config.start_reversed()),
            config,
            cursor: Position::Center,
            focus: Focus::Board,
            list_state,
            hit_map: HitMap::default(),
        }
    }

    /// Status line for the viewed board.
    pub fn status(&self) -> String {
        view::status_line(&self.controller, *self.config.announce_draw())
    }

    /// Move list in display order.
    pub fn moves(&self) -> Vec<MoveListItem> {
        view::move_list(&self.controller)
    }

    /// Selected row of the displayed move list.
    pub fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    /// Stores the screen areas produced by the last draw.
    ///
    /// Also keeps the scroll offset the list was drawn with, so the next
    /// frame scrolls from there.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        *self.list_state.offset_mut() = hit_map.list_offset();
        self.hit_map = hit_map;
    }

    /// Handles any terminal event.
    pub fn handle_event(&mut self, event: Event) -> AppAction {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                AppAction::Continue
            }
            _ => AppAction::Continue,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return AppAction::Quit;
            }
            KeyCode::Char('t') => self.toggle_order(),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Char(c) if digit_position(c).is_some() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.click_square(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            code => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, code),
                Focus::Moves => self.move_selection(code),
            },
        }
        AppAction::Continue
    }

    /// Handles a mouse event. Only left clicks do anything.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match self.hit_map.hit(mouse.column, mouse.row) {
            Some(Hit::Cell(pos)) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.click_square(pos);
            }
            Some(Hit::Move { row, index }) => {
                self.focus = Focus::Moves;
                self.list_state.select(Some(row));
                self.jump_to(index);
            }
            Some(Hit::Toggle) => self.toggle_order(),
            None => debug!(column = mouse.column, row = mouse.row, "Click outside controls"),
        }
    }

    /// Activates the focused element.
    fn activate(&mut self) {
        match self.focus {
            Focus::Board => self.click_square(self.cursor),
            Focus::Moves => {
                let target = self
                    .moves()
                    .get(self.selected())
                    .filter(|item| item.is_jump())
                    .map(|item| *item.index());
                if let Some(index) = target {
                    self.jump_to(index);
                }
            }
        }
    }

    fn click_square(&mut self, pos: Position) {
        if let ClickOutcome::Played { move_number } = self.controller.click_square(pos) {
            self.select_index(move_number);
        }
    }

    fn jump_to(&mut self, index: usize) {
        match self.controller.jump_to(index) {
            Ok(()) => self.select_index(index),
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    fn toggle_order(&mut self) {
        let index = self.moves().get(self.selected()).map(|item| *item.index());
        self.controller.toggle_order();
        if let Some(index) = index {
            self.select_index(index);
        }
    }

    /// Puts the list selection on the row showing history entry `index`.
    fn select_index(&mut self, index: usize) {
        if let Some(row) = self.moves().iter().position(|item| *item.index() == index) {
            self.list_state.select(Some(row));
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.controller.len() - 1;
        let selected = self.selected();
        let row = match key {
            KeyCode::Up => selected.saturating_sub(1),
            KeyCode::Down => (selected + 1).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => selected,
        };
        self.list_state.select(Some(row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Square};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digit_keys_play() {
        let mut app = App::new(GameConfig::default());
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('5')));

        let board = app.controller().current_board();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(app.status(), "Next player: X");
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = App::new(GameConfig::default());
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(*app.cursor(), Position::TopLeft);
        assert_eq!(
            app.controller().current_board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_move_list_navigation_jumps() {
        let mut app = App::new(GameConfig::default());
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('5')));

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(*app.focus(), Focus::Moves);
        app.handle_key(key(KeyCode::Home));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.controller().current_move(), 0);
        assert_eq!(app.controller().current_board(), &Board::new());
        assert_eq!(app.controller().len(), 3);
        assert_eq!(app.moves()[0].label(), "No moves have been made");
    }

    #[test]
    fn test_enter_on_current_row_is_inert() {
        let mut app = App::new(GameConfig::default());
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.controller().current_move(), 1);
    }

    #[test]
    fn test_toggle_keeps_selection_on_same_entry() {
        let mut app = App::new(GameConfig::default());
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.selected(), 2);

        app.handle_key(key(KeyCode::Char('t')));
        assert!(app.controller().is_reversed());
        assert_eq!(app.selected(), 0);
        assert_eq!(*app.moves()[0].index(), 2);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(GameConfig::default());
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), AppAction::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), AppAction::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Char('x'))), AppAction::Continue);
    }

    #[test]
    fn test_mouse_clicks_use_hit_map() {
        let mut app = App::new(GameConfig::default());
        let mut hits = HitMap::default();
        hits.add_cell(Rect::new(0, 0, 5, 3), Position::TopLeft);
        hits.add_cell(Rect::new(6, 0, 5, 3), Position::TopCenter);
        hits.set_toggle(Rect::new(20, 0, 10, 3));
        app.set_hit_map(hits);

        app.handle_mouse(left_click(1, 1));
        app.handle_mouse(left_click(7, 2));
        assert_eq!(app.controller().len(), 3);

        app.handle_mouse(left_click(25, 1));
        assert!(app.controller().is_reversed());

        // Outside every control.
        app.handle_mouse(left_click(50, 50));
        assert_eq!(app.controller().len(), 3);
    }

    #[test]
    fn test_mouse_jump() {
        let mut app = App::new(GameConfig::default());
        app.handle_key(key(KeyCode::Char('1')));
        let mut hits = HitMap::default();
        hits.add_move(Rect::new(40, 5, 20, 1), 0, 0);
        app.set_hit_map(hits);

        app.handle_mouse(left_click(45, 5));
        assert_eq!(app.controller().current_move(), 0);
        assert_eq!(*app.focus(), Focus::Moves);
    }

    #[test]
    fn test_start_reversed_from_config() {
        let config: GameConfig = toml::from_str("start_reversed = true").unwrap();
        let app = App::new(config);
        assert!(app.controller().is_reversed());
    }
}
