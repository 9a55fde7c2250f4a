//! Application state and logic.

use super::input::{self, Action};
use crate::config::AppConfig;
use crate::games::tictactoe::{Coord, GameEngine, GameState, MoveOutcome};
use crate::starfield::{PointerKind, Starfield};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

/// Main application state.
///
/// The engine owns the game; the app only keeps the latest snapshot
/// for drawing.
pub struct App {
    engine: GameEngine,
    snapshot: GameState,
    starfield: Starfield,
    cursor: Coord,
    notice: Option<String>,
    cell_areas: Option<[Rect; 9]>,
    cell_width: f64,
    cell_height: f64,
    should_quit: bool,
}

impl App {
    /// Creates the app for a terminal of `cols` x `rows` cells.
    pub fn new(config: &AppConfig, cols: u16, rows: u16) -> Self {
        let cell_width = *config.tui().cell_width_px();
        let cell_height = *config.tui().cell_height_px();
        let engine = GameEngine::new();
        Self {
            snapshot: engine.snapshot(),
            engine,
            starfield: Starfield::new(
                config.starfield().clone(),
                f64::from(cols) * cell_width,
                f64::from(rows) * cell_height,
                1.0,
            ),
            cursor: Coord::CENTER,
            notice: None,
            cell_areas: None,
            cell_width,
            cell_height,
            should_quit: false,
        }
    }

    /// Latest game snapshot.
    pub fn snapshot(&self) -> &GameState {
        &self.snapshot
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Message about the last refused action, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Starfield for drawing.
    pub fn starfield_mut(&mut self) -> &mut Starfield {
        &mut self.starfield
    }

    /// Virtual pixels per terminal cell.
    pub fn cell_size(&self) -> (f64, f64) {
        (self.cell_width, self.cell_height)
    }

    /// Records where the board cells were drawn, row-major.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = Some(areas);
    }

    /// Advances the background animation by one frame.
    pub fn tick(&mut self) {
        self.starfield.step();
    }

    /// Handles a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = input::action_for(self.cursor, key.code);
                self.perform(action);
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(cols, rows) => {
                debug!(cols, rows, "Terminal resized");
                self.starfield.resize(
                    f64::from(cols) * self.cell_width,
                    f64::from(rows) * self.cell_height,
                    1.0,
                );
            }
            Event::FocusLost => self.starfield.pointer_left(),
            _ => {}
        }
    }

    /// Applies an input action.
    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Cursor(coord) => self.cursor = coord,
            Action::Place(coord) => {
                self.cursor = coord;
                self.place(coord);
            }
            Action::Reset => {
                self.snapshot = self.engine.reset();
                self.notice = None;
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::None => {}
        }
    }

    fn place(&mut self, coord: Coord) {
        let outcome = self.engine.apply_move(coord.row(), coord.col());
        self.notice = match &outcome {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected { reason, .. } => Some(reason.to_string()),
        };
        self.snapshot = outcome.state().clone();
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.starfield.pointer_moved(
                    f64::from(mouse.column) * self.cell_width,
                    f64::from(mouse.row) * self.cell_height,
                    PointerKind::Mouse,
                );
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(coord) = self.cell_at(mouse.column, mouse.row) {
                    self.perform(Action::Place(coord));
                }
            }
            _ => {}
        }
    }

    fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        let areas = self.cell_areas.as_ref()?;
        let hit = Position::new(column, row);
        areas
            .iter()
            .position(|area| area.contains(hit))
            .and_then(Coord::from_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, GameStatus, Player};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app() -> App {
        App::new(&AppConfig::default().with_seed(1), 80, 24)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_keypad_moves_update_snapshot() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));
        let board = app.snapshot().board();
        assert_eq!(board.get(Coord::TOP_LEFT), Cell::Occupied(Player::X));
        assert_eq!(board.get(Coord::CENTER), Cell::Occupied(Player::O));
        assert_eq!(app.cursor(), Coord::CENTER);
    }

    #[test]
    fn test_rejected_move_sets_notice() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notice(), Some("Cell (1, 1) is already occupied"));
        assert_eq!(app.snapshot().current_player(), Player::O);
    }

    #[test]
    fn test_reset_clears_board_and_notice() {
        let mut app = app();
        for key in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.snapshot().status(), GameStatus::Won(Player::X));
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.notice(), Some("Game is already over"));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.snapshot(), &GameState::new());
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_click_places_in_recorded_cell() {
        let mut app = app();
        let areas: [Rect; 9] = std::array::from_fn(|i| {
            Rect::new((i % 3) as u16 * 4, (i / 3) as u16 * 2, 3, 1)
        });
        app.set_cell_areas(areas);

        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 9,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(
            app.snapshot().board().get(Coord::BOTTOM_RIGHT),
            Cell::Occupied(Player::X)
        );
    }

    #[test]
    fn test_mouse_movement_steers_starfield() {
        let mut app = app();
        for column in [10, 14] {
            app.handle_event(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column,
                row: 5,
                modifiers: KeyModifiers::NONE,
            }));
        }
        assert!(app.starfield_mut().velocity().tx < 0.0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
