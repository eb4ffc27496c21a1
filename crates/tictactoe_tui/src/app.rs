//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_core::{Game, GameView, MoveOrder, Position};
use tracing::{debug, instrument};

use super::input::move_cursor;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
}

impl App {
    /// Creates a new application with the move list in `order`.
    pub fn new(order: MoveOrder) -> Self {
        Self {
            game: Game::with_order(order),
            cursor: Position::Center,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Renders the current game.
    pub fn view(&self) -> GameView {
        GameView::render(&self.game)
    }

    /// Applies one key press.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let cell = c.to_digit(10).and_then(|d| Position::try_from(d as usize - 1).ok());
                if let Some(pos) = cell {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            KeyCode::Char('[') | KeyCode::PageUp => {
                let _ = self.game.step_back();
            }
            KeyCode::Char(']') | KeyCode::PageDown => {
                let _ = self.game.step_forward();
            }
            KeyCode::Home => self.game.jump_to(0),
            KeyCode::End => self.game.jump_to(self.game.history().len() - 1),
            KeyCode::Char('o') => self.game.toggle_order(),
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
        Control::Continue
    }

    fn place(&mut self, pos: Position) {
        // Ignored placements leave the game as it was.
        let _ = self.game.place_mark(pos);
    }

    /// Starts over, keeping the move list order.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = Game::with_order(self.game.order());
        self.cursor = Position::Center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Mark, Status};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), Control::Continue);
        }
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = App::new(MoveOrder::Ascending);
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('4'),
                KeyCode::Char('2'),
                KeyCode::Char('5'),
                KeyCode::Char('3'),
            ],
        );
        assert_eq!(app.game().status(), Status::Winner(Mark::X));
        assert_eq!(app.cursor(), Position::TopRight);
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = App::new(MoveOrder::Ascending);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.game().current().mark(Position::TopLeft), Some(Mark::X));
    }

    #[test]
    fn test_history_navigation() {
        let mut app = App::new(MoveOrder::Ascending);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1'), KeyCode::Char('9')]);

        press(&mut app, &[KeyCode::Char('[')]);
        assert_eq!(app.game().step(), 2);
        press(&mut app, &[KeyCode::Home]);
        assert_eq!(app.game().step(), 0);
        press(&mut app, &[KeyCode::PageDown]);
        assert_eq!(app.game().step(), 1);
        press(&mut app, &[KeyCode::End]);
        assert_eq!(app.game().step(), 3);
        assert_eq!(app.game().history().len(), 4);
    }

    #[test]
    fn test_order_toggle_and_restart() {
        let mut app = App::new(MoveOrder::Ascending);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('o')]);
        assert_eq!(app.view().moves[0].step, 1);

        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.game().order(), MoveOrder::Descending);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(MoveOrder::Ascending);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
    }
}
