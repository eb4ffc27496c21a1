//! Pure tic-tac-toe game logic with move history and replay.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection on a single board snapshot
//! - **Game**: history of snapshots, step pointer and move list order
//! - **View**: pure render of a game into plain data for any frontend
//! - **Settings**: TOML-backed frontend settings
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameView, Position, Status, Mark};
//!
//! let mut game = Game::new();
//! for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter,
//!             Position::Center, Position::TopRight] {
//!     let _ = game.place_mark(pos);
//! }
//! assert_eq!(game.status(), Status::Winner(Mark::X));
//!
//! game.jump_to(0);
//! let view = GameView::render(&game);
//! assert_eq!(view.status.to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod settings;
mod types;
mod view;

pub use action::Move;
pub use contracts::{Contract, ContractViolation, JumpContract, PlaceContract};
pub use game::{Game, Ignored, MoveOrder, Placement, Status};
pub use position::{Position, PositionError};
pub use rules::{Line, detect_line, winner};
pub use settings::{ConfigError, Settings};
pub use types::{Board, Cell, Mark};
pub use view::{BoardView, CellView, GameView, MoveEntry};
