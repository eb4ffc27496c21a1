//! Browser frontend for tic-tac-toe with move history and replay.
//!
//! Components read a [`GameView`](tictactoe_core::GameView) memo and write
//! through the game's operations; they never touch the history directly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod components;
mod logging;
mod mount;

pub use components::{Board, Game, Square};
pub use logging::{ConsoleWriter, init_logging};
pub use mount::{MountError, mount};
