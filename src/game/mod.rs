//! The Drop Token game engine: board storage plus the session state machine.

mod board;
mod moves;
mod session;

pub use board::{Board, BoardOutcome, Cell, DropError, Slot};
pub use moves::{MoveKind, MoveRecord};
pub use session::{BOARD_SIZE, GameSession, MoveError, QuitPolicy, Status};

/// Name a player goes by within a session.
pub type PlayerId = String;
