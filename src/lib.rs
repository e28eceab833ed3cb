//! Drop Token library - a 4x4 token-dropping game and its REST server
//!
//! Two players take turns dropping tokens into the columns of a 4x4 board;
//! four in a row wins. This library provides the game engine, an in-memory
//! session store, and an axum router exposing the game over HTTP.
//!
//! # Architecture
//!
//! - **Game**: board storage plus the session state machine and move log
//! - **Store**: concurrent in-memory sessions keyed by numeric id
//! - **Api**: REST routes, request/response bodies, and the error body
//! - **Config**: TOML server configuration with CLI overrides
//!
//! # Example
//!
//! ```
//! use drop_token::{GameSession, Status};
//!
//! let mut game = GameSession::new(["alice".to_owned(), "bob".to_owned()]);
//! game.apply_move("alice", 0)?;
//! game.apply_move("bob", 1)?;
//! assert_eq!(*game.status(), Status::InProgress);
//! assert_eq!(game.moves().len(), 2);
//! # Ok::<(), drop_token::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod cli;
mod config;
mod game;
mod store;

// Crate-level exports - REST surface
pub use api::{
    AllGamesResponse, ApiError, ApiMove, GameResponse, MoveRequest, MovesQuery, MovesResponse,
    NewGameRequest, NewGameResponse, NewMoveResponse, SubError, router,
};

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Game engine
pub use game::{
    BOARD_SIZE, Board, BoardOutcome, Cell, DropError, GameSession, MoveError, MoveKind,
    MoveRecord, PlayerId, QuitPolicy, Slot, Status,
};

// Crate-level exports - Session store
pub use store::{GameId, SessionStore};
