//! Move log records for a Drop Token session.
//!
//! Moves are first-class domain events: the session appends one record per
//! accepted move, and the log is what the moves endpoints serve back out.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// What a recorded move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MoveKind {
    /// A token dropped into a column.
    #[serde(rename = "MOVE")]
    Place {
        /// The column the token was dropped into.
        column: usize,
    },
    /// A player withdrew from the game.
    #[serde(rename = "QUIT")]
    Quit,
}

/// One entry in a session's append-only move log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MoveRecord {
    /// 0-based position of the record in the log.
    number: usize,
    /// The player who acted.
    player: PlayerId,
    /// What the move did.
    #[serde(flatten)]
    kind: MoveKind,
}
