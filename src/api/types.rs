//! Request and response bodies for the REST API.

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::api::error::SubError;
use crate::game::{BOARD_SIZE, GameSession, MoveKind, MoveRecord, PlayerId, Status};

/// Body of `POST /drop_token`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewGameRequest {
    /// The two players, in joining order.
    pub players: Vec<PlayerId>,
    /// Requested board width; only 4 is supported.
    pub columns: i64,
    /// Requested board height; only 4 is supported.
    pub rows: i64,
}

impl NewGameRequest {
    /// Checks the request against the only supported configuration and
    /// returns the player pair.
    ///
    /// # Errors
    ///
    /// Returns one [`SubError`] per offending field.
    pub fn validate(&self) -> Result<[PlayerId; 2], Vec<SubError>> {
        let mut errors = Vec::new();
        if self.columns != BOARD_SIZE as i64 {
            errors.push(SubError::new("columns", format!("columns must be {BOARD_SIZE}")));
        }
        if self.rows != BOARD_SIZE as i64 {
            errors.push(SubError::new("rows", format!("rows must be {BOARD_SIZE}")));
        }
        match <[PlayerId; 2]>::try_from(self.players.clone()) {
            Ok(players) if errors.is_empty() => Ok(players),
            Ok(_) => Err(errors),
            Err(_) => {
                errors.push(SubError::new("players", "there must be exactly two players"));
                Err(errors)
            }
        }
    }
}

/// Body of `GET /drop_token`.
#[derive(Debug, Clone, Serialize, new)]
pub struct AllGamesResponse {
    games: Vec<String>,
}

/// Body of a successful `POST /drop_token`.
#[derive(Debug, Clone, Serialize, new)]
pub struct NewGameResponse {
    #[serde(rename = "gameId")]
    #[new(into)]
    game_id: String,
}

/// Body of `GET /drop_token/{id}`: the players plus the flattened status,
/// so `winner` appears only on finished games.
#[derive(Debug, Clone, Serialize, new)]
pub struct GameResponse {
    players: Vec<PlayerId>,
    #[serde(flatten)]
    state: Status,
}

impl From<&GameSession> for GameResponse {
    fn from(session: &GameSession) -> Self {
        Self::new(session.original_players().to_vec(), session.status().clone())
    }
}

/// Body of `POST /drop_token/{id}/{player}`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MoveRequest {
    /// Column to drop a token into.
    pub column: i64,
}

/// Body of a successful `POST /drop_token/{id}/{player}`: where the
/// recorded move can be fetched, as `{id}/moves/{number}`.
#[derive(Debug, Clone, Serialize, new)]
pub struct NewMoveResponse {
    #[serde(rename = "move")]
    #[new(into)]
    locator: String,
}

/// One move as exposed by the moves endpoints; sequence numbers stay
/// internal.
#[derive(Debug, Clone, Serialize)]
pub struct ApiMove {
    player: PlayerId,
    #[serde(flatten)]
    kind: MoveKind,
}

impl From<MoveRecord> for ApiMove {
    fn from(record: MoveRecord) -> Self {
        Self {
            player: record.player().clone(),
            kind: record.kind().clone(),
        }
    }
}

/// Body of `GET /drop_token/{id}/moves`.
#[derive(Debug, Clone, Serialize, new)]
pub struct MovesResponse {
    moves: Vec<ApiMove>,
}

/// Query bounds of `GET /drop_token/{id}/moves`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MovesQuery {
    /// First move number to return; defaults to the start of the log.
    pub start: Option<i64>,
    /// Last move number to return, inclusive; defaults to the latest move.
    pub until: Option<i64>,
}
