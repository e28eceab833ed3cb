//! Route table and handlers for the Drop Token REST surface.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::instrument;

use crate::api::error::{ApiError, SubError};
use crate::api::types::{
    AllGamesResponse, ApiMove, GameResponse, MoveRequest, MovesQuery, MovesResponse,
    NewGameRequest, NewGameResponse, NewMoveResponse,
};
use crate::game::{MoveError, PlayerId, QuitPolicy};
use crate::store::{GameId, SessionStore};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
struct ApiState {
    store: SessionStore,
    quit_policy: QuitPolicy,
}

/// Builds the Drop Token router on top of `store`, resolving quits
/// according to `quit_policy`.
pub fn router(store: SessionStore, quit_policy: QuitPolicy) -> Router {
    let state = ApiState { store, quit_policy };
    Router::new()
        .route("/drop_token", get(list_games).post(new_game))
        .route("/drop_token/{id}", get(get_game))
        .route("/drop_token/{id}/moves", get(list_moves))
        .route("/drop_token/{id}/moves/{number}", get(get_move))
        .route("/drop_token/{id}/{player}", post(new_move).delete(quit_game))
        .with_state(state)
}

#[instrument(skip(state))]
async fn list_games(State(state): State<ApiState>) -> Json<AllGamesResponse> {
    let games = state.store.ids().into_iter().map(|id| id.to_string()).collect();
    Json(AllGamesResponse::new(games))
}

#[instrument(skip(state, request))]
async fn new_game(
    State(state): State<ApiState>,
    Json(request): Json<NewGameRequest>,
) -> Result<Json<NewGameResponse>, ApiError> {
    let players = request.validate().map_err(ApiError::validation)?;
    let id = state.store.create(players);
    Ok(Json(NewGameResponse::new(id.to_string())))
}

#[instrument(skip(state))]
async fn get_game(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    let game = parse_id(&id)?;
    let session = state.store.snapshot(game).ok_or_else(not_found)?;
    Ok(Json(GameResponse::from(&session)))
}

#[instrument(skip(state, request))]
async fn new_move(
    State(state): State<ApiState>,
    Path((id, player)): Path<(String, PlayerId)>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<NewMoveResponse>, ApiError> {
    let game = parse_id(&id)?;
    // Negative columns map past the board edge and fail the bounds check.
    let column = usize::try_from(request.column).unwrap_or(usize::MAX);
    let number = state
        .store
        .apply_move(game, &player, column)
        .map_err(|error| move_error(error, &player))?;
    Ok(Json(NewMoveResponse::new(format!("{id}/moves/{number}"))))
}

#[instrument(skip(state))]
async fn quit_game(
    State(state): State<ApiState>,
    Path((id, player)): Path<(String, PlayerId)>,
) -> Result<StatusCode, ApiError> {
    let game = parse_id(&id)?;
    state
        .store
        .apply_quit(game, &player, state.quit_policy)
        .map_err(|error| match error {
            MoveError::IllegalMove => ApiError::new(StatusCode::GONE, "Game is already done"),
            MoveError::OutOfTurn | MoveError::NotFound => not_found(),
        })?;
    Ok(StatusCode::ACCEPTED)
}

#[instrument(skip(state))]
async fn list_moves(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Query(query): Query<MovesQuery>,
) -> Result<Json<MovesResponse>, ApiError> {
    let game = parse_id(&id)?;
    let (start, until) = validate_window(&query)?;
    let moves = state
        .store
        .moves_range(game, start, until)
        .map_err(|_| not_found())?;
    Ok(Json(MovesResponse::new(
        moves.into_iter().map(ApiMove::from).collect(),
    )))
}

#[instrument(skip(state))]
async fn get_move(
    State(state): State<ApiState>,
    Path((id, number)): Path<(String, String)>,
) -> Result<Json<ApiMove>, ApiError> {
    let game = parse_id(&id)?;
    let number: usize = number.parse().map_err(|_| not_found())?;
    let record = state.store.move_at(game, number).map_err(|_| not_found())?;
    Ok(Json(ApiMove::from(record)))
}

/// Resolves a path segment into a session id; anything that does not parse
/// cannot name a live session.
fn parse_id(id: &str) -> Result<GameId, ApiError> {
    id.parse().map_err(|_| not_found())
}

fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not Found")
}

/// Maps engine rejections onto REST statuses.
fn move_error(error: MoveError, player: &str) -> ApiError {
    match error {
        MoveError::IllegalMove => ApiError::new(StatusCode::BAD_REQUEST, "Illegal Move"),
        MoveError::OutOfTurn => {
            ApiError::new(StatusCode::CONFLICT, format!("It is not {player}'s turn"))
        }
        MoveError::NotFound => not_found(),
    }
}

/// Checks the window bounds for sign and order before they reach the log.
fn validate_window(query: &MovesQuery) -> Result<(usize, Option<usize>), ApiError> {
    let mut errors = Vec::new();
    let start = match query.start.map(usize::try_from) {
        None => 0,
        Some(Ok(start)) => start,
        Some(Err(_)) => {
            errors.push(SubError::new("start", "start must not be negative"));
            0
        }
    };
    let until = match query.until.map(usize::try_from) {
        None => None,
        Some(Ok(until)) => Some(until),
        Some(Err(_)) => {
            errors.push(SubError::new("until", "until must not be negative"));
            None
        }
    };
    if let Some(until) = until {
        if until < start {
            errors.push(SubError::new("until", "until must not precede start"));
        }
    }
    if errors.is_empty() {
        Ok((start, until))
    } else {
        Err(ApiError::validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_defaults_to_full_log() {
        let (start, until) = validate_window(&MovesQuery::default()).unwrap();
        assert_eq!(start, 0);
        assert_eq!(until, None);
    }

    #[test]
    fn test_window_rejects_negative_bounds() {
        let query = MovesQuery {
            start: Some(-1),
            until: Some(-3),
        };
        let error = validate_window(&query).unwrap_err();
        assert_eq!(*error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.errors().len(), 2);
    }

    #[test]
    fn test_window_rejects_reversed_bounds() {
        let query = MovesQuery {
            start: Some(3),
            until: Some(1),
        };
        let error = validate_window(&query).unwrap_err();
        assert_eq!(*error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.errors().len(), 1);
    }
}
