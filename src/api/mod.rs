//! The REST surface: routes, request/response bodies, and the error body.

mod error;
mod routes;
mod types;

pub use error::{ApiError, SubError};
pub use routes::router;
pub use types::{
    AllGamesResponse, ApiMove, GameResponse, MoveRequest, MovesQuery, MovesResponse,
    NewGameRequest, NewGameResponse, NewMoveResponse,
};
