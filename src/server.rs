//! REST API for the game server.
//!
//! A thin, mechanical mapping of endpoints onto store and engine calls.
//! All game logic lives in [`crate::game`]; all state lives in
//! [`crate::store::GameStore`], which the router carries as shared state.

use crate::game::{GameState, Player};
use crate::store::{GameError, GameId, GameStore, StoreError};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Request body for creating a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameRequest {
    /// Which player moves first. Defaults to X.
    #[serde(default)]
    pub starting_player: Option<Player>,
}

/// Request body for making a move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Board index (0-8), numbered left-to-right, top-to-bottom.
    pub index: usize,
}

/// Wire representation of one game state snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDto {
    /// Game identifier.
    pub id: GameId,
    /// Nine cells, row-major, `"X"`, `"O"`, or `null`.
    pub board: Vec<Option<Player>>,
    /// Player to move.
    pub current_player: Player,
    /// Winner, if the game has been won.
    pub winner: Option<Player>,
    /// Whether the game ended in a draw.
    pub is_draw: bool,
    /// Human-readable status line.
    pub status: String,
}

impl GameDto {
    /// Builds the DTO for one state snapshot.
    pub fn new(id: &str, state: &GameState) -> Self {
        Self {
            id: id.to_string(),
            board: state.board().squares().iter().map(|s| s.player()).collect(),
            current_player: state.current_player(),
            winner: state.winner(),
            is_draw: state.is_draw(),
            status: state.status_string(),
        }
    }
}

/// Response body for deleting a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Whether the game existed and was deleted.
    pub ok: bool,
    /// Reason for a failed delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Error body: `{"detail": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable failure message.
    pub detail: String,
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let body = Json(ErrorDetail {
            detail: self.to_string(),
        });
        (StatusCode::NOT_FOUND, body).into_response()
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        match self {
            GameError::Store(e) => e.into_response(),
            GameError::Move(e) => {
                let body = Json(ErrorDetail {
                    detail: e.to_string(),
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

/// Builds the application router over the given store.
pub fn router(store: GameStore) -> Router {
    Router::new()
        .route("/tictactoe/new", post(create_game))
        .route("/tictactoe/{id}", get(get_game).delete(delete_game))
        .route("/tictactoe/{id}/history", get(get_history))
        .route("/tictactoe/{id}/move", post(make_move))
        .with_state(store)
}

#[instrument(skip(store))]
async fn create_game(
    State(store): State<GameStore>,
    Json(req): Json<CreateGameRequest>,
) -> Json<GameDto> {
    let starting_player = req.starting_player.unwrap_or(Player::X);
    let (id, state) = store.create(starting_player);
    Json(GameDto::new(&id, &state))
}

#[instrument(skip(store))]
async fn get_game(
    State(store): State<GameStore>,
    Path(id): Path<GameId>,
) -> Result<Json<GameDto>, StoreError> {
    let state = store.get_latest(&id)?;
    Ok(Json(GameDto::new(&id, &state)))
}

#[instrument(skip(store))]
async fn get_history(
    State(store): State<GameStore>,
    Path(id): Path<GameId>,
) -> Result<Json<Vec<GameDto>>, StoreError> {
    let history = store.get_history(&id)?;
    debug!(game_id = %id, length = history.len(), "Returning history");
    let dtos = history.iter().map(|state| GameDto::new(&id, state)).collect();
    Ok(Json(dtos))
}

#[instrument(skip(store))]
async fn make_move(
    State(store): State<GameStore>,
    Path(id): Path<GameId>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<GameDto>, GameError> {
    let state = store.make_move(&id, req.index)?;
    info!(game_id = %id, index = req.index, board = %state.board(), "Move served");
    Ok(Json(GameDto::new(&id, &state)))
}

#[instrument(skip(store))]
async fn delete_game(
    State(store): State<GameStore>,
    Path(id): Path<GameId>,
) -> Json<DeleteResponse> {
    if store.delete(&id) {
        Json(DeleteResponse {
            ok: true,
            reason: None,
        })
    } else {
        Json(DeleteResponse {
            ok: false,
            reason: Some("not found".to_string()),
        })
    }
}
