use axum::{extract::State, routing::post, Json, Router};
use types::GameRecord;

use crate::{
    dto::{MessageResponse, RecordGameRequest},
    error::AppError,
    state::SharedState,
};

pub fn router() -> Router<SharedState> {
    Router::new().route("/games", post(record_game).get(get_games))
}

/// Record a finished game, creating either player on first appearance.
pub async fn record_game(
    State(state): State<SharedState>,
    Json(payload): Json<RecordGameRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let game = payload.into_game()?;
    state.ledger().record_game(&game).await?;
    Ok(Json(MessageResponse::game_recorded(&game)))
}

pub async fn get_games(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameRecord>>, AppError> {
    let games = state.ledger().get_games().await?;
    Ok(Json(games))
}
