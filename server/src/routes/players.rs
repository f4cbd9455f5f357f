use axum::{extract::State, routing::post, Json, Router};
use types::{Player, PlayerName};

use crate::{
    dto::{AddPlayerRequest, MessageResponse},
    error::AppError,
    state::SharedState,
};

pub fn router() -> Router<SharedState> {
    Router::new().route("/players", post(add_player).get(get_players))
}

/// Add a player unless the name is taken; a taken name is still a success.
pub async fn add_player(
    State(state): State<SharedState>,
    Json(payload): Json<AddPlayerRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let name = PlayerName::try_from(payload.name)?;
    let outcome = state.ledger().add_player(&name).await?;
    Ok(Json(MessageResponse::player_added(&name, outcome)))
}

pub async fn get_players(State(state): State<SharedState>) -> Result<Json<Vec<Player>>, AppError> {
    let players = state.ledger().get_players().await?;
    Ok(Json(players))
}
