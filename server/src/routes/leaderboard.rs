use axum::{extract::State, routing::get, Json, Router};
use types::Standing;

use crate::{error::AppError, state::SharedState};

pub fn router() -> Router<SharedState> {
    Router::new().route("/leaderboard", get(leaderboard))
}

/// Return player standings sorted by number of wins, then by name.
pub async fn leaderboard(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Standing>>, AppError> {
    let standings = state.ledger().leaderboard().await?;
    Ok(Json(standings))
}
