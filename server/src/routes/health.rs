use axum::{extract::State, routing::get, Json, Router};
use tracing::warn;

use crate::{dto::HealthResponse, error::AppError, state::SharedState};

pub fn router() -> Router<SharedState> {
    Router::new().route("/healthcheck", get(healthcheck))
}

/// Ping the store; an unreachable store answers 503.
pub async fn healthcheck(
    State(state): State<SharedState>,
) -> Result<Json<HealthResponse>, AppError> {
    if let Err(err) = state.ledger().health_check().await {
        warn!(error = %err, "storage health check failed");
        return Err(err.into());
    }
    Ok(Json(HealthResponse::ok()))
}
