//! HTTP surface of the match ledger, shared by the server binary and integration tests.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

/// Player, game, leaderboard and health routes over `state`, open to any origin
/// and traced per request.
pub fn build_router(state: state::SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
