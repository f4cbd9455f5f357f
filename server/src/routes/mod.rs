use axum::Router;

use crate::state::SharedState;

pub mod games;
pub mod health;
pub mod leaderboard;
pub mod players;

/// Compose all route trees and wire in the shared state.
pub fn router(state: SharedState) -> Router<()> {
    health::router()
        .merge(players::router())
        .merge(games::router())
        .merge(leaderboard::router())
        .with_state(state)
}
