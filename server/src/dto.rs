//! Request and response bodies of the HTTP surface.
//!
//! Listing endpoints serialize the domain types from `types` directly, since
//! `Player`, `GameRecord` and `Standing` already have the wire shape.

use serde::{Deserialize, Serialize};
use types::{parse_score, AddPlayerOutcome, GameResult, PlayerName};

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddPlayerRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordGameRequest {
    pub player1: String,
    pub player2: String,
    pub score_p1: i64,
    pub score_p2: i64,
}

impl RecordGameRequest {
    /// Validate names and scores and build the game to record.
    pub fn into_game(self) -> Result<GameResult, AppError> {
        let player1 = PlayerName::try_from(self.player1)?;
        let player2 = PlayerName::try_from(self.player2)?;
        let score_p1 = parse_score(self.score_p1)?;
        let score_p2 = parse_score(self.score_p2)?;
        Ok(GameResult::new(player1, player2, score_p1, score_p2)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn player_added(name: &PlayerName, outcome: AddPlayerOutcome) -> Self {
        match outcome {
            AddPlayerOutcome::Created(_) => Self::new(format!("Added {name}")),
            AddPlayerOutcome::AlreadyExists => Self::new(format!("{name} already exists")),
        }
    }

    pub fn game_recorded(game: &GameResult) -> Self {
        Self::new(format!(
            "Game recorded between {} and {}",
            game.player1(),
            game.player2()
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
