use std::{cmp::Ordering, fmt::Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::PlayerName;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(i64);

impl GameId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGame {
    #[error("{0} cannot play against themselves")]
    SelfPlay(String),

    #[error("score {0} is out of range")]
    ScoreOutOfRange(i64),
}

/// Converts a raw wire score into a domain score.
pub fn parse_score(raw: i64) -> Result<u32, InvalidGame> {
    u32::try_from(raw).map_err(|_| InvalidGame::ScoreOutOfRange(raw))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Player1,
    Player2,
    Draw,
}

impl Outcome {
    pub fn from_scores(score_p1: u32, score_p2: u32) -> Self {
        match score_p1.cmp(&score_p2) {
            Ordering::Greater => Outcome::Player1,
            Ordering::Less => Outcome::Player2,
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// Picks the winning side out of a pair, `None` on a draw.
    pub fn pick<T>(self, player1: T, player2: T) -> Option<T> {
        match self {
            Outcome::Player1 => Some(player1),
            Outcome::Player2 => Some(player2),
            Outcome::Draw => None,
        }
    }
}

/// A finished game as submitted for recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    player1: PlayerName,
    player2: PlayerName,
    score_p1: u32,
    score_p2: u32,
}

impl GameResult {
    pub fn new(
        player1: PlayerName,
        player2: PlayerName,
        score_p1: u32,
        score_p2: u32,
    ) -> Result<Self, InvalidGame> {
        if player1 == player2 {
            return Err(InvalidGame::SelfPlay(player1.into_inner()));
        }
        Ok(Self {
            player1,
            player2,
            score_p1,
            score_p2,
        })
    }

    pub fn player1(&self) -> &PlayerName {
        &self.player1
    }

    pub fn player2(&self) -> &PlayerName {
        &self.player2
    }

    pub fn score_p1(&self) -> u32 {
        self.score_p1
    }

    pub fn score_p2(&self) -> u32 {
        self.score_p2
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_scores(self.score_p1, self.score_p2)
    }

    pub fn winner(&self) -> Option<&PlayerName> {
        self.outcome().pick(&self.player1, &self.player2)
    }
}

/// A stored game with player names resolved.
///
/// Scores are kept as stored; rows written before scores were validated may hold
/// negative values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub player1: String,
    pub player2: String,
    pub score_p1: i64,
    pub score_p2: i64,
    pub winner: Option<String>,
}

impl Display for GameRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game {}: {} ({}) vs {} ({}) - Winner: {}",
            self.id,
            self.player1,
            self.score_p1,
            self.player2,
            self.score_p2,
            self.winner.as_deref().unwrap_or("Draw")
        )
    }
}
