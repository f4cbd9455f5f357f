use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("player name must not be blank")]
pub struct BlankName;

/// A player display name. Case-sensitive and never blank; stored exactly as given.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = BlankName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(BlankName);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for PlayerName {
    type Error = BlankName;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<PlayerName> for String {
    fn from(value: PlayerName) -> Self {
        value.0
    }
}

impl Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID {}: {}", self.id, self.name)
    }
}

/// Result of inserting a player name. A duplicate name is not a failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddPlayerOutcome {
    Created(PlayerId),
    AlreadyExists,
}

impl AddPlayerOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, AddPlayerOutcome::Created(_))
    }

    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            AddPlayerOutcome::Created(id) => Some(*id),
            AddPlayerOutcome::AlreadyExists => None,
        }
    }
}
