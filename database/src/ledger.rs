use async_trait::async_trait;
use types::{
    AddPlayerOutcome, GameId, GameRecord, GameResult, Player, PlayerId, PlayerName, Standing,
};

use crate::LedgerError;

/// Persistence of players and game results, and the standings derived from them.
#[async_trait]
pub trait MatchLedger: Send + Sync {
    /// Inserts `name` unless it is already taken. A taken name is `AlreadyExists`, not an error.
    async fn add_player(&self, name: &PlayerName) -> Result<AddPlayerOutcome, LedgerError>;

    async fn get_players(&self) -> Result<Vec<Player>, LedgerError>;

    async fn get_player_by_name(&self, name: &str) -> Result<Option<PlayerId>, LedgerError>;

    /// Creates any missing player, derives the winner and appends the game.
    async fn record_game(&self, game: &GameResult) -> Result<GameId, LedgerError>;

    async fn get_games(&self) -> Result<Vec<GameRecord>, LedgerError>;

    /// Win counts for every player, most wins first and ties by name.
    async fn leaderboard(&self) -> Result<Vec<Standing>, LedgerError>;

    async fn health_check(&self) -> Result<(), LedgerError>;
}
