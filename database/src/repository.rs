use super::ledger::MatchLedger;
use super::models::*;
use super::schema::SCHEMA;
use super::{DatabaseConfig, LedgerError};
use sqlx::{SqliteConnection, SqlitePool};
use types::{
    AddPlayerOutcome, GameId, GameRecord, GameResult, Player, PlayerId, PlayerName, Standing,
};

pub struct SqliteLedger {
    pool: SqlitePool,
}

impl SqliteLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the pool described by `config` and makes sure both tables exist.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, LedgerError> {
        let pool = config
            .create_pool()
            .await
            .map_err(|e| LedgerError::Connection(e.to_string()))?;
        let ledger = Self::new(pool);
        ledger.init_schema().await?;
        Ok(ledger)
    }

    pub async fn init_schema(&self) -> Result<(), LedgerError> {
        let mut tx = self.pool.begin().await.map_err(LedgerError::transaction)?;
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(LedgerError::query)?;
        }
        tx.commit().await.map_err(LedgerError::transaction)?;
        tracing::info!("Ledger schema ready");
        Ok(())
    }

    /// Adds each name that is not present yet and returns how many were created.
    pub async fn seed_players(&self, names: &[PlayerName]) -> Result<usize, LedgerError> {
        let mut created = 0;
        for name in names {
            match self.add_player(name).await? {
                AddPlayerOutcome::Created(_) => created += 1,
                AddPlayerOutcome::AlreadyExists => {}
            }
        }
        Ok(created)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

async fn insert_player(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<AddPlayerOutcome, LedgerError> {
    // A rejected plain INSERT leaves the AUTOINCREMENT sequence untouched, unlike
    // ON CONFLICT DO NOTHING, so player ids stay dense.
    let result = match sqlx::query("INSERT INTO players (name) VALUES (?)")
        .bind(name)
        .execute(&mut *conn)
        .await
    {
        Ok(result) => result,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            tracing::debug!("Player '{}' already exists", name);
            return Ok(AddPlayerOutcome::AlreadyExists);
        }
        Err(e) => return Err(LedgerError::query(e)),
    };

    let id = PlayerId::new(result.last_insert_rowid());
    tracing::info!("Added player {} with id {}", name, id);
    Ok(AddPlayerOutcome::Created(id))
}

async fn find_player_id(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<PlayerId>, LedgerError> {
    let id = sqlx::query_scalar::<_, i64>("SELECT id FROM players WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(LedgerError::query)?;
    Ok(id.map(PlayerId::new))
}

async fn resolve_player_id(
    conn: &mut SqliteConnection,
    name: &PlayerName,
) -> Result<PlayerId, LedgerError> {
    find_player_id(conn, name.as_str())
        .await?
        .ok_or_else(|| LedgerError::UnresolvedPlayer(name.to_string()))
}

#[async_trait::async_trait]
impl MatchLedger for SqliteLedger {
    async fn add_player(&self, name: &PlayerName) -> Result<AddPlayerOutcome, LedgerError> {
        let mut conn = self.pool.acquire().await.map_err(LedgerError::query)?;
        insert_player(&mut conn, name.as_str()).await
    }

    async fn get_players(&self) -> Result<Vec<Player>, LedgerError> {
        let rows = sqlx::query_as::<_, PlayerRow>("SELECT id, name FROM players ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(LedgerError::query)?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn get_player_by_name(&self, name: &str) -> Result<Option<PlayerId>, LedgerError> {
        let mut conn = self.pool.acquire().await.map_err(LedgerError::query)?;
        find_player_id(&mut conn, name).await
    }

    async fn record_game(&self, game: &GameResult) -> Result<GameId, LedgerError> {
        let mut tx = self.pool.begin().await.map_err(LedgerError::transaction)?;

        insert_player(&mut tx, game.player1().as_str()).await?;
        insert_player(&mut tx, game.player2().as_str()).await?;

        let player1_id = resolve_player_id(&mut tx, game.player1()).await?;
        let player2_id = resolve_player_id(&mut tx, game.player2()).await?;
        let winner_id = game.outcome().pick(player1_id, player2_id);

        let result = sqlx::query(
            "INSERT INTO games (player1_id, player2_id, winner_id, score_p1, score_p2)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(player1_id.as_i64())
        .bind(player2_id.as_i64())
        .bind(winner_id.map(PlayerId::as_i64))
        .bind(game.score_p1())
        .bind(game.score_p2())
        .execute(&mut *tx)
        .await
        .map_err(LedgerError::query)?;

        tx.commit().await.map_err(LedgerError::transaction)?;

        let game_id = GameId::new(result.last_insert_rowid());
        tracing::info!(
            "Recorded game {}: {} ({}) vs {} ({}), winner: {}",
            game_id,
            game.player1(),
            game.score_p1(),
            game.player2(),
            game.score_p2(),
            game.winner().map(PlayerName::as_str).unwrap_or("draw")
        );
        Ok(game_id)
    }

    async fn get_games(&self) -> Result<Vec<GameRecord>, LedgerError> {
        let rows = sqlx::query_as::<_, GameRow>(
            "SELECT g.id, p1.name AS player1, p2.name AS player2,
                    g.score_p1, g.score_p2, pw.name AS winner
             FROM games g
             JOIN players p1 ON g.player1_id = p1.id
             JOIN players p2 ON g.player2_id = p2.id
             LEFT JOIN players pw ON g.winner_id = pw.id
             ORDER BY g.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(LedgerError::query)?;
        Ok(rows.into_iter().map(GameRecord::from).collect())
    }

    async fn leaderboard(&self) -> Result<Vec<Standing>, LedgerError> {
        let rows = sqlx::query_as::<_, StandingRow>(
            "SELECT p.name AS name, COUNT(g.winner_id) AS wins
             FROM players p
             LEFT JOIN games g ON p.id = g.winner_id
             GROUP BY p.id
             ORDER BY wins DESC, p.name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(LedgerError::query)?;
        Ok(rows.into_iter().map(Standing::from).collect())
    }

    async fn health_check(&self) -> Result<(), LedgerError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(LedgerError::query)?;
        Ok(())
    }
}
