use types::{GameId, GameRecord, Player, PlayerId, Standing};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerRow {
    pub id: i64,
    pub name: String,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Player {
            id: PlayerId::new(row.id),
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GameRow {
    pub id: i64,
    pub player1: String,
    pub player2: String,
    pub score_p1: i64,
    pub score_p2: i64,
    pub winner: Option<String>,
}

impl From<GameRow> for GameRecord {
    fn from(row: GameRow) -> Self {
        GameRecord {
            id: GameId::new(row.id),
            player1: row.player1,
            player2: row.player2,
            score_p1: row.score_p1,
            score_p2: row.score_p2,
            winner: row.winner,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StandingRow {
    pub name: String,
    pub wins: i64,
}

impl From<StandingRow> for Standing {
    fn from(row: StandingRow) -> Self {
        Standing {
            name: row.name,
            wins: row.wins,
        }
    }
}
