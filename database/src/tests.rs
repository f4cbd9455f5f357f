#[cfg(test)]
mod database_tests {
    use crate::*;
    use types::{AddPlayerOutcome, GameResult, PlayerId, PlayerName, Standing};

    pub async fn setup_test_db() -> SqliteLedger {
        let pool = DatabaseConfig::in_memory()
            .create_pool()
            .await
            .expect("Failed to create test database pool");
        let ledger = SqliteLedger::new(pool);
        ledger
            .init_schema()
            .await
            .expect("Failed to create test schema");
        ledger
    }

    fn name(s: &str) -> PlayerName {
        PlayerName::try_from(s).expect("valid player name")
    }

    fn game(p1: &str, p2: &str, s1: u32, s2: u32) -> GameResult {
        GameResult::new(name(p1), name(p2), s1, s2).expect("valid game")
    }

    fn standing(name: &str, wins: i64) -> Standing {
        Standing {
            name: name.to_string(),
            wins,
        }
    }

    async fn count(ledger: &SqliteLedger, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(ledger.pool())
            .await
            .expect("Failed to count rows")
    }

    #[tokio::test]
    async fn test_add_player_twice_keeps_one_row() {
        let ledger = setup_test_db().await;

        let first = ledger
            .add_player(&name("Austin"))
            .await
            .expect("Failed to add player");
        let second = ledger
            .add_player(&name("Austin"))
            .await
            .expect("Duplicate add should not fail");

        assert!(first.is_created());
        assert_eq!(second, AddPlayerOutcome::AlreadyExists);
        assert_eq!(count(&ledger, "players").await, 1);
        assert_eq!(
            ledger.get_player_by_name("Austin").await.unwrap(),
            first.player_id()
        );
    }

    #[tokio::test]
    async fn test_duplicates_do_not_consume_ids() {
        let ledger = setup_test_db().await;

        ledger.add_player(&name("Austin")).await.unwrap();
        ledger.add_player(&name("Austin")).await.unwrap();
        let donna = ledger.add_player(&name("Donna")).await.unwrap();
        assert_eq!(donna.player_id(), Some(PlayerId::new(2)));

        ledger
            .record_game(&game("Austin", "Donna", 35, 30))
            .await
            .unwrap();
        let jay = ledger.add_player(&name("Jay")).await.unwrap();
        assert_eq!(jay.player_id(), Some(PlayerId::new(3)));

        let ids: Vec<i64> = ledger
            .get_players()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id.as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_get_games_tolerates_negative_legacy_scores() {
        let ledger = setup_test_db().await;
        ledger.add_player(&name("Austin")).await.unwrap();
        ledger.add_player(&name("Donna")).await.unwrap();
        sqlx::query(
            "INSERT INTO games (player1_id, player2_id, winner_id, score_p1, score_p2)
             VALUES (1, 2, 2, -5, 10)",
        )
        .execute(ledger.pool())
        .await
        .expect("Failed to insert legacy row");

        let games = ledger.get_games().await.expect("Legacy rows should load");

        assert_eq!((games[0].score_p1, games[0].score_p2), (-5, 10));
        assert_eq!(games[0].winner.as_deref(), Some("Donna"));
    }

    #[tokio::test]
    async fn test_names_are_case_sensitive() {
        let ledger = setup_test_db().await;

        let upper = ledger.add_player(&name("Donna")).await.unwrap();
        let lower = ledger.add_player(&name("donna")).await.unwrap();

        assert!(upper.is_created());
        assert!(lower.is_created());
        assert_ne!(upper.player_id(), lower.player_id());
    }

    #[tokio::test]
    async fn test_get_players_in_insertion_order() {
        let ledger = setup_test_db().await;
        for player in ["Jay", "Kimberly", "Austin"] {
            ledger.add_player(&name(player)).await.unwrap();
        }

        let players = ledger.get_players().await.expect("Failed to list players");
        let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Jay", "Kimberly", "Austin"]);
        assert!(players.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_get_player_by_name_missing() {
        let ledger = setup_test_db().await;
        assert_eq!(ledger.get_player_by_name("Nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_record_game_creates_missing_players() {
        let ledger = setup_test_db().await;

        let game_id = ledger
            .record_game(&game("Eve", "Frank", 20, 45))
            .await
            .expect("Failed to record game");

        assert!(game_id.as_i64() > 0);
        assert_eq!(count(&ledger, "players").await, 2);
        assert_eq!(count(&ledger, "games").await, 1);

        let games = ledger.get_games().await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, game_id);
        assert_eq!(games[0].winner.as_deref(), Some("Frank"));
    }

    #[tokio::test]
    async fn test_record_game_reuses_existing_players() {
        let ledger = setup_test_db().await;
        let austin = ledger.add_player(&name("Austin")).await.unwrap();

        ledger
            .record_game(&game("Austin", "Donna", 35, 30))
            .await
            .unwrap();

        assert_eq!(count(&ledger, "players").await, 2);
        let winner_id: Option<i64> = sqlx::query_scalar("SELECT winner_id FROM games")
            .fetch_one(ledger.pool())
            .await
            .unwrap();
        assert_eq!(winner_id, austin.player_id().map(|id| id.as_i64()));
    }

    #[tokio::test]
    async fn test_winner_is_null_only_for_draws() {
        let ledger = setup_test_db().await;
        let games = [
            game("Austin", "Donna", 35, 30),
            game("Jay", "Kimberly", 32, 32),
            game("Izzy", "Adrian", 33, 34),
            game("Austin", "Jay", 0, 0),
        ];
        for g in &games {
            ledger.record_game(g).await.unwrap();
        }

        let stored: Vec<(i64, i64, Option<i64>, i64, i64)> = sqlx::query_as(
            "SELECT player1_id, player2_id, winner_id, score_p1, score_p2 FROM games ORDER BY id",
        )
        .fetch_all(ledger.pool())
        .await
        .unwrap();

        assert_eq!(stored.len(), games.len());
        for (p1, p2, winner, s1, s2) in stored {
            match winner {
                None => assert_eq!(s1, s2),
                Some(w) if s1 > s2 => assert_eq!(w, p1),
                Some(w) => {
                    assert!(s2 > s1);
                    assert_eq!(w, p2);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_get_games_reports_draws() {
        let ledger = setup_test_db().await;
        ledger
            .record_game(&game("Jay", "Kimberly", 32, 32))
            .await
            .unwrap();

        let games = ledger.get_games().await.unwrap();
        assert_eq!(games[0].winner, None);
        assert_eq!(games[0].player1, "Jay");
        assert_eq!(games[0].player2, "Kimberly");
        assert_eq!((games[0].score_p1, games[0].score_p2), (32, 32));
    }

    #[tokio::test]
    async fn test_leaderboard_orders_by_wins_then_name() {
        let ledger = setup_test_db().await;
        for g in [
            game("Bob", "Dave", 40, 24),
            game("Alice", "Dave", 50, 14),
            game("Carol", "Dave", 33, 31),
            game("Bob", "Carol", 36, 28),
            game("Alice", "Carol", 60, 4),
        ] {
            ledger.record_game(&g).await.unwrap();
        }

        let standings = ledger.leaderboard().await.unwrap();

        assert_eq!(
            standings,
            vec![
                standing("Alice", 2),
                standing("Bob", 2),
                standing("Carol", 1),
                standing("Dave", 0),
            ]
        );
    }

    #[tokio::test]
    async fn test_leaderboard_lists_players_without_games() {
        let ledger = setup_test_db().await;
        ledger.add_player(&name("Zed")).await.unwrap();
        ledger
            .record_game(&game("Jay", "Kimberly", 30, 30))
            .await
            .unwrap();

        let standings = ledger.leaderboard().await.unwrap();

        assert_eq!(
            standings,
            vec![
                standing("Jay", 0),
                standing("Kimberly", 0),
                standing("Zed", 0),
            ]
        );
    }

    #[tokio::test]
    async fn test_austin_and_donna_scenario() {
        let ledger = setup_test_db().await;
        ledger
            .record_game(&game("Austin", "Donna", 35, 30))
            .await
            .unwrap();

        let players = ledger.get_players().await.unwrap();
        assert!(players.iter().any(|p| p.name == "Austin"));
        assert!(players.iter().any(|p| p.name == "Donna"));

        let standings = ledger.leaderboard().await.unwrap();
        assert_eq!(
            standings,
            vec![standing("Austin", 1), standing("Donna", 0)]
        );
    }

    #[tokio::test]
    async fn test_seed_players_counts_new_rows() {
        let ledger = setup_test_db().await;
        ledger.add_player(&name("Austin")).await.unwrap();

        let created = ledger
            .seed_players(&[name("Austin"), name("Donna")])
            .await
            .unwrap();

        assert_eq!(created, 1);
        assert_eq!(count(&ledger, "players").await, 2);
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let ledger = setup_test_db().await;
        ledger.add_player(&name("Austin")).await.unwrap();

        ledger.init_schema().await.expect("Second init should succeed");

        assert_eq!(count(&ledger, "players").await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_adds_create_one_player() {
        let ledger = setup_test_db().await;
        let player = name("Kimberly");

        let (a, b, c) = tokio::join!(
            ledger.add_player(&player),
            ledger.add_player(&player),
            ledger.add_player(&player),
        );
        let outcomes = [a.unwrap(), b.unwrap(), c.unwrap()];

        assert_eq!(outcomes.iter().filter(|o| o.is_created()).count(), 1);
        assert_eq!(count(&ledger, "players").await, 1);
    }

    #[tokio::test]
    async fn test_health_check() {
        let ledger = setup_test_db().await;
        ledger.health_check().await.expect("Health check failed");
    }

    #[tokio::test]
    async fn test_closed_pool_is_unavailable() {
        let ledger = setup_test_db().await;
        ledger.pool().close().await;

        let err = ledger.get_players().await.unwrap_err();
        assert!(err.is_unavailable());
        assert!(ledger.health_check().await.unwrap_err().is_unavailable());
    }
}
