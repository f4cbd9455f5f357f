use anyhow::Context;
use clap::{Parser, Subcommand};
use database::{DatabaseConfig, MatchLedger, SqliteLedger};
use types::{AddPlayerOutcome, GameResult, PlayerName};

#[derive(Parser, Debug)]
struct Params {
    /// SQLite file or URL; falls back to $DATABASE_URL, then reversi.db.
    #[arg(long)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a player by name
    AddPlayer { name: String },
    /// Show current players with their ids
    Players,
    /// Record a game between two players, creating them if needed
    RecordGame {
        player1: String,
        player2: String,
        score_p1: u32,
        score_p2: u32,
    },
    /// Show all recorded games with scores
    Games,
    /// Show the leaderboard
    Leaderboard,
    /// Seed example players and games, then print everything
    Demo,
}

const DEMO_SEED_PLAYERS: [&str; 2] = ["Austin", "Donna"];
const DEMO_NEW_PLAYERS: [&str; 2] = ["Jay", "Kimberly"];
const DEMO_GAMES: [(&str, &str, u32, u32); 4] = [
    ("Austin", "Donna", 35, 30),
    ("Charlie", "Austin", 25, 40),
    ("Eve", "Dana", 20, 45),
    ("Izzy", "Adrian", 33, 32),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");

    let config = DatabaseConfig::from_cli_or_env_or_yaml(args.database_url, None);
    let ledger = SqliteLedger::connect(&config)
        .await
        .with_context(|| format!("opening database {}", config.url))?;

    match args.command {
        Command::AddPlayer { name } => add_player(&ledger, &name).await?,
        Command::Players => show_players(&ledger).await?,
        Command::RecordGame {
            player1,
            player2,
            score_p1,
            score_p2,
        } => record_game(&ledger, &player1, &player2, score_p1, score_p2).await?,
        Command::Games => show_games(&ledger).await?,
        Command::Leaderboard => show_leaderboard(&ledger).await?,
        Command::Demo => run_demo(&ledger).await?,
    }

    Ok(())
}

async fn add_player(ledger: &dyn MatchLedger, name: &str) -> anyhow::Result<()> {
    let name = PlayerName::try_from(name)?;
    match ledger.add_player(&name).await? {
        AddPlayerOutcome::Created(_) => println!("Added player: {name}"),
        AddPlayerOutcome::AlreadyExists => println!("Player '{name}' already exists."),
    }
    Ok(())
}

async fn record_game(
    ledger: &dyn MatchLedger,
    player1: &str,
    player2: &str,
    score_p1: u32,
    score_p2: u32,
) -> anyhow::Result<()> {
    let game = GameResult::new(
        PlayerName::try_from(player1)?,
        PlayerName::try_from(player2)?,
        score_p1,
        score_p2,
    )?;
    let game_id = ledger.record_game(&game).await?;
    println!("Game {game_id} recorded.");
    Ok(())
}

async fn show_players(ledger: &dyn MatchLedger) -> anyhow::Result<()> {
    println!("\nPlayers:");
    for player in ledger.get_players().await? {
        println!("{player}");
    }
    Ok(())
}

async fn show_games(ledger: &dyn MatchLedger) -> anyhow::Result<()> {
    println!("\nRecorded Games:");
    for game in ledger.get_games().await? {
        println!("{game}");
    }
    Ok(())
}

async fn show_leaderboard(ledger: &dyn MatchLedger) -> anyhow::Result<()> {
    println!("\nLeaderboard:");
    for standing in ledger.leaderboard().await? {
        println!("{standing}");
    }
    Ok(())
}

async fn run_demo(ledger: &SqliteLedger) -> anyhow::Result<()> {
    let seeds = DEMO_SEED_PLAYERS
        .iter()
        .map(|&name| PlayerName::try_from(name))
        .collect::<Result<Vec<_>, _>>()?;
    let created = ledger.seed_players(&seeds).await?;
    log::info!("seeded {created} example players");

    for name in DEMO_NEW_PLAYERS {
        add_player(ledger, name).await?;
    }
    show_players(ledger).await?;

    for (player1, player2, score_p1, score_p2) in DEMO_GAMES {
        record_game(ledger, player1, player2, score_p1, score_p2).await?;
    }
    show_games(ledger).await?;
    show_leaderboard(ledger).await?;
    Ok(())
}
