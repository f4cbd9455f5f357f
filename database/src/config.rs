use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const DEFAULT_DATABASE_URL: &str = "reversi.db";
pub const DEFAULT_POOL_SIZE: u32 = 20;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    pub fn from_cli_or_env_or_yaml(cli_arg: Option<String>, yaml_config: Option<String>) -> Self {
        let url = if let Some(arg) = cli_arg {
            arg
        } else if let Ok(env) = std::env::var("DATABASE_URL") {
            env
        } else if let Some(yaml) = yaml_config {
            yaml
        } else {
            DEFAULT_DATABASE_URL.to_string()
        };

        Self::new(url)
    }

    pub fn is_in_memory(&self) -> bool {
        self.url == ":memory:" || self.url.starts_with("sqlite::memory:")
    }

    pub async fn create_pool(&self) -> Result<sqlx::SqlitePool, sqlx::Error> {
        if self.is_in_memory() {
            // Each connection to :memory: is its own database, so keep exactly one alive.
            return SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
                .await;
        }

        let options = if self.url.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(&self.url)?
        } else {
            SqliteConnectOptions::new().filename(&self.url)
        };

        SqlitePoolOptions::new()
            .max_connections(self.pool_size)
            .connect_with(options.create_if_missing(true))
            .await
    }
}
