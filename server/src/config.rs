//! Server configuration: CLI flags, environment, then an optional YAML file.

use std::{
    env, fs,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use database::DatabaseConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;
use types::{BlankName, PlayerName};

/// Environment variable naming the YAML config file.
const CONFIG_PATH_ENV: &str = "LEDGER_CONFIG";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid seed player: {0}")]
    Seed(#[from] BlankName),
}

/// YAML representation of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub database_url: Option<String>,
    pub port: Option<u16>,
    #[serde(default)]
    pub seed_players: Vec<String>,
}

impl FileConfig {
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Resolve the config file path taking the environment override into account.
pub fn resolve_config_path(cli_arg: Option<PathBuf>) -> Option<PathBuf> {
    cli_arg.or_else(|| {
        env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .filter(|path| !path.as_os_str().is_empty())
    })
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database: DatabaseConfig,
    pub addr: SocketAddr,
    pub seed_players: Vec<PlayerName>,
}

impl ServerConfig {
    pub fn resolve(
        database_url: Option<String>,
        port: Option<u16>,
        file: FileConfig,
    ) -> Result<Self, ConfigError> {
        let database = DatabaseConfig::from_cli_or_env_or_yaml(database_url, file.database_url);

        let port = port
            .or_else(|| env::var("PORT").ok().and_then(|value| value.parse().ok()))
            .or(file.port)
            .unwrap_or(DEFAULT_PORT);

        let seed_players = file
            .seed_players
            .into_iter()
            .map(PlayerName::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            database,
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            seed_players,
        })
    }
}
