pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod repository;
pub mod schema;

#[cfg(test)]
mod tests;

pub use config::DatabaseConfig;
pub use error::LedgerError;
pub use ledger::MatchLedger;
pub use models::{GameRow, PlayerRow, StandingRow};
pub use repository::SqliteLedger;
