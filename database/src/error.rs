use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Query execution error: {0}")]
    Query(String),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Internal consistency error: player '{0}' could not be resolved after insert")]
    UnresolvedPlayer(String),
}

impl LedgerError {
    /// Classifies a statement failure, separating an unreachable store from a failed query.
    pub(crate) fn query(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                LedgerError::Connection(err.to_string())
            }
            other => LedgerError::Query(other.to_string()),
        }
    }

    pub(crate) fn transaction(err: sqlx::Error) -> Self {
        match LedgerError::query(err) {
            LedgerError::Query(message) => LedgerError::Transaction(message),
            other => other,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, LedgerError::Connection(_))
    }
}
