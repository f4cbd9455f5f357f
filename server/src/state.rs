use std::sync::Arc;

use database::MatchLedger;

pub type SharedState = Arc<AppState>;

/// State shared by every handler: the ledger the routes read and write.
pub struct AppState {
    ledger: Arc<dyn MatchLedger>,
}

impl AppState {
    pub fn new(ledger: Arc<dyn MatchLedger>) -> SharedState {
        Arc::new(Self { ledger })
    }

    pub fn ledger(&self) -> &dyn MatchLedger {
        self.ledger.as_ref()
    }
}
