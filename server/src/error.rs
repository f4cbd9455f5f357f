use axum::{http::StatusCode, response::IntoResponse, Json};
use database::LedgerError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use types::{BlankName, InvalidGame};

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input that fails domain validation.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// The store cannot be reached.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Any other store failure, including an unresolved player.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BlankName> for AppError {
    fn from(err: BlankName) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<InvalidGame> for AppError {
    fn from(err: InvalidGame) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        if err.is_unavailable() {
            AppError::ServiceUnavailable(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_requests() {
        assert_eq!(AppError::from(BlankName).status(), StatusCode::BAD_REQUEST);
        let err = AppError::from(InvalidGame::SelfPlay("Izzy".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "bad request: Izzy cannot play against themselves"
        );
    }

    #[test]
    fn test_ledger_errors_map_to_server_errors() {
        let unavailable = AppError::from(LedgerError::Connection("pool closed".into()));
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let unresolved = AppError::from(LedgerError::UnresolvedPlayer("Eve".into()));
        assert_eq!(unresolved.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let query = AppError::from(LedgerError::Query("syntax error".into()));
        assert_eq!(query.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = AppError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
