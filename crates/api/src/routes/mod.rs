//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use cashbook_db::PostingError;
use cashbook_db::repositories::AccountError;
use cashbook_shared::AppError;

use crate::AppState;

pub mod accounts;
pub mod health;
pub mod payments;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(transactions::routes())
        .merge(payments::routes())
}

/// Maps an application error onto its HTTP response.
///
/// The body carries the machine-checkable code and a human-readable
/// message; storage detail never reaches the wire.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

pub(crate) fn app_error_from_posting(err: PostingError) -> AppError {
    match err {
        PostingError::Validation(e) => AppError::Validation(e.to_string()),
        PostingError::AccountNotFound(id) => AppError::NotFound(format!("account '{id}'")),
        PostingError::SendingAccountNotFound(id) => {
            AppError::NotFound(format!("sending account '{id}'"))
        }
        PostingError::ReceivingAccountNotFound(id) => {
            AppError::NotFound(format!("receiving account '{id}'"))
        }
        PostingError::DifferentCurrencies => {
            AppError::BusinessRule("accounts have different currencies".to_owned())
        }
        PostingError::InsufficientBalance => {
            AppError::BusinessRule("insufficient account balance".to_owned())
        }
        PostingError::Database(_) => AppError::Database("database operation failed".to_owned()),
    }
}

pub(crate) fn app_error_from_account(err: AccountError) -> AppError {
    match err {
        AccountError::DuplicateAccount(id) => AppError::Conflict(format!("account '{id}'")),
        AccountError::NotFound(id) => AppError::NotFound(format!("account '{id}'")),
        AccountError::Decode(_) | AccountError::Database(_) => {
            AppError::Database("database operation failed".to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashbook_core::ledger::ValidationError;

    #[test]
    fn test_posting_errors_map_to_expected_kinds() {
        let err = app_error_from_posting(PostingError::InsufficientBalance);
        assert_eq!(err.status_code(), 422);

        let err = app_error_from_posting(PostingError::DifferentCurrencies);
        assert_eq!(err.status_code(), 422);

        let err = app_error_from_posting(PostingError::AccountNotFound("johndoe".into()));
        assert_eq!(err.status_code(), 404);

        let err = app_error_from_posting(PostingError::Validation(ValidationError::ZeroAmount));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_account_errors_map_to_expected_kinds() {
        let err = app_error_from_account(AccountError::DuplicateAccount("johndoe".into()));
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "CONFLICT");

        let err = app_error_from_account(AccountError::NotFound("johndoe".into()));
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_database_detail_not_leaked() {
        let err = app_error_from_posting(PostingError::Database(sea_orm::DbErr::Custom(
            "SELECT * FROM secrets".to_owned(),
        )));
        assert!(!err.to_string().contains("SELECT"));
    }
}
