//! Deposit and withdrawal routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;

use cashbook_db::PostingEngine;
use cashbook_shared::XactNo;

use crate::AppState;
use crate::routes::{app_error_from_posting, error_response};

/// Creates the deposit and withdrawal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw))
}

/// Request body for a deposit or withdrawal.
#[derive(Debug, Deserialize)]
pub struct CashRequest {
    /// The external customer account.
    pub account_id: String,
    /// Amount, must be strictly positive.
    pub amount: Decimal,
}

/// Response carrying the reference number of a posted transaction.
#[derive(Debug, Serialize)]
pub struct XactResponse {
    /// Reference number of the posting.
    pub xact_no: XactNo,
}

/// POST `/deposit` - Post a cash deposit.
async fn deposit(State(state): State<AppState>, Json(payload): Json<CashRequest>) -> Response {
    let engine = PostingEngine::new((*state.db).clone());

    match engine.make_deposit(&payload.account_id, payload.amount).await {
        Ok(xact_no) => (StatusCode::CREATED, Json(XactResponse { xact_no })).into_response(),
        Err(e) => {
            error!(error = %e, account_id = %payload.account_id, "deposit failed");
            error_response(&app_error_from_posting(e))
        }
    }
}

/// POST `/withdraw` - Post a cash withdrawal.
async fn withdraw(State(state): State<AppState>, Json(payload): Json<CashRequest>) -> Response {
    let engine = PostingEngine::new((*state.db).clone());

    match engine
        .make_withdrawal(&payload.account_id, payload.amount)
        .await
    {
        Ok(xact_no) => (StatusCode::CREATED, Json(XactResponse { xact_no })).into_response(),
        Err(e) => {
            error!(error = %e, account_id = %payload.account_id, "withdrawal failed");
            error_response(&app_error_from_posting(e))
        }
    }
}
