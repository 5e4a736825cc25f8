//! Payment (transfer) routes.

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

use cashbook_core::ledger::Payment;
use cashbook_db::PostingEngine;
use cashbook_shared::XactNo;

use crate::AppState;
use crate::routes::{app_error_from_posting, error_response};

/// Creates the payment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payments", post(create_payment).get(list_payments))
}

/// Request body for a transfer between two accounts.
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    /// Sending account.
    pub from: String,
    /// Receiving account.
    pub to: String,
    /// Amount, must be strictly positive.
    pub amount: Decimal,
}

/// Response carrying the reference number shared by both transfer legs.
#[derive(Debug, Serialize)]
pub struct PaymentCreatedResponse {
    /// Reference number of the transfer.
    pub xact_no: XactNo,
}

/// Response for a payment listing.
#[derive(Debug, Serialize)]
pub struct PaymentListResponse {
    /// Paired transfer records in journal order.
    pub payments: Vec<Payment>,
}

/// POST `/payments` - Post a transfer between two accounts.
async fn create_payment(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentRequest>,
) -> Response {
    let engine = PostingEngine::new((*state.db).clone());

    match engine
        .make_transfer(&payload.from, &payload.to, payload.amount)
        .await
    {
        Ok(xact_no) => {
            (StatusCode::CREATED, Json(PaymentCreatedResponse { xact_no })).into_response()
        }
        Err(e) => {
            error!(
                error = %e,
                from = %payload.from,
                to = %payload.to,
                "transfer failed"
            );
            error_response(&app_error_from_posting(e))
        }
    }
}

/// GET `/payments` - List all transfers as paired payment records.
async fn list_payments(State(state): State<AppState>) -> Response {
    let engine = PostingEngine::new((*state.db).clone());

    match engine.list_transfers().await {
        Ok(payments) => Json(PaymentListResponse { payments }).into_response(),
        Err(e) => {
            error!(error = %e, "failed to list payments");
            error_response(&app_error_from_posting(e))
        }
    }
}
