//! Account management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use cashbook_core::account::Account;
use cashbook_db::{AccountRepository, PostingEngine};
use cashbook_shared::{AccountId, AppError, Currency};

use crate::AppState;
use crate::routes::{app_error_from_account, app_error_from_posting, error_response};

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(create_account).get(list_accounts))
        .route("/accounts/{account_id}", get(get_account))
        .route("/accounts/{account_id}/balance", get(get_balance))
}

/// Request body for creating an account.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Account identifier, 6-64 alphanumeric characters.
    pub account_id: AccountId,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// Response for a single account.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account identifier.
    pub account_id: AccountId,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// Response for the account listing.
#[derive(Debug, Serialize)]
pub struct AccountListResponse {
    /// All accounts, ordered by id.
    pub accounts: Vec<AccountResponse>,
}

/// Response for an account balance.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Account identifier.
    pub account_id: AccountId,
    /// Sum of deposits and received transfers.
    pub total_credit: String,
    /// Sum of withdrawals and sent transfers.
    pub total_debit: String,
    /// Current balance.
    pub current_balance: String,
    /// Timestamp of the latest entry, if any.
    pub ts: Option<String>,
}

/// POST `/accounts` - Create a new account.
async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountRequest>,
) -> Response {
    let repo = AccountRepository::new((*state.db).clone());
    let account = Account {
        account_id: payload.account_id,
        currency: payload.currency,
    };

    match repo.create_account(&account).await {
        Ok(()) => {
            info!(account_id = %account.account_id, currency = %account.currency, "account created");
            (
                StatusCode::CREATED,
                Json(AccountResponse {
                    account_id: account.account_id,
                    currency: account.currency,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to create account");
            error_response(&app_error_from_account(e))
        }
    }
}

/// GET `/accounts` - List all accounts.
async fn list_accounts(State(state): State<AppState>) -> Response {
    let repo = AccountRepository::new((*state.db).clone());

    match repo.list_accounts().await {
        Ok(accounts) => {
            let accounts = accounts
                .into_iter()
                .map(|a| AccountResponse {
                    account_id: a.account_id,
                    currency: a.currency,
                })
                .collect();
            Json(AccountListResponse { accounts }).into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to list accounts");
            error_response(&app_error_from_account(e))
        }
    }
}

/// GET `/accounts/{account_id}` - Get one account.
async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Response {
    let parsed = match account_id.parse::<AccountId>() {
        Ok(id) => id,
        Err(e) => {
            return error_response(&AppError::Validation(e.to_string()));
        }
    };

    let repo = AccountRepository::new((*state.db).clone());
    match repo.get_account(&parsed).await {
        Ok(account) => Json(AccountResponse {
            account_id: account.account_id,
            currency: account.currency,
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, account_id = %account_id, "failed to get account");
            error_response(&app_error_from_account(e))
        }
    }
}

/// GET `/accounts/{account_id}/balance` - Get an account's derived balance.
async fn get_balance(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Response {
    let engine = PostingEngine::new((*state.db).clone());

    match engine.account_balance(&account_id).await {
        Ok(balance) => Json(BalanceResponse {
            account_id: balance.account_id,
            total_credit: balance.total_credit.to_string(),
            total_debit: balance.total_debit.to_string(),
            current_balance: balance.current_balance.to_string(),
            ts: balance
                .ts
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Micros, true)),
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, account_id = %account_id, "failed to read balance");
            error_response(&app_error_from_posting(e))
        }
    }
}
