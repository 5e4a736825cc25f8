//! Ledger repository for the internal cash-ledger catalog.

use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use cashbook_core::ledger::{CashLedger, LedgerNo, cash_ledgers};
use cashbook_shared::Currency;

use crate::entities::ledgers;

/// Error types for ledger catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Ledger not found.
    #[error("ledger '{0}' not found")]
    NotFound(String),

    /// A stored row could not be decoded into a domain value.
    #[error("corrupt ledger row: {0}")]
    Decode(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Repository for the cash-ledger catalog.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the configured cash ledgers if they do not exist yet.
    ///
    /// Idempotent: ledgers that already exist are left untouched, so
    /// concurrent bootstraps converge on one ledger per currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create_ledgers_if_not_exist(&self) -> Result<(), LedgerError> {
        for ledger in cash_ledgers() {
            let model = ledgers::ActiveModel {
                ledger_no: Set(ledger.ledger_no.as_str().to_owned()),
                account_type: Set(ledger.account_type.into()),
                currency: Set(ledger.currency.code().to_owned()),
                name: Set(ledger.name.clone()),
            };

            ledgers::Entity::insert(model)
                .on_conflict(
                    OnConflict::column(ledgers::Column::LedgerNo)
                        .do_nothing()
                        .to_owned(),
                )
                .do_nothing()
                .exec(&self.db)
                .await?;
        }

        Ok(())
    }

    /// Fetches a ledger by number.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such ledger exists.
    pub async fn get_ledger(&self, ledger_no: &LedgerNo) -> Result<CashLedger, LedgerError> {
        let model = ledgers::Entity::find_by_id(ledger_no.as_str())
            .one(&self.db)
            .await?
            .ok_or_else(|| LedgerError::NotFound(ledger_no.to_string()))?;

        decode_ledger(&model)
    }

    /// Lists all ledgers, ordered by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_ledgers(&self) -> Result<Vec<CashLedger>, LedgerError> {
        let models = ledgers::Entity::find()
            .order_by_asc(ledgers::Column::LedgerNo)
            .all(&self.db)
            .await?;

        models.iter().map(decode_ledger).collect()
    }
}

fn decode_ledger(model: &ledgers::Model) -> Result<CashLedger, LedgerError> {
    let currency = model.currency.parse::<Currency>().map_err(LedgerError::Decode)?;

    Ok(CashLedger {
        ledger_no: LedgerNo::from_raw(model.ledger_no.clone()),
        account_type: model.account_type.clone().into(),
        currency,
        name: model.name.clone(),
    })
}
