//! Balance repository backed by the `account_balances` view.
//!
//! Balances are derived by the view on every read, never cached. Reads
//! that gate a write run on the caller's posting transaction, after the
//! account row lock is held.

use rust_decimal::Decimal;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement,
    prelude::DateTimeWithTimeZone,
};

use cashbook_core::ledger::AccountBalance;
use cashbook_shared::AccountId;

/// Error types for balance reads.
#[derive(Debug, thiserror::Error)]
pub enum BalanceError {
    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

#[derive(Debug, FromQueryResult)]
struct BalanceRow {
    total_credit: Decimal,
    total_debit: Decimal,
    current_balance: Decimal,
    ts: Option<DateTimeWithTimeZone>,
}

const BALANCE_SQL: &str = r"
SELECT total_credit, total_debit, current_balance, ts
FROM account_balances
WHERE account_id = $1
";

/// Repository for derived account balances.
#[derive(Debug, Clone)]
pub struct BalanceRepository {
    db: DatabaseConnection,
}

impl BalanceRepository {
    /// Creates a new balance repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads an account's balance on the given connection or transaction.
    ///
    /// An account with no journal entries reads as the zero balance, not
    /// as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn balance_of<C: ConnectionTrait>(
        &self,
        conn: &C,
        account_id: &AccountId,
    ) -> Result<AccountBalance, BalanceError> {
        let row = BalanceRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            BALANCE_SQL,
            [account_id.as_str().into()],
        ))
        .one(conn)
        .await?;

        Ok(match row {
            Some(row) => AccountBalance {
                account_id: account_id.clone(),
                total_credit: row.total_credit,
                total_debit: row.total_debit,
                current_balance: row.current_balance,
                ts: row.ts,
            },
            None => AccountBalance::zero(account_id.clone()),
        })
    }

    /// Reads an account's current balance outside any posting transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn current_balance(&self, account_id: &AccountId) -> Result<AccountBalance, BalanceError> {
        self.balance_of(&self.db, account_id).await
    }
}
