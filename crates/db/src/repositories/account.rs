//! Account repository for external customer accounts.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryOrder,
    QuerySelect, Set,
};

use cashbook_core::account::Account;
use cashbook_shared::{AccountId, Currency};

use crate::entities::accounts;

/// Error types for account operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Account id already exists.
    #[error("account '{0}' already exists")]
    DuplicateAccount(String),

    /// Account not found.
    #[error("account '{0}' not found")]
    NotFound(String),

    /// A stored row could not be decoded into a domain value.
    #[error("corrupt account row: {0}")]
    Decode(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Repository for account CRUD operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the id is already taken, or a database
    /// error.
    pub async fn create_account(&self, account: &Account) -> Result<(), AccountError> {
        if self.exists(&account.account_id).await? {
            return Err(AccountError::DuplicateAccount(
                account.account_id.to_string(),
            ));
        }

        let model = accounts::ActiveModel {
            account_id: Set(account.account_id.to_string()),
            currency: Set(account.currency.code().to_owned()),
            created_at: Set(Utc::now().into()),
        };
        model.insert(&self.db).await?;

        Ok(())
    }

    /// Fetches an account by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such account exists.
    pub async fn get_account(&self, account_id: &AccountId) -> Result<Account, AccountError> {
        let model = accounts::Entity::find_by_id(account_id.as_str())
            .one(&self.db)
            .await?
            .ok_or_else(|| AccountError::NotFound(account_id.to_string()))?;

        decode_account(&model)
    }

    /// Fetches an account inside a posting transaction, taking a
    /// `FOR UPDATE` lock on its row.
    ///
    /// The lock serializes balance-gated writes for the same account: a
    /// competing posting blocks here until the holder commits or rolls
    /// back.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such account exists.
    pub async fn lock_account(
        &self,
        txn: &DatabaseTransaction,
        account_id: &AccountId,
    ) -> Result<Account, AccountError> {
        let model = accounts::Entity::find_by_id(account_id.as_str())
            .lock_exclusive()
            .one(txn)
            .await?
            .ok_or_else(|| AccountError::NotFound(account_id.to_string()))?;

        decode_account(&model)
    }

    /// Returns true if the account exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn exists(&self, account_id: &AccountId) -> Result<bool, AccountError> {
        let found = accounts::Entity::find_by_id(account_id.as_str())
            .one(&self.db)
            .await?;
        Ok(found.is_some())
    }

    /// Lists all accounts, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AccountError> {
        let models = accounts::Entity::find()
            .order_by_asc(accounts::Column::AccountId)
            .all(&self.db)
            .await?;

        models.iter().map(decode_account).collect()
    }
}

fn decode_account(model: &accounts::Model) -> Result<Account, AccountError> {
    let account_id = model
        .account_id
        .parse::<AccountId>()
        .map_err(|e| AccountError::Decode(e.to_string()))?;
    let currency = model
        .currency
        .parse::<Currency>()
        .map_err(AccountError::Decode)?;

    Ok(Account {
        account_id,
        currency,
    })
}
