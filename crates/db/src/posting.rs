//! Posting engine: the only writer of the transaction journal.
//!
//! Every posting runs inside one database transaction, so a failure at
//! any step leaves no partial entries behind. Balance-gated postings
//! (withdrawal, transfer) first take a `FOR UPDATE` lock on the paying
//! account's row, which serializes competing postings for that account
//! while leaving other accounts unaffected.

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tracing::info;

use cashbook_core::ledger::{
    AccountBalance, EntryType, ExternalEntryType, JournalEntry, NewJournalEntry, Payment,
    ValidationError, cash_ledger_no, payments_from_entries, validate_amount,
};
use cashbook_shared::{AccountId, XactNo};

use crate::repositories::{
    AccountError, AccountRepository, BalanceError, BalanceRepository, JournalError,
    JournalRepository,
};

/// Error types for posting operations.
#[derive(Debug, thiserror::Error)]
pub enum PostingError {
    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Account not found.
    #[error("account '{0}' not found")]
    AccountNotFound(String),

    /// Sending account of a transfer not found.
    #[error("sending account '{0}' not found")]
    SendingAccountNotFound(String),

    /// Receiving account of a transfer not found.
    #[error("receiving account '{0}' not found")]
    ReceivingAccountNotFound(String),

    /// Transfer endpoints hold different currencies.
    #[error("accounts have different currencies")]
    DifferentCurrencies,

    /// Paying account's balance does not cover the amount.
    #[error("insufficient account balance")]
    InsufficientBalance,

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl From<AccountError> for PostingError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NotFound(id) => Self::AccountNotFound(id),
            AccountError::DuplicateAccount(id) => {
                Self::Database(DbErr::Custom(format!("account '{id}' already exists")))
            }
            AccountError::Decode(msg) => Self::Database(DbErr::Custom(msg)),
            AccountError::Database(e) => Self::Database(e),
        }
    }
}

impl From<JournalError> for PostingError {
    fn from(err: JournalError) -> Self {
        match err {
            JournalError::Decode(msg) => Self::Database(DbErr::Custom(msg)),
            JournalError::Database(e) => Self::Database(e),
        }
    }
}

impl From<BalanceError> for PostingError {
    fn from(err: BalanceError) -> Self {
        match err {
            BalanceError::Database(e) => Self::Database(e),
        }
    }
}

/// The posting engine.
///
/// Owns the transaction scope of every journal write; repositories never
/// begin transactions themselves.
#[derive(Debug, Clone)]
pub struct PostingEngine {
    db: DatabaseConnection,
    accounts: AccountRepository,
    journal: JournalRepository,
    balances: BalanceRepository,
}

impl PostingEngine {
    /// Creates a posting engine over the given connection.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            accounts: AccountRepository::new(db.clone()),
            journal: JournalRepository::new(db.clone()),
            balances: BalanceRepository::new(db.clone()),
            db,
        }
    }

    /// Posts a cash deposit into an account.
    ///
    /// Writes one journal entry: ledger-side debit, external-side deposit.
    /// Deposits are not balance-gated, so no account lock is taken.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed id or non-positive
    /// amount, `AccountNotFound` for an unknown account, or a database
    /// error.
    pub async fn make_deposit(
        &self,
        account_id: &str,
        amount: Decimal,
    ) -> Result<XactNo, PostingError> {
        let account_id = parse_account_id(account_id)?;
        validate_amount(amount)?;

        let account = self.accounts.get_account(&account_id).await?;
        let xact_no = XactNo::generate();

        let txn = self.db.begin().await?;
        self.journal
            .append(
                &txn,
                NewJournalEntry {
                    xact_no: xact_no.clone(),
                    ledger_no: cash_ledger_no(account.currency),
                    entry_type: EntryType::Debit,
                    account_id: account_id.clone(),
                    external_type: ExternalEntryType::Deposit,
                    amount,
                    description: format!("Cash deposit from {account_id}"),
                },
            )
            .await?;
        txn.commit().await?;

        info!(account_id = %account_id, %amount, xact_no = %xact_no, "deposit posted");
        Ok(xact_no)
    }

    /// Posts a cash withdrawal from an account.
    ///
    /// Balance-gated: the account row is locked, the balance re-read under
    /// the lock, and the entry written only if the balance covers the
    /// amount. Writes one journal entry: ledger-side credit, external-side
    /// withdrawal.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed input, `AccountNotFound`
    /// for an unknown account, `InsufficientBalance` if the balance does
    /// not cover the amount, or a database error.
    pub async fn make_withdrawal(
        &self,
        account_id: &str,
        amount: Decimal,
    ) -> Result<XactNo, PostingError> {
        let account_id = parse_account_id(account_id)?;
        validate_amount(amount)?;

        let txn = self.db.begin().await?;
        let account = self.accounts.lock_account(&txn, &account_id).await?;

        self.check_balance_covers(&txn, &account_id, amount).await?;

        let xact_no = XactNo::generate();
        self.journal
            .append(
                &txn,
                NewJournalEntry {
                    xact_no: xact_no.clone(),
                    ledger_no: cash_ledger_no(account.currency),
                    entry_type: EntryType::Credit,
                    account_id: account_id.clone(),
                    external_type: ExternalEntryType::Withdrawal,
                    amount,
                    description: format!("Cash withdrawal from {account_id}"),
                },
            )
            .await?;
        txn.commit().await?;

        info!(account_id = %account_id, %amount, xact_no = %xact_no, "withdrawal posted");
        Ok(xact_no)
    }

    /// Posts a transfer between two accounts of the same currency.
    ///
    /// Writes two journal entries sharing one reference number: a credit
    /// with external type `SendTransfer` on the sender and a debit with
    /// external type `ReceiveTransfer` on the receiver. Only the sender's
    /// row is locked; the receiver is append-only here and needs no gate.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed input,
    /// `SendingAccountNotFound` / `ReceivingAccountNotFound` for unknown
    /// endpoints, `DifferentCurrencies` if the endpoints disagree on
    /// currency, `InsufficientBalance` if the sender cannot cover the
    /// amount, or a database error.
    pub async fn make_transfer(
        &self,
        from_account: &str,
        to_account: &str,
        amount: Decimal,
    ) -> Result<XactNo, PostingError> {
        let from_id = parse_account_id(from_account)?;
        let to_id = parse_account_id(to_account)?;
        validate_amount(amount)?;

        let txn = self.db.begin().await?;

        let sender = match self.accounts.lock_account(&txn, &from_id).await {
            Ok(account) => account,
            Err(AccountError::NotFound(id)) => {
                return Err(PostingError::SendingAccountNotFound(id));
            }
            Err(e) => return Err(e.into()),
        };
        let receiver = match self.accounts.get_account(&to_id).await {
            Ok(account) => account,
            Err(AccountError::NotFound(id)) => {
                return Err(PostingError::ReceivingAccountNotFound(id));
            }
            Err(e) => return Err(e.into()),
        };

        if sender.currency != receiver.currency {
            return Err(PostingError::DifferentCurrencies);
        }

        self.check_balance_covers(&txn, &from_id, amount).await?;

        let xact_no = XactNo::generate();
        let ledger_no = cash_ledger_no(sender.currency);

        self.journal
            .append(
                &txn,
                NewJournalEntry {
                    xact_no: xact_no.clone(),
                    ledger_no: ledger_no.clone(),
                    entry_type: EntryType::Credit,
                    account_id: from_id.clone(),
                    external_type: ExternalEntryType::SendTransfer,
                    amount,
                    description: format!("Outgoing cash transfer to {to_id}"),
                },
            )
            .await?;
        self.journal
            .append(
                &txn,
                NewJournalEntry {
                    xact_no: xact_no.clone(),
                    ledger_no,
                    entry_type: EntryType::Debit,
                    account_id: to_id.clone(),
                    external_type: ExternalEntryType::ReceiveTransfer,
                    amount,
                    description: format!("Incoming cash transfer from {from_id}"),
                },
            )
            .await?;
        txn.commit().await?;

        info!(
            from = %from_id,
            to = %to_id,
            %amount,
            xact_no = %xact_no,
            "transfer posted"
        );
        Ok(xact_no)
    }

    /// Reads an account's derived balance.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed id, `AccountNotFound`
    /// for an unknown account, or a database error.
    pub async fn account_balance(&self, account_id: &str) -> Result<AccountBalance, PostingError> {
        let account_id = parse_account_id(account_id)?;
        if !self.accounts.exists(&account_id).await? {
            return Err(PostingError::AccountNotFound(account_id.to_string()));
        }

        Ok(self.balances.current_balance(&account_id).await?)
    }

    /// Lists all transfers as paired payment records in journal order.
    ///
    /// # Errors
    ///
    /// Returns a database error if the journal cannot be read.
    pub async fn list_transfers(&self) -> Result<Vec<Payment>, PostingError> {
        let entries = self.journal.list_transfer_entries().await?;
        Ok(payments_from_entries(&entries))
    }

    /// Lists an account's full entry history in journal order.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed id, `AccountNotFound`
    /// for an unknown account, or a database error.
    pub async fn list_entries(&self, account_id: &str) -> Result<Vec<JournalEntry>, PostingError> {
        let account_id = parse_account_id(account_id)?;
        if !self.accounts.exists(&account_id).await? {
            return Err(PostingError::AccountNotFound(account_id.to_string()));
        }

        Ok(self.journal.list_entries(&account_id).await?)
    }

    /// Returns the account repository sharing this engine's connection.
    #[must_use]
    pub const fn accounts(&self) -> &AccountRepository {
        &self.accounts
    }

    /// Re-reads the balance under the caller's lock and rejects amounts
    /// the balance does not cover.
    async fn check_balance_covers(
        &self,
        txn: &DatabaseTransaction,
        account_id: &AccountId,
        amount: Decimal,
    ) -> Result<(), PostingError> {
        let balance = self.balances.balance_of(txn, account_id).await?;
        if balance.current_balance < amount {
            return Err(PostingError::InsufficientBalance);
        }
        Ok(())
    }
}

fn parse_account_id(raw: &str) -> Result<AccountId, PostingError> {
    let id = raw
        .parse::<AccountId>()
        .map_err(ValidationError::MalformedAccountId)?;
    Ok(id)
}
