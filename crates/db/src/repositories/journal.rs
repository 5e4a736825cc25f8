//! Journal repository for the append-only transaction journal.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use cashbook_core::ledger::{JournalEntry, LedgerNo, NewJournalEntry};
use cashbook_shared::{AccountId, XactNo};

use crate::entities::journal_entries;
use crate::entities::sea_orm_active_enums::ExternalEntryType;

/// Error types for journal operations.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// A stored row could not be decoded into a domain value.
    #[error("corrupt journal row: {0}")]
    Decode(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Repository for journal reads and appends.
///
/// Appends always run inside a caller-owned posting transaction; the
/// journal itself never begins one.
#[derive(Debug, Clone)]
pub struct JournalRepository {
    db: DatabaseConnection,
}

impl JournalRepository {
    /// Creates a new journal repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one entry inside the given posting transaction.
    ///
    /// The timestamp is assigned by the database on insert and returned
    /// with the stored entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the stored row cannot be
    /// decoded.
    pub async fn append(
        &self,
        txn: &DatabaseTransaction,
        entry: NewJournalEntry,
    ) -> Result<JournalEntry, JournalError> {
        let model = journal_entries::ActiveModel {
            xact_no: Set(entry.xact_no.as_str().to_owned()),
            ledger_no: Set(entry.ledger_no.as_str().to_owned()),
            entry_type: Set(entry.entry_type.into()),
            account_id: Set(entry.account_id.to_string()),
            external_type: Set(entry.external_type.into()),
            amount: Set(entry.amount),
            description: Set(entry.description),
            ..Default::default()
        };

        let inserted = model.insert(txn).await?;
        decode_entry(&inserted)
    }

    /// Lists all entries for an account in journal order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row cannot be
    /// decoded.
    pub async fn list_entries(&self, account_id: &AccountId) -> Result<Vec<JournalEntry>, JournalError> {
        let models = journal_entries::Entity::find()
            .filter(journal_entries::Column::AccountId.eq(account_id.as_str()))
            .order_by_asc(journal_entries::Column::Id)
            .all(&self.db)
            .await?;

        models.iter().map(decode_entry).collect()
    }

    /// Lists all transfer entries in the journal, in journal order.
    ///
    /// Both legs of every transfer are returned so the payment projection
    /// can pair them by reference number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row cannot be
    /// decoded.
    pub async fn list_transfer_entries(&self) -> Result<Vec<JournalEntry>, JournalError> {
        let models = journal_entries::Entity::find()
            .filter(journal_entries::Column::ExternalType.is_in([
                ExternalEntryType::SendTransfer,
                ExternalEntryType::ReceiveTransfer,
            ]))
            .order_by_asc(journal_entries::Column::Id)
            .all(&self.db)
            .await?;

        models.iter().map(decode_entry).collect()
    }
}

fn decode_entry(model: &journal_entries::Model) -> Result<JournalEntry, JournalError> {
    let account_id = model
        .account_id
        .parse::<AccountId>()
        .map_err(|e| JournalError::Decode(e.to_string()))?;

    Ok(JournalEntry {
        xact_no: XactNo::from_raw(model.xact_no.clone()),
        ledger_no: LedgerNo::from_raw(model.ledger_no.clone()),
        entry_type: model.entry_type.clone().into(),
        account_id,
        external_type: model.external_type.clone().into(),
        amount: model.amount,
        description: model.description.clone(),
        ts: model.ts,
    })
}
