//! Journal entry domain types.
//!
//! A journal entry is one leg of a financial movement: the internal cash
//! ledger takes the debit/credit side, the external customer account takes
//! the semantic side (deposit, withdrawal, or one half of a transfer).

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cashbook_shared::{AccountId, XactNo};

use super::catalog::LedgerNo;

/// Ledger-side entry type: either Debit or Credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit entry against the internal ledger.
    Debit,
    /// Credit entry against the internal ledger.
    Credit,
}

impl EntryType {
    /// Returns the wire code used in storage (`"Dr"` / `"Cr"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Debit => "Dr",
            Self::Credit => "Cr",
        }
    }
}

/// External entry type: the customer-side classification of an entry.
///
/// This is what determines an entry's balance contribution: deposits and
/// received transfers credit the account, withdrawals and sent transfers
/// debit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalEntryType {
    /// Cash deposit into the account.
    Deposit,
    /// Cash withdrawal from the account.
    Withdrawal,
    /// Outgoing transfer leg. The sending account is debited.
    SendTransfer,
    /// Incoming transfer leg. The receiving account is credited.
    ReceiveTransfer,
}

impl ExternalEntryType {
    /// Returns the wire code used in storage (`"Dp"` / `"Wd"` / `"STr"` / `"RTr"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Deposit => "Dp",
            Self::Withdrawal => "Wd",
            Self::SendTransfer => "STr",
            Self::ReceiveTransfer => "RTr",
        }
    }

    /// Returns true if this entry type credits the external account.
    #[must_use]
    pub const fn credits_account(self) -> bool {
        matches!(self, Self::Deposit | Self::ReceiveTransfer)
    }

    /// Returns true if this entry type is one leg of a transfer.
    #[must_use]
    pub const fn is_transfer(self) -> bool {
        matches!(self, Self::SendTransfer | Self::ReceiveTransfer)
    }
}

/// One immutable row of the transaction journal.
///
/// Entries are created only by the posting engine and never updated or
/// deleted. A deposit or withdrawal produces one entry; a transfer produces
/// exactly two entries sharing one reference number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntry {
    /// Reference number grouping related entries.
    pub xact_no: XactNo,
    /// The internal ledger this entry posts against.
    pub ledger_no: LedgerNo,
    /// Ledger-side leg (debit or credit).
    pub entry_type: EntryType,
    /// The external customer account.
    pub account_id: AccountId,
    /// Customer-side classification.
    pub external_type: ExternalEntryType,
    /// Amount, always positive.
    pub amount: Decimal,
    /// Short free-text description.
    pub description: String,
    /// Server-assigned timestamp.
    pub ts: DateTime<FixedOffset>,
}

/// Input for appending one journal entry.
///
/// The timestamp is server-assigned on write, so it does not appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJournalEntry {
    /// Reference number grouping related entries.
    pub xact_no: XactNo,
    /// The internal ledger this entry posts against.
    pub ledger_no: LedgerNo,
    /// Ledger-side leg (debit or credit).
    pub entry_type: EntryType,
    /// The external customer account.
    pub account_id: AccountId,
    /// Customer-side classification.
    pub external_type: ExternalEntryType,
    /// Amount, always positive.
    pub amount: Decimal,
    /// Short free-text description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_codes() {
        assert_eq!(EntryType::Debit.code(), "Dr");
        assert_eq!(EntryType::Credit.code(), "Cr");
    }

    #[test]
    fn test_external_type_codes() {
        assert_eq!(ExternalEntryType::Deposit.code(), "Dp");
        assert_eq!(ExternalEntryType::Withdrawal.code(), "Wd");
        assert_eq!(ExternalEntryType::SendTransfer.code(), "STr");
        assert_eq!(ExternalEntryType::ReceiveTransfer.code(), "RTr");
    }

    #[test]
    fn test_credits_account() {
        assert!(ExternalEntryType::Deposit.credits_account());
        assert!(ExternalEntryType::ReceiveTransfer.credits_account());
        assert!(!ExternalEntryType::Withdrawal.credits_account());
        assert!(!ExternalEntryType::SendTransfer.credits_account());
    }

    #[test]
    fn test_is_transfer() {
        assert!(ExternalEntryType::SendTransfer.is_transfer());
        assert!(ExternalEntryType::ReceiveTransfer.is_transfer());
        assert!(!ExternalEntryType::Deposit.is_transfer());
        assert!(!ExternalEntryType::Withdrawal.is_transfer());
    }
}
