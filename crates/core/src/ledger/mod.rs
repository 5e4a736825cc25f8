//! Double-entry ledger domain: entry types, cash-ledger catalog, balances,
//! validation, and the payment projection.

pub mod balance;
pub mod catalog;
pub mod payments;
pub mod types;
pub mod validation;

pub use balance::AccountBalance;
pub use catalog::{CashLedger, LedgerAccountType, LedgerNo, cash_ledger_no, cash_ledgers};
pub use payments::{Payment, PaymentDirection, payments_from_entries};
pub use types::{EntryType, ExternalEntryType, JournalEntry, NewJournalEntry};
pub use validation::{ValidationError, validate_amount};
