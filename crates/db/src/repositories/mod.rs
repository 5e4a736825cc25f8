//! Repository layer for database operations.

pub mod account;
pub mod balance;
pub mod journal;
pub mod ledger;

pub use account::{AccountError, AccountRepository};
pub use balance::{BalanceError, BalanceRepository};
pub use journal::{JournalError, JournalRepository};
pub use ledger::{LedgerError, LedgerRepository};
