//! External customer accounts.

use serde::Serialize;

use cashbook_shared::{AccountId, Currency};

/// An external customer account.
///
/// Accounts are created once and never mutated. No balance is stored here:
/// balances are always derived from the transaction journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Unique account identifier.
    pub account_id: AccountId,
    /// The account's currency. Entries for this account must post against
    /// a ledger of the same currency.
    pub currency: Currency,
}
