//! Account balance arithmetic.
//!
//! Balances are never stored: they are derived from the full entry history.
//! Total credit sums deposits and received transfers, total debit sums
//! withdrawals and sent transfers, and the current balance is their
//! difference. The storage layer materializes the same computation as the
//! `account_balances` SQL view; this module is the arithmetic's one
//! in-process definition, used by tests and the projection code.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::Serialize;

use cashbook_shared::AccountId;

use super::types::{ExternalEntryType, JournalEntry};

/// Derived balance of an external account at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountBalance {
    /// The account.
    pub account_id: AccountId,
    /// Sum of deposits and received transfers.
    pub total_credit: Decimal,
    /// Sum of withdrawals and sent transfers.
    pub total_debit: Decimal,
    /// `total_credit - total_debit`.
    pub current_balance: Decimal,
    /// Read timestamp, if the store reported one.
    pub ts: Option<DateTime<FixedOffset>>,
}

impl AccountBalance {
    /// Returns the zero balance for an account with no history.
    ///
    /// An account with no entries is valid and reads as all-zero, never as
    /// an error.
    #[must_use]
    pub fn zero(account_id: AccountId) -> Self {
        Self {
            account_id,
            total_credit: Decimal::ZERO,
            total_debit: Decimal::ZERO,
            current_balance: Decimal::ZERO,
            ts: None,
        }
    }
}

/// Signed balance contribution of one entry.
///
/// Credit-side entry types add the amount, debit-side types subtract it.
#[must_use]
pub fn balance_contribution(external_type: ExternalEntryType, amount: Decimal) -> Decimal {
    if external_type.credits_account() {
        amount
    } else {
        -amount
    }
}

/// Derives an account's balance from a slice of journal entries.
///
/// Entries for other accounts are ignored, so the full journal can be
/// passed as-is.
#[must_use]
pub fn derive_balance(account_id: &AccountId, entries: &[JournalEntry]) -> AccountBalance {
    let mut total_credit = Decimal::ZERO;
    let mut total_debit = Decimal::ZERO;

    for entry in entries.iter().filter(|e| &e.account_id == account_id) {
        if entry.external_type.credits_account() {
            total_credit += entry.amount;
        } else {
            total_debit += entry.amount;
        }
    }

    AccountBalance {
        account_id: account_id.clone(),
        total_credit,
        total_debit,
        current_balance: total_credit - total_debit,
        ts: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::catalog::cash_ledger_no;
    use crate::ledger::types::EntryType;
    use cashbook_shared::{Currency, XactNo};
    use chrono::Utc;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn entry(account: &AccountId, external_type: ExternalEntryType, amount: Decimal) -> JournalEntry {
        let entry_type = if external_type.credits_account() {
            EntryType::Debit
        } else {
            EntryType::Credit
        };
        JournalEntry {
            xact_no: XactNo::generate(),
            ledger_no: cash_ledger_no(Currency::Usd),
            entry_type,
            account_id: account.clone(),
            external_type,
            amount,
            description: String::new(),
            ts: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn test_zero_balance_for_empty_history() {
        let account = AccountId::new("johndoe").unwrap();
        let balance = derive_balance(&account, &[]);
        assert_eq!(balance, AccountBalance::zero(account));
    }

    #[test]
    fn test_deposit_then_withdraw_then_transfer() {
        let john = AccountId::new("johndoe").unwrap();
        let entries = vec![
            entry(&john, ExternalEntryType::Deposit, dec!(100)),
            entry(&john, ExternalEntryType::Withdrawal, dec!(25)),
            entry(&john, ExternalEntryType::SendTransfer, dec!(25)),
        ];

        let balance = derive_balance(&john, &entries);
        assert_eq!(balance.total_credit, dec!(100));
        assert_eq!(balance.total_debit, dec!(50));
        assert_eq!(balance.current_balance, dec!(50));
    }

    #[test]
    fn test_other_accounts_ignored() {
        let john = AccountId::new("johndoe").unwrap();
        let mary = AccountId::new("maryjane").unwrap();
        let entries = vec![
            entry(&john, ExternalEntryType::Deposit, dec!(100)),
            entry(&mary, ExternalEntryType::Deposit, dec!(500)),
        ];

        let balance = derive_balance(&john, &entries);
        assert_eq!(balance.current_balance, dec!(100));
    }

    #[test]
    fn test_received_transfer_credits() {
        let mary = AccountId::new("maryjane").unwrap();
        let entries = vec![entry(&mary, ExternalEntryType::ReceiveTransfer, dec!(25))];

        let balance = derive_balance(&mary, &entries);
        assert_eq!(balance.total_credit, dec!(25));
        assert_eq!(balance.total_debit, dec!(0));
        assert_eq!(balance.current_balance, dec!(25));
    }

    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    fn external_type_strategy() -> impl Strategy<Value = ExternalEntryType> {
        prop_oneof![
            Just(ExternalEntryType::Deposit),
            Just(ExternalEntryType::Withdrawal),
            Just(ExternalEntryType::SendTransfer),
            Just(ExternalEntryType::ReceiveTransfer),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_contribution_sign_matches_type(
            external_type in external_type_strategy(),
            amount in amount_strategy(),
        ) {
            let contribution = balance_contribution(external_type, amount);
            if external_type.credits_account() {
                prop_assert_eq!(contribution, amount);
            } else {
                prop_assert_eq!(contribution, -amount);
            }
        }

        #[test]
        fn prop_balance_is_credit_minus_debit(
            amounts in proptest::collection::vec(
                (external_type_strategy(), amount_strategy()),
                0..20,
            ),
        ) {
            let account = AccountId::new("johndoe").unwrap();
            let entries: Vec<JournalEntry> = amounts
                .iter()
                .map(|&(external_type, amount)| entry(&account, external_type, amount))
                .collect();

            let balance = derive_balance(&account, &entries);
            prop_assert_eq!(
                balance.current_balance,
                balance.total_credit - balance.total_debit
            );

            let expected: Decimal = amounts
                .iter()
                .map(|&(external_type, amount)| balance_contribution(external_type, amount))
                .sum();
            prop_assert_eq!(balance.current_balance, expected);
        }
    }
}
