//! Cash-ledger catalog.
//!
//! The system keeps exactly one internal cash ledger per supported currency.
//! The mapping is static: currency codes are a closed enum, so resolving a
//! cash ledger number cannot fail once a `Currency` is in hand. Unsupported
//! currency codes are rejected where free-form input is parsed.

use serde::{Deserialize, Serialize};

use cashbook_shared::Currency;

/// Internal ledger account number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LedgerNo(String);

impl LedgerNo {
    /// Wraps a ledger number read back from storage.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the ledger number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LedgerNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ledger account type. Customer cash held by the system is a liability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerAccountType {
    /// Liability account.
    Liability,
}

impl LedgerAccountType {
    /// Returns the wire code used in storage (`"AL"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Liability => "AL",
        }
    }
}

/// An internal counterparty ledger account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashLedger {
    /// Unique ledger number.
    pub ledger_no: LedgerNo,
    /// Account type.
    pub account_type: LedgerAccountType,
    /// Ledger currency.
    pub currency: Currency,
    /// Display name.
    pub name: String,
}

/// Returns the cash ledger number for a currency.
#[must_use]
pub fn cash_ledger_no(currency: Currency) -> LedgerNo {
    match currency {
        Currency::Usd => LedgerNo::from_raw("100"),
        Currency::Eur => LedgerNo::from_raw("110"),
    }
}

/// Returns the configured set of cash ledgers, one per supported currency.
///
/// This is the set the bootstrap step creates idempotently at startup.
#[must_use]
pub fn cash_ledgers() -> Vec<CashLedger> {
    Currency::ALL
        .into_iter()
        .map(|currency| CashLedger {
            ledger_no: cash_ledger_no(currency),
            account_type: LedgerAccountType::Liability,
            currency,
            name: format!("Cash {currency}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case(Currency::Usd, "100")]
    #[case(Currency::Eur, "110")]
    fn test_cash_ledger_numbers(#[case] currency: Currency, #[case] expected: &str) {
        assert_eq!(cash_ledger_no(currency).as_str(), expected);
    }

    #[test]
    fn test_one_ledger_per_currency() {
        let ledgers = cash_ledgers();
        assert_eq!(ledgers.len(), Currency::ALL.len());

        let currencies: HashSet<_> = ledgers.iter().map(|l| l.currency).collect();
        assert_eq!(currencies.len(), ledgers.len());

        let numbers: HashSet<_> = ledgers.iter().map(|l| l.ledger_no.clone()).collect();
        assert_eq!(numbers.len(), ledgers.len());
    }

    #[test]
    fn test_catalog_matches_per_currency_lookup() {
        for ledger in cash_ledgers() {
            assert_eq!(ledger.ledger_no, cash_ledger_no(ledger.currency));
            assert_eq!(ledger.account_type, LedgerAccountType::Liability);
            assert_eq!(ledger.name, format!("Cash {}", ledger.currency));
        }
    }
}
