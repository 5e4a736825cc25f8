//! Supported currencies.
//!
//! The system keeps one internal cash ledger per currency, so the supported
//! set is closed: adding a currency means adding a cash ledger for it.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
}

impl Currency {
    /// All supported currencies. One cash ledger exists per element.
    pub const ALL: [Self; 2] = [Self::Usd, Self::Eur];

    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_currency_code_round_trip() {
        for currency in Currency::ALL {
            assert_eq!(Currency::from_str(currency.code()), Ok(currency));
        }
    }

    #[test]
    fn test_currency_from_str_case_insensitive() {
        assert_eq!(Currency::from_str("usd"), Ok(Currency::Usd));
        assert_eq!(Currency::from_str("Eur"), Ok(Currency::Eur));
    }

    #[test]
    fn test_currency_from_str_unsupported() {
        assert!(Currency::from_str("GBP").is_err());
        assert!(Currency::from_str("").is_err());
    }

    #[test]
    fn test_currency_serde_uppercase() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        let parsed: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(parsed, Currency::Eur);
    }
}
