//! Domain identifiers: customer account ids and transaction reference numbers.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error returned when an account identifier is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("account id must be 6-64 alphanumeric characters")]
pub struct InvalidAccountId;

/// Identifier of an external customer account.
///
/// Account ids are 6-64 alphanumeric characters and immutable once an
/// account is created. The constructor enforces the format, so a held
/// `AccountId` is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Minimum identifier length.
    pub const MIN_LEN: usize = 6;
    /// Maximum identifier length.
    pub const MAX_LEN: usize = 64;

    /// Creates an account id, rejecting malformed input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAccountId` if the input is not 6-64 alphanumeric
    /// characters.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidAccountId> {
        let id = id.into();
        let len = id.chars().count();
        if len < Self::MIN_LEN || len > Self::MAX_LEN {
            return Err(InvalidAccountId);
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidAccountId);
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = InvalidAccountId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Transaction reference number.
///
/// One reference number groups the entries that constitute a single logical
/// transaction: deposits and withdrawals carry one entry each, a transfer
/// carries exactly two entries sharing the same number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct XactNo(String);

impl XactNo {
    /// Generates a fresh unique reference number.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Wraps an existing reference number read back from storage.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the reference number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for XactNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("johndoe")]
    #[case("maryjane")]
    #[case("abc123")]
    #[case("A1B2C3D4")]
    fn test_valid_account_ids(#[case] id: &str) {
        assert!(AccountId::new(id).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("short")]
    #[case("john doe")]
    #[case("john-doe")]
    #[case("accnt_1")]
    fn test_invalid_account_ids(#[case] id: &str) {
        assert_eq!(AccountId::new(id), Err(InvalidAccountId));
    }

    #[test]
    fn test_account_id_length_bounds() {
        assert!(AccountId::new("a".repeat(6)).is_ok());
        assert!(AccountId::new("a".repeat(64)).is_ok());
        assert!(AccountId::new("a".repeat(5)).is_err());
        assert!(AccountId::new("a".repeat(65)).is_err());
    }

    #[test]
    fn test_account_id_deserialize_rejects_malformed() {
        let ok: Result<AccountId, _> = serde_json::from_str("\"johndoe\"");
        assert!(ok.is_ok());

        let bad: Result<AccountId, _> = serde_json::from_str("\"j d\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_xact_no_generate_unique() {
        let a = XactNo::generate();
        let b = XactNo::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }
}
