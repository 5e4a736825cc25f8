//! Input validation for posting operations.
//!
//! Validation runs before any storage write, so a validation failure is
//! never partially applied.

use rust_decimal::Decimal;
use thiserror::Error;

use cashbook_shared::types::id::InvalidAccountId;

/// Validation error kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Account identifier is not 6-64 alphanumeric characters.
    #[error(transparent)]
    MalformedAccountId(#[from] InvalidAccountId),

    /// Amount is zero.
    #[error("zero amount")]
    ZeroAmount,

    /// Amount is negative.
    #[error("negative amount")]
    NegativeAmount,
}

/// Validates a posting amount: must be strictly positive.
///
/// Zero and negative amounts are distinct error kinds so callers can
/// message them separately.
///
/// # Errors
///
/// Returns `ZeroAmount` or `NegativeAmount` for non-positive input.
pub fn validate_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount.is_zero() {
        return Err(ValidationError::ZeroAmount);
    }
    if amount.is_sign_negative() {
        return Err(ValidationError::NegativeAmount);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_positive_amount_ok() {
        assert!(validate_amount(dec!(100)).is_ok());
        assert!(validate_amount(dec!(0.0001)).is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert_eq!(validate_amount(dec!(0)), Err(ValidationError::ZeroAmount));
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(
            validate_amount(dec!(-100)),
            Err(ValidationError::NegativeAmount)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_validate_amount_sign(n in -1_000_000i64..1_000_000i64) {
            let amount = Decimal::new(n, 2);
            let result = validate_amount(amount);

            if n == 0 {
                prop_assert_eq!(result, Err(ValidationError::ZeroAmount));
            } else if n < 0 {
                prop_assert_eq!(result, Err(ValidationError::NegativeAmount));
            } else {
                prop_assert!(result.is_ok());
            }
        }
    }
}
