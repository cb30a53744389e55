//! Account-number conversion between callers and the auth client.
//!
//! Callers carry account numbers as `u64`. The auth client takes and returns
//! a [`U256`]. Going to the client is lossless; coming back fails for values
//! above `u64::MAX` instead of truncating.

use alloy::primitives::U256;

use crate::wallet::WalletError;

/// Widen a caller account number for the client.
#[must_use]
pub fn to_client(account_number: u64) -> U256 {
    U256::from(account_number)
}

/// Narrow a client account number back to `u64`.
///
/// # Errors
///
/// Returns [`WalletError::AccountNumberOverflow`] if `value > u64::MAX`.
pub fn from_client(value: U256) -> Result<u64, WalletError> {
    u64::try_from(value).map_err(|_| WalletError::AccountNumberOverflow(value.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_max_survive() {
        for n in [0, 1, 42, u64::MAX] {
            assert_eq!(from_client(to_client(n)).unwrap(), n);
        }
    }

    #[test]
    fn just_above_u64_overflows() {
        let value = U256::from(u64::MAX) + U256::from(1u8);
        let err = from_client(value).unwrap_err();
        assert_eq!(
            err,
            WalletError::AccountNumberOverflow("18446744073709551616".into())
        );
    }

    #[test]
    fn u256_max_overflows() {
        assert!(matches!(
            from_client(U256::MAX),
            Err(WalletError::AccountNumberOverflow(_))
        ));
    }
}
