//! Error types for decimal amount conversion.

use crate::types::tokens::TokenDecimals;

/// Errors from converting a single amount between decimal and base units.
///
/// None of these are recoverable by retrying; they describe bad source data.
///
/// # Examples
///
/// ```rust
/// use airdrop_amounts::{to_fixed_point_integer, AmountError, TokenDecimals};
///
/// match to_fixed_point_integer("1.1234567", TokenDecimals::USDC) {
///     Err(AmountError::PrecisionOverflow { fraction_digits, decimals, .. }) => {
///         assert_eq!((fraction_digits, decimals), (7, 6));
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The input is not a well-formed non-negative decimal numeral.
    ///
    /// Covers empty strings, signs, multiple decimal points and any
    /// non-digit character.
    #[error("Invalid amount {raw:?}: {reason}")]
    InvalidFormat {
        /// The offending input, verbatim
        raw: String,
        /// What is wrong with it
        reason: String,
    },

    /// The input has more fractional digits than the token supports.
    ///
    /// Truncating would misstate the amount, so this is always an error.
    #[error(
        "Amount {raw:?} has {fraction_digits} fractional digits but the token only has {decimals} decimals"
    )]
    PrecisionOverflow {
        /// The offending input, verbatim
        raw: String,
        /// Number of digits after the decimal point
        fraction_digits: usize,
        /// Configured token decimals
        decimals: u8,
    },

    /// The scaled amount does not fit in a `uint256`.
    #[error("Amount {raw:?} does not fit in uint256 at {decimals} decimals")]
    AmountOverflow {
        /// The offending input, verbatim
        raw: String,
        /// Configured token decimals
        decimals: u8,
    },
}

impl AmountError {
    /// Create an `InvalidFormat` error.
    pub fn invalid_format(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        AmountError::InvalidFormat {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create a `PrecisionOverflow` error.
    pub fn precision_overflow(
        raw: impl Into<String>,
        fraction_digits: usize,
        decimals: TokenDecimals,
    ) -> Self {
        AmountError::PrecisionOverflow {
            raw: raw.into(),
            fraction_digits,
            decimals: decimals.as_u8(),
        }
    }

    /// Create an `AmountOverflow` error.
    pub fn amount_overflow(raw: impl Into<String>, decimals: TokenDecimals) -> Self {
        AmountError::AmountOverflow {
            raw: raw.into(),
            decimals: decimals.as_u8(),
        }
    }
}
