// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact decimal to fixed-point conversion
//!
//! Token contracts take amounts as integers scaled by `10^decimals`. This
//! module turns human-readable numerals into those integers and back, with
//! string-based parsing and big-integer arithmetic only. Floats never appear
//! on the conversion path, so `"0.1"` is exactly `100000000000000000` base
//! units at 18 decimals, not whatever `0.1f64` happens to round to.
//!
//! The string functions ([`to_fixed_point_integer`], [`to_human_readable`],
//! [`sum_integer_amounts`]) are thin wrappers around the typed API
//! ([`DecimalAmount`], [`TokenAmount`], [`RunningTotal`]).

use bigdecimal::num_bigint::BigInt;
use tracing::warn;

use crate::errors::AmountError;
use crate::types::tokens::{
    format_base_units, is_digit_string, DecimalAmount, RunningTotal, TokenAmount, TokenDecimals,
};

/// Converts decimal amounts for one token
///
/// Holds the conversion context, i.e. the token's decimals. It is immutable
/// and cheap to copy, so one converter can be shared by a whole batch.
///
/// # Examples
///
/// ```
/// use airdrop_amounts::{DecimalAmountConverter, TokenDecimals};
///
/// let converter = DecimalAmountConverter::new(TokenDecimals::STANDARD);
/// let raw = converter.convert("250").unwrap();
/// assert_eq!(raw.to_string(), format!("250{}", "0".repeat(18)));
/// assert_eq!(converter.format(raw), "250");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecimalAmountConverter {
    decimals: TokenDecimals,
}

impl DecimalAmountConverter {
    /// Create a converter for a token with the given decimals
    pub fn new(decimals: TokenDecimals) -> Self {
        if !decimals.is_reasonable() {
            warn!(
                decimals = decimals.as_u8(),
                max_reasonable = TokenDecimals::MAX_REASONABLE,
                "Unusually high token decimals; double-check the token contract"
            );
        }
        Self { decimals }
    }

    /// The token decimals this converter scales by
    pub fn decimals(&self) -> TokenDecimals {
        self.decimals
    }

    /// Parse and scale a decimal numeral into base units
    pub fn convert(&self, amount: &str) -> Result<TokenAmount, AmountError> {
        amount.parse::<DecimalAmount>()?.to_base_units(self.decimals)
    }

    /// Render base units as a human-readable decimal
    pub fn format(&self, amount: TokenAmount) -> String {
        amount.format_units(self.decimals)
    }
}

/// Convert a decimal numeral into its fixed-point integer string
///
/// The result is `amount × 10^decimals` rendered in base 10, with no sign,
/// no point and no leading zeros (zero is `"0"`).
///
/// # Errors
///
/// - [`AmountError::InvalidFormat`] for anything that is not a non-negative
///   decimal numeral (`""`, `"abc"`, `"-5.0"`, `"1.2.3"`)
/// - [`AmountError::PrecisionOverflow`] when there are more fractional
///   digits than `decimals`
/// - [`AmountError::AmountOverflow`] when the result exceeds `uint256`
///
/// # Examples
///
/// ```
/// use airdrop_amounts::{to_fixed_point_integer, TokenDecimals};
///
/// let d = TokenDecimals::STANDARD;
/// assert_eq!(to_fixed_point_integer("100.0", d).unwrap(), "100000000000000000000");
/// assert_eq!(to_fixed_point_integer("0.0", d).unwrap(), "0");
/// assert!(to_fixed_point_integer("1.1234567890123456789", d).is_err());
/// ```
pub fn to_fixed_point_integer(amount: &str, decimals: TokenDecimals) -> Result<String, AmountError> {
    let raw = amount.parse::<DecimalAmount>()?.to_base_units(decimals)?;
    Ok(raw.to_string())
}

/// Convert a fixed-point integer string back into a decimal numeral
///
/// Inverse of [`to_fixed_point_integer`]. Works on integers of any length,
/// so it can also render totals that exceed `uint256`. Trailing fractional
/// zeros are trimmed and whole values have no point.
///
/// # Errors
///
/// [`AmountError::InvalidFormat`] unless `amount` is a non-empty string of
/// ASCII digits.
///
/// # Examples
///
/// ```
/// use airdrop_amounts::{to_human_readable, TokenDecimals};
///
/// let d = TokenDecimals::STANDARD;
/// assert_eq!(to_human_readable("100000001000000000000", d).unwrap(), "100.000001");
/// assert_eq!(to_human_readable("0", d).unwrap(), "0");
/// ```
pub fn to_human_readable(amount: &str, decimals: TokenDecimals) -> Result<String, AmountError> {
    if !is_digit_string(amount) {
        return Err(AmountError::invalid_format(
            amount,
            "expected a base-unit integer",
        ));
    }
    Ok(format_base_units(amount, decimals))
}

/// Sum fixed-point integer strings exactly
///
/// Accumulates with arbitrary-precision integer addition; the empty
/// sequence sums to `"0"`.
///
/// # Errors
///
/// [`AmountError::InvalidFormat`] for the first element that is not a
/// digit string.
///
/// # Examples
///
/// ```
/// use airdrop_amounts::sum_integer_amounts;
///
/// assert_eq!(sum_integer_amounts(["100", "23"]).unwrap(), "123");
/// assert_eq!(sum_integer_amounts(Vec::<String>::new()).unwrap(), "0");
/// ```
pub fn sum_integer_amounts<I, S>(amounts: I) -> Result<String, AmountError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = BigInt::default();
    for amount in amounts {
        let amount = amount.as_ref();
        if !is_digit_string(amount) {
            return Err(AmountError::invalid_format(
                amount,
                "expected a base-unit integer",
            ));
        }
        total += amount
            .parse::<BigInt>()
            .map_err(|e| AmountError::invalid_format(amount, e.to_string()))?;
    }
    Ok(total.to_string())
}

/// Sum typed amounts into a [`RunningTotal`]
pub fn sum_amounts<I>(amounts: I) -> RunningTotal
where
    I: IntoIterator<Item = TokenAmount>,
{
    amounts.into_iter().collect()
}
