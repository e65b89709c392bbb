// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Human-readable decimal amount type

use std::str::FromStr;

use alloy_primitives::U256;

use super::amount::TokenAmount;
use super::decimals::TokenDecimals;
use crate::errors::AmountError;

/// A non-negative base-10 numeral as written by a human, e.g. `"100.0"`
///
/// Parsing only splits and validates the digits. Nothing is converted to a
/// float, so any number of significant digits survives until
/// [`to_base_units`](Self::to_base_units) scales it into a [`TokenAmount`].
///
/// Accepted forms are `"250"`, `"0.000001"`, `"5."` and `".5"`. Signs,
/// whitespace, exponents, separators and a second `.` are rejected.
///
/// # Examples
///
/// ```
/// use airdrop_amounts::{DecimalAmount, TokenDecimals};
///
/// let amount: DecimalAmount = "0.000001".parse().unwrap();
/// let raw = amount.to_base_units(TokenDecimals::STANDARD).unwrap();
/// assert_eq!(raw.to_string(), "1000000000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalAmount {
    raw: String,
    integer: String,
    fraction: String,
}

impl DecimalAmount {
    /// The numeral exactly as it was given
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Digits before the decimal point (may be empty for `".5"`)
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Digits after the decimal point (empty when there is no point)
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    /// Scale by `10^decimals` into an exact base-unit amount
    ///
    /// Fails with [`AmountError::PrecisionOverflow`] when the numeral has
    /// more fractional digits than `decimals`. Digits are never dropped or
    /// rounded. Fails with [`AmountError::AmountOverflow`] when the scaled
    /// value does not fit the contract's `uint256`.
    pub fn to_base_units(&self, decimals: TokenDecimals) -> Result<TokenAmount, AmountError> {
        if self.fraction.len() > decimals.as_usize() {
            return Err(AmountError::precision_overflow(
                &self.raw,
                self.fraction.len(),
                decimals,
            ));
        }

        let padding = decimals.as_usize() - self.fraction.len();
        let digits = self
            .integer
            .bytes()
            .chain(self.fraction.bytes())
            .chain(std::iter::repeat_n(b'0', padding));

        let ten = U256::from(10u8);
        let mut value = U256::ZERO;
        for digit in digits {
            value = value
                .checked_mul(ten)
                .and_then(|v| v.checked_add(U256::from(digit - b'0')))
                .ok_or_else(|| AmountError::amount_overflow(&self.raw, decimals))?;
        }

        Ok(TokenAmount::new(value))
    }
}

impl FromStr for DecimalAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AmountError::invalid_format(s, "empty amount"));
        }
        if s.starts_with('-') {
            return Err(AmountError::invalid_format(s, "negative amounts are not allowed"));
        }

        let (integer, fraction) = s.split_once('.').unwrap_or((s, ""));
        if fraction.contains('.') {
            return Err(AmountError::invalid_format(s, "more than one decimal point"));
        }
        if let Some(c) = integer
            .chars()
            .chain(fraction.chars())
            .find(|c| !c.is_ascii_digit())
        {
            return Err(AmountError::invalid_format(
                s,
                format!("unexpected character {c:?}"),
            ));
        }
        if integer.is_empty() && fraction.is_empty() {
            return Err(AmountError::invalid_format(s, "no digits"));
        }

        Ok(Self {
            raw: s.to_string(),
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        })
    }
}

impl std::fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Returns true for a non-empty string of ASCII digits
pub(crate) fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Render a base-unit digit string as a decimal with `decimals` fractional digits
///
/// `digits` must already satisfy [`is_digit_string`]. Leading zeros are
/// dropped, trailing fractional zeros are trimmed, and the point is omitted
/// for whole amounts.
pub(crate) fn format_base_units(digits: &str, decimals: TokenDecimals) -> String {
    let significant = digits.trim_start_matches('0');
    let scale = decimals.as_usize();

    let padded = if significant.len() <= scale {
        format!("{significant:0>width$}", width = scale + 1)
    } else {
        significant.to_string()
    };

    let (whole, fractional) = padded.split_at(padded.len() - scale);
    let trimmed = fractional.trim_end_matches('0');

    if trimmed.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{trimmed}")
    }
}
