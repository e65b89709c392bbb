// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::decimal::{format_base_units, is_digit_string};
use super::decimals::TokenDecimals;
use crate::errors::AmountError;

/// Raw token amount in base units (not normalized for decimals)
///
/// This is the integer the distribution contract's `uint256 amount`
/// parameter expects, e.g. wei for an 18-decimal token. Use
/// [`format_units`](Self::format_units) to turn it back into a
/// human-readable decimal string.
///
/// Serializes as a plain decimal string (`"1000000000"`), never hex, so the
/// output artifact can be reviewed and fed to tooling that expects base-10.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use airdrop_amounts::{TokenAmount, TokenDecimals};
///
/// // 1.5 ETH in wei (18 decimals)
/// let amount = TokenAmount::new(U256::from(1_500_000_000_000_000_000u64));
/// assert_eq!(amount.format_units(TokenDecimals::STANDARD), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Add two amounts, returning `None` if the sum exceeds `uint256`
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Format as a human-readable decimal: amount / 10^decimals
    ///
    /// Exact string arithmetic; trailing fractional zeros are trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use airdrop_amounts::{TokenAmount, TokenDecimals};
    ///
    /// // 100.25 USDC (6 decimals)
    /// let raw = TokenAmount::new(U256::from(100_250_000u64));
    /// assert_eq!(raw.format_units(TokenDecimals::USDC), "100.25");
    /// ```
    pub fn format_units(&self, decimals: TokenDecimals) -> String {
        format_base_units(&self.0.to_string(), decimals)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl FromStr for TokenAmount {
    type Err = AmountError;

    /// Parse a base-unit integer string such as `"1000000000"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_digit_string(s) {
            return Err(AmountError::invalid_format(s, "expected a base-unit integer"));
        }
        U256::from_str_radix(s, 10)
            .map(Self)
            .map_err(|_| AmountError::amount_overflow(s, TokenDecimals::new(0)))
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
