// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact running total of base-unit amounts

use bigdecimal::num_bigint::{BigInt, Sign};

use super::amount::TokenAmount;
use super::decimal::format_base_units;
use super::decimals::TokenDecimals;

/// Unbounded sum of [`TokenAmount`]s
///
/// Individual amounts are capped at `uint256`, but the sum of a long list
/// is not, so the accumulator is an arbitrary-precision integer. It only
/// ever grows.
///
/// # Examples
///
/// ```
/// use airdrop_amounts::{RunningTotal, TokenAmount, TokenDecimals};
///
/// let mut total = RunningTotal::new();
/// total.add(TokenAmount::from(1_500_000u64));
/// total.add(TokenAmount::from(250_000u64));
/// assert_eq!(total.to_string(), "1750000");
/// assert_eq!(total.to_human_readable(TokenDecimals::USDC), "1.75");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunningTotal {
    value: BigInt,
    count: usize,
}

impl RunningTotal {
    /// Total seeded at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one converted amount
    pub fn add(&mut self, amount: TokenAmount) {
        let bytes = amount.as_u256().to_be_bytes::<32>();
        self.value += BigInt::from_bytes_be(Sign::Plus, &bytes);
        self.count += 1;
    }

    /// The exact total in base units
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Number of amounts accumulated so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// The total as a human-readable decimal string
    pub fn to_human_readable(&self, decimals: TokenDecimals) -> String {
        format_base_units(&self.value.to_string(), decimals)
    }
}

impl Extend<TokenAmount> for RunningTotal {
    fn extend<I: IntoIterator<Item = TokenAmount>>(&mut self, iter: I) {
        for amount in iter {
            self.add(amount);
        }
    }
}

impl FromIterator<TokenAmount> for RunningTotal {
    fn from_iter<I: IntoIterator<Item = TokenAmount>>(iter: I) -> Self {
        let mut total = Self::new();
        total.extend(iter);
        total
    }
}

impl std::fmt::Display for RunningTotal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
