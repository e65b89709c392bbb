// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for decimal conversion
//!
//! These tests use proptest to check exactness laws across a wide range of
//! magnitudes and precisions, using `BigDecimal` as the reference arithmetic.

use std::str::FromStr;

use airdrop_amounts::{
    convert_batch, sum_integer_amounts, to_fixed_point_integer, to_human_readable, AmountError,
    AmountRecord, DecimalAmountConverter, TokenDecimals,
};
use bigdecimal::BigDecimal;
use proptest::prelude::*;

// Helper to generate decimal numerals with up to `max_fraction` fractional digits
fn arb_decimal(max_fraction: usize) -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just("0".to_string()),
            (0u64..1_000).prop_map(|v| v.to_string()),
            (0u64..=u64::MAX).prop_map(|v| v.to_string()),
            "[0-9]{1,30}",
        ],
        proptest::option::of(
            proptest::string::string_regex(&format!("[0-9]{{1,{max_fraction}}}")).unwrap(),
        ),
    )
        .prop_map(|(integer, fraction)| match fraction {
            Some(fraction) => format!("{integer}.{fraction}"),
            None => integer,
        })
}

fn arb_decimals() -> impl Strategy<Value = TokenDecimals> {
    prop_oneof![
        Just(TokenDecimals::new(0)),
        Just(TokenDecimals::USDC),
        Just(TokenDecimals::WBTC),
        Just(TokenDecimals::STANDARD),
    ]
}

fn decimal(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

proptest! {
    /// Property: converting to base units and back preserves the numeric value
    #[test]
    fn prop_round_trip(amount in arb_decimal(18)) {
        let d = TokenDecimals::STANDARD;
        let raw = to_fixed_point_integer(&amount, d).unwrap();
        let back = to_human_readable(&raw, d).unwrap();

        prop_assert_eq!(decimal(&back), decimal(&amount), "round trip changed {} into {}", amount, back);
    }

    /// Property: base units are canonical digit strings
    #[test]
    fn prop_canonical_integer(amount in arb_decimal(18)) {
        let raw = to_fixed_point_integer(&amount, TokenDecimals::STANDARD).unwrap();

        prop_assert!(raw.bytes().all(|b| b.is_ascii_digit()));
        prop_assert!(raw == "0" || !raw.starts_with('0'), "non-canonical output {}", raw);
    }

    /// Property: base units equal amount × 10^decimals exactly
    #[test]
    fn prop_matches_reference_scaling(amount in arb_decimal(6), decimals in arb_decimals()) {
        let result = to_fixed_point_integer(&amount, decimals);
        let fraction_len = amount.split_once('.').map(|(_, f)| f.len()).unwrap_or(0);

        if fraction_len > decimals.as_usize() {
            let is_precision_overflow = matches!(result, Err(AmountError::PrecisionOverflow { .. }));
            prop_assert!(is_precision_overflow);
        } else {
            let scale = decimal(&format!("1{}", "0".repeat(decimals.as_usize())));
            let expected = decimal(&amount) * scale;
            prop_assert_eq!(decimal(&result.unwrap()), expected);
        }
    }

    /// Property: the sum of converted amounts equals the converted exact sum
    #[test]
    fn prop_sum_is_exact(amounts in prop::collection::vec(arb_decimal(18), 0..50)) {
        let d = TokenDecimals::STANDARD;
        let converted: Vec<String> = amounts
            .iter()
            .map(|a| to_fixed_point_integer(a, d).unwrap())
            .collect();
        let total = sum_integer_amounts(&converted).unwrap();

        let exact: BigDecimal = amounts.iter().map(|a| decimal(a)).sum();
        prop_assert_eq!(decimal(&to_human_readable(&total, d).unwrap()), exact);
    }

    /// Property: batch output keeps input order and its total matches the string sum
    #[test]
    fn prop_batch_order_and_total(amounts in prop::collection::vec(arb_decimal(18), 0..30)) {
        let records: Vec<AmountRecord> = amounts
            .iter()
            .enumerate()
            .map(|(i, a)| AmountRecord::new(format!("id-{i}"), a.as_str()))
            .collect();
        let report = convert_batch(&records, &DecimalAmountConverter::default()).unwrap();

        let ids: Vec<&str> = report.records.iter().map(|r| r.address.as_str()).collect();
        let expected_ids: Vec<&str> = records.iter().map(|r| r.address.as_str()).collect();
        prop_assert_eq!(ids, expected_ids);

        let values: Vec<String> = report.records.iter().map(|r| r.value.to_string()).collect();
        prop_assert_eq!(report.total.to_string(), sum_integer_amounts(&values).unwrap());
    }

    /// Property: any fraction longer than the token decimals is rejected, never truncated
    #[test]
    fn prop_excess_precision_rejected(
        integer in 0u64..1_000_000,
        fraction in "[0-9]{19,30}",
    ) {
        let amount = format!("{integer}.{fraction}");
        let result = to_fixed_point_integer(&amount, TokenDecimals::STANDARD);
        let is_precision_overflow = matches!(result, Err(AmountError::PrecisionOverflow { .. }));
        prop_assert!(is_precision_overflow);
    }

    /// Property: a leading minus sign is always rejected as malformed
    #[test]
    fn prop_negative_rejected(amount in arb_decimal(18)) {
        let result = to_fixed_point_integer(&format!("-{amount}"), TokenDecimals::STANDARD);
        let is_invalid = matches!(result, Err(AmountError::InvalidFormat { .. }));
        prop_assert!(is_invalid);
    }
}
