// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed call surface for the airdrop distribution contract
//!
//! The converted list is ultimately submitted as one
//! `airdrop(recipient, amount, delegation, lockOption)` call per record. This
//! module builds those calls and their ABI-encoded calldata. It does not
//! sign or send anything; transport belongs to whoever holds the keys.
//!
//! This is the only place identifiers are parsed: the converter treats them
//! as opaque strings, but a contract call needs a real address.

use std::str::FromStr;

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::{sol, SolCall};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::batch::ConvertedRecord;
use crate::errors::DistributionError;
use crate::tracing::spans;
use crate::types::tokens::TokenAmount;

sol! {
    /// Airdrop distribution contract
    #[sol(all_derives)]
    interface IAirdropDistributor {
        /// Distribute `amount` base units to `recipient`, delegating voting
        /// power to `delegation` under the given lock option.
        function airdrop(address recipient, uint256 amount, address delegation, uint8 lockOption) external;
    }
}

/// Lock option passed to the distribution contract as a `uint8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockOption(u8);

impl LockOption {
    /// Create a lock option from its on-chain value
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the on-chain value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl From<u8> for LockOption {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl FromStr for LockOption {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>().map(Self)
    }
}

impl std::fmt::Display for LockOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One encoded `airdrop` call, ready to be signed by an external sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedCall {
    /// Recipient address
    pub recipient: Address,
    /// Amount in base units
    pub amount: TokenAmount,
    /// ABI-encoded calldata including the function selector
    pub calldata: Bytes,
}

/// Ordered list of `airdrop` calls for a converted batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionPlan {
    calls: Vec<IAirdropDistributor::airdropCall>,
}

impl DistributionPlan {
    /// Build one call per converted record, in order
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidRecipient`] for the first record whose
    /// identifier is not an EVM address.
    ///
    /// # Examples
    ///
    /// ```
    /// use airdrop_amounts::{ConvertedRecord, DistributionPlan, LockOption, TokenAmount};
    /// use alloy_primitives::Address;
    ///
    /// let records = vec![ConvertedRecord {
    ///     address: "0x00000000000000000000000000000000000000aa".to_string(),
    ///     value: TokenAmount::from(1_000u64),
    /// }];
    /// let plan = DistributionPlan::build(&records, Address::ZERO, LockOption::new(1)).unwrap();
    /// assert_eq!(plan.len(), 1);
    /// assert_eq!(plan.encoded()[0].calldata.len(), 4 + 4 * 32);
    /// ```
    pub fn build(
        records: &[ConvertedRecord],
        delegation: Address,
        lock_option: LockOption,
    ) -> Result<Self, DistributionError> {
        let span = spans::build_distribution(records.len(), lock_option.as_u8());
        let _guard = span.enter();

        let calls = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let recipient = record
                    .address
                    .parse::<Address>()
                    .map_err(|e| DistributionError::invalid_recipient(index, &record.address, e))?;
                Ok(IAirdropDistributor::airdropCall {
                    recipient,
                    amount: record.value.as_u256(),
                    delegation,
                    lockOption: lock_option.as_u8(),
                })
            })
            .collect::<Result<Vec<_>, DistributionError>>()?;

        info!(
            calls = calls.len(),
            delegation = %delegation,
            "Built distribution calls"
        );

        Ok(Self { calls })
    }

    /// The typed calls, in record order
    pub fn calls(&self) -> &[IAirdropDistributor::airdropCall] {
        &self.calls
    }

    /// Number of calls
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether the plan has no calls
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// ABI-encode every call
    pub fn encoded(&self) -> Vec<EncodedCall> {
        self.calls
            .iter()
            .map(|call| EncodedCall {
                recipient: call.recipient,
                amount: TokenAmount::new(call.amount),
                calldata: Bytes::from(call.abi_encode()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, U256};

    fn record(address: &str, value: u64) -> ConvertedRecord {
        ConvertedRecord {
            address: address.to_string(),
            value: TokenAmount::from(value),
        }
    }

    #[test]
    fn test_signature_matches_contract() {
        assert_eq!(
            IAirdropDistributor::airdropCall::SIGNATURE,
            "airdrop(address,uint256,address,uint8)"
        );
    }

    #[test]
    fn test_build_preserves_order_and_values() {
        let delegation = address!("00000000000000000000000000000000000000dd");
        let records = vec![
            record("0x00000000000000000000000000000000000000b2", 2),
            record("0x00000000000000000000000000000000000000a1", 1),
        ];
        let plan = DistributionPlan::build(&records, delegation, LockOption::new(2)).unwrap();

        let calls = plan.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].recipient, address!("00000000000000000000000000000000000000b2"));
        assert_eq!(calls[0].amount, U256::from(2u64));
        assert_eq!(calls[1].recipient, address!("00000000000000000000000000000000000000a1"));
        assert!(calls.iter().all(|c| c.delegation == delegation && c.lockOption == 2));
    }

    #[test]
    fn test_encoded_calldata_decodes() {
        let records = vec![record("0x00000000000000000000000000000000000000a1", 1_000_000)];
        let plan = DistributionPlan::build(&records, Address::ZERO, LockOption::new(1)).unwrap();
        let encoded = plan.encoded();

        let calldata = &encoded[0].calldata;
        assert_eq!(&calldata[..4], IAirdropDistributor::airdropCall::SELECTOR.as_slice());

        let decoded = IAirdropDistributor::airdropCall::abi_decode(calldata).unwrap();
        assert_eq!(decoded, plan.calls()[0]);
        assert_eq!(encoded[0].amount, TokenAmount::from(1_000_000u64));
    }

    #[test]
    fn test_invalid_recipient() {
        let records = vec![
            record("0x00000000000000000000000000000000000000a1", 1),
            record("0xA", 1),
        ];
        let err = DistributionPlan::build(&records, Address::ZERO, LockOption::default()).unwrap_err();
        assert!(matches!(
            err,
            DistributionError::InvalidRecipient { index: 1, ref identifier, .. } if identifier == "0xA"
        ));
    }

    #[test]
    fn test_lock_option_parse() {
        assert_eq!("3".parse::<LockOption>().unwrap(), LockOption::new(3));
        assert!("256".parse::<LockOption>().is_err());
    }
}
