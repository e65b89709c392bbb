// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Batch conversion of airdrop records
//!
//! Converts an ordered list of `(address, decimal value)` records into
//! `(address, base-unit value)` records in one sequential, fail-fast pass,
//! accumulating the exact total along the way.

use std::fmt;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, info};

use crate::convert::DecimalAmountConverter;
use crate::errors::BatchError;
use crate::tracing::spans;
use crate::types::tokens::{RunningTotal, TokenAmount, TokenDecimals};

/// A decimal value exactly as it appeared in the input document
///
/// Accepts a JSON string or a JSON number. Numbers are read with
/// `serde_json`'s `arbitrary_precision`, so the numeral's source text is kept
/// digit for digit and never passes through `f64`. Exponent forms such as
/// `1e3` are kept as written and later rejected by conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAmount(String);

impl RawAmount {
    /// The value's text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RawAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Negative numbers are kept so conversion can reject them with context
        match Value::deserialize(deserializer)? {
            Value::String(text) => Ok(RawAmount(text)),
            Value::Number(number) => Ok(RawAmount(number.to_string())),
            other => Err(de::Error::custom(format!(
                "expected a decimal amount as a string or number, found {other}"
            ))),
        }
    }
}

/// One input row: an opaque identifier and a human-readable amount
///
/// The identifier is carried through untouched; conversion never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountRecord {
    /// Recipient identifier, usually an account address
    pub address: String,
    /// Decimal amount, e.g. `"100.0"`
    pub value: RawAmount,
}

impl AmountRecord {
    /// Create a record from an identifier and a decimal value
    pub fn new(address: impl Into<String>, value: impl Into<RawAmount>) -> Self {
        Self {
            address: address.into(),
            value: value.into(),
        }
    }
}

/// One output row: the same identifier and the amount in base units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedRecord {
    /// Recipient identifier, copied from the input record
    pub address: String,
    /// Amount scaled by `10^decimals`, serialized as a decimal string
    pub value: TokenAmount,
}

/// Result of a successful batch conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Converted records, in input order
    pub records: Vec<ConvertedRecord>,
    /// Exact sum of every converted value
    pub total: RunningTotal,
    /// Decimals used for the conversion
    pub decimals: TokenDecimals,
}

impl BatchReport {
    /// Number of converted records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch had no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The total as a human-readable decimal string
    pub fn total_human_readable(&self) -> String {
        self.total.to_human_readable(self.decimals)
    }
}

/// Convert every record, preserving order, stopping at the first failure
///
/// # Errors
///
/// [`BatchError::InvalidRecord`] for the first record whose value cannot be
/// converted. No partial output is returned.
///
/// # Examples
///
/// ```
/// use airdrop_amounts::{convert_batch, AmountRecord, DecimalAmountConverter};
///
/// let records = vec![
///     AmountRecord::new("0xA", "100.0"),
///     AmountRecord::new("0xB", "0.000001"),
/// ];
/// let report = convert_batch(&records, &DecimalAmountConverter::default()).unwrap();
///
/// assert_eq!(report.records[0].value.to_string(), "100000000000000000000");
/// assert_eq!(report.records[1].value.to_string(), "1000000000000");
/// assert_eq!(report.total_human_readable(), "100.000001");
/// ```
pub fn convert_batch(
    records: &[AmountRecord],
    converter: &DecimalAmountConverter,
) -> Result<BatchReport, BatchError> {
    let span = spans::convert_batch(records.len(), converter.decimals());
    let _guard = span.enter();

    let mut total = RunningTotal::new();
    let mut converted = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let value = converter.convert(record.value.as_str()).map_err(|e| {
            BatchError::invalid_record(index, &record.address, record.value.as_str(), e)
        })?;

        debug!(
            index,
            address = %record.address,
            input = %record.value,
            base_units = %value,
            "Converted record"
        );

        total.add(value);
        converted.push(ConvertedRecord {
            address: record.address.clone(),
            value,
        });
    }

    let report = BatchReport {
        records: converted,
        total,
        decimals: converter.decimals(),
    };

    info!(
        records = report.len(),
        total_base_units = %report.total,
        total = %report.total_human_readable(),
        "Finished batch conversion"
    );

    Ok(report)
}
