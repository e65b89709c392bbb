//! Error types for batch conversion.

use super::AmountError;

/// Errors that abort a batch conversion.
///
/// The batch is fail-fast: the first bad record stops the run and nothing
/// is emitted, since a partially converted airdrop list is not safe to use.
/// The error carries the record's position, identifier and raw value so the
/// source data can be corrected by hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    /// A record's value could not be converted.
    #[error("Record #{index} ({identifier}) has unusable value {raw_value:?}: {source}")]
    InvalidRecord {
        /// Zero-based position in the input list
        index: usize,
        /// The record's identifier (address), verbatim
        identifier: String,
        /// The record's value, verbatim
        raw_value: String,
        /// Why the value was rejected
        #[source]
        source: AmountError,
    },
}

impl BatchError {
    /// Create an `InvalidRecord` error.
    pub fn invalid_record(
        index: usize,
        identifier: impl Into<String>,
        raw_value: impl Into<String>,
        source: AmountError,
    ) -> Self {
        BatchError::InvalidRecord {
            index,
            identifier: identifier.into(),
            raw_value: raw_value.into(),
            source,
        }
    }

    /// The underlying amount error.
    pub fn amount_error(&self) -> &AmountError {
        match self {
            BatchError::InvalidRecord { source, .. } => source,
        }
    }
}
