//! Error types for building distribution calls.

/// Errors from turning converted records into `airdrop` calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DistributionError {
    /// A record's identifier is not a valid EVM address.
    #[error("Record #{index} has invalid recipient {identifier:?}: {details}")]
    InvalidRecipient {
        /// Zero-based position in the converted list
        index: usize,
        /// The identifier, verbatim
        identifier: String,
        /// Parser error
        details: String,
    },
}

impl DistributionError {
    /// Create an `InvalidRecipient` error.
    pub fn invalid_recipient(
        index: usize,
        identifier: impl Into<String>,
        details: impl std::fmt::Display,
    ) -> Self {
        DistributionError::InvalidRecipient {
            index,
            identifier: identifier.into(),
            details: details.to_string(),
        }
    }
}
