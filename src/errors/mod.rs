//! Error types for the airdrop-amounts library.
//!
//! Each module has its own error type, and [`AirdropError`] wraps them all
//! for callers that don't need to tell the sources apart:
//!
//! - [`AmountError`] - a single decimal/base-unit conversion failed
//! - [`BatchError`] - a record in a batch failed, with its position and identifier
//! - [`ArtifactError`] - reading or writing a JSON document failed
//! - [`DistributionError`] - a record could not become an `airdrop` call
//!
//! Every error is fatal to a run. They describe bad data or a broken
//! filesystem, not transient faults, so nothing is retried.
//!
//! # Examples
//!
//! ```rust
//! use airdrop_amounts::{convert_batch, AmountError, AmountRecord, BatchError, DecimalAmountConverter};
//!
//! let records = vec![
//!     AmountRecord::new("0xA", "1.0"),
//!     AmountRecord::new("0xB", "-5.0"),
//! ];
//!
//! match convert_batch(&records, &DecimalAmountConverter::default()) {
//!     Err(BatchError::InvalidRecord { index, identifier, source, .. }) => {
//!         assert_eq!(index, 1);
//!         assert_eq!(identifier, "0xB");
//!         assert!(matches!(source, AmountError::InvalidFormat { .. }));
//!     }
//!     Ok(_) => panic!("negative amount must be rejected"),
//! }
//! ```

mod amount;
mod artifact;
mod batch;
mod distribution;

pub use amount::AmountError;
pub use artifact::ArtifactError;
pub use batch::BatchError;
pub use distribution::DistributionError;

/// Unified error type for all airdrop-amounts operations.
///
/// All module-specific error types convert into `AirdropError` via `From`,
/// so `?` works across module boundaries.
#[derive(Debug, thiserror::Error)]
pub enum AirdropError {
    /// Error from a single amount conversion.
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    /// Error from batch conversion.
    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),

    /// Error from reading or writing an artifact.
    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// Error from building distribution calls.
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),
}
