//! Span creation helpers for airdrop-amounts operations.
//!
//! Telemetry is kept out of the business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use std::path::Path;

use tracing::{Level, Span};

use crate::types::tokens::TokenDecimals;

/// Create span for converting a whole batch of records.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn convert_batch(records: usize, decimals: TokenDecimals) -> Span {
    tracing::span!(
        Level::INFO,
        "airdrop.convert_batch",
        records = records,
        decimals = decimals.as_u8(),
    )
}

/// Create span for building `airdrop` calls from converted records.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn build_distribution(records: usize, lock_option: u8) -> Span {
    tracing::span!(
        Level::INFO,
        "airdrop.build_distribution",
        records = records,
        lock_option = lock_option,
    )
}

/// Create span for an atomic artifact write.
#[inline]
pub(crate) fn write_artifact(path: &Path) -> Span {
    tracing::debug_span!("airdrop.write_artifact", path = %path.display())
}

/// Create span for loading the input document.
#[inline]
pub(crate) fn load_records(path: &Path) -> Span {
    tracing::debug_span!("airdrop.load_records", path = %path.display())
}
