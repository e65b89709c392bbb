//! Exact conversion of human-readable airdrop amounts into token base units.
//!
//! An airdrop list is a sequence of `(address, "100.5")` records, but a token
//! contract wants `100500000000000000000` (at 18 decimals). This crate does
//! that scaling with string parsing and big-integer arithmetic only, so no
//! amount is ever rounded, truncated or passed through a float. It also sums
//! the list exactly for a human-readable total, and optionally encodes the
//! resulting `airdrop(recipient, amount, delegation, lockOption)` calls.
//!
//! # Example
//!
//! ```
//! use airdrop_amounts::{convert_batch, AmountRecord, DecimalAmountConverter, TokenDecimals};
//!
//! let converter = DecimalAmountConverter::new(TokenDecimals::STANDARD);
//! let records = vec![
//!     AmountRecord::new("0xA", "100.0"),
//!     AmountRecord::new("0xB", "0.000001"),
//! ];
//!
//! let report = convert_batch(&records, &converter).unwrap();
//! assert_eq!(report.records[0].value.to_string(), "100000000000000000000");
//! assert_eq!(report.total_human_readable(), "100.000001");
//! ```

pub mod artifact;
mod batch;
pub mod bootstrap;
pub mod cli;
pub mod config;
mod convert;
pub mod distribution;
mod errors;
mod tracing;
mod types;

pub use artifact::{load_records, write_converted_records, write_json_atomic};
pub use batch::{convert_batch, AmountRecord, BatchReport, ConvertedRecord, RawAmount};
pub use config::{AirdropConfig, AirdropConfigBuilder, DistributionConfig};
pub use convert::{
    sum_amounts, sum_integer_amounts, to_fixed_point_integer, to_human_readable,
    DecimalAmountConverter,
};
pub use distribution::{DistributionPlan, EncodedCall, IAirdropDistributor, LockOption};
pub use errors::{AirdropError, AmountError, ArtifactError, BatchError, DistributionError};
pub use types::tokens::{DecimalAmount, RunningTotal, TokenAmount, TokenDecimals};
