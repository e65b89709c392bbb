//! Strong types for token-related values
//!
//! These newtypes keep human-readable decimals and on-chain base units
//! from being mixed up.
//!
//! # Type Relationships
//!
//! ```text
//! DecimalAmount ("100.000001", as written)
//!     |
//!     | to_base_units(TokenDecimals)
//!     ↓
//! TokenAmount (U256, base units)
//!     |
//!     | RunningTotal::add
//!     ↓
//! RunningTotal (BigInt, unbounded)
//! ```

mod amount;
mod decimal;
mod decimals;
mod total;

pub use amount::TokenAmount;
pub use decimal::DecimalAmount;
pub(crate) use decimal::{format_base_units, is_digit_string};
pub use decimals::TokenDecimals;
pub use total::RunningTotal;
