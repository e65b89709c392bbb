//! Configuration for a conversion run
//!
//! # Example: Using defaults
//!
//! ```rust
//! use airdrop_amounts::AirdropConfig;
//!
//! // 18 decimals, airdrop.json -> airdrop_converted.json, no calldata
//! let config = AirdropConfig::default();
//! assert_eq!(config.decimals.as_u8(), 18);
//! assert!(config.distribution.is_none());
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use airdrop_amounts::{AirdropConfigBuilder, LockOption, TokenDecimals};
//! use alloy_primitives::Address;
//!
//! let config = AirdropConfigBuilder::new()
//!     .decimals(TokenDecimals::USDC)
//!     .input_path("data/usdc.json")
//!     .output_path("out/usdc_converted.json")
//!     .distribution(Address::ZERO, LockOption::new(1))
//!     .build();
//!
//! assert_eq!(config.decimals, TokenDecimals::USDC);
//! assert!(config.distribution.is_some());
//! ```

use std::path::PathBuf;

use alloy_primitives::Address;

use crate::distribution::LockOption;
use crate::types::tokens::TokenDecimals;

pub mod constants;

use constants::{DEFAULT_CALLDATA_PATH, DEFAULT_DECIMALS, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

/// Configuration for one conversion run
///
/// Use [`AirdropConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropConfig {
    /// Token decimals used to scale every amount
    /// Default: 18
    pub decimals: TokenDecimals,

    /// Input document of `(address, value)` records
    /// Default: `airdrop.json`
    pub input_path: PathBuf,

    /// Where the converted list is written
    /// Default: `airdrop_converted.json`
    pub output_path: PathBuf,

    /// Encoded distribution calls, if requested
    /// Default: None
    pub distribution: Option<DistributionConfig>,
}

/// Settings for encoding `airdrop` calls alongside the converted list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionConfig {
    /// Address voting power is delegated to
    pub delegation: Address,

    /// Lock option passed to every call
    pub lock_option: LockOption,

    /// Where the encoded calls are written
    /// Default: `airdrop_calldata.json`
    pub calldata_path: PathBuf,
}

impl Default for AirdropConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            distribution: None,
        }
    }
}

/// Builder for [`AirdropConfig`]
///
/// # Example
///
/// ```rust
/// use airdrop_amounts::{AirdropConfigBuilder, TokenDecimals};
///
/// let config = AirdropConfigBuilder::new()
///     .decimals(TokenDecimals::new(8))
///     .build();
/// assert_eq!(config.decimals.as_u8(), 8);
/// ```
#[derive(Debug, Default)]
pub struct AirdropConfigBuilder {
    config: AirdropConfig,
    distribution: Option<(Address, LockOption)>,
    calldata_path: Option<PathBuf>,
}

impl AirdropConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set token decimals
    pub fn decimals(mut self, decimals: TokenDecimals) -> Self {
        self.config.decimals = decimals;
        self
    }

    /// Set the input document path
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    /// Set the converted output path
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Enable encoding of `airdrop` calls with this delegation and lock option
    pub fn distribution(mut self, delegation: Address, lock_option: LockOption) -> Self {
        self.distribution = Some((delegation, lock_option));
        self
    }

    /// Set where encoded calls are written
    ///
    /// Only used when [`distribution`](Self::distribution) is also set.
    pub fn calldata_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.calldata_path = Some(path.into());
        self
    }

    /// Build the final configuration
    pub fn build(self) -> AirdropConfig {
        let Self {
            mut config,
            distribution,
            calldata_path,
        } = self;

        config.distribution = distribution.map(|(delegation, lock_option)| DistributionConfig {
            delegation,
            lock_option,
            calldata_path: calldata_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CALLDATA_PATH)),
        });

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_defaults() {
        let config = AirdropConfig::default();
        assert_eq!(config.decimals, TokenDecimals::STANDARD);
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(config.distribution.is_none());
    }

    #[test]
    fn test_builder_matches_default() {
        assert_eq!(AirdropConfigBuilder::new().build(), AirdropConfig::default());
    }

    #[test]
    fn test_calldata_path_without_distribution_is_ignored() {
        let config = AirdropConfigBuilder::new().calldata_path("calls.json").build();
        assert!(config.distribution.is_none());
    }

    #[test]
    fn test_distribution_with_custom_calldata_path() {
        let delegation = address!("00000000000000000000000000000000000000dd");
        let config = AirdropConfigBuilder::new()
            .calldata_path("out/calls.json")
            .distribution(delegation, LockOption::new(2))
            .build();

        let distribution = config.distribution.unwrap();
        assert_eq!(distribution.delegation, delegation);
        assert_eq!(distribution.lock_option, LockOption::new(2));
        assert_eq!(distribution.calldata_path, PathBuf::from("out/calls.json"));
    }

    #[test]
    fn test_distribution_default_calldata_path() {
        let config = AirdropConfigBuilder::new()
            .distribution(Address::ZERO, LockOption::default())
            .build();
        assert_eq!(
            config.distribution.unwrap().calldata_path,
            PathBuf::from(DEFAULT_CALLDATA_PATH)
        );
    }
}
