//! Defaults and environment variable names
//!
//! Centralizes the constants shared by the configuration layer and the CLI.

use crate::types::tokens::TokenDecimals;

/// Default token decimals (ERC-20 convention)
pub const DEFAULT_DECIMALS: TokenDecimals = TokenDecimals::STANDARD;

/// Default input document
pub const DEFAULT_INPUT_PATH: &str = "airdrop.json";

/// Default converted output document
pub const DEFAULT_OUTPUT_PATH: &str = "airdrop_converted.json";

/// Default encoded calldata document
pub const DEFAULT_CALLDATA_PATH: &str = "airdrop_calldata.json";

/// Environment variable names read by the CLI (also loadable from `.env`)
pub mod env {
    /// Input document path
    pub const INPUT: &str = "AIRDROP_INPUT";
    /// Converted output path
    pub const OUTPUT: &str = "AIRDROP_OUTPUT";
    /// Token decimals
    pub const DECIMALS: &str = "TOKEN_DECIMALS";
    /// Delegation address for distribution calls
    pub const DELEGATION: &str = "AIRDROP_DELEGATION";
    /// Lock option for distribution calls
    pub const LOCK_OPTION: &str = "AIRDROP_LOCK_OPTION";
    /// Encoded calldata output path
    pub const CALLDATA_OUTPUT: &str = "AIRDROP_CALLDATA_OUTPUT";
}
