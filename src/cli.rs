//! Command-line arguments
//!
//! Every flag falls back to an environment variable, and `.env` is loaded
//! before parsing, so a run can be configured entirely from the environment.

use std::path::PathBuf;

use alloy_primitives::Address;
use clap::Parser;

use crate::config::constants::{env, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::config::{AirdropConfig, AirdropConfigBuilder};
use crate::distribution::LockOption;
use crate::types::tokens::TokenDecimals;

#[derive(Parser, Debug)]
#[command(name = "airdrop-amounts")]
#[command(about = "Convert decimal airdrop amounts into exact token base units", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON list of {"address", "value"} records with decimal values
    #[arg(short, long, env = env::INPUT, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Where to write the converted list
    #[arg(short, long, env = env::OUTPUT, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Token decimals
    #[arg(short, long, env = env::DECIMALS, default_value_t = TokenDecimals::STANDARD.as_u8())]
    pub decimals: u8,

    /// Also encode `airdrop` calls delegating to this address
    #[arg(long, env = env::DELEGATION)]
    pub delegation: Option<Address>,

    /// Lock option for encoded calls
    #[arg(long, env = env::LOCK_OPTION, default_value_t = 0)]
    pub lock_option: u8,

    /// Where to write encoded calls (requires --delegation)
    #[arg(long, env = env::CALLDATA_OUTPUT)]
    pub calldata_output: Option<PathBuf>,
}

impl From<Cli> for AirdropConfig {
    fn from(cli: Cli) -> Self {
        let mut builder = AirdropConfigBuilder::new()
            .decimals(TokenDecimals::new(cli.decimals))
            .input_path(cli.input)
            .output_path(cli.output);

        if let Some(delegation) = cli.delegation {
            builder = builder.distribution(delegation, LockOption::new(cli.lock_option));
        }
        if let Some(path) = cli.calldata_output {
            builder = builder.calldata_path(path);
        }

        builder.build()
    }
}
