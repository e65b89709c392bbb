//! Binary entry point logic

use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use crate::artifact::{load_records, write_converted_records, write_json_atomic};
use crate::batch::{convert_batch, BatchReport};
use crate::cli::Cli;
use crate::config::AirdropConfig;
use crate::convert::DecimalAmountConverter;
use crate::distribution::DistributionPlan;
use crate::errors::AirdropError;

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    // Load .env before parsing so env fallbacks see it
    dotenv().ok();

    let config = AirdropConfig::from(Cli::parse());
    execute(&config).await?;

    Ok(())
}

/// Run one conversion end to end
///
/// Loads the input, converts every record, prints the total, then writes
/// the converted list and (if configured) the encoded calls. Everything that
/// can fail on bad data happens before the first write, so a rejected batch
/// leaves no artifacts behind.
pub async fn execute(config: &AirdropConfig) -> Result<BatchReport, AirdropError> {
    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        decimals = config.decimals.as_u8(),
        "Starting airdrop conversion"
    );

    let records = load_records(&config.input_path).await?;
    let converter = DecimalAmountConverter::new(config.decimals);
    let report = convert_batch(&records, &converter)?;

    let plan = config
        .distribution
        .as_ref()
        .map(|d| DistributionPlan::build(&report.records, d.delegation, d.lock_option).map(|p| (d, p)))
        .transpose()?;

    println!("Total: {}", report.total_human_readable());

    write_converted_records(&config.output_path, &report.records).await?;

    if let Some((distribution, plan)) = plan {
        write_json_atomic(&distribution.calldata_path, &plan.encoded()).await?;
        info!(
            path = %distribution.calldata_path.display(),
            calls = plan.len(),
            "Saved encoded airdrop calls"
        );
    }

    Ok(report)
}
