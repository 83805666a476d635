//! Strategy status command implementation.

use anyhow::{Context, Result};
use serde_json::json;
use tarot_rs_contracts::{PoolReader, StrategyViews};

use crate::cli::{OutputFormat, StrategyArgs};
use crate::commands::parse_address;
use crate::output::{format_strategy_status, DEFAULT_DECIMALS};

pub async fn run_strategy(args: &StrategyArgs, format: OutputFormat) -> Result<()> {
    let strategy = parse_address(&args.strategy, "strategy")?;
    let reader = PoolReader::new(&args.rpc_url)?;

    let (allocations, utilizations, total_assets) = tokio::try_join!(
        reader.current_allocations(strategy),
        reader.pool_utilizations(strategy),
        reader.estimated_total_assets(strategy),
    )
    .context("Failed to read strategy state")?;

    match format {
        OutputFormat::Table => {
            // Every pool of a strategy lends the same asset.
            let decimals = match allocations.pools.first() {
                Some(pool) => reader
                    .asset_decimals(&[*pool], None)
                    .await
                    .context("Failed to read asset decimals")?
                    .first()
                    .copied()
                    .unwrap_or(DEFAULT_DECIMALS),
                None => DEFAULT_DECIMALS,
            };
            println!(
                "{}",
                format_strategy_status(strategy, &allocations, &utilizations, total_assets, decimals)
            );
        }
        OutputFormat::Json => {
            let value = json!({
                "strategy": strategy,
                "estimatedTotalAssets": total_assets,
                "pools": allocations.pools,
                "allocations": allocations.allocations,
                "utilizations": utilizations,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
