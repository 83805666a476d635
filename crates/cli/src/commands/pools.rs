//! Pool scan command implementation.

use std::collections::HashMap;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use tarot_rs_contracts::PoolReader;
use tarot_rs_planner::rank_pools_by_utilization;
use tracing::info;

use crate::cli::{OutputFormat, PoolsArgs};
use crate::commands::{parse_address, parse_pools};
use crate::output::format_pools_table;

pub async fn run_pools(args: &PoolsArgs, format: OutputFormat) -> Result<()> {
    let asset = args
        .asset
        .as_deref()
        .map(|a| parse_address(a, "asset"))
        .transpose()?;
    let reader = PoolReader::new(&args.rpc_url)?;

    let pools = match args.factory.as_deref() {
        Some(factory) => {
            let factory = parse_address(factory, "factory")?;
            let asset = asset.context("--asset is required with --factory")?;
            reader
                .discover(factory, asset)
                .await
                .context("Failed to discover lending pools")?
        }
        None => parse_pools(&args.pools)?,
    };

    let observations = reader
        .observe_all(&pools, asset)
        .await
        .context("Failed to observe lending pools")?;
    let ranked = rank_pools_by_utilization(&observations, args.min_utilization);

    info!(
        observed = observations.len(),
        shortlisted = ranked.len(),
        "ranked lending pools"
    );

    match format {
        OutputFormat::Table => {
            let shortlisted: Vec<Address> = ranked.iter().map(|p| p.address).collect();
            let decimals = reader
                .asset_decimals(&shortlisted, asset)
                .await
                .context("Failed to read asset decimals")?;
            let decimals: HashMap<Address, u8> = shortlisted.into_iter().zip(decimals).collect();
            println!("{}", format_pools_table(&ranked, &decimals));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&ranked)?;
            println!("{}", json);
        }
    }

    Ok(())
}
