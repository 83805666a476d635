//! Command implementations.

pub mod apply;
pub mod info;
pub mod plan;
pub mod pools;
pub mod reorder;
pub mod strategy;

pub use apply::run_apply;
pub use info::run_info;
pub use plan::run_plan;
pub use pools::run_pools;
pub use reorder::run_reorder;
pub use strategy::run_strategy;

use std::path::Path;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use serde_json::{json, Value};
use tarot_rs_contracts::{PoolReader, TransactionReceipt};
use tarot_rs_planner::PoolObservation;

/// Parse an address argument, naming it in the error.
pub(crate) fn parse_address(value: &str, what: &str) -> Result<Address> {
    value
        .parse()
        .with_context(|| format!("Invalid {} address: {}", what, value))
}

/// Parse a list of pool addresses.
pub(crate) fn parse_pools(values: &[String]) -> Result<Vec<Address>> {
    values.iter().map(|v| parse_address(v, "pool")).collect()
}

/// Read and deserialize a JSON file.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&body).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Observe pools on-chain.
pub(crate) async fn observe_pools(
    rpc_url: &str,
    pools: &[String],
    asset: Option<&str>,
) -> Result<Vec<PoolObservation>> {
    let pools = parse_pools(pools)?;
    let asset = asset.map(|a| parse_address(a, "asset")).transpose()?;

    let reader = PoolReader::new(rpc_url)?;
    let observations = reader
        .observe_all(&pools, asset)
        .await
        .context("Failed to observe lending pools")?;
    Ok(observations)
}

/// JSON fields describing a mined transaction.
pub(crate) fn receipt_json(receipt: &TransactionReceipt) -> Value {
    json!({
        "transactionHash": receipt.transaction_hash,
        "blockNumber": receipt.block_number,
        "gasUsed": receipt.gas_used,
        "status": receipt.status(),
    })
}
