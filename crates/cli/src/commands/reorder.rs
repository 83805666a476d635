//! Reorder command: ask a strategy to re-sort its pools.

use anyhow::{Context, Result};
use serde_json::json;
use tarot_rs_contracts::{reorder_pools_calldata, StrategyTransactionClient};
use tracing::info;

use crate::cli::{OutputFormat, ReorderArgs};
use crate::commands::{parse_address, receipt_json};
use crate::output::format_receipt;

pub async fn run_reorder(args: &ReorderArgs, format: OutputFormat) -> Result<()> {
    let strategy = parse_address(&args.strategy, "strategy")?;

    if args.dry_run {
        let calldata = reorder_pools_calldata();
        match format {
            OutputFormat::Table => {
                println!("Dry run, not sent. Calldata for {}:\n{}", strategy, calldata);
            }
            OutputFormat::Json => {
                let value = json!({ "strategy": strategy, "calldata": calldata });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        }
        return Ok(());
    }

    let rpc_url = args
        .rpc_url
        .as_deref()
        .context("--rpc-url (or ETH_RPC_URL) is required unless --dry-run is set")?;
    let private_key = args
        .private_key
        .as_deref()
        .context("--private-key (or PRIVATE_KEY) is required unless --dry-run is set")?;
    let client = StrategyTransactionClient::new(rpc_url, private_key)?;

    info!(strategy = %strategy, "reordering strategy pools");
    let receipt = client.reorder_pools(strategy).send().await?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_receipt(&receipt));
        }
        OutputFormat::Json => {
            let mut value = receipt_json(&receipt);
            value["strategy"] = json!(strategy);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
