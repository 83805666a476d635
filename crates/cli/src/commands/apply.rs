//! Apply command: push a plan to a strategy's `manuallySetAllocations`.

use anyhow::{Context, Result};
use serde_json::json;
use tarot_rs_contracts::{
    set_allocations_calldata, PoolReader, StrategyTransactionClient, StrategyViews,
};
use tarot_rs_planner::{align_plan, AllocationPlan};
use tracing::info;

use crate::cli::{ApplyArgs, OutputFormat};
use crate::commands::{parse_address, read_json, receipt_json};
use crate::output::{format_apply_summary, format_receipt};

pub async fn run_apply(args: &ApplyArgs, format: OutputFormat) -> Result<()> {
    let strategy = parse_address(&args.strategy, "strategy")?;
    let plan: AllocationPlan = read_json(&args.input)?;
    plan.validate().context("Invalid allocation plan")?;

    if args.dry_run {
        let reader = PoolReader::new(&args.rpc_url)?;
        let tracked = reader
            .get_pools(strategy)
            .await
            .context("Failed to read strategy pools")?;
        let weights = align_plan(&plan, &tracked).context("Plan does not fit the strategy")?;
        let calldata = set_allocations_calldata(&weights);

        match format {
            OutputFormat::Table => {
                println!("{}", format_apply_summary(strategy, &tracked, &weights));
                println!("Dry run, not sent. Calldata:\n{}", calldata);
            }
            OutputFormat::Json => {
                let value = json!({
                    "strategy": strategy,
                    "pools": tracked,
                    "weights": weights,
                    "calldata": calldata,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        }
        return Ok(());
    }

    let private_key = args
        .private_key
        .as_deref()
        .context("--private-key (or PRIVATE_KEY) is required unless --dry-run is set")?;
    let client = StrategyTransactionClient::new(&args.rpc_url, private_key)?;

    let tracked = client
        .get_pools(strategy)
        .await
        .context("Failed to read strategy pools")?;
    let weights = align_plan(&plan, &tracked).context("Plan does not fit the strategy")?;

    info!(strategy = %strategy, pools = tracked.len(), "submitting allocations");
    let receipt = client.set_allocations(strategy, &weights).send().await?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_apply_summary(strategy, &tracked, &weights));
            println!("{}", format_receipt(&receipt));
        }
        OutputFormat::Json => {
            let mut value = receipt_json(&receipt);
            value["strategy"] = json!(strategy);
            value["pools"] = json!(tracked);
            value["weights"] = json!(weights);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
