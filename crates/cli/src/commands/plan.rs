//! Allocation planning command implementation.

use anyhow::{Context, Result};
use tarot_rs_planner::{plan_allocations, PlannerConfig, PoolObservation};

use crate::cli::{OutputFormat, PlanArgs};
use crate::commands::{observe_pools, read_json};
use crate::output::format_plan_table;

async fn load_observations(args: &PlanArgs) -> Result<Vec<PoolObservation>> {
    if let Some(path) = &args.input {
        return read_json(path);
    }

    let rpc_url = args
        .rpc_url
        .as_deref()
        .context("--rpc-url (or ETH_RPC_URL) is required to observe pools on-chain")?;
    observe_pools(rpc_url, &args.pools, args.asset.as_deref()).await
}

pub async fn run_plan(args: &PlanArgs, format: OutputFormat) -> Result<()> {
    let observations = load_observations(args).await?;

    let config = PlannerConfig::new()
        .with_min_utilization(args.min_utilization)
        .with_total_bps(args.total_bps);
    let plan = plan_allocations(&observations, &config).context("Failed to plan allocations")?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_plan_table(&plan, &observations));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plan)?;
            println!("{}", json);
        }
    }

    Ok(())
}
