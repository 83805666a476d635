//! Pool info command implementation.

use anyhow::{Context, Result};
use tarot_rs_contracts::PoolReader;

use crate::cli::{InfoArgs, OutputFormat};
use crate::commands::parse_pools;
use crate::output::format_pool_info_table;

pub async fn run_info(args: &InfoArgs, format: OutputFormat) -> Result<()> {
    let pools = parse_pools(&args.pools)?;
    let reader = PoolReader::new(&args.rpc_url)?;
    let infos = reader
        .pool_info_all(&pools)
        .await
        .context("Failed to read pool info")?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_pool_info_table(&infos));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&infos)?;
            println!("{}", json);
        }
    }

    Ok(())
}
