//! Tarot CLI - Discover lending pools, plan allocations and apply them to a strategy.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{run_apply, run_info, run_plan, run_pools, run_reorder, run_strategy};

/// Log to stderr so JSON on stdout stays parseable. `RUST_LOG` overrides the level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Pools(args) => {
            run_pools(&args, cli.format).await?;
        }
        Commands::Info(args) => {
            run_info(&args, cli.format).await?;
        }
        Commands::Plan(args) => {
            run_plan(&args, cli.format).await?;
        }
        Commands::Strategy(args) => {
            run_strategy(&args, cli.format).await?;
        }
        Commands::Apply(args) => {
            run_apply(&args, cli.format).await?;
        }
        Commands::Reorder(args) => {
            run_reorder(&args, cli.format).await?;
        }
    }

    Ok(())
}
