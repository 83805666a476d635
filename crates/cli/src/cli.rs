//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tarot_rs_planner::{
    DEFAULT_MIN_UTILIZATION_PCT, DEFAULT_SCAN_UTILIZATION_PCT, DEFAULT_TOTAL_BPS,
};

/// Tarot CLI - Plan lending pool allocations for a multi-pool lender strategy
#[derive(Parser, Debug)]
#[command(name = "tarot")]
#[command(about = "CLI tool for planning Tarot lending pool allocations", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query lending pools and rank them by utilization
    Pools(PoolsArgs),
    /// Show the collateral pair behind lending pools
    Info(InfoArgs),
    /// Compute allocation weights from pool utilization
    Plan(PlanArgs),
    /// Show a strategy's pools, allocations and utilization
    Strategy(StrategyArgs),
    /// Apply an allocation plan to a strategy
    Apply(ApplyArgs),
    /// Ask a strategy to reorder its pools
    Reorder(ReorderArgs),
}

#[derive(Parser, Debug)]
pub struct PoolsArgs {
    /// Lending pool (bToken) addresses
    #[arg(required_unless_present = "factory", conflicts_with = "factory")]
    pub pools: Vec<String>,

    /// Tarot factory to search for pools lending `--asset`
    #[arg(long, requires = "asset")]
    pub factory: Option<String>,

    /// Asset lent by the pools (looked up from each pool when omitted)
    #[arg(long)]
    pub asset: Option<String>,

    /// Only show pools above this utilization (percent)
    #[arg(long, default_value_t = DEFAULT_SCAN_UTILIZATION_PCT)]
    pub min_utilization: f64,

    /// RPC URL (can also use ETH_RPC_URL env var)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Lending pool (bToken) addresses
    #[arg(required = true)]
    pub pools: Vec<String>,

    /// RPC URL (can also use ETH_RPC_URL env var)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,
}

#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Lending pool addresses to observe on-chain
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    pub pools: Vec<String>,

    /// JSON file with pool observations (as printed by `pools --format json`)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Asset lent by the pools (looked up from each pool when omitted)
    #[arg(long)]
    pub asset: Option<String>,

    /// Pools below this utilization (percent) get no allocation
    #[arg(long, default_value_t = DEFAULT_MIN_UTILIZATION_PCT)]
    pub min_utilization: f64,

    /// Basis points to distribute
    #[arg(long, default_value_t = DEFAULT_TOTAL_BPS)]
    pub total_bps: u32,

    /// RPC URL, needed when observing pools on-chain (can also use ETH_RPC_URL env var)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: Option<String>,
}

#[derive(Parser, Debug)]
pub struct StrategyArgs {
    /// Strategy contract address
    pub strategy: String,

    /// RPC URL (can also use ETH_RPC_URL env var)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,
}

#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Strategy contract address
    pub strategy: String,

    /// JSON file with an allocation plan (as printed by `plan --format json`)
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Print the aligned weights and calldata without sending
    #[arg(long)]
    pub dry_run: bool,

    /// Private key for signing transactions (can also use PRIVATE_KEY env var)
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// RPC URL (can also use ETH_RPC_URL env var)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,
}

#[derive(Parser, Debug)]
pub struct ReorderArgs {
    /// Strategy contract address
    pub strategy: String,

    /// Print the calldata without sending
    #[arg(long)]
    pub dry_run: bool,

    /// Private key for signing transactions (can also use PRIVATE_KEY env var)
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// RPC URL, needed unless --dry-run is set (can also use ETH_RPC_URL env var)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
