//! Contract bindings and clients for Tarot lending pools and lender strategies.
//!
//! This crate provides Solidity contract bindings, a read-only client that
//! discovers lending pools and turns their state into
//! [`PoolObservation`](tarot_rs_planner::PoolObservation)s, and a transaction
//! client for applying allocation plans to a strategy.
//!
//! # Example
//!
//! ```no_run
//! use tarot_rs_contracts::PoolReader;
//! use alloy::primitives::Address;
//!
//! #[tokio::main]
//! async fn main() -> tarot_rs_contracts::Result<()> {
//!     let reader = PoolReader::new("https://rpc.ftm.tools")?;
//!
//!     let pool: Address = "0x5dd76071F7b5F4599d4F2B7c08641843B746ace9".parse().unwrap();
//!     let observation = reader.observe(pool, None).await?;
//!     println!("utilization: {:.2}%", observation.utilization);
//!
//!     Ok(())
//! }
//! ```

pub mod erc20;
pub mod error;
pub mod factory;
pub mod lending_pool;
pub mod pool_info;
pub mod pool_reader;
pub mod prepared_call;
pub mod provider;
pub mod strategy;
pub mod strategy_client;

pub use alloy::rpc::types::TransactionReceipt;
pub use error::{ContractError, Result};
pub use pool_info::{PairSide, PoolInfo, TokenInfo};
pub use pool_reader::PoolReader;
pub use prepared_call::PreparedCall;
pub use provider::HttpProvider;
pub use strategy::{reorder_pools_calldata, set_allocations_call, set_allocations_calldata};
pub use strategy_client::{StrategyAllocations, StrategyTransactionClient, StrategyViews};
