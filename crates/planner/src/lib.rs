//! Allocation planning for Tarot lending pools.
//!
//! This crate turns a snapshot of lending-pool utilization into basis-point
//! allocation weights for a multi-pool lending strategy. It performs no I/O:
//! pool state is read by the caller (see `tarot-rs-contracts`) and the
//! resulting plan is submitted by the caller.
//!
//! # Overview
//!
//! - [`PoolObservation::from_pool_state`] - derive deposits and utilization from raw pool reads
//! - [`rank_pools_by_utilization`] - shortlist busy pools
//! - [`plan_allocations`] - compute weights that sum to exactly 100%
//! - [`align_plan`] - lay a plan out in the strategy's pool order

pub mod alignment;
pub mod allocation;
pub mod config;
pub mod error;
pub mod observation;
pub mod ranking;
pub mod types;

pub use alignment::align_plan;
pub use allocation::plan_allocations;
pub use config::{PlannerConfig, DEFAULT_MIN_UTILIZATION_PCT, DEFAULT_TOTAL_BPS};
pub use error::{PlannerError, Result};
pub use observation::{total_deposited, units_to_f64, utilization_pct, PoolState, WAD};
pub use ranking::{rank_pools_by_utilization, DEFAULT_SCAN_UTILIZATION_PCT};
pub use types::{AllocationEntry, AllocationPlan, PoolObservation};
