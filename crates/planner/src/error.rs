//! Error types for the planner library.

use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Errors that can occur while validating inputs or building a plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    /// Minimum utilization threshold is not a percentage in `[0, 100]`.
    #[error("Minimum utilization {0} is outside [0, 100]")]
    InvalidThreshold(f64),

    /// Total basis points to distribute must be positive.
    #[error("Total basis points must be greater than zero")]
    ZeroTotalBps,

    /// Observed utilization is not a percentage in `[0, 100]`.
    #[error("Invalid utilization {utilization} for pool {pool}")]
    InvalidUtilization { pool: Address, utilization: f64 },

    /// Pool reports more free liquidity than it holds in deposits.
    #[error("Pool {pool} has available liquidity {available} above total deposited {deposited}")]
    LiquidityExceedsDeposits {
        pool: Address,
        deposited: U256,
        available: U256,
    },

    /// Deposit or weight arithmetic overflowed.
    #[error("Arithmetic overflow for pool {0}")]
    ArithmeticOverflow(Address),

    /// Plan names a pool the strategy does not track.
    #[error("Pool {0} is not tracked by the strategy")]
    UntrackedPool(Address),

    /// Same pool listed twice.
    #[error("Pool {0} is listed more than once")]
    DuplicatePool(Address),

    /// Aligned weights do not add up to the full allocation.
    #[error("Allocation totals {allocated} bps, expected {expected} bps")]
    IncompleteAllocation { allocated: u64, expected: u32 },
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, PlannerError>;
