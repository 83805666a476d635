//! Data model shared by the planner, the chain readers and the CLI.

use std::collections::HashSet;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Observed state of one lending pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolObservation {
    /// Lending pool (bToken) address.
    pub address: Address,
    /// Percentage (0-100) of supplied liquidity currently borrowed.
    pub utilization: f64,
    /// Total value supplied to the pool, in asset base units.
    pub total_deposited: U256,
    /// Value not currently borrowed, in asset base units.
    pub available_liquidity: U256,
}

impl PoolObservation {
    /// Create an observation from already-derived values.
    pub fn new(
        address: Address,
        utilization: f64,
        total_deposited: U256,
        available_liquidity: U256,
    ) -> Self {
        Self {
            address,
            utilization,
            total_deposited,
            available_liquidity,
        }
    }

    /// Amount currently lent out to borrowers.
    pub fn borrowed(&self) -> U256 {
        self.total_deposited.saturating_sub(self.available_liquidity)
    }

    /// Check the observation is well formed.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.utilization) {
            return Err(PlannerError::InvalidUtilization {
                pool: self.address,
                utilization: self.utilization,
            });
        }
        if self.total_deposited < self.available_liquidity {
            return Err(PlannerError::LiquidityExceedsDeposits {
                pool: self.address,
                deposited: self.total_deposited,
                available: self.available_liquidity,
            });
        }
        Ok(())
    }
}

/// Weight assigned to a single pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    /// Lending pool address.
    pub address: Address,
    /// Share of the total, in basis points.
    pub weight_bps: u32,
}

/// Ordered allocation weights for the pools that qualified.
///
/// When non-empty the weights add up to exactly `total_bps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationPlan {
    total_bps: u32,
    entries: Vec<AllocationEntry>,
}

impl AllocationPlan {
    pub(crate) fn new(total_bps: u32, entries: Vec<AllocationEntry>) -> Self {
        Self { total_bps, entries }
    }

    /// A plan with no qualifying pools.
    pub fn empty(total_bps: u32) -> Self {
        Self::new(total_bps, Vec::new())
    }

    /// Basis points the plan was distributed over.
    pub fn total_bps(&self) -> u32 {
        self.total_bps
    }

    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AllocationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights.
    pub fn allocated_bps(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.weight_bps)).sum()
    }

    /// Check the plan can be submitted as is.
    ///
    /// A plan read back from JSON may have been edited, so the sum and
    /// uniqueness guarantees of [`plan_allocations`](crate::plan_allocations)
    /// are checked again. An empty plan never passes.
    pub fn validate(&self) -> Result<()> {
        if self.total_bps == 0 {
            return Err(PlannerError::ZeroTotalBps);
        }
        ensure_unique(self.iter().map(|e| e.address))?;

        let allocated = self.allocated_bps();
        if allocated != u64::from(self.total_bps) {
            return Err(PlannerError::IncompleteAllocation {
                allocated,
                expected: self.total_bps,
            });
        }
        Ok(())
    }

    /// Weight for a pool, if it is part of the plan.
    pub fn weight_of(&self, pool: Address) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.address == pool)
            .map(|e| e.weight_bps)
    }
}

impl<'a> IntoIterator for &'a AllocationPlan {
    type Item = &'a AllocationEntry;
    type IntoIter = std::slice::Iter<'a, AllocationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

pub(crate) fn ensure_unique(pools: impl Iterator<Item = Address>) -> Result<()> {
    let mut seen = HashSet::new();
    for pool in pools {
        if !seen.insert(pool) {
            return Err(PlannerError::DuplicatePool(pool));
        }
    }
    Ok(())
}
