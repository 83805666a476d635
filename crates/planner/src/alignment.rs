//! Fitting a plan to the pool set a strategy tracks.
//!
//! `manuallySetAllocations` takes one weight per tracked pool, in the
//! strategy's own pool order, and reverts on a length mismatch or a total
//! below 100%. A plan only lists the pools that qualified, so it has to be
//! spread over the tracked set before it can be submitted.

use std::collections::HashSet;

use alloy_primitives::Address;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::types::{ensure_unique, AllocationPlan};

/// Weights in `tracked_pools` order, zero for tracked pools the plan omits.
///
/// Fails if the plan itself does not validate, if it names an untracked
/// pool, or if the strategy lists a pool twice.
pub fn align_plan(plan: &AllocationPlan, tracked_pools: &[Address]) -> Result<Vec<u32>> {
    plan.validate()?;
    ensure_unique(tracked_pools.iter().copied())?;

    let tracked: HashSet<Address> = tracked_pools.iter().copied().collect();
    if let Some(entry) = plan.iter().find(|e| !tracked.contains(&e.address)) {
        return Err(PlannerError::UntrackedPool(entry.address));
    }

    let weights: Vec<u32> = tracked_pools
        .iter()
        .map(|pool| plan.weight_of(*pool).unwrap_or(0))
        .collect();

    debug!(
        tracked = tracked_pools.len(),
        planned = plan.len(),
        "aligned plan to strategy pools"
    );
    Ok(weights)
}
