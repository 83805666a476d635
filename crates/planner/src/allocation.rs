//! Utilization-weighted allocation planning.
//!
//! Capital is split across lending pools in proportion to their utilization:
//! busier pools pay more interest, so they get a larger share. Pools below a
//! minimum utilization are left out entirely.
//!
//! # Algorithm
//!
//! 1. Keep pools with `utilization >= min_utilization_pct`.
//! 2. Each kept pool gets `round(utilization / total_utilization * total_bps)`,
//!    rounding half to even.
//! 3. Whatever rounding lost is added to the last kept pool; whatever it
//!    overshot is taken back from the last pool (then earlier ones), never
//!    going below zero.
//!
//! The remainder always lands on the last entry. The strategy contract applies
//! weights in pool order, so the placement is part of the contract.
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::{Address, U256};
//! use tarot_rs_planner::{plan_allocations, PlannerConfig, PoolObservation};
//!
//! let pools = vec![
//!     PoolObservation::new(Address::repeat_byte(1), 62.05, U256::from(100), U256::from(38)),
//!     PoolObservation::new(Address::repeat_byte(2), 61.52, U256::from(100), U256::from(39)),
//! ];
//!
//! let plan = plan_allocations(&pools, &PlannerConfig::default()).unwrap();
//! assert_eq!(plan.allocated_bps(), 10_000);
//! ```

use alloy_primitives::Address;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::types::{AllocationEntry, AllocationPlan, PoolObservation};

/// Compute basis-point weights for the pools that pass the utilization filter.
///
/// Returns an empty plan when no pool qualifies. Fails when the configuration
/// or any observation is malformed.
pub fn plan_allocations(
    observations: &[PoolObservation],
    config: &PlannerConfig,
) -> Result<AllocationPlan> {
    config.validate()?;
    for observation in observations {
        observation.validate()?;
    }

    let qualifying: Vec<&PoolObservation> = observations
        .iter()
        .filter(|p| p.utilization >= config.min_utilization_pct)
        .collect();

    debug!(
        total = observations.len(),
        qualifying = qualifying.len(),
        min_utilization = config.min_utilization_pct,
        "filtered pools"
    );

    if qualifying.is_empty() {
        return Ok(AllocationPlan::empty(config.total_bps));
    }

    let utilizations = qualifying
        .iter()
        .map(|p| to_decimal(p))
        .collect::<Result<Vec<Decimal>>>()?;
    let total_utilization = qualifying
        .iter()
        .zip(&utilizations)
        .try_fold(Decimal::ZERO, |acc, (pool, u)| {
            acc.checked_add(*u)
                .ok_or(PlannerError::ArithmeticOverflow(pool.address))
        })?;

    let mut weights: Vec<u32> = if total_utilization.is_zero() {
        // Every qualifying pool sits at 0% (threshold of 0): split evenly.
        let share = config.total_bps / qualifying.len() as u32;
        vec![share; qualifying.len()]
    } else {
        qualifying
            .iter()
            .zip(&utilizations)
            .map(|(pool, u)| rounded_share(pool.address, *u, total_utilization, config.total_bps))
            .collect::<Result<Vec<u32>>>()?
    };

    settle_remainder(&mut weights, config.total_bps);

    let entries = qualifying
        .iter()
        .zip(weights)
        .map(|(pool, weight_bps)| AllocationEntry {
            address: pool.address,
            weight_bps,
        })
        .collect();

    Ok(AllocationPlan::new(config.total_bps, entries))
}

fn to_decimal(pool: &PoolObservation) -> Result<Decimal> {
    Decimal::try_from(pool.utilization).map_err(|_| PlannerError::InvalidUtilization {
        pool: pool.address,
        utilization: pool.utilization,
    })
}

fn rounded_share(
    pool: Address,
    utilization: Decimal,
    total_utilization: Decimal,
    total_bps: u32,
) -> Result<u32> {
    let raw = utilization
        .checked_div(total_utilization)
        .and_then(|share| share.checked_mul(Decimal::from(total_bps)))
        .ok_or(PlannerError::ArithmeticOverflow(pool))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    Ok(u32::try_from(raw).map_or(total_bps, |w| w.min(total_bps)))
}

/// Patch rounding drift so the weights sum to exactly `total_bps`.
fn settle_remainder(weights: &mut [u32], total_bps: u32) {
    let allocated: u64 = weights.iter().map(|w| u64::from(*w)).sum();
    let target = u64::from(total_bps);

    if allocated < target {
        if let Some(last) = weights.last_mut() {
            // allocated < target <= u32::MAX, so the shortfall fits
            *last += (target - allocated) as u32;
        }
        return;
    }

    if allocated > target {
        let mut excess = allocated - target;
        warn!(excess, "rounding overshot the total, trimming from the last pool");
        for weight in weights.iter_mut().rev() {
            if excess == 0 {
                break;
            }
            let taken = excess.min(u64::from(*weight));
            *weight -= taken as u32;
            excess -= taken;
        }
    }
}
