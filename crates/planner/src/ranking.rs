//! Ranking candidate pools by utilization.

use std::cmp::Ordering;

use crate::types::PoolObservation;

/// Default cut-off used when scanning for lending candidates.
pub const DEFAULT_SCAN_UTILIZATION_PCT: f64 = 60.0;

/// Keep pools strictly above `min_utilization_pct`, busiest first.
///
/// The sort is stable, so pools with equal utilization keep their input order.
pub fn rank_pools_by_utilization(
    observations: &[PoolObservation],
    min_utilization_pct: f64,
) -> Vec<PoolObservation> {
    let mut ranked: Vec<PoolObservation> = observations
        .iter()
        .filter(|p| p.utilization > min_utilization_pct)
        .cloned()
        .collect();

    ranked.sort_by(|a, b| {
        b.utilization
            .partial_cmp(&a.utilization)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}
