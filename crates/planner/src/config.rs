//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Pools below this utilization (percent) get no allocation.
pub const DEFAULT_MIN_UTILIZATION_PCT: f64 = 20.0;

/// Basis points in 100%.
pub const DEFAULT_TOTAL_BPS: u32 = 10_000;

/// Configuration for [`plan_allocations`](crate::plan_allocations).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Inclusion threshold; pools strictly below it are left out.
    pub min_utilization_pct: f64,
    /// Basis points distributed among qualifying pools.
    pub total_bps: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_utilization_pct: DEFAULT_MIN_UTILIZATION_PCT,
            total_bps: DEFAULT_TOTAL_BPS,
        }
    }
}

impl PlannerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum utilization threshold.
    pub fn with_min_utilization(mut self, pct: f64) -> Self {
        self.min_utilization_pct = pct;
        self
    }

    /// Set the total basis points to distribute.
    pub fn with_total_bps(mut self, total_bps: u32) -> Self {
        self.total_bps = total_bps;
        self
    }

    /// Reject thresholds outside `[0, 100]` and a zero total.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.min_utilization_pct) {
            return Err(PlannerError::InvalidThreshold(self.min_utilization_pct));
        }
        if self.total_bps == 0 {
            return Err(PlannerError::ZeroTotalBps);
        }
        Ok(())
    }
}
