//! Deriving pool observations from raw lending-pool state.
//!
//! A Tarot bToken exposes its share supply and an exchange rate (WAD-scaled)
//! between shares and the underlying asset. Free liquidity is the pool's own
//! balance of the underlying asset.

use alloy_primitives::{Address, U256};

use crate::error::{PlannerError, Result};
use crate::types::PoolObservation;

/// 1e18, the fixed-point scale of bToken exchange rates.
pub const WAD: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Raw values read from a lending pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolState {
    /// Total bToken supply (shares).
    pub total_supply: U256,
    /// Shares-to-assets exchange rate, WAD-scaled.
    pub exchange_rate: U256,
    /// Underlying asset held by the pool and not lent out.
    pub available_liquidity: U256,
}

/// `total_supply * exchange_rate / 1e18`, rounded down.
pub fn total_deposited(pool: Address, total_supply: U256, exchange_rate: U256) -> Result<U256> {
    total_supply
        .checked_mul(exchange_rate)
        .map(|scaled| scaled / WAD)
        .ok_or(PlannerError::ArithmeticOverflow(pool))
}

/// Percentage of `deposited` that is currently borrowed.
///
/// Returns 0 for an empty pool.
pub fn utilization_pct(deposited: U256, available: U256) -> f64 {
    if deposited.is_zero() {
        return 0.0;
    }
    let borrowed = deposited.saturating_sub(available);
    // borrowed <= deposited, so the scaled ratio is at most 100 * 1e18
    let scaled = borrowed.saturating_mul(U256::from(100u8) * WAD) / deposited;
    let scaled = u128::try_from(scaled).unwrap_or(u128::MAX);
    scaled as f64 / 1e18
}

impl PoolObservation {
    /// Build an observation from raw pool state.
    pub fn from_pool_state(address: Address, state: PoolState) -> Result<Self> {
        let deposited = total_deposited(address, state.total_supply, state.exchange_rate)?;
        if state.available_liquidity > deposited {
            return Err(PlannerError::LiquidityExceedsDeposits {
                pool: address,
                deposited,
                available: state.available_liquidity,
            });
        }

        Ok(Self {
            address,
            utilization: utilization_pct(deposited, state.available_liquidity),
            total_deposited: deposited,
            available_liquidity: state.available_liquidity,
        })
    }
}

/// Convert an amount in base units of a `decimals` token to a float, for
/// display only.
pub fn units_to_f64(amount: U256, decimals: u8) -> f64 {
    let value = amount
        .as_limbs()
        .iter()
        .rev()
        .fold(0.0, |acc, limb| acc * 18_446_744_073_709_551_616.0 + *limb as f64);
    value / 10f64.powi(i32::from(decimals))
}
