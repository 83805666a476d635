//! Table formatting for pool and plan listings.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tarot_rs_contracts::PoolInfo;
use tarot_rs_planner::{units_to_f64, AllocationPlan, PoolObservation};

/// Assumed when a token's decimals are unknown.
pub const DEFAULT_DECIMALS: u8 = 18;

#[derive(Tabled)]
struct PoolRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Pool")]
    address: String,
    #[tabled(rename = "Utilization")]
    utilization: String,
    #[tabled(rename = "Deposited")]
    deposited: String,
    #[tabled(rename = "Borrowed")]
    borrowed: String,
    #[tabled(rename = "Available")]
    available: String,
}

#[derive(Tabled)]
struct PoolInfoRow {
    #[tabled(rename = "Pool")]
    address: String,
    #[tabled(rename = "Pair")]
    name: String,
    #[tabled(rename = "Collateral")]
    collateral: String,
    #[tabled(rename = "LP Reserves")]
    reserves: String,
}

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "Pool")]
    address: String,
    #[tabled(rename = "Utilization")]
    utilization: String,
    #[tabled(rename = "Weight (bps)")]
    weight_bps: u32,
    #[tabled(rename = "Share")]
    share: String,
}

pub(crate) fn format_utilization(utilization: f64) -> String {
    format!("{:.2}%", utilization)
}

/// Format a token amount with a K/M suffix.
pub(crate) fn format_amount(amount: U256, decimals: u8) -> String {
    let value = units_to_f64(amount, decimals);
    if value >= 1_000_000.0 {
        format!("{:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.2}K", value / 1_000.0)
    } else {
        format!("{:.2}", value)
    }
}

pub(crate) fn format_share(weight_bps: u32, total_bps: u32) -> String {
    format!("{:.2}%", f64::from(weight_bps) / f64::from(total_bps) * 100.0)
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));
    table.to_string()
}

/// Ranked pool table; amounts are scaled by each pool's asset decimals.
pub fn format_pools_table(pools: &[PoolObservation], decimals: &HashMap<Address, u8>) -> String {
    if pools.is_empty() {
        return "No pools above the utilization threshold.".to_string();
    }

    let rows: Vec<PoolRow> = pools
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let decimals = decimals.get(&p.address).copied().unwrap_or(DEFAULT_DECIMALS);
            PoolRow {
                rank: i + 1,
                address: format!("{}", p.address),
                utilization: format_utilization(p.utilization),
                deposited: format_amount(p.total_deposited, decimals),
                borrowed: format_amount(p.borrowed(), decimals),
                available: format_amount(p.available_liquidity, decimals),
            }
        })
        .collect();

    render(rows)
}

pub fn format_pool_info_table(pools: &[PoolInfo]) -> String {
    if pools.is_empty() {
        return "No pools.".to_string();
    }

    let rows: Vec<PoolInfoRow> = pools
        .iter()
        .map(|p| PoolInfoRow {
            address: format!("{}", p.pool),
            name: p.name(),
            collateral: format!("{}", p.collateral),
            reserves: format!(
                "{} {} - {} {}",
                format_amount(p.reserve0, p.token0.decimals),
                p.token0.symbol,
                format_amount(p.reserve1, p.token1.decimals),
                p.token1.symbol
            ),
        })
        .collect();

    render(rows)
}

/// Plan table; utilization is shown when the observations are at hand.
pub fn format_plan_table(plan: &AllocationPlan, observations: &[PoolObservation]) -> String {
    if plan.is_empty() {
        return "No pools qualified.".to_string();
    }

    let utilization_of = |pool: Address| {
        observations
            .iter()
            .find(|o| o.address == pool)
            .map(|o| format_utilization(o.utilization))
            .unwrap_or_else(|| "-".to_string())
    };

    let rows: Vec<PlanRow> = plan
        .iter()
        .map(|e| PlanRow {
            address: format!("{}", e.address),
            utilization: utilization_of(e.address),
            weight_bps: e.weight_bps,
            share: format_share(e.weight_bps, plan.total_bps()),
        })
        .collect();

    format!(
        "{}\nTotal: {} bps",
        render(rows),
        plan.allocated_bps()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarot_rs_planner::WAD;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(U256::from(5) * WAD, 18), "5.00");
        assert_eq!(format_amount(U256::from(53_408) * WAD, 18), "53.41K");
        assert_eq!(format_amount(U256::from(2_135_230) * WAD, 18), "2.14M");
    }

    #[test]
    fn test_format_amount_respects_decimals() {
        // 2.5M of a 6-decimal token
        assert_eq!(format_amount(U256::from(2_500_000_000_000u64), 6), "2.50M");
        assert_eq!(format_amount(U256::from(1_250u64), 2), "12.50");
    }

    #[test]
    fn test_pools_table_uses_asset_decimals() {
        let pool = Address::repeat_byte(0x0a);
        let observation = PoolObservation::new(
            pool,
            75.0,
            U256::from(4_000_000_000u64),
            U256::from(1_000_000_000u64),
        );
        let decimals = HashMap::from([(pool, 6u8)]);

        let table = format_pools_table(&[observation], &decimals);
        assert!(table.contains("4.00K"));
        assert!(table.contains("3.00K"));
        assert!(table.contains("75.00%"));
    }

    #[test]
    fn test_pool_info_table() {
        use tarot_rs_contracts::TokenInfo;

        let token = |byte, symbol: &str, decimals| TokenInfo {
            address: Address::repeat_byte(byte),
            symbol: symbol.to_string(),
            decimals,
        };
        let info = PoolInfo {
            pool: Address::repeat_byte(1),
            collateral: Address::repeat_byte(2),
            pair: Address::repeat_byte(3),
            token0: token(0x21, "WFTM", 18),
            token1: token(0x04, "USDC", 6),
            reserve0: U256::from(1_500) * WAD,
            reserve1: U256::from(750_000_000u64),
        };

        let table = format_pool_info_table(&[info]);
        assert!(table.contains("WFTM-USDC"));
        assert!(table.contains("1.50K WFTM - 750.00 USDC"));
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(5021, 10_000), "50.21%");
        assert_eq!(format_share(10_000, 10_000), "100.00%");
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(
            format_pools_table(&[], &HashMap::new()),
            "No pools above the utilization threshold."
        );
        assert_eq!(format_pool_info_table(&[]), "No pools.");
        assert_eq!(
            format_plan_table(&AllocationPlan::empty(10_000), &[]),
            "No pools qualified."
        );
    }
}
