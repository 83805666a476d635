//! Detailed output for strategy state and transactions.

use alloy_primitives::{Address, U256};
use colored::Colorize;
use tarot_rs_contracts::{StrategyAllocations, TransactionReceipt};
use tarot_rs_planner::units_to_f64;

use super::table::{format_amount, format_share, format_utilization};

pub fn format_apply_summary(strategy: Address, pools: &[Address], weights: &[u32]) -> String {
    let total: u32 = weights.iter().sum();
    let mut output = String::new();

    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", "Allocation Update".bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));

    output.push_str(&format!("  Strategy: {}\n", strategy));
    output.push_str(&format!("  Pools:    {}\n\n", pools.len()));

    output.push_str(&format!("{}\n", "Weights (strategy order)".cyan().bold()));
    for (pool, weight) in pools.iter().zip(weights) {
        let line = format!(
            "  {}  {:>6} bps  {:>7}",
            pool,
            weight,
            format_share(*weight, total.max(1))
        );
        if *weight == 0 {
            output.push_str(&format!("{}\n", line.dimmed()));
        } else {
            output.push_str(&format!("{}\n", line));
        }
    }
    output.push_str(&format!("\n  Total:    {} bps\n", total));

    output
}

/// Strategy utilizations are WAD-scaled fractions.
fn strategy_utilization(raw: Option<&U256>) -> String {
    raw.map(|u| format_utilization(units_to_f64(*u, 18) * 100.0))
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_strategy_status(
    strategy: Address,
    allocations: &StrategyAllocations,
    utilizations: &[U256],
    total_assets: U256,
    decimals: u8,
) -> String {
    let allocated = allocations
        .allocations
        .iter()
        .fold(U256::ZERO, |acc, a| acc.saturating_add(*a));
    let mut output = String::new();

    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", "Strategy Status".bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));

    output.push_str(&format!("  Strategy:     {}\n", strategy));
    output.push_str(&format!(
        "  Total Assets: {}\n",
        format_amount(total_assets, decimals)
    ));
    output.push_str(&format!("  Pools:        {}\n\n", allocations.pools.len()));

    output.push_str(&format!("{}\n", "Pools (strategy order)".cyan().bold()));
    for (i, pool) in allocations.pools.iter().enumerate() {
        let amount = allocations.allocations.get(i).copied().unwrap_or_default();
        let share = if allocated.is_zero() {
            0.0
        } else {
            units_to_f64(amount, 0) / units_to_f64(allocated, 0) * 100.0
        };
        output.push_str(&format!(
            "  {}  {:>10}  {:>7}  util {:>7}\n",
            pool,
            format_amount(amount, decimals),
            format_utilization(share),
            strategy_utilization(utilizations.get(i))
        ));
    }

    output
}

pub fn format_receipt(receipt: &TransactionReceipt) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Transaction confirmed!".green()));
    output.push_str(&format!("  Tx Hash:   {:#x}\n", receipt.transaction_hash));
    output.push_str(&format!(
        "  Block:     {}\n",
        receipt.block_number.unwrap_or_default()
    ));
    output.push_str(&format!("  Gas Used:  {}\n", receipt.gas_used));
    output.push_str(&format!(
        "  Status:    {}",
        if receipt.status() { "Success" } else { "Failed" }
    ));
    output
}
