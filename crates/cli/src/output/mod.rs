//! Output formatting for CLI results.

pub mod detail;
pub mod table;

pub use detail::{format_apply_summary, format_receipt, format_strategy_status};
pub use table::{format_plan_table, format_pool_info_table, format_pools_table, DEFAULT_DECIMALS};
