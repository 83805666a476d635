//! Multi-pool lender strategy interface definitions.

use alloy::primitives::{Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    #[sol(rpc)]
    interface IStrategy {
        function getPools() external view returns (address[] memory);
        function getCurrentPoolAllocations() external view returns (address[] memory pools, uint256[] memory allocations);
        function getEachPoolUtilization() external view returns (uint256[] memory utilizations);
        function estimatedTotalAssets() external view returns (uint256);

        function manuallySetAllocations(uint256[] calldata ratios) external;
        function reorderPools() external;
    }
}

/// Build the `manuallySetAllocations` call for weights in strategy pool order.
pub fn set_allocations_call(weights: &[u32]) -> IStrategy::manuallySetAllocationsCall {
    IStrategy::manuallySetAllocationsCall {
        ratios: weights.iter().map(|w| U256::from(*w)).collect(),
    }
}

/// ABI-encoded `manuallySetAllocations` calldata, for dry runs.
pub fn set_allocations_calldata(weights: &[u32]) -> Bytes {
    set_allocations_call(weights).abi_encode().into()
}

/// ABI-encoded `reorderPools` calldata, for dry runs.
pub fn reorder_pools_calldata() -> Bytes {
    IStrategy::reorderPoolsCall {}.abi_encode().into()
}
