//! Tarot lending pool (bToken) and collateral interface definitions.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface ILendingPoolToken {
        function totalSupply() external view returns (uint256);
        function exchangeRateLast() external view returns (uint256);
        function underlying() external view returns (address);
        function collateral() external view returns (address);
    }
}

sol! {
    /// Collateral token of a lending pool; its underlying is a vault token.
    #[sol(rpc)]
    interface ICollateral {
        function underlying() external view returns (address);
    }
}

sol! {
    /// Staked LP vault; its underlying is the AMM pair.
    #[sol(rpc)]
    interface IVaultToken {
        function underlying() external view returns (address);
    }
}
