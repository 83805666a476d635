//! Tarot factory and AMM pair interface definitions.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface ITarotFactory {
        function allLendingPoolsLength() external view returns (uint256);
        function allLendingPools(uint256 index) external view returns (address);
        function getLendingPool(address uniswapV2Pair) external view returns (
            bool initialized,
            uint24 lendingPoolId,
            address collateral,
            address borrowable0,
            address borrowable1
        );
    }
}

sol! {
    #[sol(rpc)]
    interface IUniswapV2Pair {
        function token0() external view returns (address);
        function token1() external view returns (address);
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
    }
}
