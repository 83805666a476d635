//! Read-only client for lending pool state.

use alloy::primitives::{Address, U256};
use futures::future::try_join_all;
use tarot_rs_planner::{PoolObservation, PoolState};
use tracing::debug;

use crate::erc20::IERC20;
use crate::error::{ContractError, Result};
use crate::factory::{ITarotFactory, IUniswapV2Pair};
use crate::lending_pool::{ICollateral, ILendingPoolToken, IVaultToken};
use crate::pool_info::{PairSide, PoolInfo, TokenInfo};
use crate::provider::{read_provider, HttpProvider};
use crate::strategy_client::StrategyViews;

/// Client for reading Tarot lending pools.
pub struct PoolReader {
    provider: HttpProvider,
}

impl PoolReader {
    /// Create a new read-only client.
    pub fn new(rpc_url: &str) -> Result<Self> {
        Ok(Self {
            provider: read_provider(rpc_url)?,
        })
    }

    /// Underlying asset the pool lends out.
    pub async fn underlying(&self, pool: Address) -> Result<Address> {
        let contract = ILendingPoolToken::new(pool, &self.provider);
        contract
            .underlying()
            .call()
            .await
            .map_err(|e| ContractError::call(pool, "underlying", e))
    }

    /// Symbol of an ERC20 token.
    pub async fn symbol(&self, token: Address) -> Result<String> {
        let contract = IERC20::new(token, &self.provider);
        contract
            .symbol()
            .call()
            .await
            .map_err(|e| ContractError::call(token, "symbol", e))
    }

    /// Decimals of an ERC20 token.
    pub async fn decimals(&self, token: Address) -> Result<u8> {
        let contract = IERC20::new(token, &self.provider);
        contract
            .decimals()
            .call()
            .await
            .map_err(|e| ContractError::call(token, "decimals", e))
    }

    /// Symbol and decimals of an ERC20 token.
    pub async fn token_info(&self, token: Address) -> Result<TokenInfo> {
        let (symbol, decimals) = futures::try_join!(self.symbol(token), self.decimals(token))?;
        Ok(TokenInfo {
            address: token,
            symbol,
            decimals,
        })
    }

    /// Decimals of the asset each pool lends, looked up per pool when `asset`
    /// is not given.
    pub async fn asset_decimals(&self, pools: &[Address], asset: Option<Address>) -> Result<Vec<u8>> {
        if let Some(asset) = asset {
            let decimals = self.decimals(asset).await?;
            return Ok(vec![decimals; pools.len()]);
        }
        try_join_all(pools.iter().map(|pool| async move {
            let asset = self.underlying(*pool).await?;
            self.decimals(asset).await
        }))
        .await
    }

    /// Raw supply, exchange rate and free liquidity of a pool.
    pub async fn pool_state(&self, pool: Address, asset: Address) -> Result<PoolState> {
        let contract = ILendingPoolToken::new(pool, &self.provider);
        let token = IERC20::new(asset, &self.provider);

        let total_supply = contract.totalSupply();
        let exchange_rate = contract.exchangeRateLast();
        let balance = token.balanceOf(pool);

        let (total_supply, exchange_rate, available_liquidity): (U256, U256, U256) = futures::try_join!(
            async {
                total_supply
                    .call()
                    .await
                    .map_err(|e| ContractError::call(pool, "total supply", e))
            },
            async {
                exchange_rate
                    .call()
                    .await
                    .map_err(|e| ContractError::call(pool, "exchange rate", e))
            },
            async {
                balance
                    .call()
                    .await
                    .map_err(|e| ContractError::call(asset, "pool balance", e))
            },
        )?;

        Ok(PoolState {
            total_supply,
            exchange_rate,
            available_liquidity,
        })
    }

    /// Observe a pool. The asset is looked up from the pool when not given.
    pub async fn observe(&self, pool: Address, asset: Option<Address>) -> Result<PoolObservation> {
        let asset = match asset {
            Some(asset) => asset,
            None => self.underlying(pool).await?,
        };
        let state = self.pool_state(pool, asset).await?;
        let observation = PoolObservation::from_pool_state(pool, state)?;

        debug!(
            pool = %pool,
            utilization = observation.utilization,
            "observed lending pool"
        );
        Ok(observation)
    }

    /// Observe several pools concurrently, keeping the input order.
    pub async fn observe_all(
        &self,
        pools: &[Address],
        asset: Option<Address>,
    ) -> Result<Vec<PoolObservation>> {
        try_join_all(pools.iter().map(|pool| self.observe(*pool, asset))).await
    }

    /// Lending pools of `factory` that lend out `asset`.
    ///
    /// Walks every pair the factory has deployed and keeps the borrowable on
    /// the side of the pair holding `asset`.
    pub async fn discover(&self, factory: Address, asset: Address) -> Result<Vec<Address>> {
        let contract = ITarotFactory::new(factory, &self.provider);
        let length = contract
            .allLendingPoolsLength()
            .call()
            .await
            .map_err(|e| ContractError::call(factory, "lending pool count", e))?;
        let length = u64::try_from(length)
            .map_err(|e| ContractError::call(factory, "lending pool count", e))?;

        let found = try_join_all(
            (0..length).map(|index| self.lendable_pool(factory, U256::from(index), asset)),
        )
        .await?;
        let pools: Vec<Address> = found.into_iter().flatten().collect();

        debug!(
            factory = %factory,
            pairs = length,
            lendable = pools.len(),
            "discovered lending pools"
        );
        Ok(pools)
    }

    async fn lendable_pool(
        &self,
        factory: Address,
        index: U256,
        asset: Address,
    ) -> Result<Option<Address>> {
        let contract = ITarotFactory::new(factory, &self.provider);
        let pair = contract
            .allLendingPools(index)
            .call()
            .await
            .map_err(|e| ContractError::call(factory, "lending pool pair", e))?;

        let (token0, token1) = self.pair_tokens(pair).await?;
        let Some(side) = PairSide::of(asset, token0, token1) else {
            return Ok(None);
        };

        let lending_pool = contract
            .getLendingPool(pair)
            .call()
            .await
            .map_err(|e| ContractError::call(factory, "lending pool", e))?;
        Ok(Some(
            side.borrowable(lending_pool.borrowable0, lending_pool.borrowable1),
        ))
    }

    async fn pair_tokens(&self, pair: Address) -> Result<(Address, Address)> {
        let contract = IUniswapV2Pair::new(pair, &self.provider);
        let token0 = contract.token0();
        let token1 = contract.token1();
        futures::try_join!(
            async {
                token0
                    .call()
                    .await
                    .map_err(|e| ContractError::call(pair, "token0", e))
            },
            async {
                token1
                    .call()
                    .await
                    .map_err(|e| ContractError::call(pair, "token1", e))
            },
        )
    }

    /// Resolve a pool's collateral pair, its tokens and reserves.
    pub async fn pool_info(&self, pool: Address) -> Result<PoolInfo> {
        let collateral = ILendingPoolToken::new(pool, &self.provider)
            .collateral()
            .call()
            .await
            .map_err(|e| ContractError::call(pool, "collateral", e))?;
        let vault = ICollateral::new(collateral, &self.provider)
            .underlying()
            .call()
            .await
            .map_err(|e| ContractError::call(collateral, "collateral underlying", e))?;
        let pair = IVaultToken::new(vault, &self.provider)
            .underlying()
            .call()
            .await
            .map_err(|e| ContractError::call(vault, "vault underlying", e))?;

        let (token0, token1) = self.pair_tokens(pair).await?;
        let pair_contract = IUniswapV2Pair::new(pair, &self.provider);
        let reserves = pair_contract.getReserves();
        let (token0, token1, reserves) = futures::try_join!(
            self.token_info(token0),
            self.token_info(token1),
            async {
                reserves
                    .call()
                    .await
                    .map_err(|e| ContractError::call(pair, "reserves", e))
            },
        )?;

        Ok(PoolInfo {
            pool,
            collateral,
            pair,
            token0,
            token1,
            reserve0: U256::from(reserves.reserve0),
            reserve1: U256::from(reserves.reserve1),
        })
    }

    /// Pool info for several pools, keeping the input order.
    pub async fn pool_info_all(&self, pools: &[Address]) -> Result<Vec<PoolInfo>> {
        try_join_all(pools.iter().map(|pool| self.pool_info(*pool))).await
    }
}

impl StrategyViews for PoolReader {
    fn provider(&self) -> &HttpProvider {
        &self.provider
    }
}
