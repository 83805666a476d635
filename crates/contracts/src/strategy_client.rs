//! Strategy view trait and the signing strategy client.

#![allow(async_fn_in_trait)]

use alloy::primitives::{Address, U256};

use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;
use crate::provider::{signing_provider, HttpProvider};
use crate::strategy::{set_allocations_call, IStrategy};

/// Current allocation of a strategy, one entry per tracked pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyAllocations {
    pub pools: Vec<Address>,
    pub allocations: Vec<U256>,
}

/// Read-only access to a lender strategy.
///
/// Implementors only need to provide `provider()`.
pub trait StrategyViews {
    /// Returns a reference to the HTTP provider.
    fn provider(&self) -> &HttpProvider;

    /// Pools tracked by the strategy, in the order it expects weights.
    async fn get_pools(&self, strategy: Address) -> Result<Vec<Address>> {
        let contract = IStrategy::new(strategy, self.provider());
        contract
            .getPools()
            .call()
            .await
            .map_err(|e| ContractError::call(strategy, "pools", e))
    }

    /// Current allocation per tracked pool.
    async fn current_allocations(&self, strategy: Address) -> Result<StrategyAllocations> {
        let contract = IStrategy::new(strategy, self.provider());
        let result = contract
            .getCurrentPoolAllocations()
            .call()
            .await
            .map_err(|e| ContractError::call(strategy, "current allocations", e))?;
        Ok(StrategyAllocations {
            pools: result.pools,
            allocations: result.allocations,
        })
    }

    /// Utilization of each tracked pool as reported by the strategy.
    async fn pool_utilizations(&self, strategy: Address) -> Result<Vec<U256>> {
        let contract = IStrategy::new(strategy, self.provider());
        contract
            .getEachPoolUtilization()
            .call()
            .await
            .map_err(|e| ContractError::call(strategy, "pool utilizations", e))
    }

    /// Total assets the strategy estimates it holds.
    async fn estimated_total_assets(&self, strategy: Address) -> Result<U256> {
        let contract = IStrategy::new(strategy, self.provider());
        contract
            .estimatedTotalAssets()
            .call()
            .await
            .map_err(|e| ContractError::call(strategy, "estimated total assets", e))
    }
}

/// Client for sending allocation transactions to a strategy.
pub struct StrategyTransactionClient {
    provider: HttpProvider,
    signer_address: Address,
}

impl StrategyTransactionClient {
    /// Create a new strategy transaction client.
    pub fn new(rpc_url: &str, private_key: &str) -> Result<Self> {
        let (provider, signer_address) = signing_provider(rpc_url, private_key)?;
        Ok(Self {
            provider,
            signer_address,
        })
    }

    /// Returns the signer's address.
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    /// Create a prepared `manuallySetAllocations` transaction.
    ///
    /// `weights` must be in the strategy's pool order, see
    /// [`align_plan`](tarot_rs_planner::align_plan).
    pub fn set_allocations(
        &self,
        strategy: Address,
        weights: &[u32],
    ) -> PreparedCall<'_, IStrategy::manuallySetAllocationsCall> {
        PreparedCall::new(
            strategy,
            set_allocations_call(weights),
            U256::ZERO,
            &self.provider,
        )
    }

    /// Create a prepared `reorderPools` transaction.
    pub fn reorder_pools(&self, strategy: Address) -> PreparedCall<'_, IStrategy::reorderPoolsCall> {
        PreparedCall::new(
            strategy,
            IStrategy::reorderPoolsCall {},
            U256::ZERO,
            &self.provider,
        )
    }
}

impl StrategyViews for StrategyTransactionClient {
    fn provider(&self) -> &HttpProvider {
        &self.provider
    }
}
