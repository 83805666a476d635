//! Prepared call types for deferred transaction execution.
//!
//! A `PreparedCall` is a strategy transaction that has been constructed but
//! not yet sent. It can be inspected (target, calldata) for a dry run, or sent.

use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::Provider;
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol_types::SolCall;
use tracing::debug;

use crate::error::{ContractError, Result};
use crate::provider::HttpProvider;

/// A prepared transaction that can be inspected or executed.
///
/// # Example
///
/// ```rust,ignore
/// let receipt = client.set_allocations(strategy, &weights).send().await?;
///
/// // Or inspect without sending
/// let (addr, call) = client.set_allocations(strategy, &weights).prepare();
/// ```
pub struct PreparedCall<'a, C: SolCall> {
    to: Address,
    call: C,
    value: U256,
    provider: &'a HttpProvider,
}

impl<'a, C: SolCall> PreparedCall<'a, C> {
    /// Create a new prepared call.
    pub fn new(to: Address, call: C, value: U256, provider: &'a HttpProvider) -> Self {
        Self {
            to,
            call,
            value,
            provider,
        }
    }

    /// Consumes self and returns `(address, call)`.
    pub fn prepare(self) -> (Address, C) {
        (self.to, self.call)
    }

    /// Returns the target address for this call.
    pub fn to(&self) -> Address {
        self.to
    }

    /// Returns the value (native token) to send with this call.
    pub fn value(&self) -> U256 {
        self.value
    }

    /// ABI-encoded calldata, selector included.
    pub fn calldata(&self) -> Bytes {
        self.call.abi_encode().into()
    }

    /// Sends the transaction and waits for the receipt.
    pub async fn send(self) -> Result<TransactionReceipt> {
        let tx = TransactionRequest::default()
            .to(self.to)
            .input(self.calldata().into())
            .value(self.value);

        debug!(to = %self.to, signature = C::SIGNATURE, "sending transaction");

        let pending = self.provider.send_transaction(tx).await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to send transaction: {}", e))
        })?;

        let receipt = pending.get_receipt().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get receipt: {}", e))
        })?;

        Ok(receipt)
    }
}
