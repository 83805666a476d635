//! Provider construction for contract clients.

use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use alloy_primitives::Address;

use crate::error::{ContractError, Result};

/// The type-erased HTTP provider shared by all clients.
pub type HttpProvider = DynProvider;

fn parse_url(rpc_url: &str) -> Result<url::Url> {
    rpc_url
        .parse()
        .map_err(|e| ContractError::RpcConnection(format!("{}", e)))
}

/// Read-only provider for view calls.
pub fn read_provider(rpc_url: &str) -> Result<HttpProvider> {
    let url = parse_url(rpc_url)?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}

/// Signing provider, returned with the signer's address.
pub fn signing_provider(rpc_url: &str, private_key: &str) -> Result<(HttpProvider, Address)> {
    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|_| ContractError::InvalidPrivateKey)?;
    let signer_address = signer.address();
    let wallet = EthereumWallet::from(signer);

    let url = parse_url(rpc_url)?;
    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url).erased();

    Ok((provider, signer_address))
}
