//! Descriptive data about the AMM pair behind a lending pool.

use alloy::primitives::{Address, U256};
use serde::Serialize;

/// ERC20 identity used for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

/// A lending pool with its collateral pair and the pair's reserves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    pub pool: Address,
    pub collateral: Address,
    pub pair: Address,
    pub token0: TokenInfo,
    pub token1: TokenInfo,
    pub reserve0: U256,
    pub reserve1: U256,
}

impl PoolInfo {
    /// Pair name as `SYMBOL0-SYMBOL1`.
    pub fn name(&self) -> String {
        format!("{}-{}", self.token0.symbol, self.token1.symbol)
    }
}

/// Which side of a pair a token sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairSide {
    Token0,
    Token1,
}

impl PairSide {
    /// Side of the pair holding `asset`, if either does.
    pub fn of(asset: Address, token0: Address, token1: Address) -> Option<Self> {
        if token0 == asset {
            Some(Self::Token0)
        } else if token1 == asset {
            Some(Self::Token1)
        } else {
            None
        }
    }

    /// The borrowable that lends out this side of the pair.
    pub fn borrowable(self, borrowable0: Address, borrowable1: Address) -> Address {
        match self {
            Self::Token0 => borrowable0,
            Self::Token1 => borrowable1,
        }
    }
}
