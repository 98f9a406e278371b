use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use crate::ports::errors::ContractReadError;

/// Read-only ERC-20 access on a single network.
#[async_trait]
pub trait ContractReadPort: Send + Sync {
    /// `balanceOf(holder)` on the `token` contract at the latest block, in
    /// base units.
    async fn balance_of(&self, token: Address, holder: Address)
        -> Result<U256, ContractReadError>;
}
