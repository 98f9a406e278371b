use alloy::contract::Error as ContractError;
use alloy::primitives::U256;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::sol;
use alloy::transports::RpcError;
use async_trait::async_trait;
use tracing::{debug, warn};
use yb_core::{
    ports::{ContractReadError, ContractReadPort},
    Address,
};

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
    }
}

/// ERC-20 reads through an alloy HTTP provider.
///
/// Requests carry no timeout of their own; a slow endpoint keeps the read
/// pending.
pub struct AlloyErc20Reader {
    provider: DynProvider,
    rpc_url: String,
}

impl AlloyErc20Reader {
    pub fn connect_http(rpc_url: &str) -> anyhow::Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid rpc url `{rpc_url}`: {e}"))?;
        let provider = ProviderBuilder::new().connect_http(url).erased();
        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

fn read_error(err: ContractError) -> ContractReadError {
    match err {
        ContractError::TransportError(RpcError::ErrorResp(payload)) => ContractReadError::Rpc {
            code: payload.code,
            message: payload.message.to_string(),
        },
        ContractError::TransportError(RpcError::Transport(kind)) => {
            ContractReadError::Transport(kind.to_string())
        }
        ContractError::TransportError(err @ RpcError::DeserError { .. }) => {
            ContractReadError::Decode(err.to_string())
        }
        ContractError::TransportError(err) => ContractReadError::Transport(err.to_string()),
        // Empty return data and ABI mismatches.
        err => ContractReadError::Decode(err.to_string()),
    }
}

#[async_trait]
impl ContractReadPort for AlloyErc20Reader {
    async fn balance_of(
        &self,
        token: Address,
        holder: Address,
    ) -> Result<U256, ContractReadError> {
        debug!(rpc_url = %self.rpc_url, %token, %holder, "eth_call balanceOf");

        let erc20 = IERC20::new(token, &self.provider);
        erc20.balanceOf(holder).call().await.map_err(|err| {
            let err = read_error(err);
            warn!(rpc_url = %self.rpc_url, error = %err, "balanceOf call failed");
            err
        })
    }
}
