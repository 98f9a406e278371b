//! Chains the dashboard knows about.

pub mod deposit;
pub mod network;

pub use deposit::{DepositChain, DepositRoute, DEPOSIT_ROUTES};
pub use network::Network;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainParseError {
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("unsupported deposit chain: {0}")]
    UnsupportedDepositChain(String),
}
