use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractReadError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("failed to decode call result: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("wallet is not connected")]
    NotConnected,

    #[error("request rejected by wallet")]
    Rejected,

    #[error("wallet unavailable: {0}")]
    Unavailable(String),
}
