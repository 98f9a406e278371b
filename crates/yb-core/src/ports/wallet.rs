use async_trait::async_trait;

use crate::ports::errors::WalletError;
use crate::wallet::{Signature, WalletAccount};

/// Wallet connection provider.
#[async_trait]
pub trait WalletConnectionPort: Send + Sync {
    /// Current connection status and address.
    async fn account(&self) -> WalletAccount;

    /// Ask the provider to present its connect flow.
    ///
    /// Returns once the request has been handed off; it does not wait for the
    /// user to finish connecting.
    async fn open_connect_ui(&self) -> Result<(), WalletError>;
}

/// Message signing by the connected wallet.
#[async_trait]
pub trait SignMessagePort: Send + Sync {
    /// Request a signature over `message`.
    ///
    /// Resolves when the wallet approves or rejects. There is no timeout.
    async fn sign_message(&self, message: &str) -> Result<Signature, WalletError>;
}
