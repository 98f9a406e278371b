//! Wallet-side facts as seen by the dashboard.

use std::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Snapshot of the wallet connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    pub is_connected: bool,
    pub address: Option<Address>,
}

impl WalletAccount {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(address: Address) -> Self {
        Self {
            is_connected: true,
            address: Some(address),
        }
    }
}

/// Hex-encoded message signature returned by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(pub String);

impl Signature {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Message the wallet signs to authorize the smart-account deployment.
pub fn deploy_safe_message(owner: &Address) -> String {
    format!("Deploy Safe for {owner}")
}
