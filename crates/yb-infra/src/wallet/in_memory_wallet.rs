//! Local stand-in for a browser wallet.
//!
//! Holds the connection flag for one configured address and signs messages
//! with a deterministic digest. Nothing here touches a private key; the
//! signature only has to be observable by the deploy flow.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use yb_core::{
    ports::{SignMessagePort, WalletConnectionPort, WalletError},
    Address, Signature, WalletAccount,
};

pub struct InMemoryWallet {
    address: Option<Address>,
    connected: AtomicBool,
    connect_requests: AtomicUsize,
    reject_signatures: AtomicBool,
}

impl InMemoryWallet {
    /// Disconnected wallet that reports `address` once connected.
    pub fn new(address: Option<Address>) -> Self {
        Self {
            address,
            connected: AtomicBool::new(false),
            connect_requests: AtomicUsize::new(0),
            reject_signatures: AtomicBool::new(false),
        }
    }

    /// Finish the connect flow.
    pub fn connect(&self) {
        self.connected.store(true, Ordering::SeqCst);
        info!(address = ?self.address, "wallet connected");
    }

    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
        info!("wallet disconnected");
    }

    /// How many times the connect flow was requested.
    pub fn connect_requests(&self) -> usize {
        self.connect_requests.load(Ordering::SeqCst)
    }

    pub fn set_reject_signatures(&self, reject: bool) {
        self.reject_signatures.store(reject, Ordering::SeqCst);
    }

    fn snapshot(&self) -> WalletAccount {
        if self.connected.load(Ordering::SeqCst) {
            WalletAccount {
                is_connected: true,
                address: self.address,
            }
        } else {
            WalletAccount::disconnected()
        }
    }
}

#[async_trait]
impl WalletConnectionPort for InMemoryWallet {
    async fn account(&self) -> WalletAccount {
        self.snapshot()
    }

    async fn open_connect_ui(&self) -> Result<(), WalletError> {
        let n = self.connect_requests.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(requests = n, "connect flow requested");
        Ok(())
    }
}

#[async_trait]
impl SignMessagePort for InMemoryWallet {
    async fn sign_message(&self, message: &str) -> Result<Signature, WalletError> {
        let account = self.snapshot();
        let Some(address) = account.address.filter(|_| account.is_connected) else {
            return Err(WalletError::NotConnected);
        };
        if self.reject_signatures.load(Ordering::SeqCst) {
            return Err(WalletError::Rejected);
        }

        let mut hasher = Sha256::new();
        hasher.update(address.as_slice());
        hasher.update(message.as_bytes());
        Ok(Signature::from_bytes(&hasher.finalize()))
    }
}
