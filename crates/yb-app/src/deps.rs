//! # Application Dependencies
//!
//! This module defines the dependency grouping for App construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;

use yb_core::ports::*;
use yb_core::{Address, Token};

/// What the shared balance reader watches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceTarget {
    pub token: Token,
    pub holder: Address,
}

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Chain access
    pub contract_reader: Arc<dyn ContractReadPort>,
    pub balance_target: BalanceTarget,

    // Wallet
    pub wallet: Arc<dyn WalletConnectionPort>,
    pub signer: Arc<dyn SignMessagePort>,

    // Simulated on-chain work
    pub delay: Arc<dyn DelayPort>,

    // Observers
    pub setup_events: Arc<dyn SetupEventPort>,
}
