//! # yb-core
//!
//! Core domain models and business logic for yieldboard.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod chain;
pub mod config;
pub mod dashboard;
pub mod ports;
pub mod setup;
pub mod token;
pub mod wallet;

// Re-export commonly used types at the crate root
pub use alloy_primitives::{Address, U256};
pub use chain::{DepositChain, DepositRoute, Network};
pub use config::AppConfig;
pub use setup::{SetupProgress, SetupState, SetupStep, SetupStepId};
pub use token::{BalanceReading, Token};
pub use wallet::{Signature, WalletAccount};
