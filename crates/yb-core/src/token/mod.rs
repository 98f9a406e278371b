//! Token metadata and unit conversion.

pub mod units;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

pub use units::{format_units, parse_units, UnitsError};

/// Decimal exponent of USDC on every supported chain.
pub const USDC_DECIMALS: u8 = 6;

/// Largest decimal exponent whose power of ten fits in a `U256`.
pub const MAX_DECIMALS: u8 = 77;

/// A fungible token the dashboard can display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

impl Token {
    pub fn usdc(address: Address) -> Self {
        Self {
            address,
            symbol: "USDC".to_string(),
            decimals: USDC_DECIMALS,
        }
    }
}

/// Human readable token balance. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReading {
    pub amount: String,
}

impl Default for BalanceReading {
    /// Shown before the first read completes and after a failed read.
    fn default() -> Self {
        Self {
            amount: "0".to_string(),
        }
    }
}

impl BalanceReading {
    pub fn from_base_units(raw: alloy_primitives::U256, decimals: u8) -> Self {
        Self {
            amount: format_units(raw, decimals),
        }
    }
}
