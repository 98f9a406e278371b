//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No validation logic** (addresses stay strings until wiring parses them)
//! ❌ **No business rules**
//!
//! ## Iron Rule
//!
//! > **This module contains data only.** Missing keys become empty values;
//! > empty is a fact, not an error.

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Wallet-connect project identifier
    pub project_id: String,

    /// Network key the balance is read on (e.g. `arbitrum`)
    pub chain: String,

    /// JSON-RPC endpoint (may be empty - the network default applies)
    pub rpc_url: String,

    /// Token contract address, unparsed
    pub token_address: String,

    /// Token symbol shown next to the balance
    pub token_symbol: String,

    /// Token decimal exponent, as written in the file
    pub token_decimals: i64,

    /// Address whose balance is shown on the position card
    pub holder_address: String,

    /// Address the local wallet reports once connected
    pub wallet_address: String,
}

fn str_at(value: &toml::Value, section: &str, key: &str) -> String {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            project_id: str_at(toml_value, "general", "project_id"),
            chain: str_at(toml_value, "network", "chain"),
            rpc_url: str_at(toml_value, "network", "rpc_url"),
            token_address: str_at(toml_value, "token", "address"),
            token_symbol: str_at(toml_value, "token", "symbol"),
            token_decimals: toml_value
                .get("token")
                .and_then(|t| t.get("decimals"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0),
            holder_address: str_at(toml_value, "position", "holder_address"),
            wallet_address: str_at(toml_value, "wallet", "address"),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            project_id: String::new(),
            chain: String::new(),
            rpc_url: String::new(),
            token_address: String::new(),
            token_symbol: String::new(),
            token_decimals: 0,
            holder_address: String::new(),
            wallet_address: String::new(),
        }
    }

    /// The production deployment: USDC on Arbitrum One.
    pub fn with_defaults() -> Self {
        Self {
            project_id: "656d55aaf67fa3370ac4003d86eff3fd".to_string(),
            chain: "arbitrum".to_string(),
            rpc_url: "https://arb1.arbitrum.io/rpc".to_string(),
            token_address: "0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string(),
            token_symbol: "USDC".to_string(),
            token_decimals: i64::from(crate::token::USDC_DECIMALS),
            holder_address: "0xC41CfBcfF3f3D75B8C6d7677f3C14051E03dAb1D".to_string(),
            wallet_address: "0xC41CfBcfF3f3D75B8C6d7677f3C14051E03dAb1D".to_string(),
        }
    }
}
