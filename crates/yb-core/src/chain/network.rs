use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chain::ChainParseError;

/// EVM networks the wallet connection may be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Arbitrum,
    Avalanche,
    Base,
    Optimism,
    Polygon,
}

impl Network {
    pub const ALL: [Network; 6] = [
        Network::Mainnet,
        Network::Arbitrum,
        Network::Avalanche,
        Network::Base,
        Network::Optimism,
        Network::Polygon,
    ];

    /// Stable lowercase key used in configuration files.
    pub fn key(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Arbitrum => "arbitrum",
            Network::Avalanche => "avalanche",
            Network::Base => "base",
            Network::Optimism => "optimism",
            Network::Polygon => "polygon",
        }
    }

    pub fn chain_id(self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Arbitrum => 42161,
            Network::Avalanche => 43114,
            Network::Base => 8453,
            Network::Optimism => 10,
            Network::Polygon => 137,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Network::Mainnet => "Ethereum",
            Network::Arbitrum => "Arbitrum One",
            Network::Avalanche => "Avalanche",
            Network::Base => "Base",
            Network::Optimism => "OP Mainnet",
            Network::Polygon => "Polygon",
        }
    }

    /// Public JSON-RPC endpoint used when no endpoint is configured.
    pub fn default_rpc_url(self) -> &'static str {
        match self {
            Network::Mainnet => "https://eth.merkle.io",
            Network::Arbitrum => "https://arb1.arbitrum.io/rpc",
            Network::Avalanche => "https://api.avax.network/ext/bc/C/rpc",
            Network::Base => "https://mainnet.base.org",
            Network::Optimism => "https://mainnet.optimism.io",
            Network::Polygon => "https://polygon-rpc.com",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Network {
    type Err = ChainParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Network::ALL
            .into_iter()
            .find(|network| network.key() == needle)
            .ok_or_else(|| ChainParseError::UnknownNetwork(s.to_string()))
    }
}
