//! Static deposit routing: which multisig receives funds on which chain.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

use crate::chain::{ChainParseError, Network};

/// Chains a deposit can be made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DepositChain {
    Arbitrum,
    Optimism,
    Avalanche,
}

impl DepositChain {
    pub const ALL: [DepositChain; 3] = [
        DepositChain::Arbitrum,
        DepositChain::Optimism,
        DepositChain::Avalanche,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DepositChain::Arbitrum => "ARBITRUM",
            DepositChain::Optimism => "OPTIMISM",
            DepositChain::Avalanche => "AVALANCHE",
        }
    }

    pub fn network(self) -> Network {
        match self {
            DepositChain::Arbitrum => Network::Arbitrum,
            DepositChain::Optimism => Network::Optimism,
            DepositChain::Avalanche => Network::Avalanche,
        }
    }

    /// Look up the deposit route for this chain.
    pub fn route(self) -> Option<&'static DepositRoute> {
        DEPOSIT_ROUTES.iter().find(|route| route.chain == self)
    }
}

impl fmt::Display for DepositChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DepositChain {
    type Err = ChainParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_uppercase();
        DepositChain::ALL
            .into_iter()
            .find(|chain| chain.as_str() == needle)
            .ok_or_else(|| ChainParseError::UnsupportedDepositChain(s.to_string()))
    }
}

/// Deposit target and the USDC contract to transfer on one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepositRoute {
    pub chain: DepositChain,
    pub multisig_address: Address,
    pub usdc_address: Address,
}

pub static DEPOSIT_ROUTES: [DepositRoute; 3] = [
    DepositRoute {
        chain: DepositChain::Arbitrum,
        multisig_address: address!("B64e40bb16DCfCb092bd1B3bc18aA8B90f795C9a"),
        usdc_address: address!("FF970A61A04b1cA14834A43f5dE4533eBDDB5CC8"),
    },
    DepositRoute {
        chain: DepositChain::Optimism,
        multisig_address: address!("ac6923F71742A53044F8b2097b9bEa708b890a54"),
        usdc_address: address!("7F5c764cBc14f9669B88837ca1490cCa17c31607"),
    },
    DepositRoute {
        chain: DepositChain::Avalanche,
        multisig_address: address!("C2b046C95eb17286e813E3d2ef0432f6c482F0Ce"),
        usdc_address: address!("B97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E"),
    },
];
