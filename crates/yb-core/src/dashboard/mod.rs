//! Static dashboard content.
//!
//! Position metrics, the stUSDC line and the transaction feed are mock
//! values; only the USDC balance is read live.

use serde::Serialize;

/// Header navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAVIGATION: [NavItem; 3] = [
    NavItem {
        name: "Dashboard",
        href: "/",
    },
    NavItem {
        name: "Reporting",
        href: "/reporting",
    },
    NavItem {
        name: "Settings",
        href: "/settings",
    },
];

pub const AGENT_ACTIVITY: &str = "Optimizing yields across multiple protocols";

/// Position card metrics. `position_value` is filled from the live balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionSummary {
    pub position_value: String,
    pub percentage_change: String,
    pub apy: String,
    pub initial_deposit: String,
    pub activation_date: String,
}

impl PositionSummary {
    pub fn mock(balance: &str) -> Self {
        Self {
            position_value: format!("${balance}"),
            percentage_change: "+2.45%".to_string(),
            apy: "12.5%".to_string(),
            initial_deposit: "1,000 USDC".to_string(),
            activation_date: "15.02.2024".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveAsset {
    pub symbol: String,
    pub amount: String,
}

/// Active asset lines: the live token balance followed by the mock staked line.
pub fn active_assets(symbol: &str, balance: &str) -> Vec<ActiveAsset> {
    vec![
        ActiveAsset {
            symbol: symbol.to_string(),
            amount: balance.to_string(),
        },
        ActiveAsset {
            symbol: "stUSDC".to_string(),
            amount: "245.32".to_string(),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub kind: String,
    pub amount: String,
    pub timestamp: String,
    pub status: TransactionStatus,
}

pub fn mock_transactions() -> Vec<Transaction> {
    [
        ("1", "Yield Optimization", "+2.45 USDC", "2 minutes ago"),
        ("2", "Position Rebalancing", "+1.20 USDC", "15 minutes ago"),
        ("3", "Strategy Update", "+0.85 USDC", "1 hour ago"),
    ]
    .into_iter()
    .map(|(id, kind, amount, timestamp)| Transaction {
        id: id.to_string(),
        kind: kind.to_string(),
        amount: amount.to_string(),
        timestamp: timestamp.to_string(),
        status: TransactionStatus::Completed,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_value_reflects_balance() {
        let position = PositionSummary::mock("1.5");
        assert_eq!(position.position_value, "$1.5");
        assert_eq!(position.apy, "12.5%");
    }

    #[test]
    fn mock_feed_has_three_completed_entries() {
        let txs = mock_transactions();
        assert_eq!(txs.len(), 3);
        assert!(txs.iter().all(|tx| tx.status == TransactionStatus::Completed));
        assert_eq!(txs[0].kind, "Yield Optimization");
    }

    #[test]
    fn active_assets_start_with_live_token() {
        let assets = active_assets("USDC", "12.34");
        assert_eq!(assets[0].amount, "12.34");
        assert_eq!(assets[1].symbol, "stUSDC");
    }
}
