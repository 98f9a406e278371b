//! Dashboard view assembly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info_span, Instrument};
use yb_core::{
    dashboard::{
        active_assets, mock_transactions, ActiveAsset, NavItem, PositionSummary, Transaction,
        AGENT_ACTIVITY, NAVIGATION,
    },
    BalanceReading, SetupProgress,
};

use crate::usecases::{BalanceReader, SetupOrchestrator};

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub navigation: Vec<NavItem>,
    pub balance: BalanceReading,
    pub position: PositionSummary,
    pub assets: Vec<ActiveAsset>,
    pub agent_activity: &'static str,
    pub transactions: Vec<Transaction>,
    pub setup: SetupProgress,
}

pub struct GetDashboard {
    balance_reader: Arc<BalanceReader>,
    orchestrator: Arc<SetupOrchestrator>,
    mounted: AtomicBool,
}

impl GetDashboard {
    pub fn new(balance_reader: Arc<BalanceReader>, orchestrator: Arc<SetupOrchestrator>) -> Self {
        Self {
            balance_reader,
            orchestrator,
            mounted: AtomicBool::new(false),
        }
    }

    /// Build the view. The balance is read on the first call only; later
    /// calls reuse the shared reading until [`Self::refresh_balance`].
    pub async fn execute(&self) -> DashboardView {
        let span = info_span!("usecase.dashboard.get");
        async {
            if !self.mounted.swap(true, Ordering::SeqCst) {
                self.balance_reader.refresh().await;
            }
            self.view().await
        }
        .instrument(span)
        .await
    }

    pub async fn refresh_balance(&self) -> DashboardView {
        self.balance_reader.refresh().await;
        self.view().await
    }

    async fn view(&self) -> DashboardView {
        let balance = self.balance_reader.latest().await;
        let symbol = self.balance_reader.token().symbol.clone();
        DashboardView {
            navigation: NAVIGATION.to_vec(),
            position: PositionSummary::mock(&balance.amount),
            assets: active_assets(&symbol, &balance.amount),
            agent_activity: AGENT_ACTIVITY,
            transactions: mock_transactions(),
            setup: self.orchestrator.get_progress().await,
            balance,
        }
    }
}
