use std::sync::Arc;

use yb_core::ports::WalletConnectionPort;

use crate::usecases::{
    BalanceReader, DeployAccount, DepositFunds, GetDashboard, SetupOrchestrator,
};
use crate::AppDeps;

/// The assembled application: one instance per session.
///
/// Every use case is created once here and shared, so the dashboard and the
/// setup panel observe the same progress and the same balance reading.
pub struct App {
    wallet: Arc<dyn WalletConnectionPort>,
    setup_orchestrator: Arc<SetupOrchestrator>,
    deploy_account: Arc<DeployAccount>,
    deposit_funds: Arc<DepositFunds>,
    balance_reader: Arc<BalanceReader>,
    dashboard: Arc<GetDashboard>,
}

impl App {
    /// This constructor signature IS the dependency manifest.
    pub fn new(deps: AppDeps) -> Self {
        let setup_orchestrator = Arc::new(SetupOrchestrator::new(deps.setup_events));
        let deploy_account = Arc::new(DeployAccount::new(
            deps.wallet.clone(),
            deps.signer,
            deps.delay.clone(),
            setup_orchestrator.clone(),
        ));
        let deposit_funds = Arc::new(DepositFunds::new(deps.delay, setup_orchestrator.clone()));
        let balance_reader = Arc::new(BalanceReader::new(
            deps.contract_reader,
            deps.balance_target.token,
            deps.balance_target.holder,
        ));
        let dashboard = Arc::new(GetDashboard::new(
            balance_reader.clone(),
            setup_orchestrator.clone(),
        ));

        Self {
            wallet: deps.wallet,
            setup_orchestrator,
            deploy_account,
            deposit_funds,
            balance_reader,
            dashboard,
        }
    }

    pub fn wallet(&self) -> Arc<dyn WalletConnectionPort> {
        self.wallet.clone()
    }

    pub fn setup_orchestrator(&self) -> Arc<SetupOrchestrator> {
        self.setup_orchestrator.clone()
    }

    pub fn deploy_account(&self) -> Arc<DeployAccount> {
        self.deploy_account.clone()
    }

    pub fn deposit_funds(&self) -> Arc<DepositFunds> {
        self.deposit_funds.clone()
    }

    pub fn balance_reader(&self) -> Arc<BalanceReader> {
        self.balance_reader.clone()
    }

    pub fn dashboard(&self) -> Arc<GetDashboard> {
        self.dashboard.clone()
    }
}
