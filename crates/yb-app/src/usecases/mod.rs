//! Business logic use cases
//!
//! Mount the dashboard → read the balance once → drive the setup panel:
//!
//! GetDashboard ──► BalanceReader::refresh
//!        │
//!        ▼
//! SetupOrchestrator ◄── DeployAccount (step FIRST)
//!                   ◄── DepositFunds  (step SECOND)

pub mod balance;
pub mod dashboard;
pub mod error;
pub mod setup;

pub use balance::BalanceReader;
pub use dashboard::{DashboardView, GetDashboard};
pub use error::FlowFailure;
pub use setup::{
    DeployAccount, DeployOutcome, DepositForm, DepositFunds, DepositOutcome, SetupOrchestrator,
    SIMULATED_OPERATION_DELAY,
};
