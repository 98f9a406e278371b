//! Setup use cases.
//!
//! The orchestrator owns the session's progress; the executors perform the
//! per-step work and report completion to it.

mod context;
pub mod deploy_account;
pub mod deposit;
pub mod orchestrator;

use std::time::Duration;

pub use deploy_account::{DeployAccount, DeployOutcome};
pub use deposit::{DepositForm, DepositFunds, DepositOutcome};
pub use orchestrator::SetupOrchestrator;

/// Fixed wait that stands in for account creation and token transfer.
pub const SIMULATED_OPERATION_DELAY: Duration = Duration::from_secs(1);
