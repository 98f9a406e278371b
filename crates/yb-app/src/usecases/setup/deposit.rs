//! Step SECOND: deposit funds into the multisig on the chosen chain.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{error, info, info_span, Instrument};
use yb_core::{
    ports::DelayPort,
    setup::SetupStepId,
    token::{parse_units, USDC_DECIMALS},
    Address, DepositChain, DepositRoute, U256,
};

use crate::usecases::setup::{SetupOrchestrator, SIMULATED_OPERATION_DELAY};
use crate::usecases::FlowFailure;

/// User input for the deposit step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepositForm {
    pub selected_chain: Option<DepositChain>,
    pub amount: String,
}

impl DepositForm {
    pub fn select_chain(&mut self, chain: DepositChain) {
        self.selected_chain = Some(chain);
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn route(&self) -> Option<&'static DepositRoute> {
        self.selected_chain.and_then(DepositChain::route)
    }

    /// Multisig address shown once a chain is selected.
    pub fn deposit_address(&self) -> Option<Address> {
        self.route().map(|route| route.multisig_address)
    }

    /// Amount in USDC base units; `None` unless it is a positive number with
    /// at most six fractional digits.
    pub fn parsed_amount(&self) -> Option<U256> {
        parse_units(&self.amount, USDC_DECIMALS)
            .ok()
            .filter(|value| !value.is_zero())
    }

    pub fn is_complete(&self) -> bool {
        self.route().is_some() && self.parsed_amount().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepositOutcome {
    /// Chain or amount missing or invalid.
    Incomplete,
    StepNotActive,
    Busy,
    Failed,
    Transferred,
}

pub struct DepositFunds {
    delay: Arc<dyn DelayPort>,
    orchestrator: Arc<SetupOrchestrator>,
    loading: AtomicBool,
}

impl DepositFunds {
    pub fn new(delay: Arc<dyn DelayPort>, orchestrator: Arc<SetupOrchestrator>) -> Self {
        Self {
            delay,
            orchestrator,
            loading: AtomicBool::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Whether the submit action is enabled for `form`.
    pub fn can_submit(&self, form: &DepositForm) -> bool {
        form.is_complete() && !self.is_loading()
    }

    pub fn action_label(&self) -> &'static str {
        if self.is_loading() {
            "Processing Transfer..."
        } else {
            "Transfer USDC →"
        }
    }

    pub async fn execute(&self, form: &DepositForm) -> DepositOutcome {
        let span = info_span!(
            "usecase.setup.deposit_funds",
            chain = ?form.selected_chain,
            amount = %form.amount,
        );
        async {
            let (Some(route), Some(amount)) = (form.route(), form.parsed_amount()) else {
                return DepositOutcome::Incomplete;
            };

            let progress = self.orchestrator.get_progress().await;
            if progress.active_step() != SetupStepId::Second
                || progress.step(SetupStepId::Second).completed
            {
                return DepositOutcome::StepNotActive;
            }

            if self
                .loading
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
            {
                return DepositOutcome::Busy;
            }

            info!(
                chain = %route.chain,
                to = %route.multisig_address,
                token = %route.usdc_address,
                %amount,
                "transferring deposit"
            );
            let outcome = match self.delay.delay(SIMULATED_OPERATION_DELAY).await {
                Ok(()) => {
                    self.orchestrator.complete_step(SetupStepId::Second).await;
                    DepositOutcome::Transferred
                }
                Err(err) => {
                    let failure = FlowFailure::SimulatedOperationFailure(err.to_string());
                    error!(error = %failure, "Error processing transfer");
                    DepositOutcome::Failed
                }
            };
            self.loading.store(false, Ordering::SeqCst);
            outcome
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;
    use yb_core::ports::SetupEventPort;
    use yb_core::setup::SetupProgress;

    struct InstantDelay;

    #[async_trait]
    impl DelayPort for InstantDelay {
        async fn delay(&self, _duration: Duration) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct NoopEvents;

    #[async_trait]
    impl SetupEventPort for NoopEvents {
        async fn emit_setup_progress_changed(&self, _progress: SetupProgress) {}
    }

    fn build() -> (DepositFunds, Arc<SetupOrchestrator>) {
        let orchestrator = Arc::new(SetupOrchestrator::new(Arc::new(NoopEvents)));
        (
            DepositFunds::new(Arc::new(InstantDelay), orchestrator.clone()),
            orchestrator,
        )
    }

    fn arbitrum_form(amount: &str) -> DepositForm {
        let mut form = DepositForm::default();
        form.select_chain(DepositChain::Arbitrum);
        form.set_amount(amount);
        form
    }

    #[test]
    fn deposit_address_follows_selected_chain() {
        let mut form = DepositForm::default();
        assert_eq!(form.deposit_address(), None);

        form.select_chain(DepositChain::Optimism);
        assert_eq!(
            form.deposit_address(),
            Some(
                "0xac6923F71742A53044F8b2097b9bEa708b890a54"
                    .parse::<Address>()
                    .unwrap()
            )
        );
    }

    #[test]
    fn submit_requires_chain_and_valid_amount() {
        let (executor, _) = build();

        let mut form = arbitrum_form("100");
        assert!(executor.can_submit(&form));

        form.set_amount("");
        assert!(!executor.can_submit(&form));

        for bad in ["0", "0.000", "abc", "1.1234567", "-5"] {
            form.set_amount(bad);
            assert!(!executor.can_submit(&form), "{bad} should be rejected");
        }

        let no_chain = DepositForm {
            selected_chain: None,
            amount: "100".to_string(),
        };
        assert!(!executor.can_submit(&no_chain));
    }

    #[test]
    fn parsed_amount_is_in_usdc_base_units() {
        assert_eq!(
            arbitrum_form("12.5").parsed_amount(),
            Some(U256::from(12_500_000u64))
        );
    }

    #[tokio::test]
    async fn deposit_before_first_step_is_rejected() {
        let (executor, orchestrator) = build();

        let outcome = executor.execute(&arbitrum_form("100")).await;

        assert_eq!(outcome, DepositOutcome::StepNotActive);
        assert_eq!(orchestrator.get_progress().await, SetupProgress::new());
    }

    #[tokio::test]
    async fn incomplete_form_is_not_submitted() {
        let (executor, orchestrator) = build();
        orchestrator.complete_step(SetupStepId::First).await;

        let outcome = executor.execute(&arbitrum_form("")).await;

        assert_eq!(outcome, DepositOutcome::Incomplete);
        assert!(!orchestrator.get_progress().await.all_completed());
    }

    #[tokio::test]
    async fn transfer_completes_second_step() {
        let (executor, orchestrator) = build();
        orchestrator.complete_step(SetupStepId::First).await;

        let outcome = executor.execute(&arbitrum_form("100")).await;

        assert_eq!(outcome, DepositOutcome::Transferred);
        let progress = orchestrator.get_progress().await;
        assert!(progress.all_completed());
        assert!(progress.modal_visible());
        assert!(!executor.is_loading());
        assert_eq!(executor.action_label(), "Transfer USDC →");
    }
}
